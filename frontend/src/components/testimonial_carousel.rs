use log::debug;
use yew::prelude::*;

use crate::components::embeds::VideoFrame;
use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, PlayIcon};
use crate::content::Testimonial;
use crate::state::carousel::{Carousel, CarouselAction};

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub testimonials: &'static [Testimonial],
}

/// One testimonial at a time with prev/next buttons and a dot per slide.
#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let testimonials = props.testimonials;
    let carousel = use_reducer(|| Carousel::new(testimonials.len()));

    let Some(current) = testimonials.get(carousel.index()) else {
        return html! {};
    };

    let dispatch = |action: CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Testimonial carousel: {:?}", action);
            carousel.dispatch(action);
        })
    };

    html! {
        <div class="card carousel">
            <div class="carousel-body">
                <div class="carousel-media">
                    <div class="thumbnail">
                        <div class="play-overlay">
                            <div class="play-button"><PlayIcon /></div>
                        </div>
                        <VideoFrame src={current.video_url} interactive={false} />
                    </div>
                </div>
                <div class="carousel-copy">
                    <h3>{ current.quote }</h3>
                    <p>{ current.author }</p>
                </div>
            </div>

            <div class="carousel-controls">
                <div class="carousel-arrows">
                    <button type="button" class="carousel-arrow" onclick={dispatch(CarouselAction::Prev)} aria-label="Previous testimonial">
                        <ChevronLeftIcon />
                    </button>
                    <button type="button" class="carousel-arrow" onclick={dispatch(CarouselAction::Next)} aria-label="Next testimonial">
                        <ChevronRightIcon />
                    </button>
                </div>
                <div class="carousel-dots">
                    { for (0..carousel.slides()).map(|index| html! {
                        <button
                            key={index}
                            type="button"
                            class={classes!("carousel-dot", (index == carousel.index()).then_some("active"))}
                            onclick={dispatch(CarouselAction::Goto(index))}
                            aria-label={format!("Go to testimonial {}", index + 1)}
                        />
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .carousel {
                    padding: 1.5rem 1rem;
                }

                .carousel-body {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    align-items: stretch;
                }

                .carousel-media,
                .carousel-copy {
                    flex: 1;
                    min-width: 0;
                }

                .carousel-copy {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }

                .carousel-copy h3 {
                    margin: 0 0 0.75rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: var(--text-strong);
                }

                .carousel-copy p {
                    margin: 0;
                    font-size: 1.125rem;
                    color: var(--text-muted);
                }

                .carousel-controls {
                    margin-top: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }

                .carousel-arrows {
                    display: flex;
                    gap: 0.75rem;
                }

                .carousel-arrow {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    border: 1px solid var(--control-border);
                    background: var(--control-bg);
                    color: var(--text-body);
                    cursor: pointer;
                    transition: background-color 0.15s ease;
                }

                .carousel-arrow:hover {
                    background: var(--control-hover);
                }

                .carousel-arrow svg {
                    width: 1.25rem;
                    height: 1.25rem;
                }

                .carousel-dots {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .carousel-dot {
                    height: 0.625rem;
                    width: 0.625rem;
                    padding: 0;
                    border: none;
                    border-radius: 9999px;
                    background: var(--control-border);
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .carousel-dot.active {
                    width: 1.5rem;
                    background: var(--accent);
                }

                @media (min-width: 1024px) {
                    .carousel {
                        padding: 1.5rem 2rem;
                    }

                    .carousel-body {
                        flex-direction: row;
                        gap: 2.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
