use log::info;
use yew::prelude::*;

use crate::components::embeds::VideoFrame;
use crate::components::icons::PlayIcon;
use crate::components::testimonial_modal::TestimonialModal;
use crate::content::Testimonial;
use crate::state::selection::{Selection, SelectionAction};

#[derive(Properties, PartialEq)]
pub struct TestimonialGalleryProps {
    pub testimonials: &'static [Testimonial],
}

/// Every testimonial as a card; clicking a thumbnail plays it in a modal.
#[function_component(TestimonialGallery)]
pub fn testimonial_gallery(props: &TestimonialGalleryProps) -> Html {
    let testimonials: &'static [Testimonial] = props.testimonials;
    let selection = use_reducer(Selection::<Testimonial>::default);

    let on_dismiss = {
        let selection = selection.clone();
        Callback::from(move |_: ()| selection.dispatch(SelectionAction::Dismiss))
    };

    html! {
        <>
            <div class="gallery">
                { for testimonials.iter().enumerate().map(|(index, testimonial)| {
                    let onclick = {
                        let selection = selection.clone();
                        Callback::from(move |_: MouseEvent| {
                            info!("Opening testimonial video: {}", testimonial.author);
                            selection.dispatch(SelectionAction::Select(testimonial));
                        })
                    };
                    html! {
                        <div key={index} class="card gallery-card">
                            <div class="gallery-thumb" onclick={onclick}>
                                <div class="thumbnail">
                                    <div class="play-overlay">
                                        <div class="play-button"><PlayIcon /></div>
                                    </div>
                                    <VideoFrame src={testimonial.video_url} interactive={false} />
                                </div>
                            </div>
                            <div class="gallery-copy">
                                <h3>{ testimonial.quote }</h3>
                                <p>{ testimonial.author }</p>
                            </div>
                        </div>
                    }
                }) }
            </div>

            {
                match selection.selected() {
                    Some(testimonial) => html! {
                        <TestimonialModal testimonial={testimonial} on_dismiss={on_dismiss} />
                    },
                    None => html! {},
                }
            }

            <style>
                {r#"
                .gallery {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .gallery-card {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    padding: 1.5rem;
                }

                .gallery-thumb {
                    flex-shrink: 0;
                    width: 100%;
                    cursor: pointer;
                    transition: opacity 0.15s ease;
                }

                .gallery-thumb:hover {
                    opacity: 0.9;
                }

                .gallery-copy {
                    flex: 1;
                }

                .gallery-copy h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: var(--text-strong);
                }

                .gallery-copy p {
                    margin: 0;
                    font-size: 1.125rem;
                    color: var(--text-muted);
                }

                @media (min-width: 640px) {
                    .gallery-card {
                        flex-direction: row;
                    }

                    .gallery-thumb {
                        width: 20rem;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

    use super::*;
    use crate::content::TESTIMONIALS;
    use crate::dom;

    wasm_bindgen_test_configure!(run_in_browser);

    fn find(host: &Element, selector: &str) -> Option<Element> {
        host.query_selector(selector).unwrap()
    }

    fn click(element: &Element) {
        element.dyn_ref::<HtmlElement>().unwrap().click();
    }

    fn modal_open(host: &Element) -> bool {
        find(host, ".modal-content").is_some()
    }

    async fn open_second(host: &Element) {
        let thumbs = host.query_selector_all(".gallery-thumb").unwrap();
        let thumb = thumbs.get(1).unwrap().dyn_into::<Element>().unwrap();
        click(&thumb);
        dom::settle().await;
        assert!(modal_open(host));
    }

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    async fn modal_opens_and_dismisses() {
        let host = dom::mount_point();
        let app = yew::Renderer::<TestimonialGallery>::with_root_and_props(
            host.clone(),
            TestimonialGalleryProps { testimonials: TESTIMONIALS },
        )
        .render();
        dom::settle().await;
        assert!(!modal_open(&host));

        open_second(&host).await;
        let picked = &TESTIMONIALS[1];
        let author = find(&host, ".modal-author").unwrap().text_content().unwrap();
        assert_eq!(author, picked.author);
        let video = find(&host, ".modal-content iframe").unwrap();
        assert_eq!(video.get_attribute("src").as_deref(), Some(picked.video_url));

        // Inside the content, including the video box, stays open.
        click(&find(&host, ".modal-content").unwrap());
        click(&find(&host, ".modal-content .video-box").unwrap());
        dom::settle().await;
        assert!(modal_open(&host));

        // Backdrop.
        let backdrop = find(&host, ".modal-content").unwrap().parent_element().unwrap();
        click(&backdrop);
        dom::settle().await;
        assert!(!modal_open(&host));

        open_second(&host).await;
        click(&find(&host, ".modal-close").unwrap());
        dom::settle().await;
        assert!(!modal_open(&host));

        open_second(&host).await;
        press("Enter");
        dom::settle().await;
        assert!(modal_open(&host));
        press("Escape");
        dom::settle().await;
        assert!(!modal_open(&host));

        app.destroy();
    }
}
