use stylist::css;
use stylist::yew::styled_component;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::embeds::VideoFrame;
use crate::components::icons::CloseIcon;
use crate::content::Testimonial;

#[derive(Properties, PartialEq)]
pub struct TestimonialModalProps {
    pub testimonial: &'static Testimonial,
    pub on_dismiss: Callback<()>,
}

/// Full-size testimonial video over a dimmed backdrop. Clicking the
/// backdrop, the close button, or pressing Escape dismisses it.
#[styled_component(TestimonialModal)]
pub fn testimonial_modal(props: &TestimonialModalProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_dismiss.emit(());
            }
        });
    }

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    // Clicks on the content must not reach the backdrop.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let backdrop = css!(r#"
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        background: rgba(0, 0, 0, 0.8);
        backdrop-filter: blur(4px);

        .modal-content {
            position: relative;
            width: 100%;
            max-width: 64rem;
            overflow: hidden;
            border-radius: 0.5rem;
            background: var(--control-bg);
            box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
        }

        .modal-close {
            position: absolute;
            top: 1rem;
            right: 1rem;
            z-index: 10;
            display: flex;
            padding: 0.5rem;
            border: none;
            border-radius: 9999px;
            cursor: pointer;
            color: #ffffff;
            background: rgba(0, 0, 0, 0.5);
            transition: background-color 0.15s ease;
        }

        .modal-close:hover {
            background: rgba(0, 0, 0, 0.7);
        }

        .modal-close svg {
            width: 1.25rem;
            height: 1.25rem;
        }

        .modal-author {
            margin: 0;
            padding: 1.5rem;
            text-align: center;
            font-size: 1.25rem;
            font-weight: 600;
            color: var(--text-strong);
            border-top: 1px solid var(--card-border);
        }
    "#);

    html! {
        <div class={backdrop} onclick={dismiss.clone()}>
            <div class="modal-content" onclick={keep_open} role="dialog" aria-modal="true">
                <button class="modal-close" onclick={dismiss} aria-label="Close modal">
                    <CloseIcon />
                </button>
                <VideoFrame src={props.testimonial.video_url} />
                <p class="modal-author">{ props.testimonial.author }</p>
            </div>
        </div>
    }
}
