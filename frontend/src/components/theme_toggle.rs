use stylist::css;
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::components::icons::{MoonIcon, SunIcon};
use crate::state::theme::use_theme;

/// Fixed round button in the bottom-right corner. Shows the sun while dark
/// (click for light) and the moon while light.
#[styled_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            theme.toggle();
        })
    };

    let button = css!(r#"
        position: fixed;
        bottom: 1.5rem;
        right: 1.5rem;
        z-index: 50;
        padding: 0.75rem;
        display: flex;
        border-radius: 9999px;
        cursor: pointer;
        background: var(--control-bg);
        border: 1px solid var(--control-border);
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
        transition: transform 0.2s ease, box-shadow 0.2s ease;

        &:hover {
            transform: scale(1.1);
            box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.15);
        }

        svg {
            width: 1.25rem;
            height: 1.25rem;
        }

        .sun {
            color: #eab308;
        }

        .moon {
            color: #4f46e5;
        }
    "#);

    html! {
        <button class={button} onclick={onclick} aria-label="Toggle theme">
            {
                if theme.get().is_dark() {
                    html! { <SunIcon class="sun" /> }
                } else {
                    html! { <MoonIcon class="moon" /> }
                }
            }
        </button>
    }
}
