//! Containers for third-party widgets and videos. The page only promises the
//! box; whatever loads inside is the provider's business.

use log::{debug, warn};
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::config;
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct WidgetFrameProps {
    pub src: AttrValue,
    pub id: AttrValue,
    pub min_height: u32,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or(true)]
    pub scrolling: bool,
    /// Wraps the iframe in the rounded card frame.
    #[prop_or(true)]
    pub framed: bool,
}

/// Booking or survey widget iframe with a minimum height.
#[function_component(WidgetFrame)]
pub fn widget_frame(props: &WidgetFrameProps) -> Html {
    let style = format!("width: 100%; border: none; min-height: {}px;", props.min_height);
    let iframe = html! {
        <iframe
            src={props.src.clone()}
            id={props.id.clone()}
            title={props.title.clone()}
            style={style}
            scrolling={if props.scrolling { "yes" } else { "no" }}
        />
    };

    if props.framed {
        html! { <div class="widget-frame">{ iframe }</div> }
    } else {
        iframe
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoFrameProps {
    pub src: AttrValue,
    /// Height as a percentage of width, e.g. `"56.25%"` for 16:9.
    #[prop_or(AttrValue::Static("56.25%"))]
    pub ratio: AttrValue,
    /// Thumbnails let clicks fall through to the element underneath.
    #[prop_or(true)]
    pub interactive: bool,
}

#[function_component(VideoFrame)]
pub fn video_frame(props: &VideoFrameProps) -> Html {
    let mut style = format!("padding-bottom: {};", props.ratio);
    if !props.interactive {
        style.push_str(" pointer-events: none;");
    }
    html! {
        <div class="video-box" style={style}>
            <iframe src={props.src.clone()} frameborder="0" allowfullscreen="true" allow="fullscreen" />
        </div>
    }
}

/// Loads the widget provider's `form_embed.js` once the page is interactive.
/// Navigating between pages that both need it does not load it twice.
#[function_component(FormEmbedScript)]
pub fn form_embed_script() -> Html {
    use_mount(|| match dom::load_script_once(config::FORM_EMBED_SCRIPT_URL) {
        Ok(true) => debug!("Injected {}", config::FORM_EMBED_SCRIPT_URL),
        Ok(false) => debug!("{} already present", config::FORM_EMBED_SCRIPT_URL),
        Err(e) => warn!("Could not load form embed script: {}", e),
    });
    html! {}
}
