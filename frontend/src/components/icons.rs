//! Inline SVG icons. Stroke icons take their colour from `currentColor`.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: &'static str,
}

fn stroke_icon(class: &'static str, paths: &[&'static str]) -> Html {
    html! {
        <svg class={class} fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            { for paths.iter().map(|d| html! {
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={*d} />
            }) }
        </svg>
    }
}

#[function_component(SunIcon)]
pub fn sun_icon(props: &IconProps) -> Html {
    stroke_icon(props.class, &["M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z"])
}

#[function_component(MoonIcon)]
pub fn moon_icon(props: &IconProps) -> Html {
    stroke_icon(props.class, &["M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z"])
}

#[function_component(ChevronLeftIcon)]
pub fn chevron_left_icon(props: &IconProps) -> Html {
    stroke_icon(props.class, &["M15 19l-7-7 7-7"])
}

#[function_component(ChevronRightIcon)]
pub fn chevron_right_icon(props: &IconProps) -> Html {
    stroke_icon(props.class, &["M9 5l7 7-7 7"])
}

#[function_component(ChevronDownIcon)]
pub fn chevron_down_icon(props: &IconProps) -> Html {
    stroke_icon(props.class, &["M19 9l-7 7-7-7"])
}

#[function_component(CloseIcon)]
pub fn close_icon(props: &IconProps) -> Html {
    stroke_icon(props.class, &["M6 18L18 6M6 6l12 12"])
}

#[function_component(ArrowRightIcon)]
pub fn arrow_right_icon(props: &IconProps) -> Html {
    stroke_icon(props.class, &["M5 12h14", "M12 5l7 7-7 7"])
}

#[function_component(UsersIcon)]
pub fn users_icon(props: &IconProps) -> Html {
    stroke_icon(props.class, &[
        "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
        "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
        "M22 21v-2a4 4 0 0 0-3-3.87",
        "M16 3.13a4 4 0 0 1 0 7.75",
    ])
}

#[function_component(ShieldCheckIcon)]
pub fn shield_check_icon(props: &IconProps) -> Html {
    stroke_icon(props.class, &[
        "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
        "M9 12l2 2 4-4",
    ])
}

#[function_component(TrendingUpIcon)]
pub fn trending_up_icon(props: &IconProps) -> Html {
    stroke_icon(props.class, &["M22 7l-8.5 8.5-5-5L2 17", "M16 7h6v6"])
}

/// Filled play triangle used over video thumbnails.
#[function_component(PlayIcon)]
pub fn play_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path d="M8 5v14l11-7z" />
        </svg>
    }
}
