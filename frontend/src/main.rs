use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod dom;
mod error;
mod state {
    pub mod accordion;
    pub mod carousel;
    pub mod selection;
    pub mod theme;
}
mod components {
    pub mod embeds;
    pub mod faq_accordion;
    pub mod icons;
    pub mod page_shell;
    pub mod testimonial_carousel;
    pub mod testimonial_gallery;
    pub mod testimonial_modal;
    pub mod theme_toggle;
}
mod pages {
    pub mod book;
    pub mod home;
    pub mod not_found;
    pub mod pre_call;
    pub mod thank_you;
}

use components::page_shell::GlobalStyles;
use pages::{
    book::Book,
    home::Home,
    not_found::NotFound,
    pre_call::PreCall,
    thank_you::ThankYou,
};
use state::theme::ThemeProvider;


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/book")]
    Book,
    #[at("/pre-call")]
    PreCall,
    #[at("/thank-you")]
    ThankYou,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Book => {
            info!("Rendering Book page");
            html! { <Book /> }
        },
        Route::PreCall => {
            info!("Rendering Pre-call page");
            html! { <PreCall /> }
        },
        Route::ThankYou => {
            info!("Rendering Thank-you page");
            html! { <ThankYou /> }
        },
        Route::NotFound => {
            info!("Rendering Not found page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyles />
            <ThemeProvider>
                <Switch<Route> render={switch} />
            </ThemeProvider>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_paths_resolve_to_their_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/book"), Some(Route::Book));
        assert_eq!(Route::recognize("/pre-call"), Some(Route::PreCall));
        assert_eq!(Route::recognize("/thank-you"), Some(Route::ThankYou));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/pricing"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/book/extra"), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_back_to_their_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::PreCall.to_path(), "/pre-call");
        assert_eq!(Route::ThankYou.to_path(), "/thank-you");
    }
}
