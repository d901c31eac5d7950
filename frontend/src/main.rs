use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod i18n {
    pub mod dictionary;
    pub mod context;
    mod en;
    mod ar;
}
mod pricing {
    pub mod currency;
    pub mod location;
    pub mod packages;
    pub mod whatsapp;
}
mod components {
    pub mod nav;
    pub mod reveal;
    pub mod safe_image;
    pub mod scroll_spy;
    pub mod scroll_to_top;
}
mod pages {
    pub mod home;
    pub mod hero;
    pub mod about;
    pub mod services;
    pub mod transformations;
    pub mod testimonials;
    pub mod packages;
    pub mod faq;
    pub mod footer;
    pub mod not_found;
}

use i18n::context::LanguageProvider;
use pages::{
    home::Home,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
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
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <LanguageProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </LanguageProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting {}", config::SITE_TITLE);
    yew::Renderer::<App>::new().render();
}
