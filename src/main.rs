use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod content;
mod hooks;
mod hours;
mod seo;
mod whatsapp;

mod pages {
    pub mod home;
    pub mod not_found;
}

mod components {
    pub mod about;
    pub mod carousel;
    pub mod contact;
    pub mod faq;
    pub mod floating_whatsapp;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod how_it_works;
    pub mod pricing;
    pub mod quick_cta;
    pub mod services;
    pub mod testimonials;
    pub mod whatsapp_button;
    pub mod why_choose_us;
}

use pages::{home::Home, not_found::NotFound};

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
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BUSINESS_NAME);
    yew::Renderer::<App>::new().render();
}
