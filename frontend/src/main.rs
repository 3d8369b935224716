use log::info;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod context;
mod error;
mod reveal;
mod styles;
mod utils;

mod components {
    pub mod animated_characters;
    pub mod cta_button;
    pub mod floating_signup;
    pub mod footer;
    pub mod header;
    pub mod loading;
    pub mod mobile_menu;
}
mod pages {
    pub mod home;
    pub mod sections;
}

use components::{floating_signup::FloatingSignupButton, footer::Footer, header::Header, loading::Loading};
use context::AppProvider;
use pages::home::Home;
use reveal::ScrollProvider;
use styles::GlobalStyles;

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
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let site = config::site();
    use_title(format!("{} | {}", site.name, site.description));

    html! {
        <BrowserRouter>
            <GlobalStyles />
            <AppProvider>
                <ScrollProvider>
                    <Loading />
                    <Header />
                    <Switch<Route> render={switch} />
                    <Footer />
                    <FloatingSignupButton />
                </ScrollProvider>
            </AppProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::site().name);
    yew::Renderer::<App>::new().render();
}
