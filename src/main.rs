use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod booking {
    pub mod catalog;
    pub mod dispatch;
    pub mod fields;
    pub mod flow;
    pub mod message;
    pub mod selection;
    pub mod validate;
}
mod components {
    pub mod attention;
    pub mod badge;
    pub mod checkbox;
    pub mod input;
    pub mod logo;
    pub mod notification;
    pub mod textarea;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

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
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting {} site", config::BUSINESS_NAME);
    yew::Renderer::<App>::new().render();
}
