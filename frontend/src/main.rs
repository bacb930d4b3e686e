use yew::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod lead;
mod scroll;
mod state;
mod pages {
    pub mod landing;
}
mod components {
    pub mod contact_form;
    pub mod cta_banner;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod solutions;
    pub mod speed_insights;
    pub mod use_cases;
}

use pages::landing::Landing;
use components::speed_insights::SpeedInsights;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <SpeedInsights />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
