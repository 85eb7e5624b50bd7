use log::info;
use yew::prelude::*;

mod config;
mod error;
mod slider {
    pub mod controller;
    pub mod drag;
    pub mod geometry;
    pub mod testimonial;
}
mod components {
    pub mod card_slider;
    pub mod testimonial_slider;
}
mod pages {
    pub mod card_focus;
    pub mod content;
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Logging is best effort; the page works without it
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::warn_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
