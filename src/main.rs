use yew::prelude::*;
use log::info;

mod config;
mod content;
mod dom_layout;
mod modal;
mod scroll_lock;
mod scroll_spy;

mod components {
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod page_link;
    pub mod service_card;
    pub mod service_modal;
}
mod pages {
    pub mod landing;
}

use content::ServiceCatalog;
use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    let catalog = use_memo(|_| ServiceCatalog::builtin(), ());

    html! {
        <Landing catalog={catalog} />
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
