use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        // TODO: replace google fonts with local fonts
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: "https://fonts.googleapis.com/css2?family=Montserrat:wght@400;500;600;700&family=Inter:wght@300;400;500&display=swap" }

        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
