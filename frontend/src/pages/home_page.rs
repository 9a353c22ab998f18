use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;
use crate::components::footer::Footer;
use crate::components::home_components::destinations_section::DestinationsSection;
use crate::components::home_components::hero_section::HeroSection;
use crate::components::home_components::testimonials_section::TestimonialsSection;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Nordeste Travel - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                background: white;
            ",

            HeroSection {}
            ComponentErrorBoundary {
                DestinationsSection {}
            }
            ComponentErrorBoundary {
                TestimonialsSection {}
            }
            Footer {}
        }
    }
}
