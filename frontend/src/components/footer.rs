//! Site footer.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_communication_icons::{MdEmail, MdLocationOn, MdPhone};

use crate::routes::Route;

#[component]
pub fn Footer() -> Element {
    rsx! {
        div {
            id: "x-site-footer",
            style: "
                display:flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 60px;
                padding: 40px 48px;
                background-color: #1C212D;
                color: rgba(255,255,255,0.85);
                font-size: 15px;
            ",

            div {
                style: "display:flex; flex-direction:column; gap:10px; max-width: 340px;",
                span {
                    style: "font-family: Montserrat, sans-serif; font-size: 20px; font-weight: 700; color: white;",
                    "Nordeste Travel"
                }
                span {
                    "Curated trips across the Brazilian Northeast: beaches, dunes and
                     natural pools, organized end to end."
                }
            }

            div {
                style: "display:flex; flex-direction:column; gap:8px;",
                span { style: "font-weight: 600; color: white;", "Explore" }
                Link { to: Route::HomePage {}, span { style: "color: rgba(255,255,255,0.85);", "Home" } }
                Link { to: Route::shop_page_default(), span { style: "color: rgba(255,255,255,0.85);", "All destinations" } }
                Link { to: Route::AboutPage {}, span { style: "color: rgba(255,255,255,0.85);", "About us" } }
                Link { to: Route::FaqPage {}, span { style: "color: rgba(255,255,255,0.85);", "FAQ" } }
            }

            div {
                style: "display:flex; flex-direction:column; gap:8px;",
                span { style: "font-weight: 600; color: white;", "Legal" }
                Link { to: Route::TermsOfServicePage {}, span { style: "color: rgba(255,255,255,0.85);", "Terms of service" } }
                Link { to: Route::PrivacyPolicyPage {}, span { style: "color: rgba(255,255,255,0.85);", "Privacy policy" } }
            }

            div {
                style: "display:flex; flex-direction:column; gap:8px;",
                span { style: "font-weight: 600; color: white;", "Contact" }
                FooterContactRow { label: "hello@nordestetravel.example" , kind: ContactKind::Email }
                FooterContactRow { label: "+55 84 0000 0000", kind: ContactKind::Phone }
                FooterContactRow { label: "Natal - RN, Brazil", kind: ContactKind::Address }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactKind {
    Email,
    Phone,
    Address,
}

#[component]
fn FooterContactRow(label: String, kind: ContactKind) -> Element {
    let icon_style = "width: 16px; height: 16px; color: rgba(255,255,255,0.6);";
    let icon = match kind {
        ContactKind::Email => rsx! { Icon { icon: MdEmail, style: icon_style } },
        ContactKind::Phone => rsx! { Icon { icon: MdPhone, style: icon_style } },
        ContactKind::Address => rsx! { Icon { icon: MdLocationOn, style: icon_style } },
    };
    rsx! {
        span {
            style: "display:flex; align-items:center; gap:8px;",
            {icon}
            "{label}"
        }
    }
}
