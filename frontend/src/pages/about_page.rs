//! About page: mission and values of the agency.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{
    md_action_icons::MdFavorite,
    md_social_icons::MdPeople,
    md_toggle_icons::MdStar,
}};

use crate::components::footer::Footer;

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        Title { "Nordeste Travel - About" }
        div {
            id: "x-about-page",
            style: "
                display: flex;
                flex-direction: column;
                background: #F5F6F8;
            ",

            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 12px;
                    padding: 48px 20px 24px 20px;
                    text-align: center;
                ",
                h1 {
                    style: "font-family: Montserrat, sans-serif; font-size: 40px; color:#1C212D; margin: 0;",
                    "About Nordeste Travel"
                }
                p {
                    style: "font-size: 17px; color:#5F6368; margin: 0; max-width: 680px;",
                    "We are passionate about the Brazilian Northeast and dedicated to
                     building trips worth remembering. Meet our mission and the values
                     behind every itinerary."
                }
            }

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 40px;
                    justify-content: center;
                    padding: 24px 48px;
                ",
                div {
                    style: "display: flex; flex-direction: column; gap: 14px; max-width: 520px;",
                    h2 {
                        style: "font-family: Montserrat, sans-serif; font-size: 30px; color:#1C212D; margin: 0;",
                        "Our mission"
                    }
                    p {
                        style: "font-size: 16px; color:#5F6368; line-height: 1.6; margin: 0;",
                        "To connect travelers with the natural beauty, rich culture and
                         unique hospitality of the Brazilian Northeast, through authentic
                         experiences that favor sustainable tourism and strengthen the
                         local communities we visit."
                    }
                }
                img {
                    src: "https://images.unsplash.com/photo-1571771894821-ce9b6c11b08e?auto=format&fit=crop&w=900&q=80",
                    alt: "Dunes and lagoons in Jericoacoara",
                    style: "width: 420px; max-width: 90vw; height: 300px; object-fit: cover; border-radius: 16px;",
                }
            }

            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 24px;
                    padding: 32px 48px 56px 48px;
                ",
                h2 {
                    style: "font-family: Montserrat, sans-serif; font-size: 30px; color:#1C212D; margin: 0;",
                    "Our values"
                }
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 24px; justify-content: center;",
                    ValueCard {
                        title: "Passion",
                        text: "We love what we do, and it shows in every detail of a trip,
                               from the first draft of the itinerary to the flight home.",
                        kind: ValueKind::Passion,
                    }
                    ValueCard {
                        title: "Respect",
                        text: "We value local culture and the environment, and build genuine
                               connections between travelers and the places they visit.",
                        kind: ValueKind::Respect,
                    }
                    ValueCard {
                        title: "Excellence",
                        text: "We hold every trip to the same standard: well organized,
                               well supported and worth the price.",
                        kind: ValueKind::Excellence,
                    }
                }
            }
        }
        Footer {}
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ValueKind {
    Passion,
    Respect,
    Excellence,
}

#[component]
fn ValueCard(title: String, text: String, kind: ValueKind) -> Element {
    let icon_style = "width: 26px; height: 26px; color: #0B57D0;";
    let icon = match kind {
        ValueKind::Passion => rsx! { Icon { icon: MdFavorite, style: icon_style } },
        ValueKind::Respect => rsx! { Icon { icon: MdPeople, style: icon_style } },
        ValueKind::Excellence => rsx! { Icon { icon: MdStar, style: icon_style } },
    };
    rsx! {
        div {
            class: "nt-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                width: 300px;
                background: white;
                border: 1px solid #AAAAAA33;
                border-radius: 12px;
                padding: 24px;
            ",
            {icon}
            h3 {
                style: "font-size: 20px; color:#1C212D; margin: 0;",
                "{title}"
            }
            p {
                style: "font-size: 15px; color:#5F6368; line-height: 1.5; margin: 0;",
                "{text}"
            }
        }
    }
}
