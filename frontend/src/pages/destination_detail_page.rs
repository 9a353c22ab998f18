//! Full record view for a single destination.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{
    md_action_icons::{MdCheckCircle, MdFavorite, MdFavoriteBorder},
    md_communication_icons::MdLocationOn,
    md_device_icons::MdAccessTime,
    md_navigation_icons::MdArrowBack,
    md_social_icons::MdPeople,
    md_toggle_icons::MdStar,
}};

use common::destination::Destination;

use crate::api::destinations_api::get_destination;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::favorites_provider::use_favorites;
use crate::components::footer::Footer;
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::shop_components::destination_card::destination_image_url;
use crate::routes::Route;


#[component]
pub fn DestinationDetailPage(destination_id: String) -> Element {
    let mut destination = use_resource(move || {
        let id = destination_id.clone();
        async move { get_destination(id).await }
    });

    let destination_read = destination.read();
    let record = match destination_read.as_ref() {
        None => {
            return rsx! {
                PageShell { LoadingIndicator { label: "Loading destination...".to_string() } }
            };
        }
        Some(Err(e)) => {
            let error_txt = format!("{:#?}", e);
            return rsx! {
                PageShell {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color:#0B57D0; font-size: 16px; border: 1px solid #0B57D0; background: white; padding: 8px 16px; border-radius: 8px; cursor: pointer;",
                            onclick: move |_| {
                                destination.restart();
                            },
                            "Try Again"
                        }
                    }
                }
            };
        }
        Some(Ok(record)) => record.clone(),
    };

    rsx! {
        Title { "Nordeste Travel - {record.name}" }
        PageShell {
            BackToShopLink {}
            DestinationHero { destination: record.clone() }
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: flex-start;
                    gap: 32px;
                    width: 100%;
                    max-width: 1060px;
                    box-sizing: border-box;
                ",
                DestinationBody { destination: record.clone() }
                BookingPanel { destination: record }
            }
        }
        Footer {}
    }
}

#[component]
fn PageShell(children: Element) -> Element {
    rsx! {
        div {
            id: "x-destination-detail-page",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 24px;
                padding: 32px 40px 48px 40px;
                background: #F5F6F8;
                flex-grow: 1;
            ",
            {children}
        }
    }
}

#[component]
fn BackToShopLink() -> Element {
    rsx! {
        div {
            style: "width: 100%; max-width: 1060px;",
            Link {
                to: Route::shop_page_default(),
                span {
                    style: "display:flex; align-items:center; gap: 6px; color:#0B57D0; font-size: 15px;",
                    Icon { icon: MdArrowBack, style: "width: 18px; height: 18px;" }
                    "Back to all destinations"
                }
            }
        }
    }
}

#[component]
fn DestinationHero(destination: ReadSignal<Destination>) -> Element {
    let image_url = use_memo(move || destination_image_url(&destination.read(), 0));
    rsx! {
        div {
            style: "
                position: relative;
                width: 100%;
                max-width: 1060px;
                height: 380px;
                border-radius: 16px;
                overflow: hidden;
            ",
            img {
                src: "{image_url}",
                alt: "{destination.read().name}",
                style: "width: 100%; height: 100%; object-fit: cover;",
            }
            div {
                style: "
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0,0,0,0.65), rgba(0,0,0,0.0) 55%);
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 28px;
                    box-sizing: border-box;
                ",
                h1 {
                    style: "font-family: Montserrat, sans-serif; font-size: 40px; color: white; margin: 0;",
                    "{destination.read().name}"
                }
                span {
                    style: "display:flex; align-items:center; gap: 6px; color: #E5E7EB; font-size: 17px;",
                    Icon { icon: MdLocationOn, style: "width: 20px; height: 20px;" }
                    "{destination.read().location}"
                }
            }
            DetailFavoriteButton { destination }
        }
    }
}

#[component]
fn DetailFavoriteButton(destination: ReadSignal<Destination>) -> Element {
    let favorites = use_favorites();
    let is_favorite = use_memo(move || favorites.is_favorite(&destination.read().id));

    let on_toggle = move |_e: Event<MouseData>| {
        let id = destination.read().id.clone();
        let name = destination.read().name.clone();
        let adding = !is_favorite();
        favorites.toggle_favorite.call(id);

        let toast_api = dioxus_primitives::toast::consume_toast();
        let message = if adding {
            format!("{} added to favorites.", name)
        } else {
            format!("{} removed from favorites.", name)
        };
        toast_api.info(
            message,
            dioxus_primitives::toast::ToastOptions::new()
                .duration(std::time::Duration::from_secs(5))
                .permanent(false),
        );
    };

    rsx! {
        button {
            style: "
                position: absolute;
                top: 18px;
                right: 18px;
                width: 44px;
                height: 44px;
                border: none;
                border-radius: 9999px;
                background: rgba(255,255,255,0.35);
                cursor: pointer;
                display: flex;
                align-items: center;
                justify-content: center;
            ",
            onclick: on_toggle,
            if is_favorite() {
                Icon { icon: MdFavorite, style: "width: 24px; height: 24px; color: #F56565;" }
            } else {
                Icon { icon: MdFavoriteBorder, style: "width: 24px; height: 24px; color: white;" }
            }
        }
    }
}

#[component]
fn DestinationBody(destination: ReadSignal<Destination>) -> Element {
    let highlights = destination.read().highlights.clone();
    let included_items = destination.read().included_items.clone();
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                flex-grow: 1;
                background: white;
                border: 1px solid #AAAAAA33;
                border-radius: 12px;
                padding: 28px;
            ",

            div {
                style: "display:flex; flex-direction:row; gap: 24px; color:#5F6368; font-size: 15px;",
                span {
                    style: "display:flex; align-items:center; gap: 4px;",
                    Icon { icon: MdAccessTime, style: "width: 18px; height: 18px;" }
                    "{destination.read().duration} days"
                }
                span {
                    style: "display:flex; align-items:center; gap: 4px;",
                    Icon { icon: MdPeople, style: "width: 18px; height: 18px;" }
                    "{destination.read().min_people}-{destination.read().max_people} people"
                }
                span {
                    style: "display:flex; align-items:center; gap: 4px; color:#1C212D;",
                    Icon { icon: MdStar, style: "width: 18px; height: 18px; color: #EAB308;" }
                    b { "{destination.read().rating}" }
                    span { style: "color:#5F6368;", "({destination.read().review_count} reviews)" }
                }
            }

            p {
                style: "font-size: 16px; color:#1C212D; line-height: 1.6; margin: 0;",
                "{destination.read().description}"
            }

            if !highlights.is_empty() {
                div {
                    style: "display:flex; flex-direction: column; gap: 10px;",
                    h3 {
                        style: "font-family: Montserrat, sans-serif; font-size: 22px; color:#1C212D; margin: 0;",
                        "Trip highlights"
                    }
                    for highlight in highlights.iter() {
                        span {
                            key: "{highlight}",
                            style: "display:flex; align-items:center; gap: 8px; font-size: 15px; color:#1C212D;",
                            Icon { icon: MdStar, style: "width: 16px; height: 16px; color: #EAB308;" }
                            "{highlight}"
                        }
                    }
                }
            }

            if !included_items.is_empty() {
                div {
                    style: "display:flex; flex-direction: column; gap: 10px;",
                    h3 {
                        style: "font-family: Montserrat, sans-serif; font-size: 22px; color:#1C212D; margin: 0;",
                        "What's included"
                    }
                    for item in included_items.iter() {
                        span {
                            key: "{item}",
                            style: "display:flex; align-items:center; gap: 8px; font-size: 15px; color:#1C212D;",
                            Icon { icon: MdCheckCircle, style: "width: 16px; height: 16px; color: #16A34A;" }
                            "{item}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BookingPanel(destination: ReadSignal<Destination>) -> Element {
    let price = use_memo(move || format!("{:.2}", destination.read().price));
    let original_price = use_memo(move || {
        destination
            .read()
            .original_price
            .map(|p| format!("{:.2}", p))
    });
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                width: 300px;
                flex-shrink: 0;
                background: white;
                border: 1px solid #AAAAAA33;
                border-radius: 12px;
                padding: 24px;
                position: sticky;
                top: 90px;
            ",
            if let Some(original) = original_price() {
                span {
                    style: "font-size: 15px; color: #5F6368; text-decoration: line-through;",
                    "R$ {original}"
                }
            }
            span {
                style: "font-size: 30px; font-weight: 700; color: #0B57D0;",
                "R$ {price}"
            }
            span { style: "font-size: 13px; color: #5F6368;", "per person" }

            a {
                class: "nt-primary-button",
                href: "mailto:contact@nordestetravel.example?subject=Booking: {destination.read().name}",
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 100%;
                    padding: 12px 0;
                    border-radius: 8px;
                    background: #0B57D0;
                    color: white;
                    font-size: 16px;
                    box-sizing: border-box;
                    text-decoration: none;
                ",
                "Request a booking"
            }
        }
    }
}
