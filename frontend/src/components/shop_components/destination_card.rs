//! Destination card component used by the shop grid and the home carousel.

use dioxus::prelude::*;
use common::destination::Destination;
use dioxus_free_icons::{Icon, icons::{
    md_action_icons::{MdFavorite, MdFavoriteBorder},
    md_communication_icons::MdLocationOn,
    md_device_icons::MdAccessTime,
    md_social_icons::MdPeople,
    md_toggle_icons::MdStar,
}};

use crate::components::favorites_provider::use_favorites;
use crate::routes::Route;

// Shown when a record carries no image of its own; picked by list position
// so the same card always gets the same picture.
const FALLBACK_IMAGE_URLS: [&str; 4] = [
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1559827260-dc66d52bef19?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1571771894821-ce9b6c11b08e?auto=format&fit=crop&w=800&q=80",
];

pub fn destination_image_url(destination: &Destination, position: usize) -> String {
    match &destination.image_url {
        Some(url) if !url.is_empty() => url.clone(),
        _ => FALLBACK_IMAGE_URLS[position % FALLBACK_IMAGE_URLS.len()].to_string(),
    }
}

#[component]
pub fn DestinationCard(destination: ReadSignal<Destination>, position: ReadSignal<usize>) -> Element {
    let image_url = use_memo(move || destination_image_url(&destination.read(), *position.read()));

    rsx! {
        div {
            class: "nt-card",
            style: "
                display: flex;
                flex-direction: column;
                background: white;
                border: 1px solid #AAAAAA33;
                border-radius: 12px;
                overflow: hidden;
                width: 340px;
            ",

            // image block with favorite button and price overlay
            div {
                style: "position: relative; height: 210px; overflow: hidden;",
                img {
                    src: "{image_url}",
                    alt: "{destination.read().name}",
                    style: "width: 100%; height: 100%; object-fit: cover;",
                }
                FavoriteToggleButton { destination }
                PriceOverlay { destination }
            }

            // text block
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    padding: 16px;
                    flex: 1;
                ",

                span {
                    style: "font-family: Montserrat, sans-serif; font-size: 20px; font-weight: 700; color: #1C212D;",
                    "{destination.read().name}"
                }

                span {
                    style: "display:flex; align-items:center; gap: 4px; color: #5F6368; font-size: 14px;",
                    Icon { icon: MdLocationOn, style: "width: 16px; height: 16px;" }
                    "{destination.read().location}"
                }

                div {
                    style: "display:flex; flex-direction:row; justify-content: space-between; color: #5F6368; font-size: 14px;",
                    span {
                        style: "display:flex; align-items:center; gap: 4px;",
                        Icon { icon: MdAccessTime, style: "width: 16px; height: 16px;" }
                        "{destination.read().duration} days"
                    }
                    span {
                        style: "display:flex; align-items:center; gap: 4px;",
                        Icon { icon: MdPeople, style: "width: 16px; height: 16px;" }
                        "{destination.read().min_people}-{destination.read().max_people} people"
                    }
                }

                span {
                    style: "display:flex; align-items:center; gap: 4px; font-size: 14px; color: #1C212D;",
                    Icon { icon: MdStar, style: "width: 16px; height: 16px; color: #EAB308;" }
                    b { "{destination.read().rating}" }
                    span { style: "color:#5F6368;", "({destination.read().review_count} reviews)" }
                }

                span {
                    class: "nt-clamp-2",
                    style: "font-size: 14px; color: #5F6368;",
                    "{destination.read().description}"
                }

                IncludedItemBadges { destination }

                // empty space pushes the button down on short cards
                div { style: "flex-grow: 1;" }

                Link {
                    to: Route::DestinationDetailPage { destination_id: destination.read().id.clone() },
                    span {
                        class: "nt-primary-button",
                        style: "
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            width: 100%;
                            padding: 10px 0;
                            border-radius: 8px;
                            background: #0B57D0;
                            color: white;
                            font-size: 15px;
                            box-sizing: border-box;
                        ",
                        "View details"
                    }
                }
            }
        }
    }
}

#[component]
fn FavoriteToggleButton(destination: ReadSignal<Destination>) -> Element {
    let favorites = use_favorites();
    let is_favorite = use_memo(move || favorites.is_favorite(&destination.read().id));

    let on_toggle = move |_e: Event<MouseData>| {
        _e.prevent_default();
        _e.stop_propagation();
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
                top: 12px;
                right: 12px;
                width: 38px;
                height: 38px;
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
                Icon { icon: MdFavorite, style: "width: 22px; height: 22px; color: #F56565;" }
            } else {
                Icon { icon: MdFavoriteBorder, style: "width: 22px; height: 22px; color: white;" }
            }
        }
    }
}

#[component]
fn PriceOverlay(destination: ReadSignal<Destination>) -> Element {
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
                position: absolute;
                bottom: 12px;
                right: 12px;
                background: rgba(255,255,255,0.92);
                border-radius: 8px;
                padding: 8px 12px;
                display: flex;
                flex-direction: column;
                align-items: flex-end;
            ",
            span {
                style: "font-size: 18px; font-weight: 700; color: #0B57D0;",
                "R$ {price}"
            }
            if let Some(original) = original_price() {
                span {
                    style: "font-size: 13px; color: #5F6368; text-decoration: line-through;",
                    "R$ {original}"
                }
            }
            span { style: "font-size: 11px; color: #5F6368;", "per person" }
        }
    }
}

#[component]
fn IncludedItemBadges(destination: ReadSignal<Destination>) -> Element {
    let items = destination.read().included_items.clone();
    if items.is_empty() {
        return rsx! {};
    }
    let extra = items.len().saturating_sub(3);
    rsx! {
        div {
            style: "display:flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
            for item in items.iter().take(3) {
                span {
                    key: "{item}",
                    style: "background:#EEF2FF; color:#1C212D; font-size: 12px; padding: 3px 8px; border-radius: 9999px;",
                    "{item}"
                }
            }
            if extra > 0 {
                span {
                    style: "border: 1px solid #C7D2FE; color:#5F6368; font-size: 12px; padding: 3px 8px; border-radius: 9999px;",
                    "+{extra} more"
                }
            }
        }
    }
}
