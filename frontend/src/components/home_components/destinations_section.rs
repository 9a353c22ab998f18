//! Featured destinations carousel on the home page, three cards per group.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdChevronLeft, MdChevronRight}};

use crate::api::destinations_api::list_destinations;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::shop_components::destination_card::DestinationCard;

const DESTINATIONS_PER_GROUP: usize = 3;

#[component]
pub fn DestinationsSection() -> Element {
    let mut destinations = use_resource(move || list_destinations());
    let mut current_group = use_signal(|| 0_usize);

    let destinations_read = destinations.read();
    let batch = match destinations_read.as_ref() {
        None => {
            return rsx! {
                SectionShell { LoadingIndicator { label: "Loading destinations...".to_string() } }
            };
        }
        Some(Err(e)) => {
            let error_txt = format!("{:#?}", e);
            return rsx! {
                SectionShell {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color:#0B57D0; font-size: 16px; border: 1px solid #0B57D0; background: white; padding: 8px 16px; border-radius: 8px; cursor: pointer;",
                            onclick: move |_| {
                                destinations.restart();
                            },
                            "Try Again"
                        }
                    }
                }
            };
        }
        Some(Ok(batch)) => batch,
    };

    // same validity gate as the shop: never render a card missing id,
    // name or location
    let valid = batch
        .iter()
        .filter(|dest| dest.has_display_fields())
        .cloned()
        .collect::<Vec<_>>();
    let total_groups = valid.len().div_ceil(DESTINATIONS_PER_GROUP).max(1);
    let group = *current_group.read() % total_groups;
    let start = group * DESTINATIONS_PER_GROUP;
    let visible = valid
        .iter()
        .skip(start)
        .take(DESTINATIONS_PER_GROUP)
        .cloned()
        .collect::<Vec<_>>();

    rsx! {
        SectionShell {
            div {
                style: "display:flex; flex-direction:row; align-items:center; justify-content:space-between; width: 100%;",
                h2 {
                    style: "font-family: Montserrat, sans-serif; font-size: 32px; color:#1C212D; margin: 0;",
                    "Featured destinations"
                }
                div {
                    style: "display:flex; flex-direction:row; gap: 8px;",
                    GroupChevron {
                        left: true,
                        onclick: move |_| {
                            let prev = (*current_group.peek() + total_groups - 1) % total_groups;
                            current_group.set(prev);
                        },
                    }
                    GroupChevron {
                        left: false,
                        onclick: move |_| {
                            let next = (*current_group.peek() + 1) % total_groups;
                            current_group.set(next);
                        },
                    }
                }
            }

            if valid.is_empty() {
                p { style: "color:#5F6368; font-size: 17px;", "No destinations available yet." }
            } else {
                div {
                    style: "display:flex; flex-direction:row; flex-wrap: wrap; gap: 24px; justify-content: center;",
                    for (i, dest) in visible.iter().cloned().enumerate() {
                        DestinationCard {
                            key: "{dest.id}",
                            destination: dest.clone(),
                            position: start + i,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SectionShell(children: Element) -> Element {
    rsx! {
        div {
            id: "x-home-destinations-section",
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                padding: 48px;
                align-items: center;
            ",
            {children}
        }
    }
}

#[component]
fn GroupChevron(left: bool, onclick: Callback<Event<MouseData>>) -> Element {
    rsx! {
        button {
            style: "
                width: 40px;
                height: 40px;
                border: 1px solid #D1D5DB;
                border-radius: 9999px;
                background: white;
                cursor: pointer;
                display: flex;
                align-items: center;
                justify-content: center;
            ",
            onclick: move |e| onclick.call(e),
            if left {
                Icon { icon: MdChevronLeft, style: "width: 24px; height: 24px; color: #1C212D;" }
            } else {
                Icon { icon: MdChevronRight, style: "width: 24px; height: 24px; color: #1C212D;" }
            }
        }
    }
}
