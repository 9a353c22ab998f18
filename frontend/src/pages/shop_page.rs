//! Shop page: the full catalog with the filter sidebar and sorted grid.

use dioxus::prelude::*;

use common::catalog_filter::CatalogFilter;
use common::catalog_view::{catalog_filter_options, filter_and_sort_destinations};

use crate::api::destinations_api::list_destinations;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::favorites_provider::use_favorites;
use crate::components::footer::Footer;
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::shop_components::destination_card::DestinationCard;
use crate::components::shop_components::filter_sidebar::FilterSidebar;
use crate::components::shop_components::shop_toolbar::ShopToolbar;
use crate::data_definitions::url_param::UrlParam;


#[component]
pub fn ShopPage(filter: UrlParam<CatalogFilter>) -> Element {
    let title = if filter.0.only_favorites {
        "Nordeste Travel - My Favorites"
    } else {
        "Nordeste Travel - Shop"
    };
    rsx! {
        Title { "{title}" }
        ShopPageRootComponent { initial_filter: filter.0.clone() }
    }
}

#[component]
fn ShopPageRootComponent(initial_filter: ReadSignal<CatalogFilter>) -> Element {
    // the URL carries the filter a link arrived with; edits after that live
    // in this signal only and recompute in place without navigating
    let mut filter = use_signal(|| initial_filter.read().clone());
    use_effect(move || {
        let new_filter = initial_filter.read().clone();
        filter.set(new_filter);
    });

    rsx! {
        div {
            id: "x-shop-page-root",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
                background: #F5F6F8;
            ",

            ShopPageHeading { only_favorites: filter.read().only_favorites }

            ShopPageBody { filter }

            Footer {}
        }
    }
}

#[component]
fn ShopPageHeading(only_favorites: ReadSignal<bool>) -> Element {
    let favorites = use_favorites();
    let favorite_count = favorites.favorite_count;
    let (title, blurb) = if *only_favorites.read() {
        (
            "My favorite destinations",
            "The trips you saved for later, all in one place.",
        )
    } else {
        (
            "All destinations",
            "Explore every trip we run across the Brazilian Northeast, with \
             filters to find the right one for you.",
        )
    };
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 10px;
                padding: 40px 20px 10px 20px;
                text-align: center;
            ",
            h1 {
                style: "font-family: Montserrat, sans-serif; font-size: 38px; color:#1C212D; margin: 0;",
                "{title}"
            }
            p {
                style: "font-size: 17px; color:#5F6368; margin: 0; max-width: 640px;",
                "{blurb}"
            }
            if *only_favorites.read() && *favorite_count.read() > 0 {
                button {
                    style: "color:#B3261E; font-size: 14px; border: 1px solid #B3261E; background: white; padding: 6px 14px; border-radius: 8px; cursor: pointer;",
                    onclick: move |_| {
                        favorites.clear_favorites.call(());
                    },
                    "Clear all favorites"
                }
            }
        }
    }
}

#[component]
fn ShopPageBody(filter: Signal<CatalogFilter>) -> Element {
    // one wholesale fetch per page view; the resource discards results that
    // arrive after a navigation replaced it
    let mut destinations = use_resource(move || list_destinations());
    let destinations_read = destinations.read();
    let batch = match destinations_read.as_ref() {
        None => return rsx! { LoadingIndicator { label: "Loading destinations...".to_string() } },
        Some(Err(e)) => {
            let error_txt = format!("{:#?}", e);
            return rsx! {
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
            };
        }
        Some(Ok(batch)) => batch,
    };

    let favorites = use_favorites();
    let options = catalog_filter_options(batch);
    let filtered =
        filter_and_sort_destinations(batch, &favorites.favorite_ids.read(), &filter.read());
    let result_count = filtered.len();

    rsx! {
        div {
            id: "x-shop-page-body",
            style: "
                display: flex;
                flex-direction: row;
                align-items: flex-start;
                gap: 28px;
                padding: 28px 40px 48px 40px;
                flex-grow: 1;
            ",

            FilterSidebar { filter, options }

            div {
                style: "display: flex; flex-direction: column; flex-grow: 1;",

                ShopToolbar { filter, result_count }

                if filtered.is_empty() {
                    EmptyResultsState { filter }
                } else {
                    div {
                        style: "display:flex; flex-direction: row; flex-wrap: wrap; gap: 24px;",
                        for (i, dest) in filtered.iter().cloned().enumerate() {
                            DestinationCard {
                                key: "{dest.id}",
                                destination: dest.clone(),
                                position: i,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EmptyResultsState(filter: Signal<CatalogFilter>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 12px;
                padding: 60px 0;
            ",
            h3 {
                style: "font-size: 22px; color:#1C212D; margin: 0;",
                "No destinations found"
            }
            p {
                style: "font-size: 15px; color:#5F6368; margin: 0;",
                "Try adjusting the filters to see more results."
            }
            button {
                style: "color:#0B57D0; font-size: 15px; border: 1px solid #0B57D0; background: white; padding: 8px 16px; border-radius: 8px; cursor: pointer;",
                onclick: move |_| {
                    filter.set(CatalogFilter::default());
                },
                "Clear all filters"
            }
        }
    }
}
