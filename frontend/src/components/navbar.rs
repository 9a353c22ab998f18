//! Top navigation bar and page layout.

use dioxus::prelude::*;

use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdFavorite;
use dioxus_free_icons::icons::md_maps_icons::MdFlight;

use common::catalog_filter::CatalogFilter;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::favorites_provider::provide_favorites_state;
use crate::routes::Route;


/// Layout component: sticky header with brand and links, pages rendered in
/// the outlet below. Also owns the app-wide favorites state.
#[component]
pub fn Navbar() -> Element {
    let favorites = provide_favorites_state();
    let favorite_count = favorites.favorite_count;

    rsx! {
        div {
            id: "x-site-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100vh;
            ",

            div {
                id: "x-site-header",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 28px;
                    height: 64px;
                    padding: 0 28px;
                    background-color: #1C212D;
                    color: white;
                    position: sticky;
                    top: 0;
                    z-index: 100;
                ",

                BrandLink {}

                // empty space
                div {
                    style: "flex-grow:1;"
                }

                HeaderLink { to: Route::HomePage {}, label: "Home" }
                HeaderLink { to: Route::shop_page_default(), label: "Shop" }
                HeaderLink { to: Route::AboutPage {}, label: "About" }
                HeaderLink {
                    to: Route::shop_page_from_filter(CatalogFilter::favorites_only()),
                    label: "Favorites ({favorite_count})",
                    icon: true,
                }
            },

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn BrandLink() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            span {
                style: "
                    display:flex;
                    align-items:center;
                    gap: 10px;
                    color: white;
                    font-family: Montserrat, sans-serif;
                    font-size: 22px;
                    font-weight: 700;
                    text-decoration: none;
                ",
                Icon { icon: MdFlight, style: "width: 28px; height: 28px; color:#62B6F5;" }
                "Nordeste Travel"
            }
        }
    }
}

#[component]
fn HeaderLink(to: Route, label: String, icon: Option<bool>) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                class: "nt-header-link",
                style: "
                    display:flex;
                    align-items:center;
                    gap: 6px;
                    color: rgba(255,255,255,0.9);
                    font-size: 17px;
                    text-decoration: none;
                ",
                if icon.unwrap_or(false) {
                    Icon { icon: MdFavorite, style: "width: 18px; height: 18px; color:#F56565;" }
                }
                "{label}"
            }
        }
    }
}
