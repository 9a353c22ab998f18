//! Filter sidebar for the shop page.
//!
//! Every control writes straight into the shared `CatalogFilter` signal;
//! the result grid recomputes synchronously from it.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{
    md_action_icons::{MdFavorite, MdSearch},
    md_navigation_icons::MdClose,
    md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank, MdStar, MdStarBorder},
}};

use common::catalog_filter::{CatalogFilter, DurationBucket, GroupSizeBucket, PriceRange};
use common::catalog_view::CatalogFilterOptions;

use crate::components::favorites_provider::use_favorites;

// Bounds shown by the price inputs before the user narrows them.
const PRICE_FLOOR: f64 = 0.0;
const PRICE_CEILING: f64 = 5000.0;

#[component]
pub fn FilterSidebar(filter: Signal<CatalogFilter>, options: ReadSignal<CatalogFilterOptions>) -> Element {
    rsx! {
        div {
            id: "x-shop-filter-sidebar",
            style: "
                display: flex;
                flex-direction: column;
                gap: 18px;
                width: 300px;
                flex-shrink: 0;
                background: white;
                border: 1px solid #AAAAAA33;
                border-radius: 12px;
                padding: 20px;
                align-self: flex-start;
                position: sticky;
                top: 84px;
            ",

            div {
                style: "display:flex; flex-direction:row; align-items:center; justify-content:space-between;",
                span { style: "font-size: 18px; font-weight: 600; color:#1C212D;", "Filters" }
                button {
                    style: "display:flex; align-items:center; gap:4px; border:none; background:none; color:#5F6368; cursor:pointer; font-size:14px;",
                    onclick: move |_| {
                        filter.set(CatalogFilter::default());
                    },
                    Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
                    "Clear"
                }
            }

            SearchFilterSection { filter }
            RegionFilterSection { filter, options }
            PriceFilterSection { filter }
            DurationFilterSection { filter }
            GroupSizeFilterSection { filter }
            RatingFilterSection { filter }
            FavoritesFilterSection { filter }
            IncludedItemsFilterSection { filter, options }
        }
    }
}

#[component]
fn SectionLabel(label: String) -> Element {
    rsx! {
        span {
            style: "font-size: 14px; font-weight: 600; color:#1C212D; border-top: 1px solid #E5E7EB; padding-top: 14px;",
            "{label}"
        }
    }
}

#[component]
fn SearchFilterSection(filter: Signal<CatalogFilter>) -> Element {
    rsx! {
        div {
            style: "display:flex; flex-direction:column; gap:8px;",
            span { style: "font-size: 14px; font-weight: 600; color:#1C212D;", "Search" }
            div {
                style: "
                    display:flex;
                    align-items:center;
                    gap: 8px;
                    border: 1px solid #D1D5DB;
                    border-radius: 8px;
                    padding: 8px 10px;
                ",
                Icon { icon: MdSearch, style: "width: 18px; height: 18px; color:#6B7280;" }
                input {
                    r#type: "text",
                    placeholder: "Name or location...",
                    style: "flex:1; border:none; outline:none; background:transparent; font-size: 14px; color:#1C212D;",
                    value: "{filter.read().search}",
                    oninput: move |e| {
                        filter.write().search = e.value();
                    },
                }
            }
        }
    }
}

#[component]
fn RegionFilterSection(filter: Signal<CatalogFilter>, options: ReadSignal<CatalogFilterOptions>) -> Element {
    let selected = use_memo(move || filter.read().region.clone().unwrap_or("all".to_string()));
    rsx! {
        div {
            style: "display:flex; flex-direction:column; gap:8px;",
            SectionLabel { label: "Region" }
            select {
                style: "border: 1px solid #D1D5DB; border-radius: 8px; padding: 8px; font-size: 14px; color:#1C212D;",
                value: "{selected}",
                onchange: move |e| {
                    let value = e.value();
                    filter.write().region = if value == "all" { None } else { Some(value) };
                },
                option { value: "all", "All regions" }
                for region in options.read().regions.iter() {
                    option { key: "{region}", value: "{region}", "{region}" }
                }
            }
        }
    }
}

#[component]
fn PriceFilterSection(filter: Signal<CatalogFilter>) -> Element {
    let range = use_memo(move || {
        filter.read().price_range.unwrap_or(PriceRange {
            min: PRICE_FLOOR,
            max: PRICE_CEILING,
        })
    });
    let set_range = move |min: f64, max: f64| {
        filter.write().price_range = Some(PriceRange { min, max });
    };
    rsx! {
        div {
            style: "display:flex; flex-direction:column; gap:8px;",
            SectionLabel { label: "Price: R$ {range().min} - R$ {range().max}" }
            div {
                style: "display:flex; flex-direction:row; gap:8px;",
                input {
                    r#type: "number",
                    min: "{PRICE_FLOOR}",
                    max: "{PRICE_CEILING}",
                    step: "100",
                    style: "width: 50%; border: 1px solid #D1D5DB; border-radius: 8px; padding: 8px; font-size: 14px; box-sizing: border-box;",
                    value: "{range().min}",
                    onchange: move |e| {
                        let min = e.value().parse::<f64>().unwrap_or(PRICE_FLOOR);
                        set_range(min, range().max);
                    },
                }
                input {
                    r#type: "number",
                    min: "{PRICE_FLOOR}",
                    max: "{PRICE_CEILING}",
                    step: "100",
                    style: "width: 50%; border: 1px solid #D1D5DB; border-radius: 8px; padding: 8px; font-size: 14px; box-sizing: border-box;",
                    value: "{range().max}",
                    onchange: move |e| {
                        let max = e.value().parse::<f64>().unwrap_or(PRICE_CEILING);
                        set_range(range().min, max);
                    },
                }
            }
        }
    }
}

#[component]
fn DurationFilterSection(filter: Signal<CatalogFilter>) -> Element {
    let selected = use_memo(move || {
        filter
            .read()
            .duration
            .map(|b| b.key())
            .unwrap_or("all")
            .to_string()
    });
    rsx! {
        div {
            style: "display:flex; flex-direction:column; gap:8px;",
            SectionLabel { label: "Duration" }
            select {
                style: "border: 1px solid #D1D5DB; border-radius: 8px; padding: 8px; font-size: 14px; color:#1C212D;",
                value: "{selected}",
                onchange: move |e| {
                    filter.write().duration = DurationBucket::from_key(&e.value());
                },
                option { value: "all", "Any duration" }
                for bucket in DurationBucket::ALL {
                    option { key: "{bucket.key()}", value: "{bucket.key()}", "{bucket.label()}" }
                }
            }
        }
    }
}

#[component]
fn GroupSizeFilterSection(filter: Signal<CatalogFilter>) -> Element {
    let selected = use_memo(move || {
        filter
            .read()
            .group_size
            .map(|b| b.key())
            .unwrap_or("all")
            .to_string()
    });
    rsx! {
        div {
            style: "display:flex; flex-direction:column; gap:8px;",
            SectionLabel { label: "Group size" }
            select {
                style: "border: 1px solid #D1D5DB; border-radius: 8px; padding: 8px; font-size: 14px; color:#1C212D;",
                value: "{selected}",
                onchange: move |e| {
                    filter.write().group_size = GroupSizeBucket::from_key(&e.value());
                },
                option { value: "all", "Any size" }
                for bucket in GroupSizeBucket::ALL {
                    option { key: "{bucket.key()}", value: "{bucket.key()}", "{bucket.label()}" }
                }
            }
        }
    }
}

#[component]
fn RatingFilterSection(filter: Signal<CatalogFilter>) -> Element {
    let min_rating = use_memo(move || filter.read().min_rating);
    rsx! {
        div {
            style: "display:flex; flex-direction:column; gap:8px;",
            SectionLabel { label: "Minimum rating" }
            div {
                style: "display:flex; flex-direction:row; align-items:center; gap:2px;",
                for star in 1..=5u32 {
                    button {
                        key: "{star}",
                        style: "border:none; background:none; cursor:pointer; padding:2px;",
                        onclick: move |_| {
                            // clicking the active star clears the criterion
                            let new_rating = if min_rating() == Some(star) { None } else { Some(star) };
                            filter.write().min_rating = new_rating;
                        },
                        if min_rating().unwrap_or(0) >= star {
                            Icon { icon: MdStar, style: "width: 22px; height: 22px; color: #0B57D0;" }
                        } else {
                            Icon { icon: MdStarBorder, style: "width: 22px; height: 22px; color: #9CA3AF;" }
                        }
                    }
                }
            }
            if let Some(stars) = min_rating() {
                span { style: "font-size: 12px; color:#5F6368;", "{stars}+ stars" }
            }
        }
    }
}

#[component]
fn FavoritesFilterSection(filter: Signal<CatalogFilter>) -> Element {
    let favorites = use_favorites();
    let favorite_count = favorites.favorite_count;
    let only_favorites = use_memo(move || filter.read().only_favorites);
    rsx! {
        div {
            style: "display:flex; flex-direction:column; gap:8px;",
            SectionLabel { label: "Special filters" }
            div {
                style: "display:flex; align-items:center; gap:8px; cursor:pointer;",
                onclick: move |_| {
                    let current = only_favorites();
                    filter.write().only_favorites = !current;
                },
                if only_favorites() {
                    Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: #1C212D;" }
                } else {
                    Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: #1C212D;" }
                }
                span {
                    style: "display:flex; align-items:center; gap:4px; font-size:14px; color:#1C212D;",
                    Icon { icon: MdFavorite, style: "width: 16px; height: 16px; color: #F56565;" }
                    "Favorites only ({favorite_count})"
                }
            }
        }
    }
}

#[component]
fn IncludedItemsFilterSection(filter: Signal<CatalogFilter>, options: ReadSignal<CatalogFilterOptions>) -> Element {
    rsx! {
        div {
            style: "display:flex; flex-direction:column; gap:8px;",
            SectionLabel { label: "Included" }
            div {
                style: "display:flex; flex-direction:column; gap:6px; max-height: 160px; overflow-y: auto;",
                for item in options.read().included_items.iter().cloned() {
                    IncludedItemCheckbox { filter, item }
                }
            }
        }
    }
}

#[component]
fn IncludedItemCheckbox(filter: Signal<CatalogFilter>, item: ReadSignal<String>) -> Element {
    let is_checked = use_memo(move || filter.read().included_items.contains(&item.read().clone()));
    rsx! {
        div {
            style: "display:flex; align-items:center; gap:8px; cursor:pointer;",
            onclick: move |_| {
                let item = item.read().clone();
                let should_add = !is_checked();
                let mut filter = filter.write();
                if should_add {
                    filter.included_items.insert(item);
                } else {
                    filter.included_items.remove(&item);
                }
            },
            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #1C212D;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: #1C212D;" }
            }
            span { style: "font-size: 14px; color:#1C212D;", "{item}" }
        }
    }
}
