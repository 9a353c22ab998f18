//! Toolbar above the shop grid: result count and sort order.

use dioxus::prelude::*;

use common::catalog_filter::{CatalogFilter, SortOrder};

#[component]
pub fn ShopToolbar(filter: Signal<CatalogFilter>, result_count: ReadSignal<usize>) -> Element {
    let count_txt = use_memo(move || {
        let count = *result_count.read();
        if count == 1 {
            "1 destination found".to_string()
        } else {
            format!("{} destinations found", count)
        }
    });
    let selected = use_memo(move || filter.read().sort_order.key().to_string());

    rsx! {
        div {
            id: "x-shop-toolbar",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                gap: 16px;
                margin-bottom: 18px;
            ",
            span {
                style: "color:#5F6368; font-size: 15px;",
                "{count_txt}"
            }
            select {
                style: "border: 1px solid #D1D5DB; border-radius: 8px; padding: 8px 12px; font-size: 14px; color:#1C212D; width: 190px;",
                value: "{selected}",
                onchange: move |e| {
                    if let Some(sort_order) = SortOrder::from_key(&e.value()) {
                        filter.write().sort_order = sort_order;
                    }
                },
                for sort_order in SortOrder::ALL {
                    option { key: "{sort_order.key()}", value: "{sort_order.key()}", "{sort_order.label()}" }
                }
            }
        }
    }
}
