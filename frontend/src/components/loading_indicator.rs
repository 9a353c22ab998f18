use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator(label: Option<String>) -> Element {
    let label = label.unwrap_or("Loading...".to_string());
    rsx! {
        div {
            style: "
                width: 100%;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 60px 0;
            ",
            div {
                style: "color:#1C212D; font-size: 22px; border: 1px solid #1C212D; padding: 10px 18px; border-radius: 8px;",
                "{label}"
            }
        }
    }
}
