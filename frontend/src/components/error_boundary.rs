//! Error boundary components for rendering failures.

use dioxus::prelude::*;

/// Catches anything thrown below a whole page tree. Rendering errors land
/// here instead of blanking the page.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            padding: 40px;
                            gap: 14px;
                        ",
                        h1 {
                            style: "color:#B3261E; font-size: 40px; margin: 0;",
                            "Something went wrong",
                        }
                        p {
                            style: "color:#5F6368; font-size: 20px; margin: 0;",
                            "Boundary: {boundary_name}"
                        }
                        a {
                            href: "/",
                            style: "color:#0B57D0; font-size: 20px; border: 1px solid #0B57D0; padding: 8px 16px; border-radius: 8px; text-decoration: none;",
                            "Back to the home page"
                        }
                        pre {
                            style: "color:#1C212D; background:#F3F4F6; border-radius: 8px; padding: 14px; max-width: 700px; text-wrap: auto;",
                            "{_err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error_txt = match _err.error() {
                    Some(err) => format!("{:#?}", err.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color:#0B57D0; font-size: 18px; border: 1px solid #0B57D0; background: white; padding: 8px 16px; border-radius: 8px; cursor: pointer;",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

/// Inline error panel, also used directly when a fetch resource holds an
/// `Err` and the caller wants to attach its own retry button.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            padding: "30px 0",

            h2 {
                style: "color:#B3261E; font-size: 26px; margin: 6px;",
                "We could not load this section",
            }

            pre {
                style: "color:#5F6368; background:#F3F4F6; border-radius: 8px; padding: 12px; margin: 6px; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
