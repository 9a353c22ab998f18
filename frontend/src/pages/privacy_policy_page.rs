//! Privacy policy.

use dioxus::prelude::*;

use crate::components::footer::Footer;

#[component]
pub fn PrivacyPolicyPage() -> Element {
    rsx! {
        Title { "Nordeste Travel - Privacy Policy" }
        div {
            id: "x-privacy-page",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                padding: 48px 20px 56px 20px;
                background: #F5F6F8;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 20px;
                    background: white;
                    border: 1px solid #AAAAAA33;
                    border-radius: 12px;
                    padding: 36px;
                    width: 100%;
                    max-width: 820px;
                    box-sizing: border-box;
                ",
                h1 {
                    style: "font-family: Montserrat, sans-serif; font-size: 34px; color:#1C212D; margin: 0;",
                    "Privacy Policy"
                }

                PolicySection {
                    heading: "1. Information we collect",
                    body: "We collect information when you fill in contact or quote
                           forms, write to us by e-mail or phone, or browse the website
                           (navigation data). Favorites you mark on this site are stored
                           only in your own browser and never sent to us.",
                }
                PolicySection {
                    heading: "2. How we use your information",
                    body: "We use it to answer your requests, prepare personalized
                           quotes, improve our services, and meet legal obligations.
                           Promotional messages are sent only with your consent.",
                }
                PolicySection {
                    heading: "3. Data sharing",
                    body: "We do not sell or rent personal information. We share it with
                           third parties only when needed to deliver the service (travel
                           partners, hotels, airlines) or when required by law.",
                }
                PolicySection {
                    heading: "4. Data security",
                    body: "We apply technical and organizational measures to protect
                           your information against unauthorized access, alteration,
                           disclosure or destruction.",
                }
                PolicySection {
                    heading: "5. Your rights",
                    body: "You may access, correct or delete your personal data, request
                           its portability, withdraw consent at any time, and file a
                           complaint with the competent authority.",
                }
            }
        }
        Footer {}
    }
}

#[component]
fn PolicySection(heading: String, body: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            h2 {
                style: "font-family: Montserrat, sans-serif; font-size: 20px; color:#1C212D; margin: 0;",
                "{heading}"
            }
            p {
                style: "font-size: 15px; color:#5F6368; line-height: 1.6; margin: 0;",
                "{body}"
            }
        }
    }
}
