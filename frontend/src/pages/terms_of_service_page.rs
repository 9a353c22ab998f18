//! Terms of service.

use dioxus::prelude::*;

use crate::components::footer::Footer;

#[component]
pub fn TermsOfServicePage() -> Element {
    rsx! {
        Title { "Nordeste Travel - Terms of Service" }
        div {
            id: "x-terms-page",
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
                    "Terms of Service"
                }

                PolicySection {
                    heading: "1. Acceptance of the terms",
                    body: "By using Nordeste Travel services you agree to these terms.
                           If you do not agree, do not use our services.",
                }
                PolicySection {
                    heading: "2. Services offered",
                    body: "We provide travel consulting and planning, personalized trip
                           packages, bookings for lodging, transport and activities, and
                           support during the trip.",
                }
                PolicySection {
                    heading: "3. Client responsibilities",
                    body: "Clients agree to provide accurate and up-to-date information,
                           pay within the agreed deadlines, follow supplier conditions
                           (hotels, airlines), carry valid travel documents and contract
                           travel insurance when recommended.",
                }
                PolicySection {
                    heading: "4. Bookings and payments",
                    body: "Bookings are confirmed upon payment of the deposit or full
                           amount as agreed, subject to availability of the requested
                           services. Prices may change with availability and market
                           conditions until the booking is confirmed.",
                }
                PolicySection {
                    heading: "5. Cancellations and refunds",
                    body: "Cancellations follow the policies of the suppliers involved
                           and may incur fees. Refunds are processed under the specific
                           contractual conditions of each booking.",
                }
                PolicySection {
                    heading: "6. Changes to these terms",
                    body: "We may update these terms at any time. Material changes are
                           announced on this page before they take effect.",
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
