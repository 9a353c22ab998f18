//! Frequently asked questions.

use dioxus::prelude::*;

use crate::components::footer::Footer;

struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const FAQ_ENTRIES: [FaqEntry; 8] = [
    FaqEntry {
        question: "How does trip planning work?",
        answer: "We start by understanding your preferences, budget and dates. Then we \
                 draft a personalized itinerary with lodging, transport and activity \
                 options. Once you approve it, we handle every booking and stay \
                 available throughout the trip.",
    },
    FaqEntry {
        question: "Which destinations do you cover?",
        answer: "We specialize in the Brazilian Northeast: Fernando de Noronha, \
                 Jericoacoara, Salvador, Porto de Galinhas, Maragogi, Natal and more. \
                 We also arrange trips to other national destinations on request.",
    },
    FaqEntry {
        question: "How are package prices set?",
        answer: "Prices vary with the destination, season, lodging category and \
                 included services. Every package is built per traveler, so we prepare \
                 a specific quote with no commitment.",
    },
    FaqEntry {
        question: "Can I pay in installments?",
        answer: "Yes. We offer several payment options, including installments. \
                 Conditions depend on the total amount and how far in advance you book.",
    },
    FaqEntry {
        question: "What if I need to cancel?",
        answer: "Cancellation policies follow the suppliers involved (hotels, \
                 airlines) and how close to departure you cancel. We always state the \
                 conditions before a booking is confirmed, and we recommend travel \
                 insurance that covers cancellations.",
    },
    FaqEntry {
        question: "Do you offer support during the trip?",
        answer: "Yes. We are reachable by message throughout your trip to solve any \
                 issue that comes up.",
    },
    FaqEntry {
        question: "Do you organize group trips?",
        answer: "We do: friends, families and company retreats. Groups get special \
                 conditions and we take care of the logistics end to end.",
    },
    FaqEntry {
        question: "Which documents do I need?",
        answer: "For national trips a valid ID is enough. We confirm the exact \
                 requirements for your destination when the itinerary is drafted.",
    },
];

#[component]
pub fn FaqPage() -> Element {
    rsx! {
        Title { "Nordeste Travel - FAQ" }
        div {
            id: "x-faq-page",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 20px;
                padding: 48px 20px 56px 20px;
                background: #F5F6F8;
            ",

            h1 {
                style: "font-family: Montserrat, sans-serif; font-size: 38px; color:#1C212D; margin: 0;",
                "Frequently asked questions"
            }
            p {
                style: "font-size: 17px; color:#5F6368; margin: 0;",
                "Answers to the questions we hear most about our trips."
            }

            div {
                style: "display: flex; flex-direction: column; gap: 10px; width: 100%; max-width: 760px;",
                for entry in FAQ_ENTRIES.iter() {
                    details {
                        key: "{entry.question}",
                        style: "
                            background: white;
                            border: 1px solid #AAAAAA33;
                            border-radius: 12px;
                            padding: 16px 20px;
                        ",
                        summary {
                            style: "font-family: Montserrat, sans-serif; font-size: 17px; color:#1C212D; cursor: pointer;",
                            "{entry.question}"
                        }
                        p {
                            style: "font-size: 15px; color:#5F6368; line-height: 1.6; margin: 12px 0 0 0;",
                            "{entry.answer}"
                        }
                    }
                }
            }

            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 10px;
                    background: white;
                    border: 1px solid #AAAAAA33;
                    border-radius: 12px;
                    padding: 24px;
                    margin-top: 16px;
                    width: 100%;
                    max-width: 760px;
                    box-sizing: border-box;
                ",
                h3 {
                    style: "font-size: 20px; color:#1C212D; margin: 0;",
                    "Did not find your answer?"
                }
                a {
                    class: "nt-primary-button",
                    href: "mailto:hello@nordestetravel.example",
                    style: "
                        display: inline-flex;
                        padding: 10px 22px;
                        border-radius: 8px;
                        background: #0B57D0;
                        color: white;
                        font-size: 15px;
                        text-decoration: none;
                    ",
                    "Write to us"
                }
            }
        }
        Footer {}
    }
}
