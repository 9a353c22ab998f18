//! Rotating customer testimonials on the home page.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{
    md_navigation_icons::{MdChevronLeft, MdChevronRight},
    md_toggle_icons::MdStar,
}};
use gloo_timers::future::TimeoutFuture;

struct Testimonial {
    name: &'static str,
    location: &'static str,
    rating: u32,
    text: &'static str,
}

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Ana Carolina",
        location: "São Paulo, SP",
        rating: 5,
        text: "Fernando de Noronha was simply perfect. Every detail was handled with \
               care, and the marine life went beyond anything we expected.",
    },
    Testimonial {
        name: "Carlos Eduardo",
        location: "Rio de Janeiro, RJ",
        rating: 5,
        text: "Jericoacoara won me over completely. Transfers, lodging and the sunset \
               dune walk were all organized flawlessly.",
    },
    Testimonial {
        name: "Mariana Santos",
        location: "Belo Horizonte, MG",
        rating: 5,
        text: "Our honeymoon in Porto de Galinhas was a dream. The natural pools are \
               from another world.",
    },
    Testimonial {
        name: "Roberto Silva",
        location: "Brasília, DF",
        rating: 4,
        text: "The food tour through Salvador was incredible. Getting to know Bahian \
               culture through its flavors made the trip.",
    },
];

const AUTO_ADVANCE_MS: u32 = 4000;

#[component]
pub fn TestimonialsSection() -> Element {
    let mut current_slide = use_signal(|| 0_usize);

    use_future(move || async move {
        loop {
            TimeoutFuture::new(AUTO_ADVANCE_MS).await;
            let next = (*current_slide.peek() + 1) % TESTIMONIALS.len();
            current_slide.set(next);
        }
    });

    let slide = use_memo(move || *current_slide.read() % TESTIMONIALS.len());

    rsx! {
        div {
            id: "x-home-testimonials-section",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 20px;
                padding: 48px;
                background: #F5F6F8;
            ",

            h2 {
                style: "font-family: Montserrat, sans-serif; font-size: 32px; color:#1C212D; margin: 0;",
                "What travelers say"
            }

            div {
                style: "display:flex; flex-direction:row; align-items:center; gap: 20px;",

                SlideChevron {
                    left: true,
                    onclick: move |_| {
                        let len = TESTIMONIALS.len();
                        let prev = (*current_slide.peek() + len - 1) % len;
                        current_slide.set(prev);
                    },
                }

                div {
                    style: "
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                        background: white;
                        border: 1px solid #AAAAAA33;
                        border-radius: 12px;
                        padding: 28px;
                        width: 560px;
                        min-height: 170px;
                    ",
                    div {
                        style: "display:flex; flex-direction:row; gap: 2px;",
                        for star in 1..=TESTIMONIALS[slide()].rating {
                            Icon { key: "{star}", icon: MdStar, style: "width: 18px; height: 18px; color: #EAB308;" }
                        }
                    }
                    p {
                        style: "font-size: 16px; color:#1C212D; margin: 0; font-style: italic;",
                        "\"{TESTIMONIALS[slide()].text}\""
                    }
                    span {
                        style: "font-size: 14px; color:#5F6368;",
                        b { "{TESTIMONIALS[slide()].name}" }
                        ", {TESTIMONIALS[slide()].location}"
                    }
                }

                SlideChevron {
                    left: false,
                    onclick: move |_| {
                        let next = (*current_slide.peek() + 1) % TESTIMONIALS.len();
                        current_slide.set(next);
                    },
                }
            }
        }
    }
}

#[component]
fn SlideChevron(left: bool, onclick: Callback<Event<MouseData>>) -> Element {
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
