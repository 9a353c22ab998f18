//! Hero carousel on the home page.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdChevronLeft, MdChevronRight}};
use gloo_timers::future::TimeoutFuture;

use crate::routes::Route;

struct HeroSlide {
    title: &'static str,
    subtitle: &'static str,
    image_url: &'static str,
}

const HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        title: "Discover the Brazilian Northeast",
        subtitle: "Turquoise water, white dunes and year-round sun.",
        image_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=1600&q=80",
    },
    HeroSlide {
        title: "Natural pools of Maragogi",
        subtitle: "Snorkel over coral reefs at low tide.",
        image_url: "https://images.unsplash.com/photo-1559827260-dc66d52bef19?auto=format&fit=crop&w=1600&q=80",
    },
    HeroSlide {
        title: "Sunset over Jericoacoara",
        subtitle: "Climb the dune, watch the sun sink into the sea.",
        image_url: "https://images.unsplash.com/photo-1571771894821-ce9b6c11b08e?auto=format&fit=crop&w=1600&q=80",
    },
];

const AUTO_ADVANCE_MS: u32 = 6000;

#[component]
pub fn HeroSection() -> Element {
    let mut current_slide = use_signal(|| 0_usize);

    // timed advance; a manual click just moves on from wherever we are
    use_future(move || async move {
        loop {
            TimeoutFuture::new(AUTO_ADVANCE_MS).await;
            let next = (*current_slide.peek() + 1) % HERO_SLIDES.len();
            current_slide.set(next);
        }
    });

    let slide = use_memo(move || *current_slide.read() % HERO_SLIDES.len());
    let image_url = use_memo(move || HERO_SLIDES[slide()].image_url);

    rsx! {
        div {
            id: "x-hero-section",
            style: "
                position: relative;
                height: 440px;
                overflow: hidden;
                display: flex;
                align-items: center;
                justify-content: center;
                background-image: linear-gradient(rgba(28,33,45,0.45), rgba(28,33,45,0.45)), url({image_url()});
                background-size: cover;
                background-position: center;
            ",

            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 14px;
                    color: white;
                    text-align: center;
                    max-width: 700px;
                    padding: 0 20px;
                ",
                h1 {
                    style: "font-family: Montserrat, sans-serif; font-size: 44px; font-weight: 700; margin: 0;",
                    "{HERO_SLIDES[slide()].title}"
                }
                p {
                    style: "font-size: 20px; margin: 0; color: rgba(255,255,255,0.92);",
                    "{HERO_SLIDES[slide()].subtitle}"
                }
                Link {
                    to: Route::shop_page_default(),
                    span {
                        class: "nt-primary-button",
                        style: "
                            display: inline-flex;
                            padding: 12px 28px;
                            border-radius: 9999px;
                            background: #0B57D0;
                            color: white;
                            font-size: 17px;
                        ",
                        "Browse destinations"
                    }
                }
            }

            HeroChevron {
                left: true,
                onclick: move |_| {
                    let len = HERO_SLIDES.len();
                    let prev = (*current_slide.peek() + len - 1) % len;
                    current_slide.set(prev);
                },
            }
            HeroChevron {
                left: false,
                onclick: move |_| {
                    let next = (*current_slide.peek() + 1) % HERO_SLIDES.len();
                    current_slide.set(next);
                },
            }
        }
    }
}

#[component]
fn HeroChevron(left: bool, onclick: Callback<Event<MouseData>>) -> Element {
    let side = if left { "left: 18px;" } else { "right: 18px;" };
    rsx! {
        button {
            style: "
                position: absolute;
                top: 50%;
                transform: translateY(-50%);
                {side}
                width: 44px;
                height: 44px;
                border: none;
                border-radius: 9999px;
                background: rgba(255,255,255,0.25);
                cursor: pointer;
                display: flex;
                align-items: center;
                justify-content: center;
            ",
            onclick: move |e| onclick.call(e),
            if left {
                Icon { icon: MdChevronLeft, style: "width: 28px; height: 28px; color: white;" }
            } else {
                Icon { icon: MdChevronRight, style: "width: 28px; height: 28px; color: white;" }
            }
        }
    }
}
