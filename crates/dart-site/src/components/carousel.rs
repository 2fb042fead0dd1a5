//! Gallery carousel.

use dart_core::{Carousel, MediaKind};
use dioxus::prelude::*;

use super::use_site_config;

/// Single-slot viewer cycling through the landing gallery.
#[component]
pub fn MediaCarousel() -> Element {
    let assets = use_site_config().assets();
    let mut carousel = use_signal(Carousel::landing);

    let slot = carousel
        .read()
        .current()
        .map(|item| (item.kind, item.resolved_src(&assets), item.alt.clone()));

    rsx! {
        div {
            class: "carousel-container",
            button {
                class: "about-btn",
                onclick: move |_| {
                    carousel.write().previous();
                },
                "❮"
            }
            div {
                class: "media-item",
                {match slot {
                    Some((MediaKind::Video, src, _)) => rsx! {
                        video {
                            key: "{src}",
                            controls: true,
                            class: "media-video",
                            source { src: "{src}", r#type: "video/mp4" }
                            "Your browser does not support the video tag."
                        }
                    },
                    Some((MediaKind::Image, src, alt)) => rsx! {
                        img { src: "{src}", alt: "{alt}", class: "media-image" }
                    },
                    None => rsx! {},
                }}
            }
            button {
                class: "about-btn",
                onclick: move |_| {
                    carousel.write().next();
                },
                "❯"
            }
        }
    }
}
