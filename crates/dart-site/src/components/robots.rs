//! Robots page.

use dart_core::content::ROBOTS;
use dioxus::prelude::*;

use crate::hooks::use_scroll_to_top;

use super::use_site_config;

#[component]
pub fn Robots() -> Element {
    use_scroll_to_top();

    let assets = use_site_config().assets();
    let robots: Vec<_> = ROBOTS
        .iter()
        .map(|r| (r.name, assets.resolve(r.image)))
        .collect();

    rsx! {
        div {
            class: "page robots-page",
            h1 { "Our Robots" }
            div {
                class: "project-grid",
                for (name, image) in robots {
                    div {
                        key: "{name}",
                        class: "project-card visible",
                        img { src: "{image}", alt: "{name}" }
                        h3 { "{name}" }
                    }
                }
            }
        }
    }
}
