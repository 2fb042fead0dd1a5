//! Team page.

use dart_core::content::FOUNDERS;
use dioxus::prelude::*;

use crate::hooks::use_scroll_to_top;

use super::use_site_config;

#[component]
pub fn Team() -> Element {
    use_scroll_to_top();

    let assets = use_site_config().assets();
    let members: Vec<_> = FOUNDERS
        .iter()
        .map(|f| (*f, assets.resolve(f.photo)))
        .collect();

    rsx! {
        div {
            class: "page team-page",
            h1 { "Our Team" }
            div {
                class: "team-row",
                for (founder, photo) in members {
                    div {
                        key: "{founder.name}",
                        class: "team-member",
                        img { src: "{photo}", alt: "{founder.name}" }
                        h3 { "{founder.name}" }
                        p { "{founder.bio}" }
                    }
                }
            }
        }
    }
}
