//! About page.

use dart_core::content::ABOUT_TEXT;
use dioxus::prelude::*;

use crate::hooks::use_scroll_to_top;

#[component]
pub fn About() -> Element {
    use_scroll_to_top();

    rsx! {
        div {
            class: "page about-page",
            h1 { "About DART" }
            p { "{ABOUT_TEXT}" }
            p {
                "Members design, machine and drive their own robots, then take them to "
                "regional and national events. Weekly build sessions are open to everyone."
            }
        }
    }
}
