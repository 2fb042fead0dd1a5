//! Page shell shared by every route.

use dioxus::prelude::*;

use crate::route::Route;
use crate::theme::ThemedRoot;

use super::{Footer, Header};

/// Layout wrapping each page with the header and footer.
#[component]
pub fn Shell() -> Element {
    rsx! {
        ThemedRoot {
            Header {}
            div {
                id: "content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
