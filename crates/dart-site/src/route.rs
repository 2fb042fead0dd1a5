//! Client-side route table.

use dart_core::Page;
use dioxus::prelude::*;

use crate::components::{About, Landing, Robots, Shell, Sponsors, Team};

/// Every page of the site, rendered inside the [`Shell`] layout.
#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},
        #[route("/about")]
        About {},
        #[route("/team")]
        Team {},
        #[route("/robots")]
        Robots {},
        #[route("/sponsors")]
        Sponsors {},
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Landing => Route::Landing {},
            Page::About => Route::About {},
            Page::Team => Route::Team {},
            Page::Robots => Route::Robots {},
            Page::Sponsors => Route::Sponsors {},
        }
    }
}

impl From<&Route> for Page {
    fn from(route: &Route) -> Self {
        match route {
            Route::Landing {} => Page::Landing,
            Route::About {} => Page::About,
            Route::Team {} => Page::Team,
            Route::Robots {} => Page::Robots,
            Route::Sponsors {} => Page::Sponsors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_match_page_table() {
        for page in Page::all() {
            let route = Route::from(*page);
            assert_eq!(route.to_string(), page.path());
            assert_eq!(Page::from(&route), *page);
        }
    }
}
