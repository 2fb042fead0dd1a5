//! The site's page table.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SiteError};

/// Every view reachable through the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    About,
    Team,
    Robots,
    Sponsors,
}

impl Page {
    /// Returns the route path for this page.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Landing => "/",
            Page::About => "/about",
            Page::Team => "/team",
            Page::Robots => "/robots",
            Page::Sponsors => "/sponsors",
        }
    }

    /// Returns all pages in route-table order.
    pub fn all() -> &'static [Page] {
        &[
            Page::Landing,
            Page::About,
            Page::Team,
            Page::Robots,
            Page::Sponsors,
        ]
    }

    /// Looks up a page by path. A single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Result<Page> {
        let normalized = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(stripped) => stripped,
        };
        Page::all()
            .iter()
            .copied()
            .find(|p| p.path() == normalized)
            .ok_or_else(|| SiteError::UnknownRoute(path.to_string()))
    }
}

impl FromStr for Page {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        Page::from_path(s)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_path(page.path()).unwrap(), *page);
        }
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(Page::from_path("/team/").unwrap(), Page::Team);
        assert_eq!(Page::from_path("/").unwrap(), Page::Landing);
    }

    #[test]
    fn test_unknown_route() {
        assert!(matches!(
            Page::from_path("/merch"),
            Err(SiteError::UnknownRoute(p)) if p == "/merch"
        ));
    }
}
