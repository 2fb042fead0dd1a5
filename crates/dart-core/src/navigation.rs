//! Header navigation table.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::Result;
use crate::page::Page;

const NAVIGATION_JSON: &str = include_str!("../data/navigation.json");

/// One header link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub page: Page,
}

impl NavEntry {
    /// The route path the entry links to.
    pub fn path(&self) -> &'static str {
        self.page.path()
    }
}

#[derive(Deserialize)]
struct RawEntry {
    label: String,
    path: String,
}

/// Parses a navigation table, rejecting paths that are not known pages.
pub fn parse_nav_entries(json: &str) -> Result<Vec<NavEntry>> {
    let raw: Vec<RawEntry> = serde_json::from_str(json)?;
    raw.into_iter()
        .map(|entry| {
            Ok(NavEntry {
                page: Page::from_path(&entry.path)?,
                label: entry.label,
            })
        })
        .collect()
}

/// Returns the built-in navigation table, in display order.
pub fn nav_entries() -> &'static [NavEntry] {
    static ENTRIES: OnceLock<Vec<NavEntry>> = OnceLock::new();
    ENTRIES.get_or_init(|| {
        parse_nav_entries(NAVIGATION_JSON).expect("embedded navigation.json is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;

    #[test]
    fn test_builtin_order() {
        let labels: Vec<&str> = nav_entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Home", "About", "Team", "Robots", "Sponsors"]);
    }

    #[test]
    fn test_every_page_is_linked() {
        for page in Page::all() {
            assert!(nav_entries().iter().any(|e| e.page == *page));
        }
    }

    #[test]
    fn test_unknown_path_rejected() {
        let err = parse_nav_entries(r#"[{ "label": "Shop", "path": "/shop" }]"#).unwrap_err();
        assert!(matches!(err, SiteError::UnknownRoute(_)));
    }
}
