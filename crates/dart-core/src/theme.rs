//! Theme system for the DART website.
//!
//! Provides 2 themes: Light and Dark. Each theme's palette is loaded from
//! the embedded `themes.json`; [`theme_style`] turns a theme into the full
//! set of CSS declarations for the themed root element.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{Result, SiteError};

const THEMES_JSON: &str = include_str!("../data/themes.json");

/// Palette key every theme must define; it also becomes the page background.
const BACKGROUND_KEY: &str = "bg";

/// Available themes for the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the name used in `themes.json` and the `data-theme` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark]
    }

    /// Returns the other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the theme switch: a moon offers dark mode, a sun
    /// offers light mode.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "icons/moon.svg",
            Theme::Dark => "icons/sun.svg",
        }
    }

    fn icon_filter(&self) -> &'static str {
        match self {
            Theme::Dark => "invert(1)",
            Theme::Light => "none",
        }
    }

    fn cta_color(&self) -> &'static str {
        match self {
            Theme::Dark => "#00cc66",
            Theme::Light => "#cc0000",
        }
    }

    fn cta_color_hover(&self) -> &'static str {
        match self {
            Theme::Dark => "#00e676",
            Theme::Light => "#e60000",
        }
    }
}

impl FromStr for Theme {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        Theme::all()
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| SiteError::UnknownTheme(s.to_string()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Palettes for every theme, keyed by theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeTable {
    palettes: BTreeMap<&'static str, BTreeMap<String, String>>,
}

impl ThemeTable {
    /// Parses and validates a theme table.
    ///
    /// Every theme in [`Theme::all`] needs an entry and every entry needs a
    /// `bg` variable. Entries for unknown theme names are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut raw: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(json)?;
        let mut palettes = BTreeMap::new();

        for theme in Theme::all() {
            let palette = raw
                .remove(theme.name())
                .ok_or(SiteError::MissingTheme(theme.name()))?;
            if !palette.contains_key(BACKGROUND_KEY) {
                return Err(SiteError::MissingVariable {
                    theme: theme.name(),
                    variable: BACKGROUND_KEY,
                });
            }
            palettes.insert(theme.name(), palette);
        }

        for extra in raw.keys() {
            tracing::warn!(theme = %extra, "ignoring palette for unknown theme");
        }

        Ok(Self { palettes })
    }

    /// Returns the table compiled into the binary.
    pub fn builtin() -> &'static ThemeTable {
        static TABLE: OnceLock<ThemeTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            ThemeTable::from_json(THEMES_JSON).expect("embedded themes.json is valid")
        })
    }

    /// Returns the declared palette for a theme.
    pub fn palette(&self, theme: Theme) -> &BTreeMap<String, String> {
        // Presence of every theme is checked in `from_json`.
        &self.palettes[theme.name()]
    }

    /// Builds the full style for a theme from this table.
    pub fn style(&self, theme: Theme) -> ThemeStyle {
        let palette = self.palette(theme);

        let mut properties: Vec<(String, String)> = palette
            .iter()
            .map(|(key, value)| (format!("--{key}"), value.clone()))
            .collect();

        properties.push(("--icon-filter".to_string(), theme.icon_filter().to_string()));
        properties.push(("--cta-color".to_string(), theme.cta_color().to_string()));
        properties.push((
            "--cta-color-hover".to_string(),
            theme.cta_color_hover().to_string(),
        ));

        ThemeStyle {
            theme,
            background: palette[BACKGROUND_KEY].clone(),
            properties,
        }
    }
}

/// The complete set of style declarations produced for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeStyle {
    theme: Theme,
    background: String,
    properties: Vec<(String, String)>,
}

impl ThemeStyle {
    /// The theme this style was produced from.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The page background colour.
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Custom properties in declaration order (palette first, derived last).
    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    /// Looks up a custom property by its full name, e.g. `--cta-color`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Renders the inline `style` attribute value.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (key, value) in &self.properties {
            css.push_str(key);
            css.push_str(": ");
            css.push_str(value);
            css.push_str("; ");
        }
        css.push_str("background: ");
        css.push_str(&self.background);
        css.push(';');
        css
    }
}

/// Produces the style for a theme from the built-in table.
pub fn theme_style(theme: Theme) -> ThemeStyle {
    ThemeTable::builtin().style(theme)
}

/// Resolves a theme by name and produces its style.
///
/// Unknown names are a no-op: a warning is logged and `None` returned.
pub fn apply_theme(name: &str) -> Option<ThemeStyle> {
    match name.parse::<Theme>() {
        Ok(theme) => {
            tracing::debug!(theme = %theme, "applying theme");
            Some(theme_style(theme))
        }
        Err(e) => {
            tracing::warn!("{e}, keeping current theme");
            None
        }
    }
}
