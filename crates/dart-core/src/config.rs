//! Site configuration.
//!
//! Layering: built-in defaults from the embedded `site.json`, then an
//! optional JSON file, then explicit overrides from the command line or
//! build environment.

use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::assets::AssetBase;
use crate::error::Result;
use crate::theme::Theme;

/// Built-in configuration, compiled into the binary.
const SITE_JSON: &str = include_str!("../data/site.json");

/// Base path used when the site is served from its GitHub Pages project URL.
pub const GITHUB_PAGES_URL: &str = "/Official-DART-Website";

/// Viewport width (logical px) at and above which the desktop layout applies.
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;

/// A footer link to one of the club's social accounts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    /// Icon path relative to the public base.
    pub icon: String,
}

/// Main site configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    /// Prefix for static assets (empty when served from the domain root)
    pub public_url: String,

    /// Address for general contact and recruitment
    pub contact_email: String,

    /// Address sponsorship inquiries are sent to
    pub sponsor_email: String,

    /// Width at which the mobile menu is forced closed
    pub mobile_breakpoint: f64,

    /// Theme active on first load
    pub default_theme: Theme,

    /// Footer social links, in display order
    pub socials: Vec<SocialLink>,
}

/// Fields a config file may override.
#[derive(Debug, Deserialize)]
struct SiteConfigOverlay {
    public_url: Option<String>,
    contact_email: Option<String>,
    sponsor_email: Option<String>,
    mobile_breakpoint: Option<f64>,
    default_theme: Option<Theme>,
    socials: Option<Vec<SocialLink>>,
}

impl SiteConfigOverlay {
    fn apply(self, base: SiteConfig) -> SiteConfig {
        SiteConfig {
            public_url: self.public_url.unwrap_or(base.public_url),
            contact_email: self.contact_email.unwrap_or(base.contact_email),
            sponsor_email: self.sponsor_email.unwrap_or(base.sponsor_email),
            mobile_breakpoint: self.mobile_breakpoint.unwrap_or(base.mobile_breakpoint),
            default_theme: self.default_theme.unwrap_or(base.default_theme),
            socials: self.socials.unwrap_or(base.socials),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl SiteConfig {
    /// Returns the configuration compiled into the binary.
    pub fn builtin() -> &'static SiteConfig {
        static CONFIG: OnceLock<SiteConfig> = OnceLock::new();
        CONFIG.get_or_init(|| {
            serde_json::from_str(SITE_JSON).expect("embedded site.json is valid")
        })
    }

    /// Create a config for the GitHub Pages deployment
    pub fn github_pages() -> Self {
        Self {
            public_url: GITHUB_PAGES_URL.to_string(),
            ..Default::default()
        }
    }

    /// Create a config from the build environment.
    ///
    /// `PUBLIC_URL` is read at compile time so web builds can be pointed at
    /// a sub-path without a config file.
    pub fn from_build_env() -> Self {
        match option_env!("PUBLIC_URL") {
            Some(url) => Self::default().with_public_url(url),
            None => Self::default(),
        }
    }

    /// Parses a JSON overlay. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let overlay: SiteConfigOverlay = serde_json::from_str(json)?;
        Ok(overlay.apply(Self::default()))
    }

    /// Reads a JSON overlay from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loaded site config");
        Self::from_json(&json)
    }

    /// Overrides the public base path.
    pub fn with_public_url(mut self, public_url: impl Into<String>) -> Self {
        self.public_url = public_url.into();
        self
    }

    /// Overrides the theme used on first load.
    pub fn with_default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }

    /// Asset resolver for the configured base path.
    pub fn assets(&self) -> AssetBase {
        AssetBase::new(&self.public_url)
    }
}
