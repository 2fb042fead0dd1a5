//! Process-wide site configuration.
//!
//! The binary installs the configuration once before launch; components read
//! it through context, seeded from [`site_config`].

use std::sync::OnceLock;

use dart_core::SiteConfig;

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Installs the configuration. Only the first call has an effect.
pub fn install(config: SiteConfig) {
    if SITE_CONFIG.set(config).is_err() {
        tracing::warn!("site config already installed, ignoring");
    }
}

/// Returns the installed configuration, falling back to the build environment.
pub fn site_config() -> SiteConfig {
    SITE_CONFIG
        .get()
        .cloned()
        .unwrap_or_else(SiteConfig::from_build_env)
}
