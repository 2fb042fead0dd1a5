//! Root application component.

use dart_core::SiteConfig;
use dioxus::prelude::*;

use crate::config::site_config;
use crate::route::Route;
use crate::STYLES_CSS;

/// Root component: provides the configuration and theme contexts and
/// mounts the router.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(site_config);
    use_context_provider(|| Signal::new(config.default_theme));

    rsx! {
        style { "{STYLES_CSS}" }
        Router::<Route> {}
    }
}

/// Returns the site configuration provided by [`App`].
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
