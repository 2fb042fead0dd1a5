//! Entry point for the DART Robotics website.
//!
//! Desktop builds take their configuration from the command line; web
//! builds read `PUBLIC_URL` at compile time.

use dart_site::App;

#[cfg(feature = "desktop")]
mod desktop {
    use std::path::PathBuf;

    use clap::Parser;
    use dart_core::{SiteConfig, Theme};
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
    use tracing_subscriber::EnvFilter;

    use super::App;

    /// Command line arguments.
    #[derive(Parser, Debug)]
    #[command(name = "dart-site")]
    #[command(about = "DART Robotics website")]
    struct Args {
        /// JSON file overriding the built-in site configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Public base path prepended to asset URLs
        #[arg(long, env = "PUBLIC_URL")]
        public_url: Option<String>,

        /// Theme to start with (light or dark)
        #[arg(short, long)]
        theme: Option<String>,
    }

    fn build_config(args: &Args) -> dart_core::Result<SiteConfig> {
        let mut config = match &args.config {
            Some(path) => SiteConfig::load(path)?,
            None => SiteConfig::default(),
        };

        if let Some(url) = &args.public_url {
            config = config.with_public_url(url.clone());
        }

        // Unknown names are logged and leave the configured theme in place
        match args.theme.as_deref().map(str::parse::<Theme>) {
            Some(Ok(theme)) => config = config.with_default_theme(theme),
            Some(Err(e)) => tracing::warn!("ignoring --theme: {e}"),
            None => {}
        }

        Ok(config)
    }

    pub fn launch() {
        // Initialize logging
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();

        tracing::info!("Starting DART Robotics website");

        let args = Args::parse();
        let config = match build_config(&args) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load site config: {e}");
                std::process::exit(1);
            }
        };

        tracing::info!(
            public_url = %config.public_url,
            theme = %config.default_theme,
            "site config loaded"
        );
        dart_site::config::install(config);

        dioxus::LaunchBuilder::desktop()
            .with_cfg(
                Config::new().with_window(
                    WindowBuilder::new()
                        .with_title("DART Robotics")
                        .with_inner_size(LogicalSize::new(1280, 900)),
                ),
            )
            .launch(App);
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(theme: Option<&str>) -> Args {
            Args {
                config: None,
                public_url: None,
                theme: theme.map(str::to_string),
            }
        }

        #[test]
        fn test_theme_flag_sets_default_theme() {
            let config = build_config(&args(Some("dark"))).unwrap();
            assert_eq!(config.default_theme, Theme::Dark);
        }

        #[test]
        fn test_unknown_theme_flag_keeps_configured_theme() {
            let config = build_config(&args(Some("sepia"))).unwrap();
            assert_eq!(config.default_theme, SiteConfig::default().default_theme);
        }
    }
}

#[cfg(feature = "desktop")]
fn main() {
    desktop::launch();
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting DART Robotics website");
    dioxus::launch(App);
}
