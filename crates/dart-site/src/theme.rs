//! Theme context for the site.
//!
//! The current theme is a `Signal<Theme>` provided by the root component.
//! [`ThemedRoot`] renders the theme's CSS variables onto its own element, so
//! everything below it restyles together.

use dart_core::{apply_theme, theme_style, AssetBase, Theme};
use dioxus::prelude::*;

/// Returns the shared theme signal.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Root component that applies the current theme.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = use_theme();
    let style = use_memo(move || theme_style(theme()));
    let css = style.read().to_css();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme}",
            style: "{css}",
            {children}
        }
    }
}

/// Header button flipping between light and dark.
#[component]
pub fn ThemeToggle(assets: AssetBase) -> Element {
    let mut theme = use_theme();
    let icon = assets.resolve(theme().toggle_icon());

    rsx! {
        button {
            id: "theme",
            onclick: move |_| {
                let next = theme().toggled();
                if let Some(style) = apply_theme(next.name()) {
                    theme.set(style.theme());
                }
            },
            img { src: "{icon}", alt: "theme toggle" }
        }
    }
}
