//! Site header: logo, navigation, hamburger and theme switch.

use dart_core::{nav_entries, MenuState, Viewport};
use dioxus::prelude::*;

use crate::hooks::use_watch;
use crate::route::Route;
use crate::theme::ThemeToggle;

use super::use_site_config;

/// Reports `window.innerWidth` now and on every resize.
const VIEWPORT_WIDTH_JS: &str = r#"
    window.addEventListener("resize", () => dioxus.send(window.innerWidth));
    dioxus.send(window.innerWidth);
"#;

/// Header component with the navigation panel.
///
/// Viewport resizes close the mobile menu once the desktop layout applies.
#[component]
pub fn Header() -> Element {
    let config = use_site_config();
    let assets = config.assets();
    let menu = use_watch(|| MenuState::new(config.mobile_breakpoint));

    // Window width, scrollbar included, to match the stylesheet's media query
    use_future(move || async move {
        let mut viewport = document::eval(VIEWPORT_WIDTH_JS);
        while let Ok(width) = viewport.recv::<f64>().await {
            menu.dispatch(Viewport::new(width));
        }
    });

    let (open, panel_class, toggle_label) =
        menu.read(|m| (m.is_open(), m.panel_class(), m.toggle_label()));

    let menu_icon = assets.resolve("icons/menu.svg");
    let logo = assets.resolve("images/DART.svg");

    rsx! {
        div {
            id: "header",
            button {
                id: "hamburger",
                "aria-label": "{toggle_label}",
                "aria-expanded": "{open}",
                onclick: move |_| {
                    menu.update(|m| m.toggle());
                },
                img { src: "{menu_icon}", alt: "", "aria-hidden": "true" }
            }

            Link {
                to: Route::Landing {},
                id: "logo_container",
                img { src: "{logo}", id: "logo", alt: "logo" }
            }

            nav {
                id: "navPanel",
                class: "{panel_class}",
                ul {
                    for entry in nav_entries() {
                        li {
                            key: "{entry.path()}",
                            class: "navItem",
                            Link {
                                to: Route::from(entry.page),
                                onclick: move |_| {
                                    menu.update(|m| m.close());
                                },
                                "{entry.label}"
                            }
                        }
                    }
                }
            }

            ThemeToggle { assets }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_script_reports_window_width() {
        assert!(VIEWPORT_WIDTH_JS.contains(r#"addEventListener("resize""#));
        assert_eq!(VIEWPORT_WIDTH_JS.matches("dioxus.send(window.innerWidth)").count(), 2);
        assert!(!VIEWPORT_WIDTH_JS.contains("clientWidth"));
    }

    #[test]
    fn test_window_width_above_breakpoint_closes_menu() {
        // 775px window with a 15px scrollbar: the header element is 760px wide
        let mut menu = MenuState::new(768.0);
        menu.toggle();
        assert!(dart_core::Watcher::handle(&mut menu, Viewport::new(775.0)));
        assert!(!menu.is_open());
    }
}
