//! Mobile navigation menu state.

use crate::config::DEFAULT_MOBILE_BREAKPOINT;
use crate::watch::Watcher;

/// A viewport size delivered by the resize watcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in logical pixels.
    pub width: f64,
}

impl Viewport {
    pub fn new(width: f64) -> Self {
        Self { width }
    }
}

/// Open/closed state of the hamburger menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    open: bool,
    breakpoint: f64,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(DEFAULT_MOBILE_BREAKPOINT)
    }
}

impl MenuState {
    /// Creates a closed menu that force-closes at `breakpoint` and wider.
    pub fn new(breakpoint: f64) -> Self {
        Self {
            open: false,
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the menu and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        tracing::debug!(open = self.open, "menu toggled");
        self.open
    }

    /// Closes the menu, e.g. after a link was followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether `viewport` uses the desktop layout.
    pub fn is_desktop(&self, viewport: Viewport) -> bool {
        viewport.width >= self.breakpoint
    }

    /// Class for the nav panel.
    pub fn panel_class(&self) -> &'static str {
        if self.open {
            "open"
        } else {
            ""
        }
    }

    /// Accessible label for the hamburger button.
    pub fn toggle_label(&self) -> &'static str {
        if self.open {
            "Close navigation"
        } else {
            "Open navigation"
        }
    }
}

impl Watcher for MenuState {
    type Event = Viewport;

    /// Forces the menu closed once the viewport reaches desktop width.
    fn handle(&mut self, viewport: Viewport) -> bool {
        if self.open && self.is_desktop(viewport) {
            tracing::debug!(width = viewport.width, "closing menu on desktop viewport");
            self.open = false;
            return true;
        }
        false
    }

    fn released(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_parity() {
        for count in 1..=6 {
            let mut menu = MenuState::default();
            for _ in 0..count {
                menu.toggle();
            }
            assert_eq!(menu.is_open(), count % 2 == 1, "after {count} toggles");
        }
    }

    #[test]
    fn test_resize_closes_open_menu() {
        let mut menu = MenuState::default();
        menu.handle(Viewport::new(500.0));
        menu.toggle();
        assert!(menu.is_open());

        assert!(menu.handle(Viewport::new(768.0)));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_resize_leaves_closed_menu_closed() {
        let mut menu = MenuState::default();
        menu.handle(Viewport::new(500.0));
        assert!(!menu.handle(Viewport::new(1024.0)));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_mobile_resize_keeps_menu_open() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(!menu.handle(Viewport::new(767.9)));
        assert!(menu.is_open());
    }

    #[test]
    fn test_labels_follow_state() {
        let mut menu = MenuState::default();
        assert_eq!(menu.toggle_label(), "Open navigation");
        assert_eq!(menu.panel_class(), "");
        menu.toggle();
        assert_eq!(menu.toggle_label(), "Close navigation");
        assert_eq!(menu.panel_class(), "open");
    }
}
