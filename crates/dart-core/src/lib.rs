//! State and rules for the DART Robotics website.
//!
//! Everything the site renders is driven by the types in this crate:
//! themes and their CSS variables, the navigation table, the header menu,
//! the scroll-reveal controller, the media carousel and the sponsor list.
//! Nothing here depends on a UI framework, so the front end only has to
//! forward platform events and render the resulting state.
//!
//! # Watchers
//!
//! Event-driven state (intersection and resize deliveries) is wrapped in a
//! [`WatchHandle`]. Attaching returns a [`WatchGuard`]; once the guard is
//! dropped no further delivery can mutate the watcher.
//!
//! ```
//! use dart_core::{MenuState, Viewport, WatchHandle};
//!
//! let menu = WatchHandle::new(MenuState::new(768.0));
//! let guard = menu.attach();
//!
//! menu.update(|m| m.toggle());
//! menu.dispatch(Viewport::new(1024.0));
//! assert!(!menu.with(|m| m.is_open()));
//!
//! drop(guard);
//! assert!(!menu.is_attached());
//! ```

pub mod assets;
pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod mailto;
pub mod menu;
pub mod navigation;
pub mod page;
pub mod reveal;
pub mod sponsors;
pub mod theme;
pub mod watch;

pub use assets::AssetBase;
pub use carousel::{Carousel, MediaItem, MediaKind};
pub use config::{SiteConfig, SocialLink};
pub use error::{Result, SiteError};
pub use mailto::Mailto;
pub use menu::{MenuState, Viewport};
pub use navigation::{nav_entries, NavEntry};
pub use page::Page;
pub use reveal::{IntersectionEntry, RevealController, RevealGroup, RevealPlan, RevealTarget};
pub use sponsors::{group_by_tier, Sponsor, SponsorTier};
pub use theme::{apply_theme, theme_style, Theme, ThemeStyle, ThemeTable};
pub use watch::{WatchGuard, WatchHandle, Watcher};
