//! DART Robotics website
//!
//! A Dioxus application rendering the club's landing page and sub-pages.
//! State and rules live in `dart_core`; this crate wires them to the
//! router, the theme context and platform events.

pub mod components;
pub mod config;
pub mod hooks;
pub mod route;
pub mod theme;

pub use components::App;
pub use route::Route;

/// CSS styles embedded at compile time.
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");
