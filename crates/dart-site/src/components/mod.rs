//! UI components for the DART website.

mod about;
mod app;
mod carousel;
mod footer;
mod header;
mod landing;
mod robots;
mod shell;
mod sponsors;
mod team;

pub use about::*;
pub use app::*;
pub use carousel::*;
pub use footer::*;
pub use header::*;
pub use landing::*;
pub use robots::*;
pub use shell::*;
pub use sponsors::*;
pub use team::*;
