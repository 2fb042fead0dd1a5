//! Gallery carousel state.

use crate::assets::AssetBase;

/// How a media item is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

/// One entry in the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub kind: MediaKind,
    /// Source path relative to the public base.
    pub src: String,
    pub alt: String,
}

impl MediaItem {
    pub fn video(src: &str) -> Self {
        Self {
            kind: MediaKind::Video,
            src: src.to_string(),
            alt: String::new(),
        }
    }

    pub fn image(src: &str, alt: &str) -> Self {
        Self {
            kind: MediaKind::Image,
            src: src.to_string(),
            alt: alt.to_string(),
        }
    }

    /// Source URL resolved against `assets`.
    pub fn resolved_src(&self, assets: &AssetBase) -> String {
        assets.resolve(&self.src)
    }
}

/// A single-slot viewer cycling through a fixed list of media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    items: Vec<MediaItem>,
    current: usize,
}

impl Carousel {
    /// Starts at the first item.
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self { items, current: 0 }
    }

    /// The landing-page gallery: the hero video followed by robot photos.
    pub fn landing() -> Self {
        Self::new(vec![
            MediaItem::video("videos/IMG_9158.mp4"),
            MediaItem::image("images/IMG_8931.png", "Pinhead Larry"),
            MediaItem::image("images/IMG_9107.png", "Storm Surge"),
        ])
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item in the display slot, `None` for an empty gallery.
    pub fn current(&self) -> Option<&MediaItem> {
        self.items.get(self.current)
    }

    /// Advances one item, wrapping from the last to the first.
    pub fn next(&mut self) -> usize {
        if !self.items.is_empty() {
            self.current = (self.current + 1) % self.items.len();
        }
        self.current
    }

    /// Steps back one item, wrapping from the first to the last.
    pub fn previous(&mut self) -> usize {
        if !self.items.is_empty() {
            let len = self.items.len();
            self.current = (self.current + len - 1) % len;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_wraps_to_last() {
        let mut carousel = Carousel::landing();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.previous(), 2);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut carousel = Carousel::landing();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn test_full_cycle_returns_home() {
        let mut carousel = Carousel::landing();
        for _ in 0..carousel.len() {
            carousel.previous();
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_current_item_kind() {
        let mut carousel = Carousel::landing();
        assert_eq!(carousel.current().map(|m| m.kind), Some(MediaKind::Video));
        carousel.next();
        let item = carousel.current().unwrap();
        assert_eq!(item.kind, MediaKind::Image);
        assert_eq!(item.alt, "Pinhead Larry");
        assert_eq!(
            item.resolved_src(&AssetBase::new("/Official-DART-Website")),
            "/Official-DART-Website/images/IMG_8931.png"
        );
    }

    #[test]
    fn test_empty_gallery() {
        let mut carousel = Carousel::new(Vec::new());
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.previous(), 0);
        assert!(carousel.current().is_none());
    }
}
