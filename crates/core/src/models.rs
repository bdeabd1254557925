//! Timeline entry types.
//!
//! Responsibilities:
//! - Define the immutable `TimelineEntry` record shown on each slide.
//! - Model entry media as a two-variant sum type (`Media`).
//! - Define the thumbnail `Icon` set and its terminal glyphs.
//!
//! Does NOT handle:
//! - Ordering or validation of entries (see `timeline`).
//! - Selection state (see `navigation`).
//!
//! Invariants:
//! - Every entry carries exactly one media reference; `Media` makes the
//!   "image or video, never both, never neither" rule structural.

use std::fmt;

/// A still image shown in the detail panel and the enlarged modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMedia {
    /// Asset path relative to the project's image directory.
    pub asset: &'static str,
    /// Alternative text describing the image.
    pub alt: &'static str,
}

/// A third-party video embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoMedia {
    /// Embed URL for the player.
    pub embed_url: &'static str,
    /// Accessible title of the embedded player.
    pub title: &'static str,
}

/// Media attached to a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Media {
    Image(ImageMedia),
    Video(VideoMedia),
}

impl Media {
    /// Returns the image when this media is a still image.
    pub fn as_image(&self) -> Option<&ImageMedia> {
        match self {
            Self::Image(image) => Some(image),
            Self::Video(_) => None,
        }
    }

    /// Returns the video when this media is an embed.
    pub fn as_video(&self) -> Option<&VideoMedia> {
        match self {
            Self::Image(_) => None,
            Self::Video(video) => Some(video),
        }
    }

    /// Whether the media can be shown in the enlarged image modal.
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image(_))
    }
}

/// Symbol shown on a thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Brain,
    Layers,
    Wifi,
    Radio,
    Smartphone,
    Cpu,
}

impl Icon {
    /// Single-cell glyph used in the thumbnail strip.
    pub fn glyph(self) -> char {
        match self {
            Self::Brain => '✹',
            Self::Layers => '☰',
            Self::Wifi => '◠',
            Self::Radio => '◎',
            Self::Smartphone => '▯',
            Self::Cpu => '▣',
        }
    }

    /// Human-readable icon name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Brain => "Brain",
            Self::Layers => "Layers",
            Self::Wifi => "Wifi",
            Self::Radio => "Radio",
            Self::Smartphone => "Smartphone",
            Self::Cpu => "Cpu",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One decade of advertising history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Decade label, e.g. "1960s". Unique within a timeline.
    pub decade: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Defining industry event of the decade.
    pub key_event: &'static str,
    /// The iconic campaign of the decade.
    pub example_ad: &'static str,
    pub impact: &'static str,
    pub media: Media,
    pub icon: Icon,
}

impl TimelineEntry {
    /// Whether this entry can be enlarged in the image modal.
    pub fn is_image_backed(&self) -> bool {
        self.media.is_image()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: Media = Media::Image(ImageMedia {
        asset: "images/test.webp",
        alt: "Test image",
    });
    const VIDEO: Media = Media::Video(VideoMedia {
        embed_url: "https://example.com/embed/test",
        title: "Test video",
    });

    #[test]
    fn test_media_accessors() {
        assert!(IMAGE.is_image());
        assert_eq!(IMAGE.as_image().map(|i| i.asset), Some("images/test.webp"));
        assert!(IMAGE.as_video().is_none());

        assert!(!VIDEO.is_image());
        assert!(VIDEO.as_image().is_none());
        assert_eq!(VIDEO.as_video().map(|v| v.title), Some("Test video"));
    }

    #[test]
    fn test_icon_glyphs_are_distinct() {
        let icons = [
            Icon::Brain,
            Icon::Layers,
            Icon::Wifi,
            Icon::Radio,
            Icon::Smartphone,
            Icon::Cpu,
        ];
        let mut glyphs: Vec<char> = icons.iter().map(|i| i.glyph()).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), icons.len());
    }

    #[test]
    fn test_icon_display_uses_name() {
        assert_eq!(Icon::Smartphone.to_string(), "Smartphone");
    }
}
