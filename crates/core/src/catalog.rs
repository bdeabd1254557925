//! Compiled-in advertising history, one entry per decade.
//!
//! The entries are literal data; `advertising_history()` wraps them in a
//! validated `Timeline` so callers inject it like any other fixture.

use crate::error::Result;
use crate::models::{Icon, ImageMedia, Media, TimelineEntry, VideoMedia};
use crate::timeline::Timeline;

/// The built-in entries in chronological order.
pub const ENTRIES: [TimelineEntry; 7] = [
    TimelineEntry {
        decade: "1960s",
        title: "The Birth of the Creative Revolution",
        description: "The rise of creative-driven advertising, focusing on wit and storytelling.",
        key_event: "Madison Avenue agencies changed the landscape by prioritizing creativity over hard-selling tactics.",
        example_ad: "Volkswagen's \"Think Small\" (1960)",
        impact: "This minimalist ad revolutionized car advertising by emphasizing simplicity and irony.",
        media: Media::Image(ImageMedia {
            asset: "images/1960sad.webp",
            alt: "Advertising in the 1960s",
        }),
        icon: Icon::Brain,
    },
    TimelineEntry {
        decade: "1970s",
        title: "The Power of Branding",
        description: "A shift from selling products to building brand identities.",
        key_event: "Brands began focusing on emotional connections and lifestyle imagery.",
        example_ad: "Coca-Cola's \"I'd Like to Buy the World a Coke\" (1971)",
        impact: "This ad showcased a message of unity and peace, associating Coca-Cola with positive, uplifting emotions.",
        media: Media::Image(ImageMedia {
            asset: "images/1970sad.webp",
            alt: "Advertising in the 1970s",
        }),
        icon: Icon::Layers,
    },
    TimelineEntry {
        decade: "1980s",
        title: "Big Budget, Big Ideas, and the Rise of TV Commercials",
        description: "Television became the dominant medium for advertising.",
        key_event: "Increased ad budgets led to more dramatic, story-driven TV commercials.",
        example_ad: "Apple's \"1984\" Super Bowl Ad (1984)",
        impact: "Introduced the Macintosh computer and portrayed Apple as a rebel challenging the status quo.",
        media: Media::Video(VideoMedia {
            embed_url: "https://www.youtube.com/embed/VtvjbmoDx-I",
            title: "Apple \"1984\" commercial",
        }),
        icon: Icon::Wifi,
    },
    TimelineEntry {
        decade: "1990s",
        title: "Digital Beginnings and Shock Advertising",
        description: "The rise of early digital ads and controversial \"shock\" advertising.",
        key_event: "The beginning of digital advertising with the rise of the internet.",
        example_ad: "Benetton's \"Unhate\" Campaign",
        impact: "Benetton became known for its shocking ads that dealt with social issues, aiming to provoke conversations.",
        media: Media::Image(ImageMedia {
            asset: "images/1990sad.webp",
            alt: "Advertising in the 1990s",
        }),
        icon: Icon::Radio,
    },
    TimelineEntry {
        decade: "2000s",
        title: "The Rise of Digital and Guerrilla Marketing",
        description: "The explosion of digital marketing and guerrilla tactics.",
        key_event: "Brands increasingly invested in online campaigns, viral marketing, and guerrilla strategies.",
        example_ad: "Burger King's \"Subservient Chicken\" (2004)",
        impact: "This online campaign allowed users to \"control\" a chicken via a website, pioneering interactive and viral marketing.",
        media: Media::Image(ImageMedia {
            asset: "images/2000sad.webp",
            alt: "Advertising in the 2000s",
        }),
        icon: Icon::Smartphone,
    },
    TimelineEntry {
        decade: "2010s",
        title: "Social Media, Influencers, and the Age of Authenticity",
        description: "The dominance of social media and the rise of influencer marketing.",
        key_event: "Brands started shifting budgets to social media platforms, using influencers to authentically connect with consumers.",
        example_ad: "Always' \"Like a Girl\" Campaign (2014)",
        impact: "This ad challenged gender stereotypes and empowered women, sparking a cultural conversation.",
        media: Media::Video(VideoMedia {
            embed_url: "https://www.youtube.com/embed/XjJQBjWYDTs",
            title: "Always \"Like a Girl\" campaign",
        }),
        icon: Icon::Wifi,
    },
    TimelineEntry {
        decade: "2020s",
        title: "Personalization, AI, and the Power of Data",
        description: "The rise of AI-driven, data-fueled personalized marketing.",
        key_event: "Brands increasingly used data and AI to create hyper-targeted, personalized ads.",
        example_ad: "Spotify's \"Wrapped\" Campaign",
        impact: "Spotify's yearly \"Wrapped\" campaign gave users a personalized summary of their listening habits, transforming private data into a viral phenomenon.",
        media: Media::Image(ImageMedia {
            asset: "images/2020sad.webp",
            alt: "Advertising in the 2020s",
        }),
        icon: Icon::Cpu,
    },
];

/// The built-in advertising timeline.
pub fn advertising_history() -> Result<Timeline> {
    Timeline::new(ENTRIES.to_vec())
}
