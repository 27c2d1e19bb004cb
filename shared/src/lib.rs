//! Target-independent logic for the page widgets.
//!
//! Each widget talks to the page through a small host trait, so the browser
//! binding lives in the frontend crate and the behavior here can be exercised
//! natively.

pub mod carousel;
pub mod config;
pub mod error;
pub mod motion;
pub mod notes;
pub mod theme;

pub use carousel::{CarouselController, CarouselHost, CarouselState, SwipeTracker};
pub use config::PageConfig;
pub use error::WidgetError;
pub use theme::{
    FallbackStorage, MemoryStorage, PreferenceStorage, Theme, ThemeSchema, ThemeStore, ThemeSurface,
};
