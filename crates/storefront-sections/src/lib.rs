//! # storefront-sections: Home Page Sections
//!
//! The presentational sections of the storefront home page and the one
//! piece of live behavior among them, the scrolling announcement ticker.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Home Page                                      │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  AnnouncementBar                                                 │  │
//! │  │  ScrollingTicker ──activate()──► tokio task ──watch──► offset    │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  PromoBanner (static)                                            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  InstagramGallery (static)                                       │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  All sections implement `Render`; content comes from `SectionsConfig`. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`ticker`]: strip geometry, scroll state and the tick task
//! - [`announcement`]: the bar that renders a ticker
//! - [`banner`], [`gallery`]: static sections
//! - [`markup`]: the `Render` trait and HTML escaping
//! - [`config`]: TOML + environment configuration
//! - [`error`]: section error types

pub mod announcement;
pub mod banner;
pub mod config;
pub mod error;
pub mod gallery;
pub mod markup;
pub mod ticker;

pub use announcement::AnnouncementBar;
pub use banner::PromoBanner;
pub use config::{SectionsConfig, TickerSettings};
pub use error::{SectionError, SectionResult};
pub use gallery::{GalleryPost, InstagramGallery};
pub use markup::{Page, Render};
pub use ticker::{ScrollState, ScrollingTicker, StripLayout, TickerHandle, TickerStrip};
