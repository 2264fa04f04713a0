//! # Section Configuration
//!
//! Content and timing for the home page sections.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_TICKER_INTERVAL_MS=40                                   │
//! │     STOREFRONT_TICKER_MESSAGES="Free shipping|2-year warranty"         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.storefront.sections/... (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [ticker]
//! messages = ["Free shipping on orders over $50", "2-year warranty on every product"]
//! tick_interval_ms = 30
//! step_px = 1
//! glyph_width_px = 8
//! gap_px = 48
//!
//! [banner]
//! title = "Summer Collection"
//! cta_label = "Shop now"
//! cta_href = "/collections/summer"
//! image_url = "/images/banner/summer.jpg"
//!
//! [gallery]
//! handle = "storefront"
//! profile_url = "https://www.instagram.com/storefront"
//! heading = "Follow us on Instagram"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use storefront_core::validation::validate_display_text;
use tracing::{debug, info, warn};

use crate::banner::PromoBanner;
use crate::error::{SectionError, SectionResult};
use crate::gallery::InstagramGallery;
use crate::ticker::StripLayout;

/// Separator for `STOREFRONT_TICKER_MESSAGES`.
pub const ENV_MESSAGE_SEPARATOR: char = '|';

/// Longest accepted tick interval. Anything slower stops reading as motion.
const MAX_TICK_INTERVAL_MS: u64 = 1000;

// =============================================================================
// Ticker Settings
// =============================================================================

/// Announcement bar content and timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerSettings {
    #[serde(default = "default_messages")]
    pub messages: Vec<String>,

    /// Time between scroll steps.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,

    /// Pixels advanced per tick.
    #[serde(default = "default_step")]
    pub step_px: u32,

    #[serde(default = "default_glyph_width")]
    pub glyph_width_px: u32,

    /// Spacing after every message.
    #[serde(default = "default_gap")]
    pub gap_px: u32,
}

fn default_messages() -> Vec<String> {
    vec![
        "Free shipping on orders over $50".to_string(),
        "2-year warranty on every product".to_string(),
        "30-day free returns".to_string(),
        "Secure checkout".to_string(),
    ]
}

fn default_tick_interval() -> u64 {
    30
}

fn default_step() -> u32 {
    1
}

fn default_glyph_width() -> u32 {
    8
}

fn default_gap() -> u32 {
    48
}

impl Default for TickerSettings {
    fn default() -> Self {
        TickerSettings {
            messages: default_messages(),
            tick_interval_ms: default_tick_interval(),
            step_px: default_step(),
            glyph_width_px: default_glyph_width(),
            gap_px: default_gap(),
        }
    }
}

impl TickerSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn layout(&self) -> StripLayout {
        StripLayout {
            glyph_width_px: self.glyph_width_px,
            gap_px: self.gap_px,
        }
    }

    pub fn validate(&self) -> SectionResult<()> {
        if self.messages.is_empty() {
            return Err(SectionError::InvalidConfig(
                "ticker.messages must contain at least one message".into(),
            ));
        }
        for message in &self.messages {
            validate_display_text("ticker.messages", message)?;
        }

        if self.tick_interval_ms == 0 || self.tick_interval_ms > MAX_TICK_INTERVAL_MS {
            return Err(SectionError::InvalidConfig(format!(
                "ticker.tick_interval_ms must be between 1 and {MAX_TICK_INTERVAL_MS}"
            )));
        }

        if self.step_px == 0 {
            return Err(SectionError::InvalidConfig(
                "ticker.step_px must be greater than 0".into(),
            ));
        }

        if self.glyph_width_px == 0 {
            return Err(SectionError::InvalidConfig(
                "ticker.glyph_width_px must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Sections Configuration
// =============================================================================

/// Complete section configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionsConfig {
    #[serde(default)]
    pub ticker: TickerSettings,

    #[serde(default)]
    pub banner: PromoBanner,

    #[serde(default)]
    pub gallery: InstagramGallery,
}

impl SectionsConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> SectionResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading section config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load section config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> SectionResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| SectionError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SectionError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| SectionError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Section config saved");
        Ok(())
    }

    /// Validates every section.
    pub fn validate(&self) -> SectionResult<()> {
        self.ticker.validate()?;
        self.banner.validate()?;
        self.gallery.validate()?;
        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ms) = lookup("STOREFRONT_TICKER_INTERVAL_MS") {
            match ms.parse::<u64>() {
                Ok(ms) => {
                    debug!(ms, "Overriding ticker interval from environment");
                    self.ticker.tick_interval_ms = ms;
                }
                Err(_) => warn!(value = %ms, "Ignoring non-numeric STOREFRONT_TICKER_INTERVAL_MS"),
            }
        }

        if let Some(step) = lookup("STOREFRONT_TICKER_STEP_PX") {
            match step.parse::<u32>() {
                Ok(step) => self.ticker.step_px = step,
                Err(_) => warn!(value = %step, "Ignoring non-numeric STOREFRONT_TICKER_STEP_PX"),
            }
        }

        if let Some(messages) = lookup("STOREFRONT_TICKER_MESSAGES") {
            debug!("Overriding ticker messages from environment");
            self.ticker.messages = messages
                .split(ENV_MESSAGE_SEPARATOR)
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(handle) = lookup("STOREFRONT_INSTAGRAM_HANDLE") {
            self.gallery.handle = handle;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "sections")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}
