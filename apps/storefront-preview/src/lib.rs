//! # Storefront Preview Library
//!
//! Renders the storefront home page from section configuration and drives a
//! demo cart, printing everything to stdout.
//!
//! ## Module Organization
//! ```text
//! storefront_preview/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── catalog.rs      ◄─── Sample products
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── cart.rs     ◄─── Cart manipulation commands
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod catalog;
pub mod commands;
pub mod error;

use std::io::Write;
use std::path::PathBuf;

use storefront_core::CartState;
use storefront_sections::{AnnouncementBar, Page, Render, SectionsConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::cart;
use error::ApiError;

/// Ticks the preview ticker runs before its live frame is rendered.
pub const PREVIEW_TICKS: u32 = 10;

/// Runs the preview.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Preview Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Section Config ──────────────────────────────────────────────► │
/// │     • Explicit path (first argument): errors are fatal                  │
/// │     • Otherwise platform config dir, falling back to defaults           │
/// │                                                                         │
/// │  3. Render Home Page ─────────────────────────────────────────────────► │
/// │                                                                         │
/// │  4. Run Ticker ───────────────────────────────────────────────────────► │
/// │     • Activate, wait PREVIEW_TICKS intervals, render, deactivate        │
/// │                                                                         │
/// │  5. Demo Cart ────────────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), ApiError> {
    init_tracing();

    info!("Starting storefront preview");

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => SectionsConfig::load(Some(path))?,
        None => SectionsConfig::load_or_default(None),
    };

    let home = render_home(&config);
    let ticker = preview_ticker(&config, PREVIEW_TICKS).await;
    let cart_json = serde_json::to_string_pretty(&demo_cart()?)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{home}")?;
    writeln!(stdout, "{ticker}")?;
    writeln!(stdout, "{cart_json}")?;

    info!("Preview finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_sections=trace` - Ticker internals only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so stdout carries only the rendered output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Renders the static home page: announcement bar, banner, gallery.
pub fn render_home(config: &SectionsConfig) -> String {
    let announcement = AnnouncementBar::from_settings(&config.ticker);

    Page::new()
        .section(&announcement)
        .section(&config.banner)
        .section(&config.gallery)
        .to_html()
}

/// Runs the announcement ticker for `ticks` intervals and renders the bar
/// at the offset it reached.
pub async fn preview_ticker(config: &SectionsConfig, ticks: u32) -> String {
    let bar = AnnouncementBar::from_settings(&config.ticker);
    let handle = bar.activate();

    // Wake halfway between ticks so exactly `ticks` have fired.
    let interval = bar.ticker().tick_interval();
    tokio::time::sleep(interval * ticks + interval / 2).await;

    let mut html = String::new();
    bar.render_live(&handle, &mut html);
    debug!(offset = handle.offset(), "Rendered live ticker frame");

    handle.deactivate().await;
    html
}

/// Walks a fresh cart through the cart commands and returns the final state.
pub fn demo_cart() -> Result<cart::CartResponse, ApiError> {
    let catalog = catalog::sample_catalog();
    let mut state = CartState::new();

    cart::add_to_cart(&mut state, &catalog, 1)?;
    cart::add_to_cart(&mut state, &catalog, 2)?;
    cart::increase_quantity(&mut state, 1)?;
    cart::add_to_cart(&mut state, &catalog, 3)?;
    cart::decrease_quantity(&mut state, 3)?;
    cart::set_cart_open(&mut state, true);
    let response = cart::get_cart(&state);

    info!(
        lines = response.summary.line_count,
        items = response.summary.item_count,
        total_cents = response.summary.total_cents,
        "Demo cart ready"
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_home_section_order() {
        let html = render_home(&SectionsConfig::default());

        assert!(html.starts_with("<main class=\"home\">"));
        let bar = html.find("announcement-bar").unwrap();
        let banner = html.find("promo-banner").unwrap();
        let gallery = html.find("instagram-gallery").unwrap();
        assert!(bar < banner && banner < gallery);
    }

    #[tokio::test(start_paused = true)]
    async fn test_preview_ticker_advances() {
        let config = SectionsConfig::default();
        let html = preview_ticker(&config, 3).await;

        // The bar is far wider than three steps, so no reset happens.
        let expected = 3 * config.ticker.step_px;
        assert!(html.contains(&format!("translateX(-{expected}px)")), "{html}");
    }

    #[test]
    fn test_demo_cart() {
        let response = demo_cart().unwrap();

        assert!(response.is_open);
        assert_eq!(response.summary.line_count, 2);
        assert_eq!(response.summary.item_count, 3);
        assert_eq!(response.summary.total_cents, 2400 * 2 + 1850);
    }
}
