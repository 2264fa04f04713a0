//! # Storefront Preview Entry Point
//!
//! ```text
//! storefront-preview [CONFIG_PATH]
//! ```
//!
//! Renders the home page sections to stdout, runs the announcement ticker
//! for a short preview window and walks a demo cart through its operations.
//! The actual setup is in lib.rs for testability.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match storefront_preview::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("storefront-preview: {e}");
            ExitCode::FAILURE
        }
    }
}
