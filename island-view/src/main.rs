//! Application entry point for the Minkowski island viewer.
//!
//! This binary sets up logging and eframe/egui, and delegates all
//! interactive logic and drawing to [`Viewer`] from the `viewer` module.

mod logging;
mod viewer;

use island_core::config::Config;
use logging::{LoggingConfig, init_logging};
use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop, or
///   the default configuration is rejected.
fn main() -> eframe::Result<()> {
    init_logging(LoggingConfig::default());

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Minkowski Island",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new(Config::default())?))),
    )
}
