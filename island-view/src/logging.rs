//! `env_logger` setup for the viewer.

use std::sync::Once;

/// Where the viewer's log filter comes from and how output is colored.
///
/// ### Fields
/// - `env_filter` - Explicit filter such as `"island_core=debug,eframe=warn"`.
///   Takes precedence over `RUST_LOG`; with neither set the viewer logs at
///   `info`.
/// - `write_style` - ANSI coloring policy passed to `env_logger`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger on the first call.
///
/// Island regeneration is logged at `debug`, animation start/stop and
/// resets at `info`, and rejected depth changes at `warn`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        match filter {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }
        builder.write_style(config.write_style);

        // A test harness may have installed its own logger already.
        if builder.try_init().is_ok() {
            log::debug!("viewer logging ready");
        }
    });
}
