//! Tally CLI library.
//!
//! Every command takes source text and returns the text to print, so the
//! binary only deals with arguments, I/O and exit codes.

pub mod commands;
mod error;
mod options;
mod table_view;

pub use error::CliError;
pub use options::{is_table_shorthand, parse_options, Options};
pub use table_view::render_table;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the stderr subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
