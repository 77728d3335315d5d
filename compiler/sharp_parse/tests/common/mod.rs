//! Shared setup for the integration tests.

use std::sync::Once;

use sharp_parse::{ParseErrorKind, ParseOutput};

static TRACING_INIT: Once = Once::new();

/// Install a subscriber once per test binary.
///
/// Silent unless `RUST_LOG` is set, e.g. `RUST_LOG=sharp_parse=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(EnvFilter::from_default_env())
                .try_init();
        }
    });
}

/// Diagnostic kinds in the order they were raised.
pub fn kinds(output: &ParseOutput) -> Vec<ParseErrorKind> {
    output.diagnostics.iter().map(|d| d.kind.clone()).collect()
}
