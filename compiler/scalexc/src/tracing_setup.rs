//! Tracing subscriber setup for the `scalex` binary.
//!
//! Library crates only emit events. The subscriber is installed here, once,
//! and only when `RUST_LOG` is set, so normal runs pay nothing.
//!
//! ```bash
//! RUST_LOG=scalex_lexer=debug scalex lex main.scx
//! RUST_LOG=debug scalex check src/*.scx
//! ```

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber if `RUST_LOG` is set.
///
/// Output goes to stderr so it never mixes with token listings or JSON on
/// stdout. Safe to call more than once.
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
