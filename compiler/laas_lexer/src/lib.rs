//! Lexer as a service: a token stream with lookahead and expectation
//! helpers for hand-written parsers of config, scene, and material files.
//!
//! Built on the zero-allocation scanner in `laas_lexer_core`. Tokens are
//! views into the caller's text; the lexer never copies it.
//!
//! ```
//! use laas_lexer::{make_lexer, TokenKind};
//!
//! let mut lexer = make_lexer("size: 1.5, \"big\"");
//! assert_eq!(lexer.expect_identifier()?, "size");
//! lexer.expect_symbol(":")?;
//! assert_eq!(lexer.expect_number()?, 1.5);
//! assert!(lexer.is_next_kind(TokenKind::Symbol)?);
//! assert!(lexer.eat()?);
//! assert_eq!(lexer.expect_string()?, "big");
//! assert!(lexer.is_at_end());
//! # Ok::<(), laas_lexer::LexError>(())
//! ```
//!
//! # Logging
//!
//! Every consumed token emits a `trace` event and every failure a `debug`
//! event through `tracing`. Call [`init_tracing()`] and set `RUST_LOG`
//! (e.g. `RUST_LOG=laas_lexer=trace`) to see them.

mod expect;
mod lex_error;
mod lexer;
mod tokens;

use std::sync::Once;

pub use laas_lexer_core::{
    Position, ScanConfig, ScanError, ScanErrorKind, Span, Token, TokenKind, DEFAULT_TAB_WIDTH,
};
pub use lex_error::{ExpectationFailure, Expected, LexError};
pub use lexer::Lexer;
pub use tokens::{tokenize, Tokens};

/// Build a lexer over `source` with the cursor at the origin and empty
/// user data.
pub fn make_lexer(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Only installs a subscriber when `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A subscriber installed by the host application wins.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
