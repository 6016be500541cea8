//! Tracing integration for fail-chain.
//!
//! Emits an error chain as a single structured `tracing` event, with the
//! message, original type, creation site and full details as fields.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! fail-chain = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use fail_chain::{news, tracing_ext::log_error};
//!
//! let err = news("upstream closed the connection");
//! log_error(&err);
//! ```

use tracing::Level;

use crate::query;
use crate::types::Error;

/// Emits `err` as an `ERROR` event.
#[inline]
pub fn log_error(err: &Error) {
    log_error_at(err, Level::ERROR);
}

/// Emits `err` as an event at `level`.
///
/// Fields: `error` (message), `error_type` (original type), `location`
/// (creation site, empty when unknown), `details` (full chain with stack
/// traces).
pub fn log_error_at(err: &Error, level: Level) {
    let error_type = query::get_type(err);
    let location = query::get_location(err);
    let details = query::get_full_details(err);

    macro_rules! emit {
        ($lvl:expr) => {
            tracing::event!(
                $lvl,
                error = %err,
                error_type = %error_type,
                location = %location,
                details = %details,
                "error chain"
            )
        };
    }

    if level == Level::TRACE {
        emit!(Level::TRACE);
    } else if level == Level::DEBUG {
        emit!(Level::DEBUG);
    } else if level == Level::INFO {
        emit!(Level::INFO);
    } else if level == Level::WARN {
        emit!(Level::WARN);
    } else {
        emit!(Level::ERROR);
    }
}
