//! Best-effort redaction of sensitive `key=value` fields in log lines.
//!
//! This crate separates:
//! - **Filtering**: replacing the value of every `field=value` occurrence of a
//!   configured field with a redaction token (`filter`).
//! - **Formatting**: rendering a log event into one line and passing the whole
//!   line through the filter (`format`).
//!
//! Around those two pieces it provides an explicitly owned logger
//! (`RedactingLogger`), a row-logging driver over an external data source
//! (`source`), and sink integrations behind feature flags (`slog`,
//! `subscriber`).
//!
//! What it does not do:
//! - guarantee against leakage: values containing the separator, nested
//!   delimiters and multi-line messages are redacted on a best-effort basis
//! - ship a database client
//!
//! The `LogRow` derive macro lives in `filtered-logger-derive` and is
//! re-exported from this crate.
//!
//! ```rust
//! use filtered_logger::{PII_FIELDS, REDACTION, SEPARATOR, filter_datum};
//!
//! let message = "name=egg;email=eggmin@eggsample.com;password=eggcellent;date_of_birth=12/12/1986;";
//! let redacted = filter_datum(&PII_FIELDS, REDACTION, message, SEPARATOR).unwrap();
//! assert_eq!(
//!     redacted,
//!     "name=***;email=***;password=***;date_of_birth=12/12/1986;"
//! );
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use filtered_logger_derive::LogRow;

#[allow(unused_extern_crates)]
extern crate self as filtered_logger;

// Module declarations
mod error;
pub mod filter;
pub mod format;
mod logger;
#[cfg(feature = "slog")]
pub mod slog;
pub mod source;
#[cfg(feature = "subscriber")]
pub mod tracing;

pub use error::{Error, Result};
// Re-exports from filter module
pub use filter::{DatumFilter, FieldSet, PII_FIELDS, REDACTION, SEPARATOR, filter_datum};
// Re-exports from format module
pub use format::{FormatterConfig, Level, LineTemplate, LogEvent, RedactingFormatter};
pub use logger::{RedactingLogger, USER_DATA_LOGGER, user_data_logger};
// Re-exports from source module
pub use source::{
    Connect, DbConfig, LogRow, RowSource, USERS_QUERY, UserRow, log_rows, log_users, run,
};
#[cfg(feature = "slog")]
pub use self::slog::RedactingDrain;
#[cfg(feature = "subscriber")]
pub use self::tracing::RedactingFormat;
