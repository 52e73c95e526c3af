//! Rendering log events into redacted text lines.
//!
//! - **`level`**: [`Level`], the event severity.
//! - **`event`**: [`LogEvent`], a structured event before rendering.
//! - **`template`**: [`LineTemplate`], the standalone template renderer.
//! - **`formatter`**: [`RedactingFormatter`], which renders an event with a
//!   template and passes the line through a [`DatumFilter`](crate::DatumFilter).

mod event;
mod formatter;
mod level;
mod template;

pub use event::LogEvent;
pub use formatter::{FormatterConfig, RedactingFormatter};
pub use level::{Level, ParseLevelError};
pub use template::{DEFAULT_TAG, DEFAULT_TEMPLATE, DEFAULT_TIMESTAMP_FORMAT, LineTemplate};
