//! A `tracing-subscriber` event format that writes redacted lines.
//!
//! [`RedactingFormat`] plugs into `tracing_subscriber::fmt()` through
//! `event_format`. The event's `message` field becomes the message; every
//! other field is appended as a ` key=value;` segment so it goes through the
//! same filter. The event target is used as the logger name.
//!
//! ```rust,ignore
//! use filtered_logger::{RedactingFormatter, tracing::RedactingFormat};
//!
//! tracing_subscriber::fmt()
//!     .event_format(RedactingFormat::new(RedactingFormatter::pii()?))
//!     .init();
//!
//! tracing::info!(ssn = %row.ssn, "name={};", row.name);
//! ```

use std::fmt::{self, Write as _};

use tracing::{
    Event, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{
    fmt::{FmtContext, FormatEvent, FormatFields, format::Writer},
    registry::LookupSpan,
};

use crate::format::{LogEvent, RedactingFormatter};

/// Event format that renders events through a [`RedactingFormatter`].
#[derive(Clone, Debug)]
pub struct RedactingFormat {
    formatter: RedactingFormatter,
}

impl RedactingFormat {
    pub fn new(formatter: RedactingFormatter) -> Self {
        Self { formatter }
    }

    pub fn formatter(&self) -> &RedactingFormatter {
        &self.formatter
    }
}

/// Collects the `message` field and the remaining fields as segments.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    segments: String,
}

impl MessageVisitor {
    fn finish(mut self) -> String {
        self.message.push_str(&self.segments);
        self.message
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.segments, " {}={value};", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.segments, " {}={value:?};", field.name());
        }
    }
}

impl<S, N> FormatEvent<S, N> for RedactingFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let event = LogEvent::new(metadata.target(), (*metadata.level()).into(), visitor.finish());
        writeln!(writer, "{}", self.formatter.format(&event))
    }
}
