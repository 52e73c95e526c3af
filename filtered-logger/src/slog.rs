//! A `slog` drain that writes redacted lines.
//!
//! [`RedactingDrain`] renders each record's message followed by its key/value
//! pairs as ` key=value;` segments, formats the result with a
//! [`RedactingFormatter`] and writes one line to the sink. Key/value pairs go
//! through the same filter as the message, so `"ssn" => ssn` is redacted like
//! `ssn=...;` in the message text.
//!
//! It does not configure `slog`; wrap the drain with `fuse()` or an async
//! drain as usual.

use std::{
    borrow::Cow,
    fmt::{self, Write as _},
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

use slog::{Drain, KV, Key, OwnedKVList, Record, Serializer};

use crate::format::{Level, LogEvent, RedactingFormatter};

impl From<slog::Level> for Level {
    fn from(level: slog::Level) -> Self {
        match level {
            slog::Level::Critical => Level::Critical,
            slog::Level::Error => Level::Error,
            slog::Level::Warning => Level::Warning,
            slog::Level::Info => Level::Info,
            slog::Level::Debug => Level::Debug,
            slog::Level::Trace => Level::Trace,
        }
    }
}

/// Drain formatting records through a [`RedactingFormatter`].
pub struct RedactingDrain<W> {
    formatter: RedactingFormatter,
    name: Option<Cow<'static, str>>,
    sink: Mutex<W>,
}

impl<W: Write> RedactingDrain<W> {
    /// The logger name defaults to the record's module path.
    pub fn new(formatter: RedactingFormatter, sink: W) -> Self {
        Self {
            formatter,
            name: None,
            sink: Mutex::new(sink),
        }
    }

    /// Uses a fixed logger name for every record.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn into_sink(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Appends each pair as ` key=value;`.
struct SegmentSerializer<'a> {
    out: &'a mut String,
}

impl Serializer for SegmentSerializer<'_> {
    fn emit_arguments(&mut self, key: Key, val: &fmt::Arguments<'_>) -> slog::Result {
        // Writing to a `String` cannot fail.
        let _ = write!(self.out, " {key}={val};");
        Ok(())
    }
}

impl<W: Write> Drain for RedactingDrain<W> {
    type Ok = ();
    type Err = io::Error;

    fn log(&self, record: &Record<'_>, values: &OwnedKVList) -> Result<Self::Ok, Self::Err> {
        let mut message = record.msg().to_string();
        {
            let mut serializer = SegmentSerializer { out: &mut message };
            record
                .kv()
                .serialize(record, &mut serializer)
                .map_err(|err| io::Error::other(err.to_string()))?;
            values
                .serialize(record, &mut serializer)
                .map_err(|err| io::Error::other(err.to_string()))?;
        }

        let name = self.name.as_deref().unwrap_or_else(|| record.module());
        let event = LogEvent::new(name, record.level().into(), message);
        let line = self.formatter.format(&event);

        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_all(line.as_bytes())?;
        sink.write_all(b"\n")?;
        sink.flush()
    }
}
