use std::borrow::Cow;

use chrono::{DateTime, Utc};

use super::level::Level;

/// A structured log event before rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEvent<'a> {
    name: Cow<'a, str>,
    level: Level,
    timestamp: DateTime<Utc>,
    message: Cow<'a, str>,
}

impl<'a> LogEvent<'a> {
    /// Creates an event stamped with the current time.
    pub fn new(
        name: impl Into<Cow<'a, str>>,
        level: Level,
        message: impl Into<Cow<'a, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            timestamp: Utc::now(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Name of the logger that produced the event.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
