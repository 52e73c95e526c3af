//! The redacting formatter and its configuration.

use std::borrow::Cow;

use super::{
    event::LogEvent,
    template::{DEFAULT_TAG, DEFAULT_TEMPLATE, DEFAULT_TIMESTAMP_FORMAT, LineTemplate},
};
use crate::{
    error::Result,
    filter::{DatumFilter, FieldSet, REDACTION, SEPARATOR},
};

/// Settings for a [`RedactingFormatter`].
///
/// Every setting has a default, so a partial configuration (for example one
/// deserialized with only `fields` present) is complete.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FormatterConfig {
    /// Sensitive field names. Defaults to [`PII_FIELDS`](crate::PII_FIELDS).
    pub fields: FieldSet,
    /// Replacement for sensitive values. Defaults to [`REDACTION`].
    pub redaction: String,
    /// Characters terminating a value. Defaults to [`SEPARATOR`].
    pub separator: String,
    /// Value of the `{tag}` placeholder.
    pub tag: String,
    /// Line layout. See [`LineTemplate`].
    pub template: String,
    /// `strftime` layout of the `{asctime}` placeholder.
    pub timestamp_format: String,
}

impl FormatterConfig {
    /// Default configuration over `fields`.
    pub fn new(fields: FieldSet) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_redaction(mut self, redaction: impl Into<String>) -> Self {
        self.redaction = redaction.into();
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, timestamp_format: impl Into<String>) -> Self {
        self.timestamp_format = timestamp_format.into();
        self
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            fields: FieldSet::pii(),
            redaction: REDACTION.to_string(),
            separator: SEPARATOR.to_string(),
            tag: DEFAULT_TAG.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Renders log events into text lines and redacts sensitive values.
///
/// The whole rendered line goes through the filter, not just the message.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use filtered_logger::{Level, LogEvent, RedactingFormatter};
///
/// let formatter = RedactingFormatter::new(["name", "email"]).unwrap();
/// let event = LogEvent::new("user_data", Level::Info, "name=John;email=j@x.com;")
///     .with_timestamp(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
///
/// assert_eq!(
///     formatter.format(&event),
///     "[APP] user_data INFO 2024-01-01T00:00:00: name=***;email=***;"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct RedactingFormatter {
    fields: FieldSet,
    template: LineTemplate,
    filter: DatumFilter,
}

impl RedactingFormatter {
    /// Formatter over `fields` with the default template, token and separator.
    pub fn new<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_config(&FormatterConfig::new(FieldSet::new(fields)))
    }

    /// Formatter over [`PII_FIELDS`](crate::PII_FIELDS).
    pub fn pii() -> Result<Self> {
        Self::from_config(&FormatterConfig::default())
    }

    pub fn from_config(config: &FormatterConfig) -> Result<Self> {
        let template = LineTemplate::new(
            &config.template,
            config.tag.clone(),
            config.timestamp_format.clone(),
        )?;
        let filter = DatumFilter::new(&config.fields, config.redaction.clone(), &config.separator)?;
        Ok(Self {
            fields: config.fields.clone(),
            template,
            filter,
        })
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn template(&self) -> &LineTemplate {
        &self.template
    }

    /// Renders `event` and redacts the result.
    pub fn format(&self, event: &LogEvent<'_>) -> String {
        let line = self.template.render(event);
        // A borrowed result is `line` itself.
        if let Cow::Owned(redacted) = self.filter.apply(&line) {
            return redacted;
        }
        line
    }

    /// Redacts a message that is already rendered.
    pub fn redact<'a>(&self, message: &'a str) -> Cow<'a, str> {
        self.filter.apply(message)
    }
}
