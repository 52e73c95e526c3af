//! Rows that render themselves as `key=value;` log messages.

use std::fmt;

use chrono::NaiveDateTime;
use filtered_logger_derive::LogRow;

use crate::{
    filter::{self, FieldSet},
    format::FormatterConfig,
};

/// A row that can be rendered as a log message.
///
/// Usually derived with `#[derive(LogRow)]`. The message is one `column=value;`
/// segment per column, joined with a single space:
///
/// ```text
/// name=Bob; email=bob@dylan.com; ip=192.168.1.1;
/// ```
pub trait LogRow {
    /// Column names in message order.
    const COLUMNS: &'static [&'static str];

    /// Columns whose values must be redacted.
    const SENSITIVE_COLUMNS: &'static [&'static str];

    /// Terminator written after each value.
    const SEPARATOR: &'static str = filter::SEPARATOR;

    /// Writes the message for this row.
    fn fmt_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Returns a `Display` wrapper rendering the message.
    fn message(&self) -> RowMessage<'_, Self> {
        RowMessage(self)
    }

    fn log_message(&self) -> String {
        self.message().to_string()
    }

    /// [`Self::SENSITIVE_COLUMNS`] as a field set.
    fn sensitive_fields() -> FieldSet
    where
        Self: Sized,
    {
        FieldSet::new(Self::SENSITIVE_COLUMNS.iter().copied())
    }

    /// Formatter settings that redact this row's messages.
    ///
    /// Values end at [`Self::SEPARATOR`], so a formatter built from this
    /// config keeps the columns that follow a redacted value.
    fn formatter_config() -> FormatterConfig
    where
        Self: Sized,
    {
        FormatterConfig::new(Self::sensitive_fields()).with_separator(Self::SEPARATOR)
    }
}

/// `Display` wrapper returned by [`LogRow::message`].
pub struct RowMessage<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Clone for RowMessage<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for RowMessage<'_, T> {}

impl<T: LogRow + ?Sized> fmt::Display for RowMessage<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_message(f)
    }
}

/// A row of the `users` table.
#[derive(Clone, PartialEq, Eq, LogRow)]
#[log_row(debug)]
pub struct UserRow {
    #[log_row(sensitive)]
    pub name: String,
    #[log_row(sensitive)]
    pub email: String,
    #[log_row(sensitive)]
    pub phone: String,
    #[log_row(sensitive)]
    pub ssn: String,
    #[log_row(sensitive)]
    pub password: String,
    pub ip: String,
    pub last_login: NaiveDateTime,
    pub user_agent: String,
}
