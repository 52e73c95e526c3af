//! The `field=value` redaction transform.
//!
//! A message is scanned once for `<field>=<value>` occurrences of any
//! configured field name, where `<value>` runs up to the next separator
//! character or the end of the message. Each value is replaced by the
//! redaction token; the `<field>=` prefix and everything around it are kept.

use std::{borrow::Cow, fmt::Write as _};

use regex::{Captures, Regex};

use super::fields::FieldSet;
use crate::error::Result;

/// Token substituted for every sensitive value.
pub const REDACTION: &str = "***";

/// Separator between `key=value` segments.
pub const SEPARATOR: &str = ";";

/// A compiled redaction transform.
///
/// Build it once and apply it to many messages. Field names are escaped, so
/// they match literally even when they contain regex metacharacters.
///
/// ```rust
/// use filtered_logger::{DatumFilter, FieldSet};
///
/// let filter = DatumFilter::new(&FieldSet::new(["password"]), "***", ";").unwrap();
/// assert_eq!(filter.apply("user=bob;password=hunter2;"), "user=bob;password=***;");
/// ```
#[derive(Clone, Debug)]
pub struct DatumFilter {
    // `None` when the field set is empty: an empty alternation would match
    // every `=` in the message.
    pattern: Option<Regex>,
    redaction: String,
}

impl DatumFilter {
    /// Compiles a filter for `fields`.
    ///
    /// Every character of `separator` terminates a value. An empty separator
    /// lets values run to the end of the message.
    pub fn new(fields: &FieldSet, redaction: impl Into<String>, separator: &str) -> Result<Self> {
        let redaction = redaction.into();
        if fields.is_empty() {
            return Ok(Self {
                pattern: None,
                redaction,
            });
        }

        let source = build_pattern(fields, separator);
        tracing::debug!(fields = fields.len(), pattern = %source, "compiling field filter");
        let pattern = Regex::new(&source)?;
        Ok(Self {
            pattern: Some(pattern),
            redaction,
        })
    }

    /// Filter over [`FieldSet::pii`] with [`REDACTION`] and [`SEPARATOR`].
    pub fn pii() -> Result<Self> {
        Self::new(&FieldSet::pii(), REDACTION, SEPARATOR)
    }

    pub fn redaction(&self) -> &str {
        &self.redaction
    }

    /// Redacts every configured value in `message`.
    ///
    /// Borrows the input when nothing matched.
    pub fn apply<'a>(&self, message: &'a str) -> Cow<'a, str> {
        let Some(pattern) = &self.pattern else {
            return Cow::Borrowed(message);
        };
        // A closure replacer inserts the token literally (no `$name` expansion).
        pattern.replace_all(message, |caps: &Captures<'_>| {
            let mut out = String::with_capacity(caps[1].len() + 1 + self.redaction.len());
            out.push_str(&caps[1]);
            out.push('=');
            out.push_str(&self.redaction);
            out
        })
    }
}

/// Redacts the values of `fields` in `message`.
///
/// One-shot form of [`DatumFilter`]: compiles the pattern and applies it.
///
/// ```rust
/// use filtered_logger::filter_datum;
///
/// let line = filter_datum(&["name", "email"], "***", "name=John;email=a@b.com;", ";").unwrap();
/// assert_eq!(line, "name=***;email=***;");
/// ```
pub fn filter_datum<S>(
    fields: &[S],
    redaction: &str,
    message: &str,
    separator: &str,
) -> Result<String>
where
    S: AsRef<str>,
{
    let fields = fields.iter().map(AsRef::as_ref).collect::<FieldSet>();
    let filter = DatumFilter::new(&fields, redaction, separator)?;
    Ok(filter.apply(message).into_owned())
}

/// `(<f1>|<f2>|...)=(<value>)`, where `<value>` is a run of non-separator
/// characters.
fn build_pattern(fields: &FieldSet, separator: &str) -> String {
    let mut pattern = String::from("(");
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            pattern.push('|');
        }
        pattern.push_str(&regex::escape(field));
    }
    pattern.push_str(")=(");

    if separator.is_empty() {
        pattern.push_str("(?s:.)*");
    } else {
        pattern.push_str("[^");
        for ch in separator.chars() {
            // Escape each char so `]`, `^`, `\` and `-` stay literal in the class.
            let _ = write!(pattern, "\\x{{{:x}}}", u32::from(ch));
        }
        pattern.push_str("]*");
    }
    pattern.push(')');
    pattern
}
