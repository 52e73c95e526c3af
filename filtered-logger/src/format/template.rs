//! Line templates: rendering a [`LogEvent`] into text.
//!
//! A template is literal text with `{placeholder}` slots. Supported
//! placeholders are `tag`, `name`, `level`, `asctime` and `message`. A slot may
//! carry a left-aligned minimum width (`{asctime:<15}`). `{{` and `}}` produce
//! literal braces.
//!
//! Templates are parsed once; rendering never fails.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};

use super::event::LogEvent;
use crate::error::{Error, Result};

/// Default line layout.
pub const DEFAULT_TEMPLATE: &str = "[{tag}] {name} {level} {asctime:<15}: {message}";

/// Default `strftime` layout for `{asctime}`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Default value for `{tag}`.
pub const DEFAULT_TAG: &str = "APP";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placeholder {
    Tag,
    Name,
    Level,
    Asctime,
    Message,
}

impl Placeholder {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "tag" => Some(Self::Tag),
            "name" => Some(Self::Name),
            "level" => Some(Self::Level),
            "asctime" => Some(Self::Asctime),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot { placeholder: Placeholder, width: usize },
}

/// A parsed line template together with the values it needs besides the event.
#[derive(Clone, Debug)]
pub struct LineTemplate {
    source: String,
    segments: Vec<Segment>,
    tag: String,
    timestamp_format: String,
}

impl LineTemplate {
    /// Parses `template` and validates `timestamp_format`.
    pub fn new(
        template: &str,
        tag: impl Into<String>,
        timestamp_format: impl Into<String>,
    ) -> Result<Self> {
        let timestamp_format = timestamp_format.into();
        if StrftimeItems::new(&timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::template(
                template,
                format!("invalid timestamp format `{timestamp_format}`"),
            ));
        }
        Ok(Self {
            source: template.to_string(),
            segments: parse_segments(template)?,
            tag: tag.into(),
            timestamp_format,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Renders `event` into a single line.
    pub fn render(&self, event: &LogEvent<'_>) -> String {
        let mut out = String::with_capacity(self.source.len() + event.message().len() + 32);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot { placeholder, width } => {
                    // Writing into a `String` only fails if a `Display` impl
                    // errors; the timestamp format was validated in `new`.
                    let _ = match placeholder {
                        Placeholder::Tag => write!(out, "{:<width$}", self.tag),
                        Placeholder::Name => write!(out, "{:<width$}", event.name()),
                        Placeholder::Level => write!(out, "{:<width$}", event.level()),
                        Placeholder::Asctime => {
                            let stamp = event.timestamp().format(&self.timestamp_format);
                            write!(out, "{:<width$}", stamp.to_string())
                        }
                        Placeholder::Message => write!(out, "{:<width$}", event.message()),
                    };
                }
            }
        }
        out
    }
}

impl Default for LineTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
            segments: vec![
                Segment::Literal("[".into()),
                Segment::Slot {
                    placeholder: Placeholder::Tag,
                    width: 0,
                },
                Segment::Literal("] ".into()),
                Segment::Slot {
                    placeholder: Placeholder::Name,
                    width: 0,
                },
                Segment::Literal(" ".into()),
                Segment::Slot {
                    placeholder: Placeholder::Level,
                    width: 0,
                },
                Segment::Literal(" ".into()),
                Segment::Slot {
                    placeholder: Placeholder::Asctime,
                    width: 15,
                },
                Segment::Literal(": ".into()),
                Segment::Slot {
                    placeholder: Placeholder::Message,
                    width: 0,
                },
            ],
            tag: DEFAULT_TAG.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

fn parse_segments(template: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '}' => return Err(Error::template(template, "unmatched `}`")),
            '{' => {
                let mut spec = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => spec.push(c),
                        None => return Err(Error::template(template, "unclosed `{`")),
                    }
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(parse_slot(template, &spec)?);
            }
            _ => literal.push(ch),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn parse_slot(template: &str, spec: &str) -> Result<Segment> {
    let (name, width) = match spec.split_once(':') {
        Some((name, align)) => {
            let digits = align.strip_prefix('<').ok_or_else(|| {
                Error::template(template, format!("unsupported format spec `{align}`"))
            })?;
            let width = digits.parse::<usize>().map_err(|_| {
                Error::template(template, format!("invalid width `{digits}`"))
            })?;
            (name, width)
        }
        None => (spec, 0),
    };
    let placeholder = Placeholder::parse(name)
        .ok_or_else(|| Error::template(template, format!("unknown placeholder `{name}`")))?;
    Ok(Segment::Slot { placeholder, width })
}
