//! Ordered sets of sensitive field names.

use std::{fmt, slice};

/// Field names treated as personally identifiable information.
///
/// These are the sensitive columns of the `users` table.
pub const PII_FIELDS: [&str; 5] = ["name", "email", "phone", "ssn", "password"];

/// An ordered sequence of distinct, case-sensitive field names.
///
/// Order is preserved because the names are matched as a leftmost-first
/// alternation. Duplicates are dropped keeping the first occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<String>", into = "Vec<String>"))]
pub struct FieldSet {
    names: Vec<String>,
}

impl FieldSet {
    /// Builds a field set from any sequence of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            set.insert(name);
        }
        set
    }

    /// The default PII field set.
    #[must_use]
    pub fn pii() -> Self {
        Self::new(PII_FIELDS)
    }

    /// Appends `name` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> FieldIter<'_> {
        FieldIter {
            inner: self.names.iter(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

/// Iterator over the names in a [`FieldSet`].
#[derive(Clone, Debug)]
pub struct FieldIter<'a> {
    inner: slice::Iter<'a, String>,
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for FieldIter<'_> {}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a str;
    type IntoIter = FieldIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for FieldSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<String>> for FieldSet {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<FieldSet> for Vec<String> {
    fn from(set: FieldSet) -> Self {
        set.names
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(", "))
    }
}
