//! Field redaction: field sets and the `field=value` transform.
//!
//! - **`fields`**: [`FieldSet`], the ordered set of sensitive names, and
//!   [`PII_FIELDS`].
//! - **`datum`**: [`DatumFilter`] and [`filter_datum`], which replace the
//!   value of every `field=value` occurrence with a redaction token.

pub mod datum;
pub mod fields;

pub use datum::{DatumFilter, REDACTION, SEPARATOR, filter_datum};
pub use fields::{FieldIter, FieldSet, PII_FIELDS};
