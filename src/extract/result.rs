//! Extraction results.

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use super::field::Field;
use crate::error_handling::{categorize_fetch_error, FetchError};

/// One matched field: normalized value plus the raw capture groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    field: Field,
    value: String,
    captures: Vec<String>,
}

impl FieldMatch {
    pub(crate) fn new(field: Field, value: String, captures: Vec<String>) -> Self {
        Self {
            field,
            value,
            captures,
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// Normalized value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Raw capture groups: index 0 is the whole match, index 1 the unnormalized value.
    pub fn captures(&self) -> &[String] {
        &self.captures
    }

    /// The value as a number, for counter fields.
    pub fn as_count(&self) -> Option<u64> {
        self.value.parse().ok()
    }
}

impl Serialize for FieldMatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldMatch", 2)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("matches", &self.captures)?;
        state.end()
    }
}

/// Outcome of one lookup: field name to match, in insertion order.
///
/// An empty result means nothing was found, for whatever reason. Use
/// `Extractor::lookup` to learn why.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    matches: Vec<FieldMatch>,
}

impl ExtractionResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldMatch> {
        self.matches.iter().find(|m| m.field == field)
    }

    /// Shortcut for `get(field).map(FieldMatch::value)`.
    pub fn value(&self, field: Field) -> Option<&str> {
        self.get(field).map(FieldMatch::value)
    }

    /// Shortcut for `get(field).and_then(FieldMatch::as_count)`.
    pub fn count(&self, field: Field) -> Option<u64> {
        self.get(field).and_then(FieldMatch::as_count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldMatch> {
        self.matches.iter()
    }

    pub(crate) fn push(&mut self, field_match: FieldMatch) {
        self.matches.push(field_match);
    }
}

impl FromIterator<FieldMatch> for ExtractionResult {
    fn from_iter<I: IntoIterator<Item = FieldMatch>>(iter: I) -> Self {
        let mut result = ExtractionResult::empty();
        for field_match in iter {
            result.push(field_match);
        }
        result
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.matches.len()))?;
        for field_match in &self.matches {
            map.serialize_entry(field_match.field.key(), field_match)?;
        }
        map.end()
    }
}

/// Typed outcome of a lookup.
///
/// `Extractor::extract_single` and the `find_*` methods collapse every
/// non-`Found` variant into an empty `ExtractionResult`; this type keeps the
/// distinction.
#[derive(Debug)]
pub enum Lookup<T = ExtractionResult> {
    /// At least one candidate was scanned and produced the value
    Found(T),
    /// The username was empty; nothing was fetched
    EmptyInput,
    /// The page was fetched but nothing matched
    NoMatch,
    /// The page could not be fetched or queried
    FetchFailed(FetchError),
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn found(&self) -> Option<&T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }

    /// Short reason for a non-`Found` outcome, suitable for logs.
    pub fn reason(&self) -> Option<String> {
        match self {
            Lookup::Found(_) => None,
            Lookup::EmptyInput => Some("empty username".to_string()),
            Lookup::NoMatch => Some("no match".to_string()),
            Lookup::FetchFailed(e) => Some(format!("{}: {}", categorize_fetch_error(e), e)),
        }
    }
}

impl<T: Default> Lookup<T> {
    /// Collapses the outcome, mapping every failure to `T::default()`.
    pub fn into_value(self) -> T {
        match self {
            Lookup::Found(value) => value,
            _ => T::default(),
        }
    }
}

impl From<Lookup<ExtractionResult>> for ExtractionResult {
    fn from(lookup: Lookup<ExtractionResult>) -> Self {
        lookup.into_value()
    }
}
