//! Field catalog.
//!
//! Each `Field` carries its regular expression, its normalization rule, the
//! kind of node it is usually found in, and whether it occurs once or many
//! times per page.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use super::result::FieldMatch;
use crate::config::{META_DESCRIPTION_SELECTOR, SCRIPT_SELECTOR};

const PICTURE_PATTERN: &str = r#""profile_pic_url":"(.*?)""#;
const PAGE_PATTERN: &str = r#""page_id":"(.*?)""#;
const PROFILE_PATTERN: &str = r#""profile_id":"(.*?)""#;
const NAME_PATTERN: &str = r#""title":"(.*?)""#;
const FOLLOWERS_PATTERN: &str = r"(\d+) Followers";
const FOLLOWING_PATTERN: &str = r"(\d+) Following";
const POSTS_PATTERN: &str = r"(\d+) Posts";

/// Helper function to compile a static regex pattern, panicking with a detailed
/// error message if compilation fails. Only used for the constants above.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static PICTURE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PICTURE_PATTERN, "PICTURE_REGEX"));
static PAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PAGE_PATTERN, "PAGE_REGEX"));
static PROFILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PROFILE_PATTERN, "PROFILE_REGEX"));
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(NAME_PATTERN, "NAME_REGEX"));
static FOLLOWERS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(FOLLOWERS_PATTERN, "FOLLOWERS_REGEX"));
static FOLLOWING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(FOLLOWING_PATTERN, "FOLLOWING_REGEX"));
static POSTS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(POSTS_PATTERN, "POSTS_REGEX"));

/// A profile field that can be extracted from a profile page.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Field {
    /// Profile picture URL
    Picture,
    /// Page id (may occur several times per page)
    Page,
    /// Numeric profile id
    Profile,
    /// Display name
    Name,
    /// Follower count
    Followers,
    /// Following count
    Following,
    /// Post count
    Posts,
}

/// Fields scanned together by an aggregate (`Target::Infos`) lookup, in output order.
pub const INFO_FIELDS: [Field; 3] = [Field::Followers, Field::Following, Field::Posts];

/// Where a field's text usually lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeSource {
    /// Inline `<script>` text in the page body
    Script,
    /// `content` attribute of the meta description
    Meta,
}

impl NodeSource {
    pub fn selector(self) -> &'static str {
        match self {
            NodeSource::Script => SCRIPT_SELECTOR,
            NodeSource::Meta => META_DESCRIPTION_SELECTOR,
        }
    }
}

/// Whether a field is looked up once or collected from every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
    Single,
    All,
}

/// Static definition of a field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    pub pattern: &'static Regex,
    pub node_source: NodeSource,
    pub multiplicity: Multiplicity,
}

impl Field {
    /// Stable key used in serialized results (`"picture"`, `"followers"`, ...).
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Compiled pattern; group 1 holds the raw value.
    pub fn pattern(self) -> &'static Regex {
        match self {
            Field::Picture => &PICTURE_REGEX,
            Field::Page => &PAGE_REGEX,
            Field::Profile => &PROFILE_REGEX,
            Field::Name => &NAME_REGEX,
            Field::Followers => &FOLLOWERS_REGEX,
            Field::Following => &FOLLOWING_REGEX,
            Field::Posts => &POSTS_REGEX,
        }
    }

    pub fn node_source(self) -> NodeSource {
        match self {
            Field::Picture | Field::Page | Field::Profile | Field::Name => NodeSource::Script,
            Field::Followers | Field::Following | Field::Posts => NodeSource::Meta,
        }
    }

    pub fn multiplicity(self) -> Multiplicity {
        match self {
            Field::Page => Multiplicity::All,
            _ => Multiplicity::Single,
        }
    }

    pub fn spec(self) -> FieldSpec {
        FieldSpec {
            field: self,
            pattern: self.pattern(),
            node_source: self.node_source(),
            multiplicity: self.multiplicity(),
        }
    }

    /// True for the follower/following/post counters.
    pub fn is_count(self) -> bool {
        matches!(self, Field::Followers | Field::Following | Field::Posts)
    }

    /// Field-specific post-processing of a raw captured value.
    ///
    /// - `Picture`: `\/` is unescaped to `/`
    /// - `Name`: truncated at the first `" ("` (drops suffixes like `(Photographer)`)
    /// - everything else is returned unchanged
    pub fn normalize(self, raw: &str) -> String {
        match self {
            Field::Picture => raw.replace("\\/", "/"),
            Field::Name => raw.split(" (").next().unwrap_or(raw).to_string(),
            _ => raw.to_string(),
        }
    }

    /// Applies the field's pattern to `text`.
    ///
    /// Only the first occurrence counts, and its group 1 must be non-empty.
    /// Counters are matched against a copy of `text` without digit-group
    /// commas, so `1,234 Followers` yields the value `1234`; the raw captures
    /// still quote `text` as written (`1,234 Followers`, `1,234`).
    pub fn capture(self, text: &str) -> Option<FieldMatch> {
        if !self.is_count() {
            let caps = self.first_occurrence(text)?;
            let raw = caps.get(1)?.as_str();
            let captures = caps
                .iter()
                .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect();
            return Some(FieldMatch::new(self, self.normalize(raw), captures));
        }

        let (haystack, offsets) = strip_digit_separators(text);
        let caps = self.first_occurrence(&haystack)?;
        let raw = caps.get(1)?.as_str();
        let captures = caps
            .iter()
            .map(|m| {
                m.map(|m| original_span(text, &offsets, m.start(), m.end()).to_string())
                    .unwrap_or_default()
            })
            .collect();
        Some(FieldMatch::new(self, self.normalize(raw), captures))
    }

    fn first_occurrence<'h>(self, haystack: &'h str) -> Option<Captures<'h>> {
        let caps = self.pattern().captures(haystack)?;
        caps.get(1).filter(|m| !m.as_str().is_empty())?;
        Some(caps)
    }
}

/// Removes commas that sit between two digits (`1,234,567` -> `1234567`).
///
/// Also returns, for every byte of the stripped text plus its end, the
/// matching byte offset in `text`.
fn strip_digit_separators(text: &str) -> (String, Vec<usize>) {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut offsets = Vec::with_capacity(text.len() + 1);
    for (i, c) in text.char_indices() {
        let between_digits = c == ','
            && i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !between_digits {
            out.push(c);
            offsets.extend(i..i + c.len_utf8());
        }
    }
    offsets.push(text.len());
    (out, offsets)
}

/// Slice of `text` covered by the stripped span `start..end`.
fn original_span<'t>(text: &'t str, offsets: &[usize], start: usize, end: usize) -> &'t str {
    let Some(&from) = offsets.get(start) else {
        return "";
    };
    let to = if end > start {
        offsets.get(end - 1).map_or(from, |last| last + 1)
    } else {
        from
    };
    text.get(from..to).unwrap_or_default()
}

/// What a lookup is after: one field, or the followers/following/posts aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Field(Field),
    Infos,
}

impl Target {
    /// Selector used when the caller does not supply one.
    pub fn default_selector(self) -> &'static str {
        match self {
            Target::Field(field) => field.node_source().selector(),
            Target::Infos => META_DESCRIPTION_SELECTOR,
        }
    }

    /// Fields this target scans for, in output order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Target::Field(Field::Picture) => &[Field::Picture],
            Target::Field(Field::Page) => &[Field::Page],
            Target::Field(Field::Profile) => &[Field::Profile],
            Target::Field(Field::Name) => &[Field::Name],
            Target::Field(Field::Followers) => &[Field::Followers],
            Target::Field(Field::Following) => &[Field::Following],
            Target::Field(Field::Posts) => &[Field::Posts],
            Target::Infos => &INFO_FIELDS,
        }
    }
}

impl From<Field> for Target {
    fn from(field: Field) -> Self {
        Target::Field(field)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Field(field) => f.write_str(field.key()),
            Target::Infos => f.write_str("infos"),
        }
    }
}

impl FromStr for Target {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("infos") {
            Ok(Target::Infos)
        } else {
            Field::from_str(s.trim()).map(Target::Field)
        }
    }
}
