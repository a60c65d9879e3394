//! Field paths
//!
//! A [`FieldPath`] addresses a field inside a (possibly nested) record.
//! It renders as a dotted/bracketed string:
//!
//! | step               | rendering        |
//! |--------------------|------------------|
//! | field `Name`       | `Name`           |
//! | nested field       | `Address.City`   |
//! | sequence element   | `Items[1]`       |
//! | map entry          | `Contacts[home]` |
//!
//! Paths are immutable: every descent step returns a new path.
//!
//! Besides the concrete rendering, a path has a *pattern* rendering in which
//! every index and key collapses to `[]` (`Items[].Qty`). Rules registered
//! under a pattern apply to every element.

use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

/// Field name reserved for errors about the root input itself.
pub const INPUT_FIELD: &str = "input";

/// One descent step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Named field of a record.
    Field(String),
    /// Element index of a sequence.
    Index(usize),
    /// Entry key of a mapping.
    Key(String),
}

/// Ordered sequence of [`Segment`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: SmallVec<[Segment; 4]>,
}

impl FieldPath {
    /// The empty path of the root record.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// The reserved path used for root-level configuration errors.
    #[must_use]
    pub fn input() -> Self {
        Self::root().field(INPUT_FIELD)
    }

    /// Extends the path with a named field.
    #[must_use]
    pub fn field(&self, name: impl Into<String>) -> Self {
        self.child(Segment::Field(name.into()))
    }

    /// Extends the path with a sequence index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.child(Segment::Index(index))
    }

    /// Extends the path with a map key.
    #[must_use]
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(Segment::Key(key.into()))
    }

    /// Extends the path with an arbitrary segment.
    #[must_use]
    pub fn child(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Renders the path with every index and key replaced by `[]`.
    #[must_use]
    pub fn pattern(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Field(name) => push_field(&mut out, name),
                Segment::Index(_) | Segment::Key(_) => out.push_str("[]"),
            }
        }
        out
    }

    /// Returns `true` when the path contains an index or key segment.
    #[must_use]
    pub fn has_wildcards(&self) -> bool {
        self.segments
            .iter()
            .any(|s| !matches!(s, Segment::Field(_)))
    }
}

fn push_field(out: &mut String, name: &str) {
    if !out.is_empty() {
        out.push('.');
    }
    out.push_str(name);
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => f.write_str(name)?,
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
                Segment::Key(key) => write!(f, "[{key}]")?,
            }
        }
        Ok(())
    }
}

impl PartialEq<str> for FieldPath {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
