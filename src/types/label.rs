//! Length-checked vertex labels.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

use super::error::{GraphError, GraphResult};

/// A vertex label. Ordered byte-wise, so sorting matches `strcmp`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Create a label, rejecting empty text and text longer than `max_len` bytes.
    pub fn new(text: impl Into<String>, max_len: usize) -> GraphResult<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(GraphError::EmptyLabel);
        }
        if text.len() > max_len {
            return Err(GraphError::LabelTooLong {
                label: text,
                max: max_len,
            });
        }
        Ok(Self(text))
    }

    /// The label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; labels are never empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
