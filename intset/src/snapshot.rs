//! JSON snapshots of integer sets
//!
//! A snapshot records the rendered text of a set together with its member
//! list and size, so tooling can diff sets across runs without depending
//! on word layout. Snapshots are checked for internal consistency when
//! they are read back.

use std::fmt;

use intset_core::{IntSet, IntSetError};
use serde::{Deserialize, Serialize};

/// Errors that can occur while reading or writing a snapshot
#[derive(Debug)]
pub enum SnapshotError {
    /// JSON encoding or decoding failed
    Json(serde_json::Error),
    /// The recorded text is not a valid set
    Set(IntSetError),
    /// The recorded fields disagree with each other
    Inconsistent,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Json(err) => write!(f, "Snapshot JSON error: {err}"),
            SnapshotError::Set(err) => write!(f, "Snapshot set error: {err}"),
            SnapshotError::Inconsistent => write!(f, "Snapshot fields are inconsistent"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Json(err) => Some(err),
            SnapshotError::Set(err) => Some(err),
            SnapshotError::Inconsistent => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Json(err)
    }
}

impl From<IntSetError> for SnapshotError {
    fn from(err: IntSetError) -> Self {
        SnapshotError::Set(err)
    }
}

/// Recorded view of a set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSnapshot {
    /// Number of members
    pub len: usize,
    /// Members in ascending order
    pub elements: Vec<usize>,
    /// Rendered form, e.g. `{1 9 144}`
    pub text: String,
}

impl SetSnapshot {
    /// Record the current contents of `set`
    pub fn capture(set: &IntSet) -> Self {
        Self {
            len: set.len(),
            elements: set.elements(),
            text: set.to_string(),
        }
    }

    /// Encode as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON and check that the fields agree
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: SetSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Rebuild the recorded set from its text
    pub fn to_set(&self) -> Result<IntSet, SnapshotError> {
        Ok(self.text.parse::<IntSet>()?)
    }

    /// Does `set` currently hold exactly the recorded members?
    pub fn matches(&self, set: &IntSet) -> bool {
        let text = set.to_string();
        if text != self.text {
            log::debug!("snapshot mismatch: recorded {}, found {text}", self.text);
            return false;
        }
        true
    }

    fn validate(&self) -> Result<(), SnapshotError> {
        let set = self.to_set()?;
        if set.len() != self.len || set.elements() != self.elements {
            return Err(SnapshotError::Inconsistent);
        }
        // Reject non-canonical text such as `{9 1}`
        if set.to_string() != self.text {
            return Err(SnapshotError::Inconsistent);
        }
        Ok(())
    }
}
