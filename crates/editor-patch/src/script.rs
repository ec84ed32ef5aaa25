//! Edit scripts.
//!
//! An [`EditScript`] is an ordered list of [`EditOperation`]s that turns a base text into a
//! target text. All lengths are expressed in **characters** (Unicode scalar values), the same
//! unit `editor-core` uses for its character offsets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::PatchError;

/// A single step of an edit script.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditOperation {
    /// Retain the next `n` characters of the base text.
    Copy(usize),
    /// Skip the next `n` characters of the base text.
    Delete(usize),
    /// Append literal text to the result.
    Insert(String),
}

impl EditOperation {
    /// Number of base characters this operation consumes.
    pub fn source_len(&self) -> usize {
        match self {
            Self::Copy(n) | Self::Delete(n) => *n,
            Self::Insert(_) => 0,
        }
    }

    /// Number of characters this operation contributes to the result.
    pub fn target_len(&self) -> usize {
        match self {
            Self::Copy(n) => *n,
            Self::Delete(_) => 0,
            Self::Insert(text) => text.chars().count(),
        }
    }

    /// Returns `true` if the operation has no effect (zero length or empty literal).
    pub fn is_noop(&self) -> bool {
        match self {
            Self::Copy(n) | Self::Delete(n) => *n == 0,
            Self::Insert(text) => text.is_empty(),
        }
    }

    fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// An ordered sequence of [`EditOperation`]s.
///
/// Scripts produced by the diff engine are *canonical*: no operation is a no-op, no two
/// neighbours share a kind, and inside a replaced region the Delete comes before the Insert.
/// Scripts built by hand do not have to be canonical to be encoded, decoded or applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditScript {
    ops: Vec<EditOperation>,
}

impl EditScript {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// The operations in order.
    pub fn operations(&self) -> &[EditOperation] {
        &self.ops
    }

    /// Iterate over the operations.
    pub fn iter(&self) -> std::slice::Iter<'_, EditOperation> {
        self.ops.iter()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if the script has no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Length of the base text this script expects (sum of Copy and Delete lengths).
    pub fn source_len(&self) -> usize {
        self.ops.iter().map(EditOperation::source_len).sum()
    }

    /// Length of the text this script produces from a matching base.
    pub fn target_len(&self) -> usize {
        self.ops.iter().map(EditOperation::target_len).sum()
    }

    /// Returns `true` if the script is in the canonical form the diff engine emits.
    pub fn is_canonical(&self) -> bool {
        if self.ops.iter().any(EditOperation::is_noop) {
            return false;
        }
        self.ops.windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            !prev.same_kind(next)
                && !matches!(
                    (prev, next),
                    (EditOperation::Insert(_), EditOperation::Delete(_))
                )
        })
    }

    /// Consume the script and return its operations.
    pub fn into_operations(self) -> Vec<EditOperation> {
        self.ops
    }
}

impl From<Vec<EditOperation>> for EditScript {
    fn from(ops: Vec<EditOperation>) -> Self {
        Self { ops }
    }
}

impl FromIterator<EditOperation> for EditScript {
    fn from_iter<I: IntoIterator<Item = EditOperation>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOperation;
    type IntoIter = std::slice::Iter<'a, EditOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl IntoIterator for EditScript {
    type Item = EditOperation;
    type IntoIter = std::vec::IntoIter<EditOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

/// Formats the script as its serialized patch text.
impl fmt::Display for EditScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode(self))
    }
}

impl FromStr for EditScript {
    type Err = PatchError;

    fn from_str(patch: &str) -> Result<Self, Self::Err> {
        codec::decode(patch)
    }
}

/// Accumulates operations in canonical form.
///
/// Deletes and inserts between two copies are buffered and flushed as one Delete followed by
/// one Insert, so callers may push them in any order.
#[derive(Debug, Default)]
pub(crate) struct ScriptBuilder {
    ops: Vec<EditOperation>,
    pending_delete: usize,
    pending_insert: String,
}

impl ScriptBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn copy(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.flush();
        match self.ops.last_mut() {
            Some(EditOperation::Copy(len)) => *len += n,
            _ => self.ops.push(EditOperation::Copy(n)),
        }
    }

    pub(crate) fn delete(&mut self, n: usize) {
        self.pending_delete += n;
    }

    pub(crate) fn insert(&mut self, text: &str) {
        self.pending_insert.push_str(text);
    }

    fn flush(&mut self) {
        if self.pending_delete > 0 {
            self.ops.push(EditOperation::Delete(self.pending_delete));
            self.pending_delete = 0;
        }
        if !self.pending_insert.is_empty() {
            self.ops
                .push(EditOperation::Insert(std::mem::take(&mut self.pending_insert)));
        }
    }

    pub(crate) fn finish(mut self) -> EditScript {
        self.flush();
        EditScript { ops: self.ops }
    }
}
