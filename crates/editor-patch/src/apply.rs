//! Replaying edit scripts against a base text.

use crate::codec;
use crate::error::{MismatchReason, PatchError};
use crate::script::{EditOperation, EditScript};

/// Replay `script` against `base`.
///
/// The script must consume `base` exactly: a Copy or Delete running past the end, or base text
/// left over after the last operation, is a [`PatchError::PatchMismatch`]. In particular the
/// empty script only fits the empty base.
pub fn apply(base: &str, script: &EditScript) -> Result<String, PatchError> {
    let mut out = String::with_capacity(script.target_len());
    let mut rest = base;
    for (index, op) in script.iter().enumerate() {
        match op {
            EditOperation::Copy(n) => {
                let (head, tail) = split_chars(rest, *n, index)?;
                out.push_str(head);
                rest = tail;
            }
            EditOperation::Delete(n) => {
                let (_, tail) = split_chars(rest, *n, index)?;
                rest = tail;
            }
            EditOperation::Insert(text) => out.push_str(text),
        }
    }

    if !rest.is_empty() {
        return Err(PatchError::PatchMismatch(MismatchReason::Leftover {
            remaining: rest.chars().count(),
        }));
    }
    Ok(out)
}

/// Decode `patch` and replay it against `base`.
///
/// This is the strict counterpart of [`crate::apply_string_patch`]: errors are returned
/// instead of falling back to the base text.
pub fn apply_patch(base: &str, patch: &str) -> Result<String, PatchError> {
    let script = codec::decode(patch)?;
    apply(base, &script)
}

/// Split off the first `n` chars of `text`.
fn split_chars(text: &str, n: usize, op: usize) -> Result<(&str, &str), PatchError> {
    match text.char_indices().nth(n) {
        Some((byte, _)) => Ok(text.split_at(byte)),
        None => {
            let remaining = text.chars().count();
            if remaining == n {
                Ok((text, ""))
            } else {
                Err(PatchError::PatchMismatch(MismatchReason::Underrun {
                    op,
                    needed: n,
                    remaining,
                }))
            }
        }
    }
}
