//! Errors raised while decoding or applying patches.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced while decoding or applying a patch.
///
/// Neither variant escapes the façade functions ([`crate::diff_strings`],
/// [`crate::apply_string_patch`]); they are only visible to callers of the lower-level
/// building blocks such as [`crate::decode`] and [`crate::apply`].
pub enum PatchError {
    #[error("malformed patch at token {token}: {reason}")]
    /// The serialized patch is not a valid token stream.
    MalformedPatch {
        /// 0-based index of the offending token.
        token: usize,
        /// What was wrong with it.
        reason: MalformedReason,
    },

    #[error("patch does not fit base text: {0}")]
    /// The edit script's Copy/Delete lengths do not line up with the base text.
    PatchMismatch(MismatchReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Why a patch token failed to parse.
pub enum MalformedReason {
    #[error("empty token")]
    /// Two delimiters in a row, or a leading/trailing delimiter.
    EmptyToken,

    #[error("unknown token prefix {0:?}")]
    /// The token does not start with `=`, `-` or `+`.
    UnknownPrefix(char),

    #[error("missing length")]
    /// A `=`/`-` token without any digits.
    MissingLength,

    #[error("invalid length")]
    /// The length field contains something other than ASCII digits.
    InvalidLength,

    #[error("length overflows usize")]
    /// The length field does not fit in `usize`.
    LengthOverflow,

    #[error("dangling escape at end of literal")]
    /// A literal ends with a lone backslash.
    DanglingEscape,

    #[error("unknown escape sequence \\{0}")]
    /// A backslash followed by a character that is not a known escape.
    UnknownEscape(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Why an edit script could not be replayed against a base text.
pub enum MismatchReason {
    #[error("operation {op} needs {needed} chars but only {remaining} remain")]
    /// A Copy or Delete ran past the end of the base text.
    Underrun {
        /// 0-based index of the failing operation.
        op: usize,
        /// Characters the operation wanted to consume.
        needed: usize,
        /// Characters left in the base text.
        remaining: usize,
    },

    #[error("{remaining} chars of the base text were not consumed")]
    /// The script finished before reaching the end of the base text.
    Leftover {
        /// Characters left in the base text.
        remaining: usize,
    },
}

impl PatchError {
    pub(crate) fn malformed(token: usize, reason: MalformedReason) -> Self {
        Self::MalformedPatch { token, reason }
    }

    /// Returns `true` for [`PatchError::MalformedPatch`].
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPatch { .. })
    }

    /// Returns `true` for [`PatchError::PatchMismatch`].
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::PatchMismatch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PatchError::malformed(2, MalformedReason::UnknownPrefix('x'));
        assert_eq!(
            err.to_string(),
            "malformed patch at token 2: unknown token prefix 'x'"
        );

        let err = PatchError::PatchMismatch(MismatchReason::Underrun {
            op: 0,
            needed: 5,
            remaining: 2,
        });
        assert_eq!(
            err.to_string(),
            "patch does not fit base text: operation 0 needs 5 chars but only 2 remain"
        );
        assert!(err.is_mismatch());
        assert!(!err.is_malformed());
    }
}
