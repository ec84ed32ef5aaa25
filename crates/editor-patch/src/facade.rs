//! The two entry points collaborators use.
//!
//! Both functions are total: they never panic on bad input and never return an error.
//! Non-text arguments to [`diff_strings`] are read as the empty string; any problem in
//! [`apply_string_patch`] leaves the base text unchanged.

use crate::apply::apply;
use crate::codec::{decode, encode};
use crate::diff::diff_with_options;
use crate::options::DiffOptions;
use crate::text_arg::TextArg;

/// Compute a patch that turns `source` into `target`.
///
/// ```rust
/// use editor_patch::{apply_string_patch, diff_strings};
///
/// let patch = diff_strings("hello", "hello world");
/// assert_eq!(apply_string_patch("hello", &patch), "hello world");
///
/// // Absent inputs are treated as empty text.
/// assert_eq!(diff_strings(None::<&str>, None::<&str>), "");
/// ```
pub fn diff_strings(source: impl TextArg, target: impl TextArg) -> String {
    diff_strings_with_options(source, target, &DiffOptions::default())
}

/// [`diff_strings`] with explicit [`DiffOptions`].
pub fn diff_strings_with_options(
    source: impl TextArg,
    target: impl TextArg,
    options: &DiffOptions,
) -> String {
    let source = source.as_text().unwrap_or_default();
    let target = target.as_text().unwrap_or_default();
    encode(&diff_with_options(source, target, options))
}

/// Apply `patch` to `base`, or return `base` unchanged if that is not possible.
///
/// The fallback covers a non-text `patch`, patch text that does not parse, and a patch whose
/// lengths do not fit `base` (typically one computed against a different revision).
pub fn apply_string_patch(base: &str, patch: impl TextArg) -> String {
    let Some(patch) = patch.as_text() else {
        tracing::debug!("patch is not text; leaving document unchanged");
        return base.to_string();
    };

    let result = decode(patch).and_then(|script| apply(base, &script));
    match result {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(error = %err, "failed to apply patch; leaving document unchanged");
            base.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip() {
        let patch = diff_strings("kitten", "sitting");
        assert_eq!(apply_string_patch("kitten", &patch), "sitting");
    }

    #[test]
    fn test_null_inputs() {
        assert_eq!(diff_strings(None::<&str>, None::<&str>), "");
        assert_eq!(diff_strings(&json!(null), "ab"), "+ab");
        assert_eq!(diff_strings("ab", json!(7)), "-2");
    }

    #[test]
    fn test_non_text_patch_returns_base() {
        assert_eq!(apply_string_patch("text", None::<&str>), "text");
        assert_eq!(apply_string_patch("text", json!(12)), "text");
        assert_eq!(apply_string_patch("text", &json!({"ops": []})), "text");
    }

    #[test]
    fn test_bad_patch_returns_base() {
        assert_eq!(apply_string_patch("text", "not a patch"), "text");
        assert_eq!(apply_string_patch("text", "=9"), "text");
    }
}
