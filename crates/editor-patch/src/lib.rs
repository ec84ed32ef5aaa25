#![warn(missing_docs)]
//! Editor Patch - two-way text diff/patch engine
//!
//! # Overview
//!
//! `editor-patch` computes a compact edit script that turns one text snapshot into another,
//! serializes it as a plain-text patch, and replays that patch against a base text later on.
//! It is headless and stateless: every operation is a pure function of its inputs.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  diff_strings / apply_string_patch          │  ← Fail-soft façade
//! ├─────────────────────────────────────────────┤
//! │  Patch Applier                              │  ← Replay against a base
//! ├─────────────────────────────────────────────┤
//! │  Patch Codec                                │  ← Text serialization
//! ├─────────────────────────────────────────────┤
//! │  Diff Engine (Myers O(N·D))                 │  ← Edit script
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use editor_patch::{apply_string_patch, diff_strings};
//!
//! let patch = diff_strings("fn main() {}", "fn main() { run(); }");
//! assert_eq!(apply_string_patch("fn main() {}", &patch), "fn main() { run(); }");
//!
//! // A patch computed against a different base leaves the document untouched.
//! assert_eq!(apply_string_patch("fn other() {}", &patch), "fn other() {}");
//! ```
//!
//! Callers that want to see errors use the building blocks directly:
//!
//! ```rust
//! use editor_patch::{apply, decode, diff, encode, PatchError};
//!
//! let script = diff("abc", "abd");
//! let patch = encode(&script);
//! assert_eq!(decode(&patch)?, script);
//! assert_eq!(apply("abc", &script)?, "abd");
//! # Ok::<(), PatchError>(())
//! ```
//!
//! # Module Description
//!
//! - [`diff`](mod@diff) - Myers shortest edit script
//! - [`codec`] - patch text format
//! - [`apply`](mod@apply) - replaying scripts against a base text
//! - [`script`] - edit operations and scripts
//! - [`options`] - diff configuration
//! - [`error`] - decode/apply errors
//!
//! # Units
//!
//! All lengths are in characters (Unicode scalar values), never bytes.

pub mod apply;
pub mod codec;
pub mod diff;
pub mod error;
mod facade;
pub mod options;
pub mod script;
mod text_arg;

pub use apply::{apply, apply_patch};
pub use codec::{decode, encode};
pub use diff::{diff, diff_with_options};
pub use error::{MalformedReason, MismatchReason, PatchError};
pub use facade::{apply_string_patch, diff_strings, diff_strings_with_options};
pub use options::{DiffOptions, Granularity};
pub use script::{EditOperation, EditScript};
pub use text_arg::TextArg;
