//! Patch text format.
//!
//! A patch is a sequence of tokens separated by `'\n'`, with no trailing delimiter:
//!
//! ```text
//! =5          Copy(5)
//! -3          Delete(3)
//! +foo\nbar   Insert("foo\nbar")
//! ```
//!
//! Literal text in an insert token is escaped (`\\`, `\n`, `\r`), so a raw newline only ever
//! separates tokens and a token is identified by its first character alone. The empty script
//! encodes to the empty string.
//!
//! Decoding tolerates CRLF delimiters, since the encoder never emits a raw `'\r'`.

use crate::error::{MalformedReason, PatchError};
use crate::script::{EditOperation, EditScript};

const DELIMITER: char = '\n';
const COPY: char = '=';
const DELETE: char = '-';
const INSERT: char = '+';
const ESCAPE: char = '\\';

/// Serialize an edit script to patch text.
pub fn encode(script: &EditScript) -> String {
    let mut out = String::with_capacity(script.len() * 4);
    for (i, op) in script.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        match op {
            EditOperation::Copy(n) => {
                out.push(COPY);
                out.push_str(&n.to_string());
            }
            EditOperation::Delete(n) => {
                out.push(DELETE);
                out.push_str(&n.to_string());
            }
            EditOperation::Insert(text) => {
                out.push(INSERT);
                escape_into(&mut out, text);
            }
        }
    }
    out
}

/// Parse patch text back into an edit script.
pub fn decode(patch: &str) -> Result<EditScript, PatchError> {
    if patch.is_empty() {
        return Ok(EditScript::new());
    }
    patch
        .split(DELIMITER)
        .enumerate()
        .map(|(index, token)| decode_token(index, token.strip_suffix('\r').unwrap_or(token)))
        .collect()
}

fn decode_token(index: usize, token: &str) -> Result<EditOperation, PatchError> {
    let mut chars = token.chars();
    let Some(prefix) = chars.next() else {
        return Err(PatchError::malformed(index, MalformedReason::EmptyToken));
    };
    let body = chars.as_str();
    match prefix {
        COPY => parse_len(index, body).map(EditOperation::Copy),
        DELETE => parse_len(index, body).map(EditOperation::Delete),
        INSERT => unescape(index, body).map(EditOperation::Insert),
        other => Err(PatchError::malformed(
            index,
            MalformedReason::UnknownPrefix(other),
        )),
    }
}

fn parse_len(index: usize, body: &str) -> Result<usize, PatchError> {
    if body.is_empty() {
        return Err(PatchError::malformed(index, MalformedReason::MissingLength));
    }
    // `usize::from_str` accepts a leading '+', which is not part of the format.
    if !body.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PatchError::malformed(index, MalformedReason::InvalidLength));
    }
    body.parse::<usize>()
        .map_err(|_| PatchError::malformed(index, MalformedReason::LengthOverflow))
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            ESCAPE => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
}

fn unescape(index: usize, body: &str) -> Result<String, PatchError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != ESCAPE {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(ESCAPE) => out.push(ESCAPE),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => {
                return Err(PatchError::malformed(
                    index,
                    MalformedReason::UnknownEscape(other),
                ));
            }
            None => {
                return Err(PatchError::malformed(index, MalformedReason::DanglingEscape));
            }
        }
    }
    Ok(out)
}
