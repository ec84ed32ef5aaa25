//! Loosely typed text arguments.
//!
//! Hosts hand the façade values that may be missing or may not be text at all, for example a
//! field read out of a project metadata document. [`TextArg`] gives each such value a defined
//! reading: either a string slice, or "not text".

use std::borrow::Cow;

use serde_json::Value;

/// A value that may or may not carry text.
pub trait TextArg {
    /// The text carried by this value, or `None` if it is absent or not a string.
    fn as_text(&self) -> Option<&str>;
}

impl TextArg for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextArg for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextArg for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: TextArg + ?Sized> TextArg for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

/// `None` is not text.
impl<T: TextArg> TextArg for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(|value| value.as_text())
    }
}

/// Only `Value::String` is text; `null`, numbers, booleans, arrays and objects are not.
impl TextArg for Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }
}
