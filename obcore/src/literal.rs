//! Leaf object kinds: integers and text.
//!
//! Each kind registers its repr rule next to its definition, the same way
//! any unrelated module contributes a rule for its own types.

use std::fmt::Write;

use crate::object::{Object, ObjectRef};
use crate::register_repr;

/// 64-bit integer object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int(pub i64);

impl Object for Int {
    fn type_key(&self) -> &'static str {
        "obcore.Int"
    }
}

register_repr!(Int => |obj, p| {
    let value = obj.downcast_ref::<Int>().expect("dispatched on Int");
    write!(p, "{}", value.0)
});

/// Immutable UTF-8 text object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Str(String);

impl Str {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Object for Str {
    fn type_key(&self) -> &'static str {
        "obcore.Str"
    }
}

// Text values are always quoted; map keys take the same quoting through the
// dedicated key path in the map rule.
register_repr!(Str => |obj, p| {
    let text = obj.downcast_ref::<Str>().expect("dispatched on Str");
    write!(p, "\"{}\"", text.as_str())
});

/// Returns the raw text when the handle's pointee is the textual kind.
pub fn as_text(obj: &ObjectRef) -> Option<&str> {
    obj.downcast_ref::<Str>().map(Str::as_str)
}
