//! Repr rules for the built-in container kinds.

use std::fmt::Write;

use crate::containers::{Array, Map, Shape};
use crate::literal::as_text;
use crate::register_repr;

register_repr!(Array => |obj, p| {
    let array = obj.downcast_ref::<Array>().expect("dispatched on Array");
    p.write_char('[')?;
    for (i, item) in array.iter().enumerate() {
        if i != 0 {
            p.write_str(", ")?;
        }
        p.print(item)?;
    }
    p.write_char(']')
});

register_repr!(Map => |obj, p| {
    let map = obj.downcast_ref::<Map>().expect("dispatched on Map");
    p.write_char('{')?;
    for (i, (key, value)) in map.iter().enumerate() {
        if i != 0 {
            p.write_str(", ")?;
        }
        match as_text(key) {
            Some(text) => write!(p, "\"{text}\": ")?,
            None => {
                p.print(key)?;
                p.write_str(": ")?;
            }
        }
        p.print(value)?;
    }
    p.write_char('}')
});

// Shape carries its own literal convention; bypass generic element
// iteration entirely.
register_repr!(Shape => |obj, p| {
    let shape = obj.downcast_ref::<Shape>().expect("dispatched on Shape");
    write!(p, "{shape}")
});
