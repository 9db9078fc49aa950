//! Built-in container kinds.
//!
//! Containers store [`crate::object::ObjectRef`] handles; their repr rules
//! live in [`crate::repr::containers`] and consume only the iteration and
//! access surface exposed here.

mod array;
mod map;
mod shape;

pub use array::Array;
pub use map::Map;
pub use shape::Shape;
