//! Heap object model consumed by the repr printer.
//!
//! Objects live behind counted [`ObjectRef`] handles and expose their
//! concrete kind through a stable [`TypeIndex`]. The repr subsystem borrows
//! handles for the duration of a print call only; nothing here retains them.
//!
//! Handle graphs are expected to be acyclic. Nothing in this module can
//! close a cycle after construction, and the printer does not guard against
//! one (see [`crate::repr`]).

use std::{any::TypeId, sync::Arc};

use downcast_rs::{DowncastSync, impl_downcast};

use crate::utils::error::{ObError, ObResult};

/// Runtime identity token for a concrete object kind.
///
/// Two handles whose pointees share a concrete kind always yield the same
/// index, and the index space is append-only for the process lifetime.
pub type TypeIndex = TypeId;

/// Base trait for heap objects.
pub trait Object: DowncastSync {
    /// Human-readable name of the concrete kind, used by diagnostics and
    /// the fallback repr path.
    fn type_key(&self) -> &'static str;
}
impl_downcast!(sync Object);

/// Shared handle to a heap object.
pub type ObjectRef = Arc<dyn Object>;

/// Moves `value` onto the heap and returns a counted handle to it.
pub fn make<T: Object>(value: T) -> ObjectRef {
    Arc::new(value)
}

/// Runtime type index of the handle's pointee.
pub fn type_index(obj: &ObjectRef) -> TypeIndex {
    obj.as_any().type_id()
}

/// Checked downcast of a handle into a typed counted pointer.
pub fn downcast_arc<T: Object>(obj: ObjectRef) -> ObResult<Arc<T>> {
    obj.downcast_arc::<T>().map_err(|obj| ObError::TypeMismatch {
        expected: std::any::type_name::<T>(),
        found: obj.type_key(),
    })
}
