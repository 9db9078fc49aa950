//! Type-indexed dispatch table for repr rules.
//!
//! The table is a process-wide singleton constructed on first use. It is
//! seeded from `inventory`-collected registrations submitted by any linked
//! crate, so population needs no ordering among the modules that define
//! object kinds. A later registration for an already-known index replaces
//! the earlier rule.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::object::{Object, ObjectRef, TypeIndex};
use crate::repr::ReprPrinter;

/// Rule invoked for every handle whose pointee matches the registered kind.
pub type ReprHandler = fn(&ObjectRef, &mut ReprPrinter<'_>) -> fmt::Result;

/// Static registration record collected through `inventory`.
pub struct ReprRegistration {
    key: fn() -> TypeIndex,
    handler: ReprHandler,
}

impl ReprRegistration {
    pub const fn of<T: Object>(handler: ReprHandler) -> Self {
        Self {
            key: TypeIndex::of::<T>,
            handler,
        }
    }
}

inventory::collect!(ReprRegistration);

static VTABLE: Lazy<RwLock<HashMap<TypeIndex, ReprHandler>>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for entry in inventory::iter::<ReprRegistration> {
        table.insert((entry.key)(), entry.handler);
    }
    log::debug!("repr registry seeded with {} rules", table.len());
    RwLock::new(table)
});

/// Associates `handler` with the kind identified by `key`.
///
/// Callable at any point, before or after prints have started; the last
/// registration for a given index wins.
pub fn register(key: TypeIndex, handler: ReprHandler) {
    VTABLE.write().insert(key, handler);
}

/// Registers `handler` for the concrete kind `T`.
pub fn register_for<T: Object>(handler: ReprHandler) {
    log::trace!("registering repr rule for '{}'", std::any::type_name::<T>());
    register(TypeIndex::of::<T>(), handler);
}

/// Looks up the rule for `key`. Absence is a fallback decision left to the
/// printer, not an error.
pub fn lookup(key: TypeIndex) -> Option<ReprHandler> {
    VTABLE.read().get(&key).copied()
}

/// Registers a repr rule for a concrete object kind at link time.
///
/// Expands to an [`inventory::submit!`] block, so the rule is collected
/// when the defining crate is linked, regardless of initialization order
/// across crates.
#[macro_export]
macro_rules! register_repr {
    ($kind:ty => $handler:expr) => {
        $crate::inventory::submit! {
            $crate::repr::registry::ReprRegistration::of::<$kind>($handler)
        }
    };
}
