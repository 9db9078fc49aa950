//! Reference-counted object heap with extensible repr printing.
//!
//! The crate exposes a small surface: an [`object::Object`] trait with a
//! counted [`object::ObjectRef`] handle, the built-in container kinds under
//! [`containers`], and the [`repr`] subsystem that renders any handle to a
//! deterministic debug text by dispatching on runtime type identity.
//!
//! New object kinds register their own rendering rule with
//! [`register_repr!`] (link-time) or [`repr::registry::register_for`]
//! (runtime) without touching any central switch; see `demos/obtensor` for
//! a downstream crate doing exactly that.

pub mod containers;
pub mod literal;
pub mod object;
pub mod repr;
pub mod utils;

pub extern crate inventory;
