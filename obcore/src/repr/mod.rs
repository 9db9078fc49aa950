//! Recursive repr printing driven by the type-indexed dispatch registry.
//!
//! [`ReprPrinter`] resolves the runtime kind of each handle through
//! [`registry`] and hands control to the registered rule. Rules write
//! literal syntax into the printer's sink and recurse into child handles
//! via [`ReprPrinter::print`], producing a depth-first left-to-right
//! rendering in one pass.
//!
//! The traversal keeps no state beyond the borrowed sink; the registry is
//! read-only while printing. A cyclic handle graph would recurse without
//! bound; callers keep graphs acyclic (see [`crate::object`]).

pub mod containers;
pub mod registry;

use std::fmt::{self, Display, Write as _};
use std::io;
use std::sync::Arc;

use crate::object::{self, Object, ObjectRef};
use crate::utils::error::ObResult;

/// Recursive repr driver over one output sink.
///
/// A printer is transient: it borrows its sink for a single top-level
/// render and holds nothing else. It implements [`fmt::Write`] so
/// registered rules can emit literal syntax with `write!`.
pub struct ReprPrinter<'a> {
    out: &'a mut (dyn fmt::Write + 'a),
}

impl<'a> ReprPrinter<'a> {
    pub fn new(out: &'a mut (dyn fmt::Write + 'a)) -> Self {
        Self { out }
    }

    /// Renders `obj` by dispatching on its runtime type index.
    ///
    /// A kind with no registered rule degrades to `type_key(address)` for
    /// that node only; siblings and enclosing nodes are unaffected.
    pub fn print(&mut self, obj: &ObjectRef) -> fmt::Result {
        match registry::lookup(object::type_index(obj)) {
            Some(handler) => handler(obj, self),
            None => {
                log::debug!("no repr rule for '{}', using fallback", obj.type_key());
                write!(
                    self.out,
                    "{}({:p})",
                    obj.type_key(),
                    // Thin-cast: `{:p}` on a wide pointer also prints its
                    // metadata; the fallback wants the address alone.
                    Arc::as_ptr(obj).cast::<()>()
                )
            }
        }
    }
}

impl fmt::Write for ReprPrinter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }
}

/// Renders `obj` to an owned string.
///
/// A `String` sink cannot fail, so an `Err` out of `print` can only come
/// from a registered rule; whatever was rendered up to that point is
/// returned.
pub fn repr(obj: &ObjectRef) -> String {
    let mut out = String::new();
    let _ = ReprPrinter::new(&mut out).print(obj);
    out
}

/// Wraps `obj` for use in `format!`-style output.
pub fn repr_fmt(obj: &ObjectRef) -> impl Display + '_ {
    struct Fmt<'a>(&'a ObjectRef);

    impl Display for Fmt<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            ReprPrinter::new(f).print(self.0)
        }
    }

    Fmt(obj)
}

/// Renders `obj` into a byte sink without building an intermediate string.
pub fn render_to<W: io::Write>(obj: &ObjectRef, out: &mut W) -> ObResult<()> {
    struct IoAdapter<'a, W: io::Write> {
        out: &'a mut W,
        error: Option<io::Error>,
    }

    impl<W: io::Write> fmt::Write for IoAdapter<'_, W> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.out.write_all(s.as_bytes()).map_err(|e| {
                self.error = Some(e);
                fmt::Error
            })
        }
    }

    let mut adapter = IoAdapter { out, error: None };
    let result = ReprPrinter::new(&mut adapter).print(obj);
    match adapter.error.take() {
        Some(error) => Err(error.into()),
        None => result.map_err(Into::into),
    }
}

/// Writes the repr of `obj` and a trailing newline to stderr.
///
/// Debugger aid; keep callable from anywhere without wiring a sink.
pub fn dump(obj: &ObjectRef) {
    eprintln!("{}", repr_fmt(obj));
}
