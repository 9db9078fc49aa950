use std::fmt;

use smallvec::SmallVec;

use crate::object::Object;

/// Fixed-shape dimension list, e.g. the extent of a dense array value.
///
/// Prints through its own `Display` convention (`(2, 3)`), never the
/// generic container path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    dims: SmallVec<[i64; 4]>,
}

impl Shape {
    pub fn new(dims: impl IntoIterator<Item = i64>) -> Self {
        Self {
            dims: dims.into_iter().collect(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[i64] {
        &self.dims
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, dim) in self.dims.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{dim}")?;
        }
        write!(f, ")")
    }
}

impl Object for Shape {
    fn type_key(&self) -> &'static str {
        "obcore.Shape"
    }
}
