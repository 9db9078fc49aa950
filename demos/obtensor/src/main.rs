//! Registers a repr rule for a new object kind from a crate that `obcore`
//! knows nothing about, then prints a structure mixing the two.

use std::fmt::Write;

use obcore::containers::{Array, Map, Shape};
use obcore::literal::{Int, Str};
use obcore::object::{Object, make};
use obcore::register_repr;
use obcore::repr::repr_fmt;

/// Dense tensor placeholder: element type plus extent.
struct Tensor {
    dtype: &'static str,
    shape: Shape,
}

impl Object for Tensor {
    fn type_key(&self) -> &'static str {
        "obtensor.Tensor"
    }
}

register_repr!(Tensor => |obj, p| {
    let tensor = obj.downcast_ref::<Tensor>().expect("dispatched on Tensor");
    write!(p, "Tensor({}, {})", tensor.dtype, tensor.shape)
});

fn main() {
    let weights = make(Tensor {
        dtype: "f32",
        shape: Shape::new([64, 128]),
    });
    let bias = make(Tensor {
        dtype: "f32",
        shape: Shape::new([128]),
    });

    let mut attrs = Map::new();
    attrs.insert(make(Str::new("weights")), weights);
    attrs.insert(make(Str::new("bias")), bias);
    attrs.insert(make(Str::new("groups")), make(Int(1)));

    let graph = make(Array::from(vec![make(attrs), make(Shape::new([2, 3]))]));
    println!("{}", repr_fmt(&graph));
}
