use criterion::{Criterion, black_box, criterion_group, criterion_main};

use obcore::containers::{Array, Map, Shape};
use obcore::literal::{Int, Str};
use obcore::object::{ObjectRef, make};
use obcore::repr::repr;

fn nested_tree(depth: usize, width: usize) -> ObjectRef {
    if depth == 0 {
        return make(Int(depth as i64));
    }

    let mut map = Map::new();
    for i in 0..width {
        map.insert(
            make(Str::new(format!("k{i}"))),
            nested_tree(depth - 1, width),
        );
    }
    make(Array::from(vec![
        make(map),
        make(Shape::new([depth as i64, width as i64])),
    ]))
}

fn bench_repr(c: &mut Criterion) {
    let flat: ObjectRef = make((0i64..1024).map(|i| make(Int(i))).collect::<Array>());
    c.bench_function("repr_flat_array_1024", |b| {
        b.iter(|| black_box(repr(&flat)))
    });

    let tree = nested_tree(4, 6);
    c.bench_function("repr_nested_tree_d4_w6", |b| {
        b.iter(|| black_box(repr(&tree)))
    });
}

criterion_group!(benches, bench_repr);
criterion_main!(benches);
