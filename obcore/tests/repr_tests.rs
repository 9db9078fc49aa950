use obcore::containers::{Array, Map, Shape};
use obcore::literal::{Int, Str};
use obcore::object::{ObjectRef, make};
use obcore::repr::{dump, render_to, repr, repr_fmt};

fn int(value: i64) -> ObjectRef {
    make(Int(value))
}

fn text(value: &str) -> ObjectRef {
    make(Str::new(value))
}

#[test]
fn empty_containers_render_bare_brackets() {
    assert_eq!(repr(&make(Array::new())), "[]");
    assert_eq!(repr(&make(Map::new())), "{}");
}

#[test]
fn sequence_preserves_index_order() {
    let array = Array::from(vec![int(1), int(2), int(3)]);
    assert_eq!(repr(&make(array)), "[1, 2, 3]");
}

#[test]
fn single_element_sequence_has_no_separator() {
    let array = Array::from(vec![int(42)]);
    assert_eq!(repr(&make(array)), "[42]");
}

#[test]
fn string_keys_are_quoted_and_other_keys_are_not() {
    let mut map = Map::new();
    map.insert(text("x"), int(1));
    assert_eq!(repr(&make(map)), "{\"x\": 1}");

    let mut map = Map::new();
    map.insert(int(2), int(3));
    assert_eq!(repr(&make(map)), "{2: 3}");
}

#[test]
fn text_values_render_quoted() {
    let array = Array::from(vec![text("hi"), int(7)]);
    assert_eq!(repr(&make(array)), "[\"hi\", 7]");
}

#[test]
fn nested_containers_render_recursively() {
    let inner = Array::from(vec![int(1), int(2)]);
    let mut map = Map::new();
    map.insert(text("a"), make(inner));
    let outer = Array::from(vec![make(map)]);
    assert_eq!(repr(&make(outer)), "[{\"a\": [1, 2]}]");
}

#[test]
fn map_iteration_order_is_stable_across_prints() {
    let mut map = Map::new();
    map.insert(text("b"), int(2));
    map.insert(text("a"), int(1));
    let handle = make(map);

    let first = repr(&handle);
    assert_eq!(first, "{\"b\": 2, \"a\": 1}");
    assert_eq!(repr(&handle), first);
}

#[test]
fn map_insert_replaces_value_of_same_key_handle() {
    let key = text("k");
    let mut map = Map::new();
    map.insert(key.clone(), int(1));
    map.insert(key, int(2));
    assert_eq!(repr(&make(map)), "{\"k\": 2}");
}

#[test]
fn map_insert_replaces_entry_under_equal_text_key() {
    let mut map = Map::new();
    map.insert(text("x"), int(1));
    map.insert(text("x"), int(2));

    let looked_up = map.get(&text("x")).expect("text key present");
    assert_eq!(repr(looked_up), "2");
    assert_eq!(repr(&make(map)), "{\"x\": 2}");
}

#[test]
fn dump_renders_nested_structure_without_panicking() {
    let mut map = Map::new();
    map.insert(text("a"), make(Array::from(vec![int(1), int(2)])));
    let handle = make(Array::from(vec![make(map)]));

    dump(&handle);
    assert_eq!(repr(&handle), "[{\"a\": [1, 2]}]");
}

#[test]
fn shape_uses_its_own_literal_convention() {
    assert_eq!(repr(&make(Shape::new([2, 3]))), "(2, 3)");
    assert_eq!(repr(&make(Shape::new([]))), "()");
}

#[test]
fn shape_nested_in_sequence_keeps_its_convention() {
    let array = Array::from(vec![make(Shape::new([2, 3])), int(1)]);
    assert_eq!(repr(&make(array)), "[(2, 3), 1]");
}

#[test]
fn repeated_prints_are_byte_identical() {
    let mut map = Map::new();
    map.insert(text("dims"), make(Shape::new([4, 4])));
    let handle = make(Array::from(vec![make(map), int(0)]));

    assert_eq!(repr(&handle), repr(&handle));
}

#[test]
fn display_adapter_and_stream_render_agree() {
    let array = make(Array::from(vec![int(4), int(5)]));
    assert_eq!(format!("{}", repr_fmt(&array)), "[4, 5]");

    let mut sink = Vec::new();
    render_to(&array, &mut sink).expect("vec sink does not fail");
    assert_eq!(sink, b"[4, 5]");
}
