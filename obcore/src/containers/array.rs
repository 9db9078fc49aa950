use crate::object::{Object, ObjectRef};

/// Ordered, index-addressable collection of handles.
#[derive(Default, Clone)]
pub struct Array {
    items: Vec<ObjectRef>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ObjectRef) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&ObjectRef> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectRef> {
        self.items.iter()
    }
}

impl Object for Array {
    fn type_key(&self) -> &'static str {
        "obcore.Array"
    }
}

impl From<Vec<ObjectRef>> for Array {
    fn from(items: Vec<ObjectRef>) -> Self {
        Self { items }
    }
}

impl FromIterator<ObjectRef> for Array {
    fn from_iter<I: IntoIterator<Item = ObjectRef>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
