use std::sync::Arc;

use crate::literal::as_text;
use crate::object::{Object, ObjectRef};

/// Associative container over object handles.
///
/// Entries iterate in insertion order, so repeated prints of one instance
/// observe one stable order. Textual keys compare by their text, so two
/// distinct handles to equal text name the same entry; any other key kind
/// compares by pointer identity of the handle.
#[derive(Default, Clone)]
pub struct Map {
    entries: Vec<(ObjectRef, ObjectRef)>,
}

fn key_eq(a: &ObjectRef, b: &ObjectRef) -> bool {
    if Arc::ptr_eq(a, b) {
        return true;
    }
    matches!((as_text(a), as_text(b)), (Some(x), Some(y)) if x == y)
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, replacing the value of an existing
    /// entry with an equal key.
    pub fn insert(&mut self, key: ObjectRef, value: ObjectRef) {
        match self.entries.iter_mut().find(|(k, _)| key_eq(k, &key)) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &ObjectRef) -> Option<&ObjectRef> {
        self.entries
            .iter()
            .find(|(k, _)| key_eq(k, key))
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ObjectRef, &ObjectRef)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl Object for Map {
    fn type_key(&self) -> &'static str {
        "obcore.Map"
    }
}

impl FromIterator<(ObjectRef, ObjectRef)> for Map {
    fn from_iter<I: IntoIterator<Item = (ObjectRef, ObjectRef)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
