//! Generic insertion-ordered collection keyed by entity id.

use indexmap::IndexMap;

use crate::error::StoreError;

/// A record that can live in a [`Collection`].
pub trait Entity: Clone {
    /// Human-readable entity name used in errors and logs.
    const NAME: &'static str;

    fn id(&self) -> &str;
}

/// Insertion-ordered map of entities.
///
/// Removal keeps the relative order of the remaining entries.
#[derive(Debug)]
pub struct Collection<T> {
    items: IndexMap<String, T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }
}

impl<T: Entity> Collection<T> {
    /// Append an entity. Fails if its id is already present.
    pub fn insert(&mut self, entity: T) -> Result<&T, StoreError> {
        let id = entity.id().to_string();
        if self.items.contains_key(&id) {
            return Err(StoreError::DuplicateId {
                entity: T::NAME,
                id,
            });
        }
        let (index, _) = self.items.insert_full(id, entity);
        Ok(&self.items[index])
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.get_mut(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.items.shift_remove(id)
    }

    /// Entities in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.items.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.values_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
