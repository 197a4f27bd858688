//! # Entity Store
//!
//! `EntityStore<T>` is the keyed collection behind a [`StoreActor`](crate::StoreActor).
//! It is a plain data structure: no channels, no locks, no validation. Exclusive
//! access comes from whoever owns it (the actor task), which is what gives every
//! operation below its all-or-nothing behaviour.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use std::collections::HashMap;

/// In-memory collection of entities keyed by a store-assigned id.
///
/// Ids start at 1 and only ever grow. Deleting an entity does not hand its id
/// back: the counter lives alongside the map and is never rewound.
///
/// Every read returns clones, so no caller keeps an alias into the map.
pub struct EntityStore<T: StoreEntity> {
    entities: HashMap<T::Id, T>,
    next_id: u64,
}

impl<T: StoreEntity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
            next_id: 1,
        }
    }

    /// Stores a new entity under the next unused id and returns a copy of it.
    pub fn create(&mut self, draft: T::Draft) -> T {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let entity = T::from_draft(id.clone(), draft);
        self.entities.insert(id, entity.clone());
        entity
    }

    pub fn get(&self, id: &T::Id) -> Result<T, StoreError> {
        self.entities
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Snapshot of every stored entity, in no particular order.
    pub fn list(&self) -> Vec<T> {
        self.entities.values().cloned().collect()
    }

    /// Overwrites everything but the id of an existing entity.
    ///
    /// A missing id is reported as `NotFound` and nothing is inserted.
    pub fn replace(&mut self, id: &T::Id, draft: T::Draft) -> Result<T, StoreError> {
        match self.entities.get_mut(id) {
            Some(entity) => {
                entity.apply_draft(draft);
                Ok(entity.clone())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    pub fn delete(&mut self, id: &T::Id) -> Result<(), StoreError> {
        self.entities
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn exists(&self, id: &T::Id) -> bool {
        self.entities.contains_key(id)
    }

    /// Clones of every entity for which `predicate` holds.
    pub fn find_by<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.entities
            .values()
            .filter(|entity| predicate(entity))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: u64,
        label: String,
        weight: u32,
    }

    #[derive(Debug)]
    struct ItemDraft {
        label: String,
        weight: u32,
    }

    impl StoreEntity for Item {
        type Id = u64;
        type Draft = ItemDraft;

        fn id(&self) -> &u64 {
            &self.id
        }

        fn from_draft(id: u64, draft: ItemDraft) -> Self {
            Self {
                id,
                label: draft.label,
                weight: draft.weight,
            }
        }

        fn apply_draft(&mut self, draft: ItemDraft) {
            self.label = draft.label;
            self.weight = draft.weight;
        }
    }

    fn draft(label: &str, weight: u32) -> ItemDraft {
        ItemDraft {
            label: label.to_string(),
            weight,
        }
    }

    fn ids(items: &[Item]) -> HashSet<u64> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_create_assigns_ids_from_one() {
        let mut store = EntityStore::<Item>::new();
        let first = store.create(draft("a", 1));
        let second = store.create(draft("b", 2));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.get(&1).unwrap(), first);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_ids_are_never_reused_after_delete() {
        let mut store = EntityStore::<Item>::new();
        let first = store.create(draft("a", 1));
        let second = store.create(draft("b", 1));
        store.delete(&second.id).unwrap();
        store.delete(&first.id).unwrap();
        assert!(store.is_empty());

        let third = store.create(draft("c", 1));
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = EntityStore::<Item>::new();
        assert_eq!(store.get(&42), Err(StoreError::NotFound("42".to_string())));
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let mut store = EntityStore::<Item>::new();
        let item = store.create(draft("a", 1));
        store.delete(&item.id).unwrap();

        assert!(store.get(&item.id).unwrap_err().is_not_found());
        assert!(!store.exists(&item.id));
        assert!(store.delete(&item.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_replace_keeps_id_and_overwrites_fields() {
        let mut store = EntityStore::<Item>::new();
        let item = store.create(draft("old", 1));

        let replaced = store.replace(&item.id, draft("new", 9)).unwrap();
        assert_eq!(
            replaced,
            Item {
                id: item.id,
                label: "new".to_string(),
                weight: 9,
            }
        );
        assert_eq!(store.get(&item.id).unwrap(), replaced);
    }

    #[test]
    fn test_replace_missing_does_not_upsert() {
        let mut store = EntityStore::<Item>::new();
        store.create(draft("a", 1));
        let before = ids(&store.list());

        let result = store.replace(&7, draft("ghost", 0));
        assert_eq!(result, Err(StoreError::NotFound("7".to_string())));
        assert_eq!(ids(&store.list()), before);
        assert!(!store.exists(&7));

        // The failed replace must not have consumed an id either.
        assert_eq!(store.create(draft("b", 1)).id, 2);
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let mut store = EntityStore::<Item>::new();
        store.create(draft("a", 1));
        store.create(draft("b", 2));

        let snapshot = store.list();
        store.delete(&1).unwrap();
        store.replace(&2, draft("changed", 0)).unwrap();

        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.iter().any(|item| item.label == "b"));
    }

    #[test]
    fn test_list_contains_live_ids_once() {
        let mut store = EntityStore::<Item>::new();
        for i in 0..5 {
            store.create(draft("x", i));
        }
        store.delete(&2).unwrap();
        store.delete(&4).unwrap();

        let listed = store.list();
        assert_eq!(listed.len(), 3);
        assert_eq!(ids(&listed), HashSet::from([1, 3, 5]));
    }

    #[test]
    fn test_find_by_returns_matching_subset() {
        let mut store = EntityStore::<Item>::new();
        store.create(draft("heavy", 100));
        store.create(draft("light", 3));
        store.create(draft("medium", 40));

        let found = store.find_by(|item| item.weight < 50);
        assert_eq!(ids(&found), HashSet::from([2, 3]));

        let all = ids(&store.list());
        assert!(ids(&found).is_subset(&all));

        assert!(store.find_by(|item| item.weight > 1_000).is_empty());
    }
}
