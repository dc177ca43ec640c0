// In-memory record collections backing the array resources

pub mod query;
pub mod stats;

use std::sync::Arc;

use tokio::sync::RwLock;

pub use query::{Listing, ListOptions, Page, Paginated, QueryError, SortKey, SortOrder};

/// A record that can live in a [`Collection`]
pub trait Record: Clone + Send + Sync + 'static {
    /// Stable identifier, assigned by the collection on insert
    fn id(&self) -> u32;

    /// Value used when sorting by `field`, or `None` if the field is not sortable
    fn sort_key(&self, field: &str) -> Option<SortKey>;
}

/// Ordered sequence of records with a monotonically increasing id counter.
///
/// Ids are never derived from the current contents, so removing the record
/// holding the highest id does not make that id available again.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    next_id: u32,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> {
    /// Creates an empty collection whose first id is 1
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a collection from seed records, continuing ids after the highest seeded one
    pub fn seeded(items: Vec<T>) -> Self {
        let next_id = items.iter().map(Record::id).max().map_or(1, |max| max + 1);
        Self { items, next_id }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All records in insertion order
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// First record with the given id
    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Records matching `predicate`, cloned, in collection order
    pub fn filtered<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Reserves the next id, builds a record with it and appends the record
    pub fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(u32) -> T,
    {
        let id = self.next_id;
        self.next_id += 1;
        let record = build(id);
        self.items.push(record.clone());
        record
    }

    /// Overwrites the record with the given id. Returns the stored record.
    pub fn replace(&mut self, id: u32, record: T) -> Option<T> {
        let slot = self.items.iter_mut().find(|item| item.id() == id)?;
        *slot = record;
        Some(slot.clone())
    }

    /// Mutates the record with the given id in place. Returns the updated record.
    pub fn update<F>(&mut self, id: u32, mutate: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let slot = self.items.iter_mut().find(|item| item.id() == id)?;
        mutate(slot);
        Some(slot.clone())
    }

    /// Applies `mutate` to every record; returns how many reported a change
    pub fn update_all<F>(&mut self, mut mutate: F) -> usize
    where
        F: FnMut(&mut T) -> bool,
    {
        self.items
            .iter_mut()
            .map(|item| mutate(item))
            .filter(|changed| *changed)
            .count()
    }

    /// Removes the record with the given id, keeping the order of the rest
    pub fn remove(&mut self, id: u32) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Removes every record matching `predicate`; returns the number removed
    pub fn remove_where<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        before - self.items.len()
    }

    /// Removes all records whose id is in `ids`.
    ///
    /// Returns the number removed and the requested ids that were not present
    /// before the removal, in request order.
    pub fn remove_ids(&mut self, ids: &[u32]) -> (usize, Vec<u32>) {
        let mut not_found = Vec::new();
        for id in ids {
            if !self.contains(*id) && !not_found.contains(id) {
                not_found.push(*id);
            }
        }
        let removed = self.remove_where(|item| ids.contains(&item.id()));
        (removed, not_found)
    }
}

/// Shared handle to one collection, cloned into request handlers
#[derive(Debug)]
pub struct Store<T> {
    inner: Arc<RwLock<Collection<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Record> Store<T> {
    pub fn new(collection: Collection<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(collection)),
        }
    }

    pub fn seeded(items: Vec<T>) -> Self {
        Self::new(Collection::seeded(items))
    }

    /// Runs a read-only operation under the shared lock
    pub async fn read<R, F>(&self, op: F) -> R
    where
        F: FnOnce(&Collection<T>) -> R,
    {
        let guard = self.inner.read().await;
        op(&guard)
    }

    /// Runs a mutating operation under the exclusive lock
    pub async fn write<R, F>(&self, op: F) -> R
    where
        F: FnOnce(&mut Collection<T>) -> R,
    {
        let mut guard = self.inner.write().await;
        op(&mut guard)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Item {
        pub id: u32,
        pub name: String,
        pub score: i64,
    }

    impl Record for Item {
        fn id(&self) -> u32 {
            self.id
        }

        fn sort_key(&self, field: &str) -> Option<SortKey> {
            match field {
                "id" => Some(SortKey::Int(self.id as i64)),
                "name" => Some(SortKey::Text(self.name.clone())),
                "score" => Some(SortKey::Int(self.score)),
                _ => None,
            }
        }
    }

    pub fn item(id: u32, name: &str, score: i64) -> Item {
        Item {
            id,
            name: name.to_string(),
            score,
        }
    }

    fn sample() -> Collection<Item> {
        Collection::seeded(vec![item(1, "a", 10), item(4, "b", 5), item(5, "c", 7)])
    }

    #[test]
    fn test_seeded_continues_after_highest_id() {
        let mut items = sample();
        let created = items.insert_with(|id| item(id, "d", 0));
        assert_eq!(created.id, 6);
        assert_eq!(items.len(), 4);
        assert_eq!(items.all().last(), Some(&created));
    }

    #[test]
    fn test_ids_are_not_reused_after_removing_max() {
        let mut items = sample();
        assert!(items.remove(5).is_some());
        let created = items.insert_with(|id| item(id, "d", 0));
        assert_eq!(created.id, 6);

        let mut empty: Collection<Item> = Collection::new();
        let first = empty.insert_with(|id| item(id, "x", 0));
        empty.remove(first.id);
        let second = empty.insert_with(|id| item(id, "y", 0));
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut items = sample();
        let removed = items.remove(4).unwrap();
        assert_eq!(removed.name, "b");
        let ids: Vec<u32> = items.all().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert!(items.remove(4).is_none());
    }

    #[test]
    fn test_update_and_replace() {
        let mut items = sample();
        let updated = items.update(1, |i| i.score += 1).unwrap();
        assert_eq!(updated.score, 11);
        assert_eq!(items.get(1).unwrap().score, 11);

        let replaced = items.replace(4, item(4, "z", 0)).unwrap();
        assert_eq!(replaced.name, "z");
        assert!(items.replace(99, item(99, "n", 0)).is_none());
        assert!(items.update(99, |_| {}).is_none());
    }

    #[test]
    fn test_update_all_counts_changes() {
        let mut items = sample();
        let changed = items.update_all(|i| {
            if i.score > 6 {
                i.score = 0;
                true
            } else {
                false
            }
        });
        assert_eq!(changed, 2);
        assert_eq!(items.get(4).unwrap().score, 5);
    }

    #[test]
    fn test_remove_ids_reports_ids_missing_before_removal() {
        let mut items = sample();
        let (removed, not_found) = items.remove_ids(&[4, 9, 1, 9]);
        assert_eq!(removed, 2);
        assert_eq!(not_found, vec![9]);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_remove_where() {
        let mut items = sample();
        assert_eq!(items.remove_where(|i| i.score < 8), 2);
        assert_eq!(items.all(), &[item(1, "a", 10)]);
    }

    #[tokio::test]
    async fn test_store_shares_collection_between_clones() {
        let store = Store::seeded(vec![item(1, "a", 1)]);
        let other = store.clone();
        other.write(|c| c.insert_with(|id| item(id, "b", 2))).await;
        assert_eq!(store.read(|c| c.len()).await, 2);
    }
}
