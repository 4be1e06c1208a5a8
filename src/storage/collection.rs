//! In-memory record collections
//!
//! A `Collection` keeps records in insertion order behind an `RwLock`. Handles
//! are cheap to clone and share the same underlying records, which lets a
//! background task write to the collection it was spawned from.

use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{FinbuddyError, FinbuddyResult};
use crate::models::{
    BudgetId, BudgetRecord, DocumentId, DocumentRecord, ExpenseId, ExpenseRecord, GoalId,
    InvestmentGoal,
};

/// A record that can live in a `Collection`
pub trait Record: Clone + Send + Sync + 'static {
    type Id: Copy + PartialEq + fmt::Display + Send + Sync;

    /// Entity name used in log lines and errors
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;

    /// Whether a user-typed reference (full or short id) names this record
    fn matches_reference(&self, reference: &str) -> bool;
}

macro_rules! impl_record {
    ($record:ty, $id:ty, $entity:literal) => {
        impl Record for $record {
            type Id = $id;

            const ENTITY: &'static str = $entity;

            fn id(&self) -> $id {
                self.id
            }

            fn matches_reference(&self, reference: &str) -> bool {
                self.id.matches(reference)
            }
        }
    };
}

impl_record!(ExpenseRecord, ExpenseId, "Expense");
impl_record!(BudgetRecord, BudgetId, "Budget");
impl_record!(InvestmentGoal, GoalId, "Goal");
impl_record!(DocumentRecord, DocumentId, "Document");

/// Insertion-ordered, id-unique set of records
pub struct Collection<T: Record> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn read(&self) -> FinbuddyResult<RwLockReadGuard<'_, Vec<T>>> {
        self.items
            .read()
            .map_err(|e| FinbuddyError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> FinbuddyResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.items
            .write()
            .map_err(|e| FinbuddyError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Insert a record, replacing any record with the same id in place.
    ///
    /// Returns `true` if the record was new.
    pub fn insert(&self, record: T) -> FinbuddyResult<bool> {
        let mut items = self.write()?;
        let id = record.id();
        match items.iter().position(|r| r.id() == id) {
            Some(index) => {
                items[index] = record;
                tracing::debug!(entity = T::ENTITY, %id, "Replaced record");
                Ok(false)
            }
            None => {
                items.push(record);
                tracing::debug!(entity = T::ENTITY, %id, "Inserted record");
                Ok(true)
            }
        }
    }

    /// Get a record by id
    pub fn get(&self, id: T::Id) -> FinbuddyResult<Option<T>> {
        let items = self.read()?;
        Ok(items.iter().find(|r| r.id() == id).cloned())
    }

    /// Find a record by a typed reference such as `exp-1a2b3c4d`
    pub fn find(&self, reference: &str) -> FinbuddyResult<Option<T>> {
        let items = self.read()?;
        Ok(items.iter().find(|r| r.matches_reference(reference)).cloned())
    }

    /// Remove a record by id, returning it if it was present
    pub fn remove(&self, id: T::Id) -> FinbuddyResult<Option<T>> {
        let mut items = self.write()?;
        let Some(index) = items.iter().position(|r| r.id() == id) else {
            return Ok(None);
        };
        tracing::debug!(entity = T::ENTITY, %id, "Removed record");
        Ok(Some(items.remove(index)))
    }

    /// Apply `f` to the record with `id`, if present
    pub fn update<R>(&self, id: T::Id, f: impl FnOnce(&mut T) -> R) -> FinbuddyResult<Option<R>> {
        let mut items = self.write()?;
        Ok(items.iter_mut().find(|r| r.id() == id).map(f))
    }

    /// Snapshot of every record in insertion order
    pub fn list(&self) -> FinbuddyResult<Vec<T>> {
        Ok(self.read()?.clone())
    }

    pub fn len(&self) -> FinbuddyResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> FinbuddyResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Drop every record
    pub fn clear(&self) -> FinbuddyResult<()> {
        self.write()?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};

    fn budget(category: Category, rupees: i64) -> BudgetRecord {
        BudgetRecord::new(category, Money::from_rupees(rupees))
    }

    #[test]
    fn test_insert_keeps_order() {
        let collection = Collection::new();
        collection.insert(budget(Category::Food, 100)).unwrap();
        collection.insert(budget(Category::Bills, 200)).unwrap();
        collection.insert(budget(Category::Transport, 300)).unwrap();

        let categories: Vec<Category> = collection
            .list()
            .unwrap()
            .iter()
            .map(|b| b.category)
            .collect();
        assert_eq!(
            categories,
            vec![Category::Food, Category::Bills, Category::Transport]
        );
    }

    #[test]
    fn test_same_id_replaces_in_place() {
        let collection = Collection::new();
        let first = budget(Category::Food, 100);
        let id = first.id;
        collection.insert(first).unwrap();
        collection.insert(budget(Category::Bills, 200)).unwrap();

        let inserted = collection
            .insert(budget(Category::Shopping, 999).with_id(id))
            .unwrap();

        assert!(!inserted);
        let list = collection.list().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, id);
        assert_eq!(list[0].category, Category::Shopping);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let collection = Collection::new();
        collection.insert(budget(Category::Food, 100)).unwrap();

        assert!(collection.remove(BudgetId::new()).unwrap().is_none());
        assert_eq!(collection.len().unwrap(), 1);
    }

    #[test]
    fn test_remove_and_get() {
        let collection = Collection::new();
        let record = budget(Category::Food, 100);
        let id = record.id;
        collection.insert(record).unwrap();

        assert!(collection.get(id).unwrap().is_some());
        assert_eq!(collection.remove(id).unwrap().map(|r| r.id), Some(id));
        assert!(collection.get(id).unwrap().is_none());
        assert!(collection.is_empty().unwrap());
    }

    #[test]
    fn test_find_by_short_reference() {
        let collection = Collection::new();
        let record = budget(Category::Food, 100);
        let short = record.id.to_string();
        collection.insert(record.clone()).unwrap();

        assert_eq!(collection.find(&short).unwrap().map(|r| r.id), Some(record.id));
        assert!(collection.find("bud-").unwrap().is_none());
    }

    #[test]
    fn test_clones_share_records() {
        let collection = Collection::new();
        let handle = collection.clone();
        let record = budget(Category::Food, 100);
        let id = record.id;
        handle.insert(record).unwrap();

        let updated = collection
            .update(id, |b| b.spent = Money::from_rupees(40))
            .unwrap();
        assert!(updated.is_some());
        assert_eq!(
            handle.get(id).unwrap().map(|b| b.spent),
            Some(Money::from_rupees(40))
        );

        collection.clear().unwrap();
        assert!(handle.is_empty().unwrap());
    }
}
