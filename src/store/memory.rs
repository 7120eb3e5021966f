//! # In-Memory Store
//!
//! A substitute recipe store for tests and local development. It mimics the
//! paginated scan of the real table (configurable page size, continuation by
//! last-seen key) so the scan loop is exercised, and can be told to fail
//! every call to drive the fail-soft handler paths.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::model::{NewRecipe, Recipe};
use crate::store::errors::{StoreError, StoreResult};
use crate::store::RecipeStore;

const DEFAULT_PAGE_SIZE: usize = 25;

/// In-memory recipe store with simulated scan pagination.
pub struct MemoryStore {
    records: Mutex<BTreeMap<String, Recipe>>,
    fail_with: Mutex<Option<String>>,
    page_size: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Store whose scans return at most `page_size` items per page.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            fail_with: Mutex::new(None),
            page_size: page_size.max(1),
        }
    }

    /// Make every subsequent store call fail with the given message.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.fail_with.lock().unwrap() = Some(message.into());
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_failure(&self) -> StoreResult<()> {
        match self.fail_with.lock().unwrap().as_ref() {
            Some(message) => Err(StoreError::Transport(message.clone())),
            None => Ok(()),
        }
    }

    /// One page of the scan, resuming after the continuation key.
    fn scan_page(&self, start_after: Option<&str>) -> (Vec<Recipe>, Option<String>) {
        let records = self.records.lock().unwrap();
        let page: Vec<Recipe> = match start_after {
            Some(key) => records
                .range::<str, _>((
                    std::ops::Bound::Excluded(key),
                    std::ops::Bound::Unbounded,
                ))
                .take(self.page_size)
                .map(|(_, r)| r.clone())
                .collect(),
            None => records
                .values()
                .take(self.page_size)
                .cloned()
                .collect(),
        };

        // A continuation key is handed back whenever the page was full, even
        // if it happens to be the final page; the follow-up scan then comes
        // back empty. This matches how the real table signals continuation.
        let next = if page.len() == self.page_size {
            page.last().map(|r| r.id.clone())
        } else {
            None
        };

        (page, next)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn list_all(&self) -> StoreResult<Vec<Recipe>> {
        self.check_failure()?;

        let mut recipes = Vec::new();
        let mut start_after: Option<String> = None;

        loop {
            let (page, next) = self.scan_page(start_after.as_deref());
            recipes.extend(page);
            match next {
                Some(key) => start_after = Some(key),
                None => break,
            }
        }

        Ok(recipes)
    }

    async fn create(&self, new: NewRecipe) -> StoreResult<Recipe> {
        self.check_failure()?;

        let recipe = new.into_recipe();
        self.records
            .lock()
            .unwrap()
            .insert(recipe.id.clone(), recipe.clone());
        Ok(recipe)
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        self.check_failure()?;

        // Absent keys are not an error; delete is idempotent.
        self.records.lock().unwrap().remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(title: &str) -> NewRecipe {
        NewRecipe {
            title: title.to_string(),
            ingredients: vec![],
            steps: vec![],
        }
    }

    #[tokio::test]
    async fn test_list_all_empty_table() {
        let store = MemoryStore::new();
        assert_eq!(store.list_all().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_list_all_spans_multiple_pages() {
        let store = MemoryStore::with_page_size(2);
        for i in 0..5 {
            store.create(named(&format!("recipe {i}"))).await.unwrap();
        }

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 5);

        let mut ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5, "pages must not overlap or omit items");
    }

    #[tokio::test]
    async fn test_list_all_when_table_size_is_page_multiple() {
        // 4 records at page size 2: the second page is full, so a
        // continuation key is returned and the final scan is empty.
        let store = MemoryStore::with_page_size(2);
        for i in 0..4 {
            store.create(named(&format!("recipe {i}"))).await.unwrap();
        }

        assert_eq!(store.list_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_delete_missing_id_succeeds() {
        let store = MemoryStore::new();
        store.delete_by_id("does-not-exist").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = MemoryStore::new();
        let recipe = store.create(named("Tea")).await.unwrap();
        store.delete_by_id(&recipe.id).await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_injected_failure_surfaces_on_every_call() {
        let store = MemoryStore::new();
        store.fail_with("connection refused");

        assert!(store.list_all().await.is_err());
        assert!(store.create(named("Tea")).await.is_err());
        assert!(store.delete_by_id("x").await.is_err());
    }

    #[tokio::test]
    async fn test_concurrent_creates_mint_distinct_ids() {
        use std::sync::Arc;

        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for i in 0..50 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.create(named(&format!("recipe {i}"))).await.unwrap().id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }
}
