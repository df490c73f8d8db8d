use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ListId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;

/// In-memory owner of the whole list collection.
///
/// The collection is loaded once at construction and stays authoritative
/// for the session. Every mutation rewrites the persisted document in full;
/// a failed write is logged and otherwise ignored.
pub struct ListStore {
    lists: Vec<ShoppingList>,
    repository: Arc<dyn ShoppingListRepository>,
    logger: Arc<dyn Logger>,
}

impl ListStore {
    /// Loads the persisted collection, degrading to empty when the document
    /// is absent or unreadable. Never fails.
    pub async fn load(
        repository: Arc<dyn ShoppingListRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let lists = match repository.load().await {
            Ok(lists) => lists,
            Err(e) => {
                logger.warn(&format!(
                    "Could not load shopping lists, starting empty: {}",
                    e
                ));
                Vec::new()
            }
        };

        Self {
            lists,
            repository,
            logger,
        }
    }

    /// Appends a new list with the trimmed name. Blank input is a
    /// user-facing validation error and leaves the collection untouched.
    pub async fn create(&mut self, name: &str) -> Result<ShoppingList, ShoppingListError> {
        let list = ShoppingList::new(name)?;

        self.logger
            .info(&format!("Creating shopping list: {}", list.name));
        self.lists.push(list.clone());
        self.persist().await;

        Ok(list)
    }

    /// Removes the matching list, idempotently. The list's persisted item
    /// document is intentionally left behind.
    pub async fn delete(&mut self, id: &ListId) {
        let before = self.lists.len();
        self.lists.retain(|list| &list.id != id);

        if self.lists.len() < before {
            self.logger.info(&format!("Shopping list deleted: {}", id));
        } else {
            self.logger
                .debug(&format!("Delete ignored, no list with id {}", id));
        }
        self.persist().await;
    }

    /// Enumerates the current collection in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ShoppingList> {
        self.lists.iter()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    async fn persist(&self) {
        if let Err(e) = self.repository.store(&self.lists).await {
            self.logger
                .error(&format!("Could not persist shopping lists: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub ShoppingListRepo {}

        #[async_trait]
        impl ShoppingListRepository for ShoppingListRepo {
            async fn load(&self) -> Result<Vec<ShoppingList>, RepositoryError>;
            async fn store(&self, lists: &[ShoppingList]) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn empty_store_repo() -> MockShoppingListRepo {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_load().returning(|| Ok(Vec::new()));
        repo.expect_store().returning(|_| Ok(()));
        repo
    }

    #[tokio::test]
    async fn should_append_one_list_per_valid_create() {
        let mut store = ListStore::load(Arc::new(empty_store_repo()), mock_logger()).await;

        let created = store.create("  Weekly groceries  ").await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(created.name, "Weekly groceries");
        assert_eq!(store.iter().next().unwrap().name, "Weekly groceries");
    }

    #[tokio::test]
    async fn should_leave_collection_unchanged_on_blank_name() {
        let mut store = ListStore::load(Arc::new(empty_store_repo()), mock_logger()).await;

        assert!(matches!(
            store.create("").await.unwrap_err(),
            ShoppingListError::NameEmpty
        ));
        assert!(matches!(
            store.create("   ").await.unwrap_err(),
            ShoppingListError::NameEmpty
        ));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn should_delete_idempotently() {
        let mut store = ListStore::load(Arc::new(empty_store_repo()), mock_logger()).await;
        let kept = store.create("Keep").await.unwrap();
        let gone = store.create("Delete me").await.unwrap();

        store.delete(&gone.id).await;
        store.delete(&gone.id).await;

        assert_eq!(store.len(), 1);
        assert!(store.iter().all(|list| list.id != gone.id));
        assert_eq!(store.iter().next().unwrap().id, kept.id);
    }

    #[tokio::test]
    async fn should_preserve_insertion_order() {
        let mut store = ListStore::load(Arc::new(empty_store_repo()), mock_logger()).await;
        store.create("First").await.unwrap();
        store.create("Second").await.unwrap();
        store.create("Third").await.unwrap();

        let names: Vec<&str> = store.iter().map(|list| list.name.as_str()).collect();

        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn should_start_empty_when_load_fails() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_load().returning(|| Err(RepositoryError::CorruptDocument));

        let store = ListStore::load(Arc::new(repo), mock_logger()).await;

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn should_keep_in_memory_state_when_write_fails() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_load().returning(|| Ok(Vec::new()));
        repo.expect_store()
            .returning(|_| Err(RepositoryError::Storage));

        let mut store = ListStore::load(Arc::new(repo), mock_logger()).await;
        let result = store.create("Survives").await;

        assert!(result.is_ok());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn should_rewrite_full_collection_on_every_mutation() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_load().returning(|| Ok(Vec::new()));
        repo.expect_store()
            .withf(|lists: &[ShoppingList]| lists.len() <= 2)
            .times(3)
            .returning(|_| Ok(()));

        let mut store = ListStore::load(Arc::new(repo), mock_logger()).await;
        store.create("A").await.unwrap();
        let b = store.create("B").await.unwrap();
        store.delete(&b.id).await;
    }
}
