use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::shopping_list::model::ShoppingList;
use business::domain::shopping_list::repository::ShoppingListRepository;

use crate::storage::{KeyValueStorage, StorageKeys};

use super::entity::ShoppingListEntity;

/// List repository over the opaque key-value store. The whole collection
/// lives as one JSON array under a fixed key.
pub struct ShoppingListRepositoryKv {
    storage: Arc<dyn KeyValueStorage>,
    keys: StorageKeys,
}

impl ShoppingListRepositoryKv {
    pub fn new(storage: Arc<dyn KeyValueStorage>, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }
}

#[async_trait]
impl ShoppingListRepository for ShoppingListRepositoryKv {
    async fn load(&self) -> Result<Vec<ShoppingList>, RepositoryError> {
        let Some(payload) = self
            .storage
            .get(&self.keys.lists_key)
            .await
            .map_err(|_| RepositoryError::Storage)?
        else {
            return Ok(Vec::new());
        };

        let entities: Vec<ShoppingListEntity> =
            serde_json::from_str(&payload).map_err(|_| RepositoryError::CorruptDocument)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn store(&self, lists: &[ShoppingList]) -> Result<(), RepositoryError> {
        let entities: Vec<ShoppingListEntity> =
            lists.iter().map(ShoppingListEntity::from_domain).collect();
        let payload =
            serde_json::to_string(&entities).map_err(|_| RepositoryError::Storage)?;

        self.storage
            .set(&self.keys.lists_key, &payload)
            .await
            .map_err(|_| RepositoryError::Storage)
    }
}
