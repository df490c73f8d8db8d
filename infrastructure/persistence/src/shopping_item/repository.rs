use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ListId;
use business::domain::shopping_item::model::ShoppingItem;
use business::domain::shopping_item::repository::ShoppingItemRepository;

use crate::storage::{KeyValueStorage, StorageKeys};

use super::entity::ShoppingItemEntity;

/// Item repository over the opaque key-value store. Each list's collection
/// lives as one JSON array under a key derived from the list id.
pub struct ShoppingItemRepositoryKv {
    storage: Arc<dyn KeyValueStorage>,
    keys: StorageKeys,
}

impl ShoppingItemRepositoryKv {
    pub fn new(storage: Arc<dyn KeyValueStorage>, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }
}

#[async_trait]
impl ShoppingItemRepository for ShoppingItemRepositoryKv {
    async fn load(&self, list_id: &ListId) -> Result<Vec<ShoppingItem>, RepositoryError> {
        let Some(payload) = self
            .storage
            .get(&self.keys.items_key(list_id))
            .await
            .map_err(|_| RepositoryError::Storage)?
        else {
            return Ok(Vec::new());
        };

        let entities: Vec<ShoppingItemEntity> =
            serde_json::from_str(&payload).map_err(|_| RepositoryError::CorruptDocument)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn store(
        &self,
        list_id: &ListId,
        items: &[ShoppingItem],
    ) -> Result<(), RepositoryError> {
        let entities: Vec<ShoppingItemEntity> =
            items.iter().map(ShoppingItemEntity::from_domain).collect();
        let payload =
            serde_json::to_string(&entities).map_err(|_| RepositoryError::Storage)?;

        self.storage
            .set(&self.keys.items_key(list_id), &payload)
            .await
            .map_err(|_| RepositoryError::Storage)
    }
}
