use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ListId;

use super::model::ShoppingItem;

/// Port over one list's persisted item collection, addressed by the owning
/// list's id. Same whole-document contract as the list repository.
#[async_trait]
pub trait ShoppingItemRepository: Send + Sync {
    /// Loads the full item collection of one list. An absent document is the
    /// empty collection.
    async fn load(&self, list_id: &ListId) -> Result<Vec<ShoppingItem>, RepositoryError>;
    /// Rewrites the full item collection of one list.
    async fn store(&self, list_id: &ListId, items: &[ShoppingItem])
    -> Result<(), RepositoryError>;
}
