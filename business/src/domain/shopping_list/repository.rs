use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ShoppingList;

/// Port over the persisted list collection.
///
/// The collection is always read and rewritten as one whole document; there
/// are no per-record operations.
#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    /// Loads the full collection. An absent document is the empty collection.
    async fn load(&self) -> Result<Vec<ShoppingList>, RepositoryError>;
    /// Rewrites the full collection, replacing the previous document.
    async fn store(&self, lists: &[ShoppingList]) -> Result<(), RepositoryError>;
}
