use std::sync::Arc;

use business::domain::logger::Logger;
use business::domain::shopping_item::repository::ShoppingItemRepository;
use business::domain::shopping_list::repository::ShoppingListRepository;
use logger::TracingLogger;
use persistence::shopping_item::repository::ShoppingItemRepositoryKv;
use persistence::shopping_list::repository::ShoppingListRepositoryKv;
use persistence::storage::{FileStorage, KeyValueStorage, StorageKeys};

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub logger: Arc<dyn Logger>,
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ShoppingItemRepository>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let storage: Arc<dyn KeyValueStorage> =
            Arc::new(FileStorage::new(config.data_dir.clone()));
        let keys = StorageKeys::default();

        let list_repository = Arc::new(ShoppingListRepositoryKv::new(storage.clone(), keys.clone()));
        let item_repository = Arc::new(ShoppingItemRepositoryKv::new(storage, keys));

        Self {
            logger,
            list_repository,
            item_repository,
        }
    }
}
