use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::ListId;
use business::domain::shopping_list::model::ShoppingList;

/// Wire form of one list record inside the persisted JSON array.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShoppingListEntity {
    pub id: ListId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl ShoppingListEntity {
    pub fn from_domain(list: &ShoppingList) -> Self {
        Self {
            id: list.id,
            name: list.name.clone(),
            created_at: list.created_at,
        }
    }

    pub fn into_domain(self) -> ShoppingList {
        ShoppingList::from_repository(self.id, self.name, self.created_at)
    }
}
