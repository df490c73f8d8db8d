use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::ItemId;
use business::domain::shopping_item::model::ShoppingItem;

/// Wire form of one item record inside a list's persisted JSON array.
/// Quantity and price stay optional free-text, exactly as entered.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShoppingItemEntity {
    pub id: ItemId,
    pub name: String,
    pub purchased: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ShoppingItemEntity {
    pub fn from_domain(item: &ShoppingItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            purchased: item.purchased,
            quantity: item.quantity.clone(),
            price: item.price.clone(),
            created_at: item.created_at,
        }
    }

    pub fn into_domain(self) -> ShoppingItem {
        ShoppingItem::from_repository(
            self.id,
            self.name,
            self.purchased,
            self.quantity,
            self.price,
            self.created_at,
        )
    }
}
