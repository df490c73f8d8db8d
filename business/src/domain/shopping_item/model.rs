use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::ItemId;

use super::errors::ShoppingItemError;

/// One entry of a shopping list.
///
/// `quantity` and `price` are free-text as entered by the user and are only
/// meaningful while `purchased` is true. Unmarking a purchased item leaves
/// both values in place; displays and the cart summary must ignore them
/// until the item is purchased again.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    pub purchased: bool,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ShoppingItem {
    /// Creates a pending item with a fresh id and no purchase details.
    pub fn new(name: &str) -> Result<Self, ShoppingItemError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ShoppingItemError::NameEmpty);
        }

        Ok(Self {
            id: ItemId::generate(),
            name: trimmed.to_string(),
            purchased: false,
            quantity: None,
            price: None,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ItemId,
        name: String,
        purchased: bool,
        quantity: Option<String>,
        price: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            purchased,
            quantity,
            price,
            created_at,
        }
    }

    /// Marks the item as purchased with the details exactly as entered.
    /// No numeric validation happens here; lenient parsing is the cart
    /// summary's concern.
    pub fn mark_purchased(&mut self, quantity: String, price: String) {
        self.quantity = Some(quantity);
        self.price = Some(price);
        self.purchased = true;
    }

    /// Puts the item back in the pending group. Quantity and price are
    /// retained as prefill for the next purchase.
    pub fn unmark_purchased(&mut self) {
        self.purchased = false;
    }
}
