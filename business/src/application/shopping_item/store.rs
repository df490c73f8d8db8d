use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{ItemId, ListId};
use crate::domain::shopping_item::cart::{self, CartSummary};
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::sections::{self, Section};

use super::purchase_flow::PurchaseDetails;

/// Whether purchased items may be deleted. The reference behavior hides the
/// delete affordance once an item is in the cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletePolicy {
    #[default]
    PendingOnly,
    Any,
}

/// Result of checking an item off or back on.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    /// The item was purchased and is pending again. Its quantity and price
    /// stay in storage but no longer count anywhere.
    Unmarked,
    /// The item is pending; purchase details must be captured and confirmed
    /// before anything is mutated.
    DetailsRequired {
        item_id: ItemId,
        prefill: PurchaseDetails,
    },
    /// No item with that id; nothing happened.
    NotFound,
}

/// In-memory owner of one list's item collection, plus its derived views.
///
/// Same session contract as the list store: loaded once, authoritative in
/// memory, full-document rewrite on every mutation, write failures logged
/// and ignored.
pub struct ItemStore {
    list_id: ListId,
    items: Vec<ShoppingItem>,
    repository: Arc<dyn ShoppingItemRepository>,
    logger: Arc<dyn Logger>,
    delete_policy: DeletePolicy,
}

impl ItemStore {
    /// Loads the item collection persisted under the list's key, degrading
    /// to empty when the document is absent or unreadable. Never fails.
    pub async fn load(
        list_id: ListId,
        repository: Arc<dyn ShoppingItemRepository>,
        logger: Arc<dyn Logger>,
        delete_policy: DeletePolicy,
    ) -> Self {
        let items = match repository.load(&list_id).await {
            Ok(items) => items,
            Err(e) => {
                logger.warn(&format!(
                    "Could not load items of list {}, starting empty: {}",
                    list_id, e
                ));
                Vec::new()
            }
        };

        Self {
            list_id,
            items,
            repository,
            logger,
            delete_policy,
        }
    }

    pub fn list_id(&self) -> &ListId {
        &self.list_id
    }

    /// Appends a pending item. Blank input is silently dropped; unlike list
    /// creation, item creation never surfaces a validation message.
    pub async fn add_item(&mut self, name: &str) -> Option<ShoppingItem> {
        let item = match ShoppingItem::new(name) {
            Ok(item) => item,
            Err(ShoppingItemError::NameEmpty) => {
                self.logger.debug("Ignoring blank item name");
                return None;
            }
        };

        self.logger
            .info(&format!("Adding item to list {}: {}", self.list_id, item.name));
        self.items.push(item.clone());
        self.persist().await;

        Some(item)
    }

    /// Checks an item off or back on.
    ///
    /// A purchased item goes back to pending immediately, details retained.
    /// A pending item is NOT mutated here; the caller gets the prefill for
    /// the detail capture and applies it through [`Self::confirm_purchase`].
    pub async fn toggle_purchased(&mut self, item_id: &ItemId) -> ToggleOutcome {
        let Some(item) = self.items.iter_mut().find(|item| &item.id == item_id) else {
            self.logger
                .debug(&format!("Toggle ignored, no item with id {}", item_id));
            return ToggleOutcome::NotFound;
        };

        if item.purchased {
            item.unmark_purchased();
            self.logger
                .info(&format!("Item back to pending: {}", item_id));
            self.persist().await;
            return ToggleOutcome::Unmarked;
        }

        ToggleOutcome::DetailsRequired {
            item_id: item.id,
            prefill: PurchaseDetails {
                quantity: item.quantity.clone(),
                price: item.price.clone(),
            },
        }
    }

    /// Marks an item as purchased with the entered details, stored exactly
    /// as provided. Unknown ids are ignored.
    pub async fn confirm_purchase(&mut self, item_id: &ItemId, quantity: &str, price: &str) {
        let Some(item) = self.items.iter_mut().find(|item| &item.id == item_id) else {
            self.logger
                .debug(&format!("Purchase ignored, no item with id {}", item_id));
            return;
        };

        item.mark_purchased(quantity.to_string(), price.to_string());
        self.logger
            .info(&format!("Item purchased: {} (qty {})", item_id, quantity));
        self.persist().await;
    }

    /// Removes an item, idempotently, subject to the delete policy.
    pub async fn delete_item(&mut self, item_id: &ItemId) {
        if self.delete_policy == DeletePolicy::PendingOnly
            && self
                .items
                .iter()
                .any(|item| &item.id == item_id && item.purchased)
        {
            self.logger
                .debug(&format!("Refusing to delete purchased item {}", item_id));
            return;
        }

        let before = self.items.len();
        self.items.retain(|item| &item.id != item_id);

        if self.items.len() < before {
            self.logger.info(&format!("Item deleted: {}", item_id));
        } else {
            self.logger
                .debug(&format!("Delete ignored, no item with id {}", item_id));
        }
        self.persist().await;
    }

    /// Enumerates the current collection in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pending-then-purchased display groups, derived on every call.
    pub fn sections(&self) -> [Section; 2] {
        sections::partition(&self.items)
    }

    /// Cart totals over the purchased items, derived on every call.
    pub fn cart_summary(&self) -> CartSummary {
        cart::summarize(&self.items)
    }

    async fn persist(&self) {
        if let Err(e) = self.repository.store(&self.list_id, &self.items).await {
            self.logger.error(&format!(
                "Could not persist items of list {}: {}",
                self.list_id, e
            ));
        }
    }
}
