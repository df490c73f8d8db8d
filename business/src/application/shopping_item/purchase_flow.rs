use crate::domain::shared::value_objects::ItemId;

/// Quantity and price texts carried into the detail-capture prompt, taken
/// from a prior purchase of the same item when there was one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseDetails {
    pub quantity: Option<String>,
    pub price: Option<String>,
}

/// Terminal signal of the flow; the only thing the item store ever receives.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmedPurchase {
    pub item_id: ItemId,
    pub quantity: String,
    pub price: String,
}

/// Two-phase capture of purchase details.
///
/// Checking a pending item mutates nothing; it opens this flow. The store
/// is only touched through the terminal confirmation, or not at all when
/// the capture is cancelled.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PurchaseFlow {
    #[default]
    Idle,
    AwaitingDetails {
        item_id: ItemId,
        prefill: PurchaseDetails,
    },
}

impl PurchaseFlow {
    /// Opens the capture for an item. Opening while another capture is in
    /// flight replaces it, matching a prompt that is re-targeted by checking
    /// a different item.
    pub fn open(&mut self, item_id: ItemId, prefill: PurchaseDetails) {
        *self = PurchaseFlow::AwaitingDetails { item_id, prefill };
    }

    /// Abandons the capture without touching the store.
    pub fn cancel(&mut self) {
        *self = PurchaseFlow::Idle;
    }

    /// Closes the capture with the entered details. Returns `None` when no
    /// capture was in flight.
    pub fn confirm(&mut self, quantity: String, price: String) -> Option<ConfirmedPurchase> {
        match std::mem::take(self) {
            PurchaseFlow::Idle => None,
            PurchaseFlow::AwaitingDetails { item_id, .. } => Some(ConfirmedPurchase {
                item_id,
                quantity,
                price,
            }),
        }
    }

    pub fn prefill(&self) -> Option<&PurchaseDetails> {
        match self {
            PurchaseFlow::Idle => None,
            PurchaseFlow::AwaitingDetails { prefill, .. } => Some(prefill),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, PurchaseFlow::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_idle() {
        let flow = PurchaseFlow::default();

        assert!(!flow.is_open());
        assert!(flow.prefill().is_none());
    }

    #[test]
    fn should_expose_prefill_while_awaiting() {
        let mut flow = PurchaseFlow::default();
        let prefill = PurchaseDetails {
            quantity: Some("2".to_string()),
            price: Some("4,50".to_string()),
        };

        flow.open(ItemId::generate(), prefill.clone());

        assert!(flow.is_open());
        assert_eq!(flow.prefill(), Some(&prefill));
    }

    #[test]
    fn should_confirm_with_the_item_it_was_opened_for() {
        let mut flow = PurchaseFlow::default();
        let item_id = ItemId::generate();
        flow.open(item_id, PurchaseDetails::default());

        let confirmed = flow.confirm("3".to_string(), "5,50".to_string());

        let confirmed = confirmed.unwrap();
        assert_eq!(confirmed.item_id, item_id);
        assert_eq!(confirmed.quantity, "3");
        assert_eq!(confirmed.price, "5,50");
        assert!(!flow.is_open());
    }

    #[test]
    fn should_return_none_when_confirming_idle_flow() {
        let mut flow = PurchaseFlow::default();

        assert!(flow.confirm("1".to_string(), "1,00".to_string()).is_none());
    }

    #[test]
    fn should_discard_capture_on_cancel() {
        let mut flow = PurchaseFlow::default();
        flow.open(ItemId::generate(), PurchaseDetails::default());

        flow.cancel();

        assert!(!flow.is_open());
        assert!(flow.confirm("1".to_string(), "1,00".to_string()).is_none());
    }

    #[test]
    fn should_retarget_when_opened_again() {
        let mut flow = PurchaseFlow::default();
        let first = ItemId::generate();
        let second = ItemId::generate();
        flow.open(first, PurchaseDetails::default());

        flow.open(second, PurchaseDetails::default());
        let confirmed = flow.confirm("1".to_string(), "2,00".to_string()).unwrap();

        assert_eq!(confirmed.item_id, second);
    }
}
