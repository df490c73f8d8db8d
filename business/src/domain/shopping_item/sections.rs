use super::model::ShoppingItem;

/// Display groups in their fixed order: pending first, purchased second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Pending,
    Purchased,
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionKind::Pending => write!(f, "pending"),
            SectionKind::Purchased => write!(f, "purchased"),
        }
    }
}

/// One labeled group of items, in their original relative order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub items: Vec<ShoppingItem>,
}

/// Splits a collection into its pending and purchased groups. Both groups
/// are always present, even when empty, and each preserves the original
/// relative order of its items.
pub fn partition(items: &[ShoppingItem]) -> [Section; 2] {
    let (purchased, pending): (Vec<ShoppingItem>, Vec<ShoppingItem>) =
        items.iter().cloned().partition(|item| item.purchased);

    [
        Section {
            kind: SectionKind::Pending,
            items: pending,
        },
        Section {
            kind: SectionKind::Purchased,
            items: purchased,
        },
    ]
}
