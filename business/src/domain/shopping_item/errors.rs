#[derive(Debug, thiserror::Error)]
pub enum ShoppingItemError {
    #[error("shopping_item.name_empty")]
    NameEmpty,
}
