#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping_list.name_empty")]
    NameEmpty,
}
