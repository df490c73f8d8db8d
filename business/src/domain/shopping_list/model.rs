use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::ListId;

use super::errors::ShoppingListError;

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingList {
    pub id: ListId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl ShoppingList {
    /// Creates a list with a fresh id. The name is stored trimmed; a name
    /// that is blank after trimming is rejected.
    pub fn new(name: &str) -> Result<Self, ShoppingListError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ShoppingListError::NameEmpty);
        }

        Ok(Self {
            id: ListId::generate(),
            name: trimmed.to_string(),
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ListId, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_list_when_name_valid() {
        let result = ShoppingList::new("Weekly groceries");

        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "Weekly groceries");
    }

    #[test]
    fn should_store_trimmed_name() {
        let list = ShoppingList::new("  Barbecue  ").unwrap();

        assert_eq!(list.name, "Barbecue");
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = ShoppingList::new("");

        assert!(matches!(result.unwrap_err(), ShoppingListError::NameEmpty));
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let result = ShoppingList::new("   ");

        assert!(matches!(result.unwrap_err(), ShoppingListError::NameEmpty));
    }

    #[test]
    fn should_assign_distinct_ids() {
        let a = ShoppingList::new("A").unwrap();
        let b = ShoppingList::new("B").unwrap();

        assert_ne!(a.id, b.id);
    }
}
