use validator::Validate;

use crate::domain::validation::{is_document, is_name, is_phone};

/// An account as the service sees it. `id` stays `None` until the record has
/// been persisted and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Account {
    pub id: Option<String>,

    #[validate(custom(function = "is_name"))]
    pub name: String,

    #[validate(custom(function = "is_document"))]
    pub document: String,

    #[validate(custom(function = "is_phone"))]
    pub phone: String,
}

impl Account {
    pub fn new(name: impl Into<String>, document: impl Into<String>, phone: impl Into<String>) -> Self {
        Account {
            id: None,
            name: name.into(),
            document: document.into(),
            phone: phone.into(),
        }
    }

    /// Replaces the mutable fields with the ones from `changes`, keeping the identifier.
    pub fn apply(self, changes: Account) -> Self {
        Account {
            id: self.id,
            name: changes.name,
            document: changes.document,
            phone: changes.phone,
        }
    }
}
