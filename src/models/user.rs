//! User (borrower) model and related types

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Full user model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub contact_info: String,
    pub max_borrow_limit: u32,
    /// Ids of the items this user currently holds, in borrow order
    pub borrowed_item_ids: IndexSet<i32>,
}

/// Create user request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub contact_info: String,
    /// Falls back to the configured default when absent
    pub max_borrow_limit: Option<u32>,
}

/// Partial user update; only the fields present are overwritten.
///
/// `borrowed_item_ids` is an administrative override: it replaces the list as given
/// (duplicates collapsed) without checking it against open loans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub contact_info: Option<String>,
    pub max_borrow_limit: Option<u32>,
    pub borrowed_item_ids: Option<Vec<i32>>,
}

impl User {
    pub fn from_new(id: i32, user: NewUser, default_limit: u32) -> Self {
        Self {
            id,
            name: user.name,
            contact_info: user.contact_info,
            max_borrow_limit: user.max_borrow_limit.unwrap_or(default_limit),
            borrowed_item_ids: IndexSet::new(),
        }
    }

    pub fn has_reached_limit(&self) -> bool {
        self.borrowed_item_ids.len() >= self.max_borrow_limit as usize
    }

    pub fn has_borrowed(&self, item_id: i32) -> bool {
        self.borrowed_item_ids.contains(&item_id)
    }

    pub fn apply(&mut self, changes: UpdateUser) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(contact_info) = changes.contact_info {
            self.contact_info = contact_info;
        }
        if let Some(limit) = changes.max_borrow_limit {
            self.max_borrow_limit = limit;
        }
        if let Some(ids) = changes.borrowed_item_ids {
            self.borrowed_item_ids = ids.into_iter().collect();
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "User ID: {}", self.id)?;
        writeln!(f, "  Name: {}", self.name)?;
        writeln!(f, "  Contact: {}", self.contact_info)?;
        write!(
            f,
            "  Borrowed Items: {}/{}",
            self.borrowed_item_ids.len(),
            self.max_borrow_limit
        )
    }
}
