//! Repository layer: in-memory registries for items, users and loans.
//!
//! Each registry keeps its records in insertion order and owns a monotonic id
//! counter starting at 1. Ids are never reused, even after a delete.

pub mod items;
pub mod loans;
pub mod users;

/// Main repository struct holding the three registries
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub items: items::ItemsRepository,
    pub users: users::UsersRepository,
    pub loans: loans::LoansRepository,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }
}
