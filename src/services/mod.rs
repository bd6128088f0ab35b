//! Business logic: the catalog engine.
//!
//! [`Library`] owns the three registries and is the only thing allowed to mutate
//! them. Operations are split by concern across `catalog` (items), `users` and
//! `loans` (borrow/return). Every mutating operation checks all of its
//! preconditions before touching any registry, so a failed call changes nothing.
//!
//! The engine has no internal locking; callers sharing it across threads must wrap
//! the whole `Library` in a single lock.

pub mod catalog;
pub mod clock;
pub mod loans;
pub mod users;

use chrono::NaiveDate;

use crate::{
    config::{AppConfig, LoansConfig, UsersConfig},
    repository::Repository,
};

pub use clock::{Clock, SystemClock};

pub struct Library {
    repository: Repository,
    loans_config: LoansConfig,
    users_config: UsersConfig,
    clock: Box<dyn Clock>,
}

impl Library {
    /// Create an empty library dated by the system clock
    pub fn new(config: &AppConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: &AppConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            repository: Repository::new(),
            loans_config: config.loans.clone(),
            users_config: config.users.clone(),
            clock,
        }
    }

    /// Read-only view of the registries
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("items", &self.repository.items.len())
            .field("users", &self.repository.users.len())
            .field("loans", &self.repository.loans.len())
            .field("loans_config", &self.loans_config)
            .field("users_config", &self.users_config)
            .finish()
    }
}
