//! Data models for the Elidune catalog

pub mod enums;
pub mod item;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use enums::ItemStatus;
pub use item::{Item, ItemDetails, NewItem, UpdateItem};
pub use loan::Loan;
pub use user::{NewUser, UpdateUser, User};
