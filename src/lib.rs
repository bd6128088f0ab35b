//! Elidune Catalog
//!
//! An in-memory library catalog and loan engine: registries of items (books,
//! magazines, multimedia) and users, borrow/return transitions, and late-return
//! fines. Front ends drive it either directly through [`Library`] or through the
//! JSON command adapter in [`api`].

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::{Clock, Library, SystemClock};
