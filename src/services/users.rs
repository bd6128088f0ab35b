//! User management: borrower registry operations

use super::Library;
use crate::{
    error::{AppError, AppResult, Entity},
    models::user::{NewUser, UpdateUser, User},
};

impl Library {
    /// Register a user under a fresh id
    pub fn add_user(&mut self, user: NewUser) -> User {
        let user = self
            .repository
            .users
            .create(user, self.users_config.default_max_borrow_limit);
        tracing::info!("User '{}' registered with id={}", user.name, user.id);
        user
    }

    pub fn find_user(&self, id: i32) -> Option<&User> {
        let user = self.repository.users.find(id);
        if user.is_none() {
            tracing::debug!("User lookup missed: id={}", id);
        }
        user
    }

    /// Overwrite the given fields of a user.
    ///
    /// Replacing `borrowed_item_ids` here does not touch loans or item status.
    pub fn update_user(&mut self, id: i32, changes: UpdateUser) -> AppResult<User> {
        let user = self.repository.users.get_mut(id)?;
        user.apply(changes);
        tracing::info!("User id={} has been updated", id);
        Ok(user.clone())
    }

    /// Remove a user who holds no borrowed items
    pub fn delete_user(&mut self, id: i32) -> AppResult<User> {
        let user = self.repository.users.get_by_id(id)?;
        if !user.borrowed_item_ids.is_empty() {
            return Err(AppError::conflict(
                Entity::User,
                format!(
                    "Cannot delete user {}: {} item(s) still borrowed",
                    id,
                    user.borrowed_item_ids.len()
                ),
            ));
        }

        let user = self.repository.users.delete(id)?;
        tracing::info!("User with id={} has been deleted", id);
        Ok(user)
    }

    pub fn list_users(&self) -> Vec<&User> {
        self.repository.users.all().collect()
    }

    /// Users whose name contains `query`, ignoring case
    pub fn search_users_by_name(&self, query: &str) -> Vec<&User> {
        self.repository.users.search_by_name(query)
    }
}
