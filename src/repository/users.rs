//! Users registry

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult, Entity},
    models::user::{NewUser, User},
};

#[derive(Debug, Clone, Default)]
pub struct UsersRepository {
    users: IndexMap<i32, User>,
    last_id: i32,
}

impl UsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get user by ID
    pub fn get_by_id(&self, id: i32) -> AppResult<&User> {
        self.users
            .get(&id)
            .ok_or_else(|| AppError::not_found(Entity::User, id))
    }

    pub fn get_mut(&mut self, id: i32) -> AppResult<&mut User> {
        self.users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(Entity::User, id))
    }

    pub fn find(&self, id: i32) -> Option<&User> {
        self.users.get(&id)
    }

    /// Store a new user under the next id
    pub fn create(&mut self, user: NewUser, default_limit: u32) -> User {
        self.last_id += 1;
        let user = User::from_new(self.last_id, user, default_limit);
        self.users.insert(user.id, user.clone());
        user
    }

    pub fn delete(&mut self, id: i32) -> AppResult<User> {
        self.users
            .shift_remove(&id)
            .ok_or_else(|| AppError::not_found(Entity::User, id))
    }

    pub fn all(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Case-insensitive substring match on name
    pub fn search_by_name(&self, query: &str) -> Vec<&User> {
        let query = query.to_lowercase();
        self.users
            .values()
            .filter(|user| user.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
