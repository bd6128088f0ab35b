//! Items registry

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult, Entity},
    models::item::{Item, NewItem},
};

#[derive(Debug, Clone, Default)]
pub struct ItemsRepository {
    items: IndexMap<i32, Item>,
    last_id: i32,
}

impl ItemsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get item by ID
    pub fn get_by_id(&self, id: i32) -> AppResult<&Item> {
        self.items
            .get(&id)
            .ok_or_else(|| AppError::not_found(Entity::Item, id))
    }

    pub fn get_mut(&mut self, id: i32) -> AppResult<&mut Item> {
        self.items
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(Entity::Item, id))
    }

    pub fn find(&self, id: i32) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Store a new item under the next id
    pub fn create(&mut self, item: NewItem) -> Item {
        self.last_id += 1;
        let item = Item::from_new(self.last_id, item);
        self.items.insert(item.id, item.clone());
        item
    }

    /// Remove an item, keeping the order of the remaining ones
    pub fn delete(&mut self, id: i32) -> AppResult<Item> {
        self.items
            .shift_remove(&id)
            .ok_or_else(|| AppError::not_found(Entity::Item, id))
    }

    pub fn all(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Case-insensitive substring match on title
    pub fn search_by_title(&self, query: &str) -> Vec<&Item> {
        let query = query.to_lowercase();
        self.items
            .values()
            .filter(|item| item.title.to_lowercase().contains(&query))
            .collect()
    }

    /// Case-insensitive exact match on status name
    pub fn filter_by_status(&self, status: &str) -> Vec<&Item> {
        self.items
            .values()
            .filter(|item| item.status.matches(status))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
