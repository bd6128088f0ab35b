//! Catalog management: item registry operations

use super::Library;
use crate::{
    error::{AppError, AppResult, Entity},
    models::{
        enums::ItemStatus,
        item::{Item, NewItem, UpdateItem},
    },
};

impl Library {
    /// Add an item to the catalog under a fresh id, status `Available`
    pub fn add_item(&mut self, item: NewItem) -> Item {
        let item = self.repository.items.create(item);
        tracing::info!("Item '{}' added with id={} ({})", item.title, item.id, item.details.kind());
        item
    }

    pub fn find_item(&self, id: i32) -> Option<&Item> {
        let item = self.repository.items.find(id);
        if item.is_none() {
            tracing::debug!("Item lookup missed: id={}", id);
        }
        item
    }

    /// Overwrite the given fields of an item.
    ///
    /// A `status` change here is an administrative correction: it does not create or
    /// close loans. Marking a borrowed item `Lost` leaves its loan open.
    pub fn update_item(&mut self, id: i32, changes: UpdateItem) -> AppResult<Item> {
        let item = self.repository.items.get_mut(id)?;
        let previous_status = item.status;
        item.apply(changes);

        if item.status != previous_status {
            tracing::info!(
                "Item id={} status changed administratively: {} -> {}",
                id, previous_status, item.status
            );
        }
        tracing::info!("Item id={} has been updated", id);
        Ok(item.clone())
    }

    /// Permanently remove an item that is not currently borrowed
    pub fn delete_item(&mut self, id: i32) -> AppResult<Item> {
        let item = self.repository.items.get_by_id(id)?;
        if item.status == ItemStatus::Borrowed {
            return Err(AppError::conflict(
                Entity::Item,
                format!("Cannot delete item {}: it is currently borrowed", id),
            ));
        }

        let item = self.repository.items.delete(id)?;
        tracing::info!("Item with id={} has been deleted", id);
        Ok(item)
    }

    /// All items, in the order they were added
    pub fn list_items(&self) -> Vec<&Item> {
        self.repository.items.all().collect()
    }

    pub fn search_by_title(&self, query: &str) -> Vec<&Item> {
        self.repository.items.search_by_title(query)
    }

    /// Items whose status name equals `status`, ignoring case
    pub fn filter_by_status(&self, status: &str) -> Vec<&Item> {
        self.repository.items.filter_by_status(status)
    }
}
