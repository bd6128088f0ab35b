//! Item (catalog) handlers

use serde::Serialize;
use serde_json::Value;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::item::{Item, NewItem, UpdateItem},
    services::Library,
};

/// Result of a delete
#[derive(Serialize)]
pub struct DeleteResponse<T> {
    pub status: String,
    pub deleted: T,
}

/// Create a new item after checking its required fields
pub fn create_item(library: &mut Library, item: NewItem) -> AppResult<Value> {
    item.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = library.add_item(item);
    Ok(serde_json::to_value(item)?)
}

/// Get item by ID; `null` when absent
pub fn get_item(library: &Library, id: i32) -> AppResult<Value> {
    Ok(serde_json::to_value(library.find_item(id))?)
}

pub fn update_item(library: &mut Library, id: i32, changes: UpdateItem) -> AppResult<Value> {
    let item = library.update_item(id, changes)?;
    Ok(serde_json::to_value(item)?)
}

pub fn delete_item(library: &mut Library, id: i32) -> AppResult<Value> {
    let deleted: Item = library.delete_item(id)?;
    Ok(serde_json::to_value(DeleteResponse {
        status: "deleted".to_string(),
        deleted,
    })?)
}

pub fn list_items(library: &Library) -> AppResult<Value> {
    Ok(serde_json::to_value(library.list_items())?)
}

pub fn search_items(library: &Library, title: &str) -> AppResult<Value> {
    Ok(serde_json::to_value(library.search_by_title(title))?)
}

pub fn filter_items(library: &Library, status: &str) -> AppResult<Value> {
    Ok(serde_json::to_value(library.filter_by_status(status))?)
}
