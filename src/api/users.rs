//! User handlers

use serde_json::Value;
use validator::Validate;

use super::items::DeleteResponse;
use crate::{
    error::{AppError, AppResult},
    models::user::{NewUser, UpdateUser},
    services::Library,
};

pub fn create_user(library: &mut Library, user: NewUser) -> AppResult<Value> {
    user.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = library.add_user(user);
    Ok(serde_json::to_value(user)?)
}

/// Get user by ID; `null` when absent
pub fn get_user(library: &Library, id: i32) -> AppResult<Value> {
    Ok(serde_json::to_value(library.find_user(id))?)
}

pub fn update_user(library: &mut Library, id: i32, changes: UpdateUser) -> AppResult<Value> {
    let user = library.update_user(id, changes)?;
    Ok(serde_json::to_value(user)?)
}

pub fn delete_user(library: &mut Library, id: i32) -> AppResult<Value> {
    let deleted = library.delete_user(id)?;
    Ok(serde_json::to_value(DeleteResponse {
        status: "deleted".to_string(),
        deleted,
    })?)
}

pub fn list_users(library: &Library) -> AppResult<Value> {
    Ok(serde_json::to_value(library.list_users())?)
}

pub fn search_users(library: &Library, name: &str) -> AppResult<Value> {
    Ok(serde_json::to_value(library.search_users_by_name(name))?)
}
