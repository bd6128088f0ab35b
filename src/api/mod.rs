//! Request/response adapter between a front end and the catalog engine.
//!
//! A request is one JSON object tagged by `command`; the reply is either
//! `{"status":"ok","data":...}` or `{"status":"error","code":..,"error":..,"message":..}`.

pub mod items;
pub mod loans;
pub mod users;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::{NewItem, NewUser, UpdateItem, UpdateUser},
    services::Library,
};

/// Commands understood by [`handle`]
#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Request {
    AddItem { item: NewItem },
    FindItem { id: i32 },
    UpdateItem { id: i32, changes: UpdateItem },
    DeleteItem { id: i32 },
    ListItems,
    SearchItems { title: String },
    FilterItems { status: String },
    AddUser { user: NewUser },
    FindUser { id: i32 },
    UpdateUser { id: i32, changes: UpdateUser },
    DeleteUser { id: i32 },
    ListUsers,
    SearchUsers { name: String },
    Borrow { user_id: i32, item_id: i32 },
    Return { user_id: i32, item_id: i32 },
    FindLoan { id: i32 },
    UserLoans { user_id: i32 },
    ActiveLoans,
    OverdueLoans,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Ok { data: Value },
    Error(ErrorResponse),
}

impl From<AppResult<Value>> for Response {
    fn from(result: AppResult<Value>) -> Self {
        match result {
            Ok(data) => Response::Ok { data },
            Err(e) => Response::Error(ErrorResponse::from(&e)),
        }
    }
}

/// Dispatch one request to the engine
pub fn handle(library: &mut Library, request: Request) -> AppResult<Value> {
    match request {
        Request::AddItem { item } => items::create_item(library, item),
        Request::FindItem { id } => items::get_item(library, id),
        Request::UpdateItem { id, changes } => items::update_item(library, id, changes),
        Request::DeleteItem { id } => items::delete_item(library, id),
        Request::ListItems => items::list_items(library),
        Request::SearchItems { title } => items::search_items(library, &title),
        Request::FilterItems { status } => items::filter_items(library, &status),
        Request::AddUser { user } => users::create_user(library, user),
        Request::FindUser { id } => users::get_user(library, id),
        Request::UpdateUser { id, changes } => users::update_user(library, id, changes),
        Request::DeleteUser { id } => users::delete_user(library, id),
        Request::ListUsers => users::list_users(library),
        Request::SearchUsers { name } => users::search_users(library, &name),
        Request::Borrow { user_id, item_id } => loans::create_loan(library, user_id, item_id),
        Request::Return { user_id, item_id } => loans::return_loan(library, user_id, item_id),
        Request::FindLoan { id } => loans::get_loan(library, id),
        Request::UserLoans { user_id } => loans::get_user_loans(library, user_id),
        Request::ActiveLoans => loans::active_loans(library),
        Request::OverdueLoans => loans::overdue_loans(library),
    }
}

/// Parse a JSON request line, run it and render the JSON reply
pub fn handle_line(library: &mut Library, line: &str) -> String {
    let result = serde_json::from_str::<Request>(line)
        .map_err(|e| AppError::BadRequest(e.to_string()))
        .and_then(|request| handle(library, request));

    if let Err(ref e) = result {
        tracing::debug!("Request failed: {}", e);
    }

    serde_json::to_string(&Response::from(result)).unwrap_or_else(|e| {
        tracing::error!("Failed to render response: {}", e);
        r#"{"status":"error","code":1,"error":"Serialization","message":"failed to render response"}"#
            .to_string()
    })
}
