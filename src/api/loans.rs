//! Loan handlers

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::AppResult,
    models::loan::Loan,
    services::Library,
};

/// Loan response with calculated due date
#[derive(Serialize)]
pub struct LoanResponse {
    /// Loan ID
    pub id: i32,
    pub due_date: NaiveDate,
    /// Status message
    pub message: String,
}

/// Return response with the closed loan
#[derive(Serialize)]
pub struct ReturnResponse {
    pub status: String,
    pub fine_amount: Decimal,
    pub loan: Loan,
}

/// Create a new loan (borrow an item)
pub fn create_loan(library: &mut Library, user_id: i32, item_id: i32) -> AppResult<Value> {
    let loan = library.borrow(user_id, item_id)?;

    Ok(serde_json::to_value(LoanResponse {
        id: loan.id,
        due_date: loan.due_date,
        message: "Item borrowed successfully".to_string(),
    })?)
}

/// Return a borrowed item
pub fn return_loan(library: &mut Library, user_id: i32, item_id: i32) -> AppResult<Value> {
    let loan = library.return_item(user_id, item_id)?;

    Ok(serde_json::to_value(ReturnResponse {
        status: "returned".to_string(),
        fine_amount: loan.fine_amount,
        loan,
    })?)
}

pub fn get_loan(library: &Library, id: i32) -> AppResult<Value> {
    Ok(serde_json::to_value(library.find_loan(id))?)
}

/// Get open loans for a specific user
pub fn get_user_loans(library: &Library, user_id: i32) -> AppResult<Value> {
    Ok(serde_json::to_value(library.user_loans(user_id)?)?)
}

pub fn active_loans(library: &Library) -> AppResult<Value> {
    Ok(serde_json::to_value(library.active_loans())?)
}

pub fn overdue_loans(library: &Library) -> AppResult<Value> {
    Ok(serde_json::to_value(library.overdue_loans())?)
}
