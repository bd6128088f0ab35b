//! Loan (borrow) model and related types

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Loan record. Open while `return_date` is `None`; never deleted once closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: i32,
    pub item_id: i32,
    pub user_id: i32,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub fine_amount: Decimal,
}

impl Loan {
    pub fn new(id: i32, item_id: i32, user_id: i32, borrow_date: NaiveDate, duration_days: i64) -> Self {
        Self {
            id,
            item_id,
            user_id,
            borrow_date,
            due_date: borrow_date + Duration::days(duration_days),
            return_date: None,
            fine_amount: Decimal::ZERO,
        }
    }

    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }

    /// Whole days past the due date as of `on`, zero if not late
    pub fn days_overdue(&self, on: NaiveDate) -> i64 {
        (on - self.due_date).num_days().max(0)
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_open() && today > self.due_date
    }

    /// Close the loan on `return_date` and compute its fine
    pub fn close(&mut self, return_date: NaiveDate, fine_per_day: Decimal) -> Decimal {
        self.return_date = Some(return_date);
        self.fine_amount = Decimal::from(self.days_overdue(return_date)) * fine_per_day;
        self.fine_amount
    }
}
