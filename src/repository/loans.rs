//! Loans registry. Loans are append-only: they are closed, never removed.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult, Entity},
    models::loan::Loan,
};

#[derive(Debug, Clone, Default)]
pub struct LoansRepository {
    loans: IndexMap<i32, Loan>,
    last_id: i32,
}

impl LoansRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get loan by ID
    pub fn get_by_id(&self, id: i32) -> AppResult<&Loan> {
        self.loans
            .get(&id)
            .ok_or_else(|| AppError::not_found(Entity::Loan, id))
    }

    pub fn get_mut(&mut self, id: i32) -> AppResult<&mut Loan> {
        self.loans
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(Entity::Loan, id))
    }

    pub fn find(&self, id: i32) -> Option<&Loan> {
        self.loans.get(&id)
    }

    /// Open a new loan starting on `borrow_date`
    pub fn create(&mut self, item_id: i32, user_id: i32, borrow_date: NaiveDate, duration_days: i64) -> Loan {
        self.last_id += 1;
        let loan = Loan::new(self.last_id, item_id, user_id, borrow_date, duration_days);
        self.loans.insert(loan.id, loan.clone());
        loan
    }

    /// Id of the open loan for this user and item, if any
    pub fn find_open(&self, user_id: i32, item_id: i32) -> Option<i32> {
        self.loans
            .values()
            .find(|l| l.user_id == user_id && l.item_id == item_id && l.is_open())
            .map(|l| l.id)
    }

    pub fn all(&self) -> impl Iterator<Item = &Loan> {
        self.loans.values()
    }

    pub fn open(&self) -> impl Iterator<Item = &Loan> {
        self.loans.values().filter(|l| l.is_open())
    }

    /// Open loans of a user, oldest first
    pub fn open_for_user(&self, user_id: i32) -> Vec<&Loan> {
        self.open().filter(|l| l.user_id == user_id).collect()
    }

    pub fn overdue(&self, today: NaiveDate) -> Vec<&Loan> {
        self.loans.values().filter(|l| l.is_overdue(today)).collect()
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }
}
