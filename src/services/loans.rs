//! Loan management: borrow/return transitions and loan queries

use rust_decimal::Decimal;

use super::Library;
use crate::{
    error::{AppError, AppResult},
    models::{enums::ItemStatus, loan::Loan},
};

impl Library {
    /// Lend an available item to a user.
    ///
    /// Fails with `NotFound` (user, then item), `Unavailable` if the item is not
    /// `Available`, or `LimitReached` if the user already holds `max_borrow_limit`
    /// items. On success the item becomes `Borrowed`, joins the user's borrowed
    /// list, and a loan due `duration_days` from today is opened.
    pub fn borrow(&mut self, user_id: i32, item_id: i32) -> AppResult<Loan> {
        let user = self.repository.users.get_by_id(user_id)?;
        let item = self.repository.items.get_by_id(item_id)?;

        if !item.is_available() {
            return Err(AppError::Unavailable {
                item_id,
                status: item.status.to_string(),
            });
        }
        if user.has_reached_limit() {
            return Err(AppError::LimitReached {
                user_id,
                limit: user.max_borrow_limit,
            });
        }

        let today = self.clock.today();
        let title = item.title.clone();
        let name = user.name.clone();

        self.repository.items.get_mut(item_id)?.status = ItemStatus::Borrowed;
        self.repository
            .users
            .get_mut(user_id)?
            .borrowed_item_ids
            .insert(item_id);
        let loan = self.repository.loans.create(
            item_id,
            user_id,
            today,
            self.loans_config.duration_days,
        );

        tracing::info!(
            "Item '{}' borrowed by '{}' (loan id={}), due {}",
            title, name, loan.id, loan.due_date
        );
        Ok(loan)
    }

    /// Take back an item from a user and close its loan.
    ///
    /// Fails with `NotFound` (user, then item), `NotBorrowedByUser` if the item is
    /// not in the user's borrowed list, or `NoActiveLoan` if no open loan links the
    /// two. On success the item becomes `Available` and the closed loan, with its
    /// fine, is returned.
    pub fn return_item(&mut self, user_id: i32, item_id: i32) -> AppResult<Loan> {
        let user = self.repository.users.get_by_id(user_id)?;
        self.repository.items.get_by_id(item_id)?;

        if !user.has_borrowed(item_id) {
            return Err(AppError::NotBorrowedByUser { user_id, item_id });
        }
        let loan_id = self
            .repository
            .loans
            .find_open(user_id, item_id)
            .ok_or(AppError::NoActiveLoan { user_id, item_id })?;

        let today = self.clock.today();

        self.repository.items.get_mut(item_id)?.status = ItemStatus::Available;
        self.repository
            .users
            .get_mut(user_id)?
            .borrowed_item_ids
            .shift_remove(&item_id);
        let loan = self.repository.loans.get_mut(loan_id)?;
        let fine = loan.close(today, self.loans_config.fine_per_day);

        tracing::info!("Item id={} returned by user id={} (loan id={})", item_id, user_id, loan_id);
        if fine > Decimal::ZERO {
            tracing::warn!(
                "A fine of {} has been applied to loan id={} for late return",
                fine.round_dp(2),
                loan_id
            );
        }
        Ok(loan.clone())
    }

    pub fn find_loan(&self, id: i32) -> Option<&Loan> {
        self.repository.loans.find(id)
    }

    /// Every loan ever opened, oldest first
    pub fn list_loans(&self) -> Vec<&Loan> {
        self.repository.loans.all().collect()
    }

    /// Open loans of a user
    pub fn user_loans(&self, user_id: i32) -> AppResult<Vec<&Loan>> {
        self.repository.users.get_by_id(user_id)?;
        Ok(self.repository.loans.open_for_user(user_id))
    }

    pub fn active_loans(&self) -> Vec<&Loan> {
        self.repository.loans.open().collect()
    }

    /// Open loans whose due date is before today
    pub fn overdue_loans(&self) -> Vec<&Loan> {
        self.repository.loans.overdue(self.clock.today())
    }

    pub fn count_active(&self) -> usize {
        self.repository.loans.open().count()
    }

    pub fn count_overdue(&self) -> usize {
        self.overdue_loans().len()
    }
}
