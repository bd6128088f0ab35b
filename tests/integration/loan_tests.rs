use rust_decimal::Decimal;

use elidune_catalog::{
    models::{ItemStatus, UpdateItem},
    AppConfig, AppError, Library,
};

use crate::common::{book, day_zero, library_with_clock, user};

/// Item status, user lists and open loans must agree with each other
fn assert_consistent(library: &Library) {
    for item in library.list_items() {
        let open = library
            .list_loans()
            .into_iter()
            .filter(|l| l.item_id == item.id && l.is_open())
            .count();
        assert_eq!(
            item.status == ItemStatus::Borrowed,
            open == 1,
            "item {} status {} with {} open loan(s)",
            item.id,
            item.status,
            open
        );
    }
    for user in library.list_users() {
        let mut open: Vec<i32> = library
            .user_loans(user.id)
            .unwrap()
            .iter()
            .map(|l| l.item_id)
            .collect();
        let mut held: Vec<i32> = user.borrowed_item_ids.iter().copied().collect();
        open.sort_unstable();
        held.sort_unstable();
        assert_eq!(open, held, "user {}", user.id);
    }
    for loan in library.list_loans() {
        if loan.return_date.map_or(true, |d| d <= loan.due_date) {
            assert_eq!(loan.fine_amount, Decimal::ZERO);
        }
    }
}

#[test]
fn test_dune_scenario() {
    let (mut library, _clock) = library_with_clock(&AppConfig::default());

    assert_eq!(library.add_item(book("Dune")).id, 1);
    assert_eq!(library.add_user(user("Alice")).id, 1);

    library.borrow(1, 1).unwrap();
    assert_eq!(library.find_item(1).unwrap().status, ItemStatus::Borrowed);
    let held: Vec<i32> = library.find_user(1).unwrap().borrowed_item_ids.iter().copied().collect();
    assert_eq!(held, vec![1]);
    assert_consistent(&library);

    let loan = library.return_item(1, 1).unwrap();
    assert_eq!(library.find_item(1).unwrap().status, ItemStatus::Available);
    assert_eq!(loan.return_date, Some(day_zero()));
    assert_eq!(loan.fine_amount, Decimal::ZERO);
    assert_consistent(&library);
}

#[test]
fn test_twenty_day_loan_is_fined_six_days() {
    let (mut library, clock) = library_with_clock(&AppConfig::default());
    library.add_item(book("Dune"));
    library.add_user(user("Alice"));

    library.borrow(1, 1).unwrap();
    clock.advance(20);
    let loan = library.return_item(1, 1).unwrap();

    assert_eq!(loan.fine_amount, Decimal::from(6));
    assert_consistent(&library);
}

#[test]
fn test_return_on_due_date_is_free() {
    let (mut library, clock) = library_with_clock(&AppConfig::default());
    library.add_item(book("Dune"));
    library.add_user(user("Alice"));

    library.borrow(1, 1).unwrap();
    clock.advance(14);
    assert_eq!(library.return_item(1, 1).unwrap().fine_amount, Decimal::ZERO);
}

#[test]
fn test_limit_plus_one_borrow_fails() {
    let (mut library, _clock) = library_with_clock(&AppConfig::default());
    for title in ["A", "B", "C", "D"] {
        library.add_item(book(title));
    }
    library.add_user(user("Alice"));

    for item_id in 1..=3 {
        library.borrow(1, item_id).unwrap();
    }
    assert!(matches!(library.borrow(1, 4), Err(AppError::LimitReached { .. })));
    assert_eq!(library.find_item(4).unwrap().status, ItemStatus::Available);
    assert_consistent(&library);

    library.return_item(1, 2).unwrap();
    library.borrow(1, 4).unwrap();
    let held: Vec<i32> = library.find_user(1).unwrap().borrowed_item_ids.iter().copied().collect();
    assert_eq!(held, vec![1, 3, 4]);
    assert_consistent(&library);
}

#[test]
fn test_failed_return_changes_nothing() {
    let (mut library, _clock) = library_with_clock(&AppConfig::default());
    library.add_item(book("Dune"));
    library.add_item(book("Emma"));
    library.add_user(user("Alice"));
    library.add_user(user("Bob"));
    library.borrow(1, 1).unwrap();

    let items_before: Vec<_> = library.list_items().into_iter().cloned().collect();
    let users_before: Vec<_> = library.list_users().into_iter().cloned().collect();
    let loans_before: Vec<_> = library.list_loans().into_iter().cloned().collect();

    assert!(matches!(library.return_item(2, 1), Err(AppError::NotBorrowedByUser { .. })));
    assert!(matches!(library.return_item(1, 2), Err(AppError::NotBorrowedByUser { .. })));
    assert!(matches!(library.return_item(3, 1), Err(AppError::NotFound { .. })));

    let items_after: Vec<_> = library.list_items().into_iter().cloned().collect();
    let users_after: Vec<_> = library.list_users().into_iter().cloned().collect();
    let loans_after: Vec<_> = library.list_loans().into_iter().cloned().collect();
    assert_eq!(items_before, items_after);
    assert_eq!(users_before, users_after);
    assert_eq!(loans_before, loans_after);
}

#[test]
fn test_delete_after_return() {
    let (mut library, _clock) = library_with_clock(&AppConfig::default());
    library.add_item(book("Dune"));
    library.add_user(user("Alice"));
    library.borrow(1, 1).unwrap();

    assert!(matches!(library.delete_item(1), Err(AppError::Conflict { .. })));
    assert!(matches!(library.delete_user(1), Err(AppError::Conflict { .. })));

    library.return_item(1, 1).unwrap();
    library.delete_item(1).unwrap();
    library.delete_user(1).unwrap();

    assert!(library.list_items().is_empty());
    assert!(library.list_users().is_empty());
    assert_eq!(library.list_loans().len(), 1);
}

#[test]
fn test_overdue_tracking() {
    let (mut library, clock) = library_with_clock(&AppConfig::default());
    library.add_item(book("Dune"));
    library.add_item(book("Emma"));
    library.add_user(user("Alice"));

    library.borrow(1, 1).unwrap();
    clock.advance(10);
    library.borrow(1, 2).unwrap();
    clock.advance(5);

    let overdue: Vec<i32> = library.overdue_loans().iter().map(|l| l.item_id).collect();
    assert_eq!(overdue, vec![1]);
    assert_eq!(library.count_active(), 2);
    assert_eq!(library.count_overdue(), 1);
}

#[test]
fn test_marking_borrowed_item_lost_leaves_loan_open() {
    let (mut library, _clock) = library_with_clock(&AppConfig::default());
    library.add_item(book("Dune"));
    library.add_user(user("Alice"));
    library.borrow(1, 1).unwrap();

    library
        .update_item(1, UpdateItem { status: Some(ItemStatus::Lost), ..Default::default() })
        .unwrap();

    assert_eq!(library.active_loans().len(), 1);
    assert!(library.find_user(1).unwrap().has_borrowed(1));
    // the lost item no longer blocks deletion even though its loan is open
    assert!(library.delete_item(1).is_ok());
    assert!(matches!(library.return_item(1, 1), Err(AppError::NotFound { .. })));
}
