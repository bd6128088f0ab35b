use serde_json::{json, Value};

use elidune_catalog::{api, AppConfig, Library};

use crate::common::library_with_clock;

fn send(library: &mut Library, request: Value) -> Value {
    let reply = api::handle_line(library, &request.to_string());
    serde_json::from_str(&reply).expect("reply is JSON")
}

fn seed(library: &mut Library) {
    let reply = send(
        library,
        json!({
            "command": "add_item",
            "item": {
                "title": "The Hitchhiker's Guide",
                "creator": "Douglas Adams",
                "publication_year": 1979,
                "publisher": "Pan Books",
                "genre": "Comedy Sci-Fi",
                "kind": "book",
                "page_count": 224,
                "edition": "1st",
                "isbn": "0-330-25864-8"
            }
        }),
    );
    assert_eq!(reply["status"], "ok", "{reply}");

    let reply = send(
        library,
        json!({
            "command": "add_item",
            "item": {
                "title": "National Geographic",
                "creator": "Various",
                "publication_year": 2023,
                "publisher": "NatGeo Society",
                "genre": "Science",
                "kind": "magazine",
                "issue_number": 5,
                "publication_date": "2023-05-01"
            }
        }),
    );
    assert_eq!(reply["data"]["id"], 2);

    let reply = send(
        library,
        json!({ "command": "add_user", "user": { "name": "Alice Wonder", "contact_info": "alice@example.com" } }),
    );
    assert_eq!(reply["data"]["max_borrow_limit"], 3);
}

#[test]
fn test_borrow_and_return_over_json() {
    let (mut library, clock) = library_with_clock(&AppConfig::default());
    seed(&mut library);

    let reply = send(&mut library, json!({ "command": "borrow", "user_id": 1, "item_id": 1 }));
    assert_eq!(reply["status"], "ok");
    assert_eq!(reply["data"]["due_date"], "2024-09-15");

    let reply = send(&mut library, json!({ "command": "filter_items", "status": "borrowed" }));
    assert_eq!(reply["data"][0]["id"], 1);

    let reply = send(&mut library, json!({ "command": "borrow", "user_id": 1, "item_id": 1 }));
    assert_eq!(reply["status"], "error");
    assert_eq!(reply["error"], "Unavailable");
    assert_eq!(reply["code"], 7);

    clock.advance(17);
    let reply = send(&mut library, json!({ "command": "return", "user_id": 1, "item_id": 1 }));
    assert_eq!(reply["data"]["status"], "returned");
    assert_eq!(reply["data"]["fine_amount"], "3");
    assert_eq!(reply["data"]["loan"]["return_date"], "2024-09-18");
}

#[test]
fn test_update_ignores_unknown_fields() {
    let (mut library, _clock) = library_with_clock(&AppConfig::default());
    seed(&mut library);

    let reply = send(
        &mut library,
        json!({
            "command": "update_item",
            "id": 2,
            "changes": { "issue_number": 6, "shelf": "B4", "page_count": 99 }
        }),
    );
    assert_eq!(reply["status"], "ok");
    assert_eq!(reply["data"]["issue_number"], 6);
    assert!(reply["data"].get("page_count").is_none());
    assert!(reply["data"].get("shelf").is_none());

    let reply = send(&mut library, json!({ "command": "update_user", "id": 8, "changes": {} }));
    assert_eq!(reply["error"], "NotFound");
    assert_eq!(reply["code"], 4);
}

#[test]
fn test_delete_user_with_loan_conflicts() {
    let (mut library, _clock) = library_with_clock(&AppConfig::default());
    seed(&mut library);
    send(&mut library, json!({ "command": "borrow", "user_id": 1, "item_id": 2 }));

    let reply = send(&mut library, json!({ "command": "delete_user", "id": 1 }));
    assert_eq!(reply["error"], "Conflict");
    assert_eq!(reply["code"], 21);

    let reply = send(&mut library, json!({ "command": "delete_item", "id": 2 }));
    assert_eq!(reply["error"], "Conflict");
    assert_eq!(reply["code"], 13);

    let reply = send(&mut library, json!({ "command": "user_loans", "user_id": 1 }));
    assert_eq!(reply["data"][0]["item_id"], 2);

    send(&mut library, json!({ "command": "return", "user_id": 1, "item_id": 2 }));
    let reply = send(&mut library, json!({ "command": "delete_user", "id": 1 }));
    assert_eq!(reply["data"]["status"], "deleted");
    assert_eq!(reply["data"]["deleted"]["name"], "Alice Wonder");
}

#[test]
fn test_blank_name_is_rejected() {
    let (mut library, _clock) = library_with_clock(&AppConfig::default());
    let reply = send(&mut library, json!({ "command": "add_user", "user": { "name": "" } }));
    assert_eq!(reply["error"], "Validation");
    assert!(library.list_users().is_empty());
}

#[test]
fn test_search_items_by_title() {
    let (mut library, _clock) = library_with_clock(&AppConfig::default());
    seed(&mut library);

    let reply = send(&mut library, json!({ "command": "search_items", "title": "GUIDE" }));
    let titles: Vec<&str> = reply["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|i| i["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["The Hitchhiker's Guide"]);
}
