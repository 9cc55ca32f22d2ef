//! Synchronizer against the fake backend over real HTTP

use library_desk::{
    models::{AvailabilityFilter, DraftField, Tab},
    Outcome,
};
use serde_json::json;

use crate::backend::{FakeLibrary, Recorded};

fn get(path: &'static str) -> Recorded {
    Recorded { method: "GET", path, body: None }
}

/// Both collections fetched once, in whichever order the requests landed
fn assert_full_reload(requests: &[Recorded]) {
    assert_eq!(requests.len(), 2, "expected exactly two GETs, got {:?}", requests);
    assert!(requests.contains(&get("/Books")));
    assert!(requests.contains(&get("/Users")));
}

#[tokio::test]
async fn test_initial_load_fetches_both_collections() {
    let library = FakeLibrary::seeded();
    let mut desk = library.desk().await;

    desk.load().await;

    assert_full_reload(&library.requests());
    assert_eq!(desk.books().len(), 3);
    assert_eq!(desk.users().len(), 2);
    assert!(desk.take_notifications().is_empty());
}

#[tokio::test]
async fn test_failed_book_listing_keeps_users() {
    let library = FakeLibrary::seeded();
    library.fail_book_listing();
    let mut desk = library.desk().await;

    desk.load().await;

    assert!(desk.books().is_empty());
    assert_eq!(desk.users().len(), 2);

    let notifications = desk.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].message, "Error fetching books");
}

#[tokio::test]
async fn test_filters_over_fetched_collections() {
    let library = FakeLibrary::seeded();
    let mut desk = library.desk().await;
    desk.load().await;

    desk.set_availability_filter(AvailabilityFilter::Unavailable);
    let titles: Vec<_> = desk.visible_books().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["1984"]);

    desk.set_borrowed_filter(true);
    let names: Vec<_> = desk.visible_users().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Luis"]);

    // local filtering never hits the network
    assert_eq!(library.request_count(), 2);
}

#[tokio::test]
async fn test_borrow_without_selection_sends_nothing() {
    let library = FakeLibrary::seeded();
    let mut desk = library.desk().await;
    desk.load().await;
    let before = library.request_count();

    assert_eq!(desk.handle_borrow("u1").await, Outcome::Rejected);

    assert_eq!(library.request_count(), before);
    let notifications = desk.take_notifications();
    assert!(notifications[0].is_error());
    assert_eq!(notifications[0].message, "Select a book to borrow");
}

#[tokio::test]
async fn test_borrow_posts_then_reloads() {
    let library = FakeLibrary::seeded();
    let mut desk = library.desk().await;
    desk.load().await;
    let before = library.request_count();

    desk.select_book("u1", "2");
    assert_eq!(desk.handle_borrow("u1").await, Outcome::Applied);

    let requests = library.requests_since(before);
    assert_eq!(
        requests[0],
        Recorded {
            method: "POST",
            path: "/users/borrow",
            body: Some(json!({ "userId": "u1", "bookId": "2" })),
        }
    );
    assert_full_reload(&requests[1..]);

    let ana = desk.users().iter().find(|u| u.id == "u1").unwrap();
    assert_eq!(ana.books.len(), 1);
    assert_eq!(ana.books[0].title, "Brave New World");
    assert!(!desk.books()[1].is_available);
}

#[tokio::test]
async fn test_rejected_borrow_keeps_state() {
    let library = FakeLibrary::seeded();
    let mut desk = library.desk().await;
    desk.load().await;
    let books = desk.books().to_vec();
    let before = library.request_count();

    // 1984 is already lent out
    desk.select_book("u1", "3");
    assert_eq!(desk.handle_borrow("u1").await, Outcome::Failed);

    assert_eq!(library.requests_since(before).len(), 1);
    assert_eq!(desk.books(), books.as_slice());
    assert_eq!(desk.take_notifications()[0].message, "Error borrowing book");
}

#[tokio::test]
async fn test_return_posts_then_reloads() {
    let library = FakeLibrary::seeded();
    let mut desk = library.desk().await;
    desk.load().await;
    let before = library.request_count();

    assert_eq!(desk.handle_return("u2", "3").await, Outcome::Applied);

    let requests = library.requests_since(before);
    assert_eq!(requests[0].path, "/users/return");
    assert_eq!(requests[0].body, Some(json!({ "userId": "u2", "bookId": "3" })));
    assert_full_reload(&requests[1..]);

    desk.set_borrowed_filter(true);
    assert!(desk.visible_users().is_empty());
    assert!(desk.books().iter().all(|b| b.is_available));
}

#[tokio::test]
async fn test_add_book_sends_draft_as_typed() {
    let library = FakeLibrary::seeded();
    let mut desk = library.desk().await;
    desk.load().await;
    let before = library.request_count();

    desk.open_modal();
    desk.draft_mut().set(DraftField::Title, "Dune Messiah").unwrap();
    desk.draft_mut().set(DraftField::PublicationYear, "1969").unwrap();

    assert_eq!(desk.handle_add().await, Outcome::Applied);

    let requests = library.requests_since(before);
    assert_eq!(requests[0].path, "/Books");
    assert_eq!(
        requests[0].body,
        Some(json!({ "title": "Dune Messiah", "publicationYear": 1969 }))
    );
    assert_full_reload(&requests[1..]);

    assert!(!desk.is_modal_open());
    assert!(desk.draft().is_empty());
    assert!(desk.books().iter().any(|b| b.title == "Dune Messiah"));
}

#[tokio::test]
async fn test_add_user_rejected_by_server_keeps_modal() {
    let library = FakeLibrary::seeded();
    let mut desk = library.desk().await;
    desk.load().await;
    let before = library.request_count();

    desk.set_tab(Tab::Users);
    desk.open_modal();

    // the fake refuses users without a name
    assert_eq!(desk.handle_add().await, Outcome::Failed);

    let requests = library.requests_since(before);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, Some(json!({})));
    assert!(desk.is_modal_open());
    assert_eq!(desk.users().len(), 2);
    assert_eq!(desk.take_notifications()[0].message, "Error adding");
}

#[tokio::test]
async fn test_add_user_on_users_tab() {
    let library = FakeLibrary::seeded();
    let mut desk = library.desk().await;
    desk.load().await;

    desk.set_tab(Tab::Users);
    desk.open_modal();
    desk.draft_mut().set(DraftField::Name, "Marta").unwrap();

    assert_eq!(desk.handle_add().await, Outcome::Applied);
    assert!(desk.users().iter().any(|u| u.name == "Marta"));
    assert_eq!(desk.take_notifications()[0].message, "User added successfully");
}
