mod common;

use common::{call, MockTransport};
use retreat_admin::models::{BlogCategory, RecordId, Resort};
use retreat_admin::services::Method;
use retreat_admin::viewmodels::{DeleteOutcome, ListViewModel};
use retreat_admin::ApiError;
use serde_json::json;

fn resorts_json() -> serde_json::Value {
    json!([
        { "id": 7, "name": "Ayam Bay", "location": "Goa", "price": "4500.00", "is_featured": true,
          "place": { "id": 3, "name": "North Goa", "location": "Goa" } },
        { "id": 2, "name": "Cedar Hill", "location": "Manali", "price": 3200 },
        { "id": 5, "name": "Salt Flats", "location": "Kutch", "price": null }
    ])
}

#[tokio::test]
async fn fetch_keeps_server_order() {
    let mock = MockTransport::new();
    mock.respond_json(200, resorts_json());
    let list: ListViewModel<Resort, _> = ListViewModel::new(mock.client());

    list.fetch().await.unwrap();

    let names: Vec<String> = list.items().into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["Ayam Bay", "Cedar Hill", "Salt Flats"]);
    assert_eq!(list.items()[1].price, "3200");
    assert_eq!(mock.calls(), vec![call(Method::Get, "/api/resorts/")]);
    assert_eq!(list.error(), None);
}

#[tokio::test]
async fn failed_fetch_keeps_items_and_sets_one_message() {
    let mock = MockTransport::new();
    mock.respond_json(200, resorts_json())
        .fail(ApiError::Status { status: 500, body: "boom".into() });
    let list: ListViewModel<Resort, _> = ListViewModel::new(mock.client());

    list.fetch().await.unwrap();
    let err = list.fetch().await.unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert_eq!(list.items().len(), 3);
    assert_eq!(list.error().as_deref(), Some("Failed to fetch resorts."));
    assert!(!list.state().with(|s| s.loading));
}

#[tokio::test]
async fn delete_sends_one_delete_then_one_refetch() {
    let mock = MockTransport::new();
    mock.respond_json(200, json!([{ "id": 1, "title": "Travel" }, { "id": 2, "title": "Wellness" }]))
        .respond_empty(204)
        .respond_json(200, json!([{ "id": 2, "title": "Wellness" }]));
    let list: ListViewModel<BlogCategory, _> = ListViewModel::new(mock.client());
    list.fetch().await.unwrap();

    let outcome = list.delete(&RecordId::Int(1), &|_: &str| true).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(
        mock.calls(),
        vec![
            call(Method::Get, "/api/blog-categories/"),
            call(Method::Delete, "/api/blog-categories/1/"),
            call(Method::Get, "/api/blog-categories/"),
        ]
    );
    assert_eq!(list.items().len(), 1);
    assert_eq!(
        list.state().with(|s| s.notice.clone()).as_deref(),
        Some("Category deleted successfully!")
    );
}

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let mock = MockTransport::new();
    let list: ListViewModel<BlogCategory, _> = ListViewModel::new(mock.client());

    let asked = std::cell::RefCell::new(String::new());
    let confirm = |question: &str| {
        *asked.borrow_mut() = question.to_string();
        false
    };
    let outcome = list.delete(&RecordId::Int(1), &confirm).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert!(mock.calls().is_empty());
    assert_eq!(*asked.borrow(), "Are you sure you want to delete this category?");
}

#[tokio::test]
async fn failed_delete_leaves_the_list_alone() {
    let mock = MockTransport::new();
    mock.respond_json(200, resorts_json())
        .fail(ApiError::Network("offline".into()));
    let list: ListViewModel<Resort, _> = ListViewModel::new(mock.client());
    list.fetch().await.unwrap();

    list.delete(&RecordId::Int(7), &|_: &str| true).await.unwrap_err();

    assert_eq!(list.items().len(), 3);
    assert_eq!(list.error().as_deref(), Some("Failed to delete Resort."));
    // No refetch after a failed delete
    assert_eq!(mock.calls().len(), 2);
}
