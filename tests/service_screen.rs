mod common;

use common::{call, MockTransport};
use retreat_admin::models::{RecordId, ServiceDetail};
use retreat_admin::services::{FilePart, Method};
use retreat_admin::viewmodels::{DeleteOutcome, ServiceViewModel};
use retreat_admin::{ApiError, PayloadError, SubmitError};
use serde_json::json;

fn yoga() -> ServiceDetail {
    serde_json::from_value(json!({
        "id": 4, "title": "Yoga", "description": "Daily sessions", "slug": "yoga",
        "alt_img_text": null, "service_header": 9
    }))
    .unwrap()
}

#[tokio::test]
async fn new_service_posts_heading_then_detail_with_its_id() {
    let mock = MockTransport::new();
    mock.respond_json(201, json!({ "id": 15, "title": "Ayurveda" }))
        .respond_json(201, json!({ "id": 30, "title": "Ayurveda", "service_header": 15 }))
        .respond_json(200, json!([{ "id": 30, "title": "Ayurveda", "service_header": 15 }]));
    let services = ServiceViewModel::new(mock.client());

    services.open_create();
    services.edit(|d| {
        d.title = "Ayurveda".into();
        d.description = "Traditional treatments".into();
        d.slug = "ayurveda".into();
        d.image = Some(FilePart::new("oil.jpg", "image/jpeg", vec![0xff]));
    });
    let saved = services.save().await.unwrap();

    assert_eq!(saved.id, RecordId::Int(30));
    assert_eq!(
        mock.calls(),
        vec![
            call(Method::Post, "/api/service-headings/"),
            call(Method::Post, "/api/service-details/"),
            call(Method::Get, "/api/service-details/"),
        ]
    );
    let requests = mock.requests();
    assert_eq!(requests[0].json_body(), Some(&json!({ "title": "Ayurveda" })));
    let detail = requests[1].multipart_body().unwrap();
    assert_eq!(detail.text_value("service_header"), Some("15"));
    assert_eq!(detail.text_value("alt_img_caption"), Some(""));
    assert_eq!(detail.files("image").len(), 1);

    let state = services.state().snapshot();
    assert!(state.form.is_none());
    assert_eq!(state.services.len(), 1);
    assert_eq!(state.notice.as_deref(), Some("Service saved successfully!"));
}

#[tokio::test]
async fn editing_patches_both_records_in_place() {
    let mock = MockTransport::new();
    mock.respond_json(200, json!({ "id": 9, "title": "Sunrise yoga" }))
        .respond_json(200, json!({ "id": 4, "title": "Sunrise yoga", "service_header": 9 }))
        .respond_json(200, json!([]));
    let services = ServiceViewModel::new(mock.client());

    services.open_edit(&yoga());
    services.edit(|d| d.title = "Sunrise yoga".into());
    services.save().await.unwrap();

    assert_eq!(
        mock.calls()[..2],
        [
            call(Method::Patch, "/api/service-headings/9/"),
            call(Method::Patch, "/api/service-details/4/"),
        ]
    );
    // Edits without a new picture keep the stored one
    assert!(mock.requests()[1].multipart_body().unwrap().files("image").is_empty());
}

#[tokio::test]
async fn failed_heading_stops_before_the_detail() {
    let mock = MockTransport::new();
    mock.fail(ApiError::Status { status: 400, body: "{}".into() });
    let services = ServiceViewModel::new(mock.client());

    services.open_create();
    services.edit(|d| d.title = "Hiking".into());
    services.save().await.unwrap_err();

    assert_eq!(mock.calls(), vec![call(Method::Post, "/api/service-headings/")]);
    let state = services.state().snapshot();
    assert!(state.form.is_some());
    assert!(!state.saving);
    assert_eq!(state.error.as_deref(), Some("Failed to save service."));
}

#[tokio::test]
async fn missing_title_sends_nothing() {
    let mock = MockTransport::new();
    let services = ServiceViewModel::new(mock.client());

    services.open_create();
    let err = services.save().await.unwrap_err();

    assert_eq!(err, SubmitError::Payload(PayloadError::MissingRequired("title")));
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn delete_removes_detail_then_heading_then_refetches() {
    let mock = MockTransport::new();
    mock.respond_empty(204).respond_empty(204).respond_json(200, json!([]));
    let services = ServiceViewModel::new(mock.client());

    let outcome = services.delete(&yoga(), &|_: &str| true).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(
        mock.calls(),
        vec![
            call(Method::Delete, "/api/service-details/4/"),
            call(Method::Delete, "/api/service-headings/9/"),
            call(Method::Get, "/api/service-details/"),
        ]
    );
}

#[tokio::test]
async fn declined_or_failed_delete_leaves_the_list() {
    let mock = MockTransport::new();
    mock.respond_json(200, json!([{ "id": 4, "title": "Yoga", "service_header": 9 }]))
        .fail(ApiError::Network("offline".into()));
    let services = ServiceViewModel::new(mock.client());
    services.fetch().await.unwrap();

    let declined = services.delete(&yoga(), &|_: &str| false).await.unwrap();
    services.delete(&yoga(), &|_: &str| true).await.unwrap_err();

    assert_eq!(declined, DeleteOutcome::Declined);
    // The heading delete and the refetch never go out
    assert_eq!(mock.calls().len(), 2);
    assert_eq!(services.services().len(), 1);
    assert_eq!(services.state().with(|s| s.error.clone()).as_deref(), Some("Failed to delete service."));
}
