mod common;

use std::rc::Rc;

use common::MockTransport;
use retreat_admin::models::{BlogCategory, RecordId, Resort};
use retreat_admin::viewmodels::{FormViewModel, ListViewModel};
use retreat_admin::{ApiError, SubmitError};
use serde_json::json;

#[tokio::test]
async fn late_list_response_does_not_touch_a_dismissed_screen() {
    let mock = MockTransport::new();
    mock.respond_json(200, json!([{ "id": 1, "name": "Ayam Bay", "price": 10 }]));
    let list: Rc<ListViewModel<Resort, MockTransport>> = Rc::new(ListViewModel::new(mock.client()));
    {
        let list = list.clone();
        mock.before_reply(move || list.dismiss());
    }

    let err = list.fetch().await.unwrap_err();

    assert_eq!(err, ApiError::Cancelled);
    assert!(list.items().is_empty());
    assert_eq!(list.error(), None);
}

#[tokio::test]
async fn failures_after_dismissal_are_not_reported_either() {
    let mock = MockTransport::new();
    mock.fail(ApiError::Status { status: 500, body: String::new() });
    let list: Rc<ListViewModel<BlogCategory, MockTransport>> = Rc::new(ListViewModel::new(mock.client()));
    {
        let list = list.clone();
        mock.before_reply(move || list.dismiss());
    }

    let err = list.delete(&RecordId::Int(1), &|_: &str| true).await.unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(list.error(), None);
    // No refetch once the screen is gone
    assert_eq!(mock.calls().len(), 1);
}

#[tokio::test]
async fn late_save_leaves_the_form_as_it_was() {
    let mock = MockTransport::new();
    mock.respond_json(201, json!({ "id": 2, "title": "Wellness" }));
    let form: Rc<FormViewModel<BlogCategory, MockTransport>> = Rc::new(FormViewModel::new(mock.client()));
    form.open_create();
    form.edit(|d| d.title = "Wellness".into());
    {
        let form = form.clone();
        mock.before_reply(move || form.dismiss());
    }

    let err = form.submit().await.unwrap_err();

    assert_eq!(err, SubmitError::Api(ApiError::Cancelled));
    let state = form.state().snapshot();
    assert!(state.success.is_none());
    assert!(state.error.is_none());
}
