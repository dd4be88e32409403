mod common;

use common::{call, MockTransport};
use retreat_admin::models::{PlanKind, User};
use retreat_admin::services::Method;
use retreat_admin::viewmodels::{MembershipViewModel, PointLedgerViewModel};
use retreat_admin::ApiError;
use serde_json::json;

fn user() -> User {
    serde_json::from_value(json!({
        "id": 5, "uuid": "u-5", "full_name": "Meera Nair", "email": "meera@example.com", "points": 40
    }))
    .unwrap()
}

#[tokio::test]
async fn fetch_fills_plans_regardless_of_name_case() {
    let mock = MockTransport::new();
    mock.respond_json(
        200,
        json!([
            { "name": "Gold", "amount": 999, "referral_limit": 5,
              "benefits": [{ "benefit_text": "Free spa" }] },
            { "name": "PLATINUM", "amount": "1999.00", "is_popular": true, "benefits": null }
        ]),
    );
    let memberships = MembershipViewModel::new(mock.client());

    memberships.fetch().await.unwrap();

    let gold = memberships.plan(PlanKind::Gold);
    assert_eq!(gold.name, "gold");
    assert_eq!(gold.amount, "999");
    assert_eq!(gold.referral_limit, "5");
    assert_eq!(gold.benefits.len(), 1);

    let platinum = memberships.plan(PlanKind::Platinum);
    assert_eq!(platinum.name, "platinum");
    assert!(platinum.is_popular);
    assert!(platinum.benefits.is_empty());
    assert_eq!(mock.calls(), vec![call(Method::Get, "/api/subscription/list/")]);
}

#[tokio::test]
async fn benefits_are_trimmed_and_blank_ones_ignored() {
    let mock = MockTransport::new();
    let memberships = MembershipViewModel::new(mock.client());

    memberships.edit(PlanKind::Gold, |p| p.new_benefit = "  Airport pickup ".into());
    assert!(memberships.add_benefit(PlanKind::Gold));
    memberships.edit(PlanKind::Gold, |p| p.new_benefit = "   ".into());
    assert!(!memberships.add_benefit(PlanKind::Gold));
    memberships.edit(PlanKind::Gold, |p| p.new_benefit = "Late checkout".into());
    memberships.add_benefit(PlanKind::Gold);

    memberships.remove_benefit(PlanKind::Gold, 0);
    memberships.remove_benefit(PlanKind::Gold, 9);

    let gold = memberships.plan(PlanKind::Gold);
    let texts: Vec<&str> = gold.benefits.iter().map(|b| b.benefit_text.as_str()).collect();
    assert_eq!(texts, ["Late checkout"]);
    assert!(memberships.plan(PlanKind::Platinum).benefits.is_empty());
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn save_reposts_the_whole_plan_and_reloads() {
    let mock = MockTransport::new();
    mock.respond_json(201, json!({ "name": "gold" }))
        .respond_json(200, json!([{ "name": "gold", "amount": "1200", "referral_limit": 0 }]));
    let memberships = MembershipViewModel::new(mock.client());
    memberships.start_editing(PlanKind::Gold);
    memberships.edit(PlanKind::Gold, |p| {
        p.amount = "1200".into();
        p.referral_limit = "lots".into();
        p.limited_offer = true;
    });

    memberships.save(PlanKind::Gold).await.unwrap();

    assert_eq!(
        mock.calls(),
        vec![
            call(Method::Post, "/api/subscription/create/"),
            call(Method::Get, "/api/subscription/list/"),
        ]
    );
    let body = mock.requests()[0].json_body().cloned().unwrap();
    assert_eq!(body["name"], "gold");
    assert_eq!(body["referral_limit"], 0);
    assert_eq!(body["limited_offer"], true);
    assert!(body.get("id").is_none());
    assert_eq!(memberships.state().with(|s| s.editing), None);
}

#[tokio::test]
async fn ledger_keeps_only_this_users_entries() {
    let mock = MockTransport::new();
    mock.respond_json(
        200,
        json!([
            { "id": 1, "user_uuid": "u-5", "points": 50, "reason": "Signup" },
            { "id": 2, "user_uuid": "u-9", "points": 500, "reason": "Other user" },
            { "id": 3, "user_uuid": "u-5", "points": -10, "reason": "Redeemed" }
        ]),
    );
    let ledger = PointLedgerViewModel::new(mock.client(), user());

    ledger.fetch_history().await.unwrap();

    assert_eq!(ledger.state().with(|s| s.history.len()), 2);
    assert_eq!(ledger.total(), 40);
}

#[tokio::test]
async fn add_and_deduct_append_signed_entries() {
    let mock = MockTransport::new();
    mock.respond_json(201, json!({ "id": 10, "user_uuid": "u-5", "points": 25, "reason": "Points added by admin" }))
        .respond_json(201, json!({ "id": 11, "user_uuid": "u-5", "points": -5, "reason": "Late cancel" }));
    let ledger = PointLedgerViewModel::new(mock.client(), user());

    ledger.add_points("25", "").await.unwrap();
    ledger.deduct_points("5", "Late cancel").await.unwrap();

    let requests = mock.requests();
    assert_eq!(
        requests[0].json_body(),
        Some(&json!({ "user_uuid": "u-5", "points": 25, "reason": "Points added by admin" }))
    );
    assert_eq!(
        requests[1].json_body(),
        Some(&json!({ "user_uuid": "u-5", "points": -5, "reason": "Late cancel" }))
    );
    assert_eq!(ledger.total(), 20);
    assert_eq!(mock.calls()[1], call(Method::Post, "/api/points/"));
}

#[tokio::test]
async fn empty_amount_sends_nothing() {
    let mock = MockTransport::new();
    let ledger = PointLedgerViewModel::new(mock.client(), user());

    assert_eq!(ledger.add_points("", "bonus").await.unwrap(), None);
    assert_eq!(ledger.deduct_points("  ", "").await.unwrap(), None);
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn referrals_are_filtered_by_user_on_the_server() {
    let mock = MockTransport::new();
    mock.respond_json(200, json!([{ "id": 1, "user_uuid": "u-5", "name": "Ravi" }]))
        .fail(ApiError::Network("offline".into()));
    let ledger = PointLedgerViewModel::new(mock.client(), user());

    ledger.fetch_referrals().await.unwrap();
    ledger.fetch_history().await.unwrap_err();

    assert_eq!(mock.calls()[0], call(Method::Get, "/api/referrals/?user_uuid=u-5"));
    let state = ledger.state().snapshot();
    assert_eq!(state.referrals.len(), 1);
    assert_eq!(state.error.as_deref(), Some("Failed to fetch point history."));
}

#[tokio::test]
async fn amount_without_a_positive_counterpart_is_ignored() {
    let mock = MockTransport::new();
    let ledger = PointLedgerViewModel::new(mock.client(), user());

    assert_eq!(ledger.add_points("-9223372036854775808", "").await.unwrap(), None);
    assert_eq!(ledger.deduct_points("-9223372036854775808", "").await.unwrap(), None);
    assert!(mock.calls().is_empty());
    assert_eq!(ledger.total(), 0);
}
