use super::helpers::{
    StubGeocoder, expect_status, india_listing, local_today, post_json, read_json, send,
    spawn_app, valid_registration,
};
use axum::http::StatusCode;
use chrono::Days;
use serde_json::{Value, json};

async fn submit(app: &axum::Router, body: Value) -> axum::response::Response {
    send(app, post_json("/api/v1/registrations", body)).await
}

#[tokio::test]
async fn valid_registration_is_forwarded_once() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;

    let res = submit(&app.app, valid_registration()).await;
    let body: Value = read_json(expect_status(res, StatusCode::ACCEPTED).await).await;

    assert_eq!(body, json!({ "forwarded": true }));
    let received = app.submitter.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        serde_json::to_value(&received[0]).unwrap(),
        valid_registration()
    );
}

#[tokio::test]
async fn unaccepted_terms_block_submission() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;
    let mut form = valid_registration();
    form["termsAndConditions"] = json!(false);

    let res = submit(&app.app, form).await;
    let body: Value =
        read_json(expect_status(res, StatusCode::UNPROCESSABLE_ENTITY).await).await;

    assert_eq!(
        body["fields"],
        json!({ "termsAndConditions": "Please accept the terms and conditions" })
    );
    assert!(app.submitter.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_form_reports_every_required_field() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;

    let res = submit(&app.app, json!({})).await;
    let body: Value =
        read_json(expect_status(res, StatusCode::UNPROCESSABLE_ENTITY).await).await;

    let fields = body["fields"].as_object().expect("fields should be an object");
    assert_eq!(fields.len(), 12);
    assert!(!fields.contains_key("additionalInfo"));
    assert_eq!(fields["firstName"], "Required");
    assert_eq!(fields["phoneNumber"], "Required");
}

#[tokio::test]
async fn phone_number_length_bounds() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;

    let cases = [
        ("987654321", Some("Phone number must be at least 10 digits")),
        ("9876543210", None),
        ("987654321012345", None),
        ("9876543210123456", Some("Phone number must be at most 15 digits")),
        ("98765-43210", Some("Invalid phone number (only digits are allowed)")),
    ];
    for (phone, expected) in cases {
        let mut form = valid_registration();
        form["phoneNumber"] = json!(phone);
        let res = submit(&app.app, form).await;

        match expected {
            None => assert_eq!(res.status(), StatusCode::ACCEPTED, "{}", phone),
            Some(message) => {
                let body: Value =
                    read_json(expect_status(res, StatusCode::UNPROCESSABLE_ENTITY).await).await;
                assert_eq!(body["fields"]["phoneNumber"], message, "{}", phone);
            }
        }
    }
}

#[tokio::test]
async fn date_of_birth_may_be_today_but_not_later() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;
    let today = local_today();

    let mut form = valid_registration();
    form["dateOfBirth"] = json!(today.format("%Y-%m-%d").to_string());
    let res = submit(&app.app, form).await;
    assert_eq!(res.status(), StatusCode::ACCEPTED);

    let tomorrow = today.checked_add_days(Days::new(1)).expect("date overflow");
    let mut form = valid_registration();
    form["dateOfBirth"] = json!(tomorrow.format("%Y-%m-%d").to_string());
    let res = submit(&app.app, form).await;
    let body: Value =
        read_json(expect_status(res, StatusCode::UNPROCESSABLE_ENTITY).await).await;
    assert_eq!(
        body["fields"]["dateOfBirth"],
        "Selected date should be less than current date"
    );
}

#[tokio::test]
async fn phone_code_outside_allow_list_is_rejected() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;
    let mut form = valid_registration();
    form["code"] = json!("+44");

    let res = submit(&app.app, form).await;
    let body: Value =
        read_json(expect_status(res, StatusCode::UNPROCESSABLE_ENTITY).await).await;

    assert_eq!(body["fields"], json!({ "code": "Invalid code" }));
}

#[tokio::test]
async fn validate_shows_errors_only_for_visited_fields() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;

    let session = json!({
        "values": { "firstName": "A".repeat(21), "email": "not-an-email" },
        "touched": ["firstName"],
        "submitAttempted": false
    });
    let res = send(&app.app, post_json("/api/v1/registrations/validate", session)).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["valid"], false);
    assert_eq!(
        body["errors"],
        json!({ "firstName": "Must be 20 characters or less" })
    );
}

#[tokio::test]
async fn validate_after_submit_attempt_shows_every_error() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;

    let session = json!({
        "values": { "email": "not-an-email" },
        "touched": [],
        "submitAttempted": true
    });
    let res = send(&app.app, post_json("/api/v1/registrations/validate", session)).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["errors"]["email"], "Invalid email address");
    assert_eq!(body["errors"]["gender"], "Required");
    assert_eq!(
        body["errors"]["termsAndConditions"],
        "Please accept the terms and conditions"
    );
}

#[tokio::test]
async fn validate_reports_a_clean_form_as_valid() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;

    let session = json!({
        "values": valid_registration(),
        "touched": [],
        "submitAttempted": true
    });
    let res = send(&app.app, post_json("/api/v1/registrations/validate", session)).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body, json!({ "valid": true, "errors": {} }));
    assert!(app.submitter.received.lock().unwrap().is_empty());
}
