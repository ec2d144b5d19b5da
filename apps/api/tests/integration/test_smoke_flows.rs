use super::helpers::{
    StubGeocoder, bengaluru_reverse, expect_status, get, india_listing, post_json, read_json,
    send, spawn_app, valid_registration,
};
use axum::http::StatusCode;
use serde_json::{Value, json};
use whereabouts::domain::location::entity::Coordinate;

#[tokio::test]
async fn health_reports_directory_and_provider() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;

    let res = send(&app.app, get("/health")).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["city_directory"], "loaded");
    assert_eq!(body["location_provider"], "opencage");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;

    let res = send(&app.app, get("/health")).await;
    let id = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("missing x-request-id");
    assert!(!id.is_empty());
}

#[tokio::test]
async fn smoke_locate_browse_select_and_register() {
    let geocoder = StubGeocoder::new(india_listing())
        .with_reverse(Coordinate::new(12.97, 77.59), bengaluru_reverse());
    let app = spawn_app(geocoder).await;

    let res = send(
        &app.app,
        post_json(
            "/api/v1/location",
            json!({ "status": "granted", "latitude": 12.97, "longitude": 77.59 }),
        ),
    )
    .await;
    let location: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(location["address"]["city"], "Bengaluru");

    let res = send(&app.app, get("/api/v1/cities")).await;
    let cities: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    let first = cities["data"][0]["name"]
        .as_str()
        .expect("directory should not be empty")
        .to_string();

    let res = send(
        &app.app,
        get(&format!("/api/v1/cities/selection?name={}", first)),
    )
    .await;
    let selection: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(selection["selected"], first);
    assert_eq!(selection["postalCode"], "560001");

    let res = send(&app.app, post_json("/api/v1/registrations", valid_registration())).await;
    let receipt: Value = read_json(expect_status(res, StatusCode::ACCEPTED).await).await;
    assert_eq!(receipt["forwarded"], true);

    assert_eq!(app.geocoder.reverse_calls(), 2);
    assert_eq!(app.submitter.received.lock().unwrap().len(), 1);
}
