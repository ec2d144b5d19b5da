use super::helpers::{
    StubGeocoder, bengaluru_reverse, expect_status, india_listing, post_json, read_json, send,
    spawn_app,
};
use axum::http::StatusCode;
use serde_json::{Value, json};
use whereabouts::domain::{location::entity::Coordinate, shared::errors::DomainError};

#[tokio::test]
async fn granted_position_renders_geocoded_address() {
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
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["status"], "resolved");
    assert_eq!(body["address"]["city"], "Bengaluru");
    assert_eq!(body["address"]["state"], "Karnataka");
    assert_eq!(body["address"]["postalCode"], "560001");
    assert_eq!(body["coordinate"]["latitude"], 12.97);
    assert_eq!(app.geocoder.reverse_calls(), 1);
}

#[tokio::test]
async fn denied_permission_renders_fixed_message_without_geocoding() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;

    let res = send(
        &app.app,
        post_json("/api/v1/location", json!({ "status": "denied" })),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body, json!({ "status": "denied", "message": "Permission denied" }));
    assert_eq!(app.geocoder.reverse_calls(), 0);
}

#[tokio::test]
async fn unavailable_position_is_treated_as_denied() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;

    let res = send(
        &app.app,
        post_json("/api/v1/location", json!({ "status": "unavailable" })),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["status"], "denied");
    assert_eq!(app.geocoder.reverse_calls(), 0);
}

#[tokio::test]
async fn geocoder_failure_is_an_inline_error() {
    let geocoder = StubGeocoder::new(india_listing()).with_reverse_failure(
        Coordinate::new(19.07, 72.87),
        DomainError::NetworkFailure("connection failed".into()),
    );
    let app = spawn_app(geocoder).await;

    let res = send(
        &app.app,
        post_json(
            "/api/v1/location",
            json!({ "status": "granted", "latitude": 19.07, "longitude": 72.87 }),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Error: Network failure: connection failed");
    assert!(body.get("address").is_none());
}

#[tokio::test]
async fn missing_components_render_as_empty_strings() {
    let geocoder = StubGeocoder::new(india_listing()).with_reverse(
        Coordinate::new(8.5, 76.9),
        json!({ "results": [{ "components": { "country": "India" } }] }),
    );
    let app = spawn_app(geocoder).await;

    let res = send(
        &app.app,
        post_json(
            "/api/v1/location",
            json!({ "status": "granted", "latitude": 8.5, "longitude": 76.9 }),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(
        body["address"],
        json!({ "city": "", "state": "", "postalCode": "" })
    );
}

#[tokio::test]
async fn out_of_range_latitude_is_rejected() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;

    let res = send(
        &app.app,
        post_json(
            "/api/v1/location",
            json!({ "status": "granted", "latitude": 123.0, "longitude": 77.59 }),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;

    assert!(body["error"].is_string());
    assert_eq!(app.geocoder.reverse_calls(), 0);
}
