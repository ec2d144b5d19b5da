use super::helpers::{
    StubGeocoder, bengaluru_reverse, expect_status, get, india_listing, read_json, send,
    spawn_app, spawn_app_unloaded,
};
use axum::http::{Request, StatusCode};
use axum::body::Body;
use serde_json::{Value, json};
use std::sync::atomic::Ordering;
use whereabouts::domain::location::entity::Coordinate;

#[tokio::test]
async fn directory_lists_only_entries_with_a_city_name() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;

    let res = send(&app.app, get("/api/v1/cities")).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["isLoading"], false);
    assert!(body["error"].is_null());
    let cities = body["data"].as_array().expect("data should be a list");
    assert_eq!(cities.len(), 3);
    assert!(
        cities
            .iter()
            .all(|c| c["name"].as_str().is_some_and(|n| !n.is_empty()))
    );
    assert_eq!(cities[0]["name"], "Bengaluru");
    assert_eq!(cities[0]["label"], "Bengaluru (12.97, 77.59)");
    assert_eq!(cities[1]["name"], "Mumbai");
}

#[tokio::test]
async fn directory_reads_as_loading_before_first_fetch() {
    let (app, _directory) = spawn_app_unloaded(StubGeocoder::new(india_listing()));

    let res = send(&app.app, get("/api/v1/cities")).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body, json!({ "isLoading": true, "data": null, "error": null }));
}

#[tokio::test]
async fn selecting_a_listed_city_shows_its_details() {
    let geocoder = StubGeocoder::new(india_listing())
        .with_reverse(Coordinate::new(12.97, 77.59), bengaluru_reverse());
    let app = spawn_app(geocoder).await;

    let res = send(&app.app, get("/api/v1/cities/selection?name=Bengaluru")).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["selected"], "Bengaluru");
    assert_eq!(body["city"], "Bengaluru");
    assert_eq!(body["state"], "Karnataka");
    assert_eq!(body["postalCode"], "560001");
    assert_eq!(body["showDetails"], true);
    assert_eq!(app.geocoder.reverse_calls(), 1);
}

#[tokio::test]
async fn unknown_or_empty_selection_clears_details() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;

    for uri in [
        "/api/v1/cities/selection?name=",
        "/api/v1/cities/selection",
        "/api/v1/cities/selection?name=Atlantis",
    ] {
        let res = send(&app.app, get(uri)).await;
        let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
        assert_eq!(body["city"], "", "{}", uri);
        assert_eq!(body["state"], "", "{}", uri);
        assert_eq!(body["postalCode"], "", "{}", uri);
        assert_eq!(body["showDetails"], false);
        assert!(body["entry"].is_null());
    }
    assert_eq!(app.geocoder.reverse_calls(), 0);
}

#[tokio::test]
async fn partial_details_are_returned_but_not_shown() {
    let geocoder = StubGeocoder::new(india_listing()).with_reverse(
        Coordinate::new(17.38, 78.48),
        json!({ "results": [{ "components": { "city": "Hyderabad", "state": "Telangana" } }] }),
    );
    let app = spawn_app(geocoder).await;

    let res = send(&app.app, get("/api/v1/cities/selection?name=Hyderabad")).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["city"], "Hyderabad");
    assert_eq!(body["postalCode"], "");
    assert_eq!(body["showDetails"], false);
}

#[tokio::test]
async fn refresh_rebuilds_the_whole_list() {
    let app = spawn_app(StubGeocoder::new(india_listing())).await;

    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/cities/refresh")
        .body(Body::empty())
        .expect("failed to build request");
    let res = send(&app.app, req).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["loaded"], 3);
    assert_eq!(app.geocoder.search_calls.load(Ordering::SeqCst), 2);
}
