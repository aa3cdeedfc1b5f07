use super::common::*;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use crate::marketplace::requests::DurationUnit;
use crate::marketplace::router::marketplace_router;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn post_json(uri: &str, payload: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

#[tokio::test]
async fn vehicles_route_applies_group_and_district() {
    let (router, _) = router_with_memory();

    let response = router
        .oneshot(get("/api/v1/vehicles?group=construction&district=Galle"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(
        body["caption"],
        "Showing 1 vehicles in Construction category in Galle district"
    );
    let ids: Vec<&str> = body["vehicles"]
        .as_array()
        .expect("vehicles array")
        .iter()
        .filter_map(|vehicle| vehicle["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["v-005"]);
}

#[tokio::test]
async fn vehicles_route_without_query_lists_everything() {
    let (router, _) = router_with_memory();

    let response = router
        .oneshot(get("/api/v1/vehicles"))
        .await
        .expect("route executes");
    let body = read_json_body(response).await;
    assert_eq!(body["count"], 8);
}

#[tokio::test]
async fn unrecognized_group_yields_empty_listing() {
    let (router, _) = router_with_memory();

    let response = router
        .oneshot(get("/api/v1/vehicles?group=mining"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn vehicle_detail_reports_missing_listing() {
    let (router, _) = router_with_memory();

    let response = router
        .clone()
        .oneshot(get("/api/v1/vehicles/v-001"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["category"], "jcb");
    assert_eq!(body["supplier"]["district"], "Colombo");

    let response = router
        .oneshot(get("/api/v1/vehicles/v-404"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn materials_route_filters_by_category() {
    let (router, _) = router_with_memory();

    let response = router
        .oneshot(get("/api/v1/materials?category=sand"))
        .await
        .expect("route executes");
    let body = read_json_body(response).await;
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn lookup_routes_list_districts_and_groups() {
    let (router, _) = router_with_memory();

    let response = router
        .clone()
        .oneshot(get("/api/v1/districts"))
        .await
        .expect("route executes");
    let body = read_json_body(response).await;
    let districts = body.as_array().expect("array");
    assert_eq!(districts.len(), 25);
    assert_eq!(districts[0], "Colombo");

    let response = router
        .oneshot(get("/api/v1/category-groups"))
        .await
        .expect("route executes");
    let body = read_json_body(response).await;
    assert_eq!(body[0]["key"], "agricultural");
    assert_eq!(body[2]["tags"], json!(["bowser"]));
}

#[tokio::test]
async fn sessions_route_signs_in_and_rejects_bad_email() {
    let (router, _) = router_with_memory();

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/sessions",
            json!({ "email": "nimal@example.lk", "password": "secret" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["name"], "nimal");
    assert_eq!(body["is_authenticated"], true);

    let response = router
        .oneshot(post_json(
            "/api/v1/sessions",
            json!({ "email": "nimal", "password": "secret" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn partner_registration_round_trip() {
    let (router, _) = router_with_memory();
    let payload = serde_json::to_value(registration()).expect("registration json");

    let response = router
        .clone()
        .oneshot(post_json("/api/v1/partners", payload))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "pending");
    let partner_id = body["id"].as_str().expect("partner id").to_string();

    let response = router
        .oneshot(get(&format!("/api/v1/partners/{partner_id}")))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["business_name"], "Perera Heavy Machinery");
}

#[tokio::test]
async fn partner_registration_maps_errors() {
    let (router, _) = router_with_memory();
    let mut invalid = registration();
    invalid.services.clear();
    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/partners",
            serde_json::to_value(invalid).expect("json"),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "at least one offered service is required");

    let response = router
        .oneshot(get("/api/v1/partners/partner-unknown"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let (state, _) = build_state(ConflictRepository);
    let response = marketplace_router(state)
        .oneshot(post_json(
            "/api/v1/partners",
            serde_json::to_value(registration()).expect("json"),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let (state, _) = build_state(UnavailableRepository);
    let response = marketplace_router(state)
        .oneshot(post_json(
            "/api/v1/partners",
            serde_json::to_value(registration()).expect("json"),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn service_request_route_notifies_supplier() {
    let (router, notifier) = router_with_memory();

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/service-requests",
            json!({
                "item": {
                    "kind": "vehicle",
                    "vehicle_id": "v-001",
                    "duration": 3,
                    "unit": "hours"
                },
                "contact_name": "Kamala Silva",
                "contact_phone": "0712345678"
            }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = read_json_body(response).await;
    assert_eq!(body["estimated_cost"], 13_500);
    assert_eq!(body["status"], "supplier_notified");
    assert_eq!(notifier.events().len(), 1);

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/service-requests",
            serde_json::to_value(material_draft("m-999", 1)).expect("json"),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = router
        .oneshot(post_json(
            "/api/v1/service-requests",
            serde_json::to_value(vehicle_draft("v-004", 1, DurationUnit::Days)).expect("json"),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
