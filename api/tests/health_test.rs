mod helpers;

use axum::http::StatusCode;
use helpers::AppContext;
use serde_json::Value;
use test_context::test_context;

#[test_context(AppContext)]
#[tokio::test]
async fn test_health_endpoint(ctx: &mut AppContext) {
    let response = ctx.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_openapi_document_lists_meal_plan_route(ctx: &mut AppContext) {
    let response = ctx.server.get("/api-docs/openapi.json").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let document: Value = response.json();
    assert!(document["paths"]["/api/AIResponse"]["post"].is_object());
    assert!(document["paths"]["/health"]["get"].is_object());
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_unknown_route(ctx: &mut AppContext) {
    let response = ctx.server.get("/api/unknown").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
