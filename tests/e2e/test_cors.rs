use crate::e2e::helpers;

use helpers::{default_token_payload, gemini_payload, stub_provider::StubResponse, TestContext, TEST_ROAST_TEXT};
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

const FRONTEND_ORIGIN: &str = "https://frontend.example";

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_allow_preflight_from_any_origin(ctx: &TestContext) {
    let response = ctx
        .client
        .options(
            "/api/roast",
            &[
                ("Origin", FRONTEND_ORIGIN),
                ("Access-Control-Request-Method", "POST"),
                ("Access-Control-Request-Headers", "content-type"),
            ],
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    response.assert_header("access-control-allow-origin", "*");

    let methods = response
        .header("access-control-allow-methods")
        .expect("Missing allow-methods header");
    assert!(methods.contains("POST"), "POST not allowed: {}", methods);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_add_cors_headers_to_error_responses(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_headers(
            "/api/token-exchange",
            &json!({}),
            &[("Origin", FRONTEND_ORIGIN)],
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_header("access-control-allow-origin", "*");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_apply_cors_and_request_id_to_the_same_response(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_headers(
            "/api/roast",
            &json!({"summaryText": "Top Artists: X."}),
            &[("Origin", FRONTEND_ORIGIN)],
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    response.assert_header("access-control-allow-origin", "*");
    response.assert_header_exists("x-request-id");
}

#[tokio::test]
async fn it_should_restrict_origins_when_configured() {
    let ctx = TestContext::start(
        StubResponse::ok(default_token_payload()),
        StubResponse::ok(gemini_payload(TEST_ROAST_TEXT)),
        |config| config.cors_allowed_origins = Some(vec![FRONTEND_ORIGIN.to_string()]),
    )
    .await
    .unwrap();

    let allowed = ctx
        .client
        .post_with_headers(
            "/api/roast",
            &json!({"summaryText": "Top Artists: X."}),
            &[("Origin", FRONTEND_ORIGIN)],
        )
        .await
        .unwrap();
    allowed.assert_status(StatusCode::OK);
    allowed.assert_header("access-control-allow-origin", FRONTEND_ORIGIN);

    let other = ctx
        .client
        .post_with_headers(
            "/api/roast",
            &json!({"summaryText": "Top Artists: X."}),
            &[("Origin", "https://evil.example")],
        )
        .await
        .unwrap();
    assert!(other.header("access-control-allow-origin").is_none());
}
