// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for POST /api/generate against a mock image provider

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{
    post_generate, send, test_app, test_config, MockProvider, SAMPLE_B64, UNREACHABLE_BASE_URL,
};

// ============================================================================
// Successful generation
// ============================================================================

#[tokio::test]
async fn test_generate_returns_data_uri() {
    let provider = MockProvider::with_image(SAMPLE_B64).await;
    let app = test_app(test_config(&provider.base_url(), Some("sk-test")));

    let response = send(app, post_generate(r#"{"description":"a cat"}"#)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({ "image": "data:image/png;base64,QQ==" })
    );
    assert_eq!(
        response.headers.get("content-type").unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_outbound_request_shape() {
    let provider = MockProvider::with_image(SAMPLE_B64).await;
    let app = test_app(test_config(&provider.base_url(), Some("sk-test")));

    let body = json!({
        "description": "  a lighthouse on a cliff  ",
        "aspectRatio": "landscape",
        "style": "detailed"
    });
    let response = send(app, post_generate(body.to_string())).await;
    assert_eq!(response.status, StatusCode::OK);

    let requests = provider.requests().await;
    assert_eq!(requests.len(), 1);
    let outbound = &requests[0];
    assert_eq!(outbound.authorization.as_deref(), Some("Bearer sk-test"));
    assert_eq!(outbound.body["model"], "gpt-image-1");
    assert_eq!(outbound.body["size"], "1536x1024");
    assert_eq!(outbound.body["response_format"], "b64_json");

    let prompt = outbound.body["prompt"].as_str().unwrap();
    assert!(prompt.starts_with("Create a black and white line art illustration"));
    assert!(prompt.contains("Highly detailed adult coloring page."));
    assert!(prompt.ends_with("Scene description: a lighthouse on a cliff"));
}

#[tokio::test]
async fn test_unknown_aspect_ratio_falls_back_to_square() {
    let provider = MockProvider::with_image(SAMPLE_B64).await;
    let app = test_app(test_config(&provider.base_url(), Some("sk-test")));

    let response = send(
        app,
        post_generate(r#"{"description":"x","aspectRatio":"bogus"}"#),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let requests = provider.requests().await;
    assert_eq!(requests[0].body["size"], "1024x1024");
}

#[tokio::test]
async fn test_invalid_style_and_ratio_types_do_not_reject() {
    let provider = MockProvider::with_image(SAMPLE_B64).await;
    let app = test_app(test_config(&provider.base_url(), Some("sk-test")));

    let response = send(
        app,
        post_generate(r#"{"description":"a dragon","aspectRatio":42,"style":["detailed"]}"#),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let requests = provider.requests().await;
    assert_eq!(requests[0].body["size"], "1024x1024");
    let prompt = requests[0].body["prompt"].as_str().unwrap();
    assert!(prompt.contains("Classic children's coloring book lines."));
}

#[tokio::test]
async fn test_configured_model_is_sent() {
    let provider = MockProvider::with_image(SAMPLE_B64).await;
    let mut config = test_config(&provider.base_url(), Some("sk-test"));
    config.image_model = "dall-e-3".to_string();
    let app = test_app(config);

    send(app, post_generate(r#"{"description":"a boat"}"#)).await;

    assert_eq!(provider.requests().await[0].body["model"], "dall-e-3");
}

// ============================================================================
// Client input errors
// ============================================================================

#[tokio::test]
async fn test_empty_description_rejected() {
    let provider = MockProvider::with_image(SAMPLE_B64).await;
    let app = test_app(test_config(&provider.base_url(), Some("sk-test")));

    let response = send(app, post_generate(r#"{"description":""}"#)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json(),
        json!({ "error": "A description is required to generate an image." })
    );
    assert!(provider.requests().await.is_empty());
}

#[tokio::test]
async fn test_bad_descriptions_never_reach_provider() {
    let provider = MockProvider::with_image(SAMPLE_B64).await;
    let cases = [
        r#"{}"#,
        r#"{"description":"   \n\t "}"#,
        r#"{"description":123}"#,
        r#"{"description":null}"#,
        r#"{"description":"\ufeff"}"#,
        r#"{"description":" \ufeff\u00a0\u2028 "}"#,
        r#"{"aspectRatio":"portrait","style":"minimalist"}"#,
        r#"null"#,
        r#"[1,2,3]"#,
        r#""a cat""#,
    ];

    for body in cases {
        let app = test_app(test_config(&provider.base_url(), Some("sk-test")));
        let response = send(app, post_generate(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(
            response.json()["error"],
            "A description is required to generate an image.",
            "body: {}",
            body
        );
    }

    assert!(provider.requests().await.is_empty());
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = test_app(test_config(UNREACHABLE_BASE_URL, Some("sk-test")));

    for body in [r#"{"description": "a cat""#, "", "not json"] {
        let response = send(app.clone(), post_generate(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {:?}", body);
        assert_eq!(
            response.json(),
            json!({ "error": "Request body must be valid JSON." })
        );
    }
}

// ============================================================================
// Configuration errors
// ============================================================================

#[tokio::test]
async fn test_missing_api_key_returns_500_without_calling_provider() {
    let provider = MockProvider::with_image(SAMPLE_B64).await;
    let app = test_app(test_config(&provider.base_url(), None));

    let response = send(app, post_generate(r#"{"description":"a cat"}"#)).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json(),
        json!({ "error": "OPENAI_API_KEY is not configured." })
    );
    assert!(provider.requests().await.is_empty());
}

#[tokio::test]
async fn test_description_checked_before_api_key() {
    let app = test_app(test_config(UNREACHABLE_BASE_URL, None));

    let response = send(app, post_generate(r#"{"description":" "}"#)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Upstream provider errors
// ============================================================================

#[tokio::test]
async fn test_provider_error_status_is_relayed() {
    let provider_body = r#"{"error":{"message":"Rate limit reached"}}"#;
    let provider = MockProvider::start(StatusCode::TOO_MANY_REQUESTS, provider_body).await;
    let app = test_app(test_config(&provider.base_url(), Some("sk-test")));

    let response = send(app, post_generate(r#"{"description":"a cat"}"#)).await;

    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        response.json(),
        json!({ "error": "Image generation failed.", "details": provider_body })
    );
}

#[tokio::test]
async fn test_provider_unauthorized_is_relayed() {
    let provider = MockProvider::start(StatusCode::UNAUTHORIZED, "bad key").await;
    let app = test_app(test_config(&provider.base_url(), Some("sk-wrong")));

    let response = send(app, post_generate(r#"{"description":"a cat"}"#)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["details"], "bad key");
}

#[tokio::test]
async fn test_provider_without_image_data_returns_502() {
    let cases = [
        r#"{"data":[]}"#,
        r#"{"data":[{"url":"https://example.com/a.png"}]}"#,
        r#"{"data":[{"b64_json":""}]}"#,
        r#"{"data":[{"b64_json":5}]}"#,
        r#"{"data":[{"b64_json":null}]}"#,
        r#"{"created":123}"#,
        r#"null"#,
    ];

    for body in cases {
        let provider = MockProvider::start(StatusCode::OK, body).await;
        let app = test_app(test_config(&provider.base_url(), Some("sk-test")));

        let response = send(app, post_generate(r#"{"description":"a cat"}"#)).await;

        assert_eq!(response.status, StatusCode::BAD_GATEWAY, "body: {}", body);
        assert_eq!(
            response.json(),
            json!({ "error": "Image service did not return data." })
        );
    }
}

#[tokio::test]
async fn test_provider_non_json_success_returns_500() {
    let provider = MockProvider::start(StatusCode::OK, "<html>oops</html>").await;
    let app = test_app(test_config(&provider.base_url(), Some("sk-test")));

    let response = send(app, post_generate(r#"{"description":"a cat"}"#)).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json(),
        json!({ "error": "Unable to generate image at this time." })
    );
}

#[tokio::test]
async fn test_unreachable_provider_returns_500() {
    let app = test_app(test_config(UNREACHABLE_BASE_URL, Some("sk-test")));

    let response = send(app, post_generate(r#"{"description":"a cat"}"#)).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json(),
        json!({ "error": "Unable to generate image at this time." })
    );
}
