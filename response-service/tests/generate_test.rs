//! Integration tests for the generate-and-store endpoint.
//!
//! These tests require MongoDB to be running at mongodb://localhost:27017.

mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::TestApp;
use mongodb::bson::doc;
use response_service::services::providers::{ProviderError, TextProvider};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Provider that counts how many times it is called.
struct CountingProvider {
    calls: AtomicUsize,
}

#[async_trait]
impl TextProvider for CountingProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("Mock response for: {}", prompt))
    }
}

/// Provider that always fails.
struct FailingProvider;

#[async_trait]
impl TextProvider for FailingProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(ProviderError::ApiError("simulated provider outage".to_string()))
    }
}

#[tokio::test]
async fn generate_and_store_works() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/generate", app.address))
        .json(&json!({ "prompt": "Tell me a joke" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::CREATED.as_u16(), response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Response generated and stored");
    assert_eq!(body["data"]["prompt"], "Tell me a joke");
    assert_eq!(body["data"]["content"], "Mock response for: Tell me a joke");
    assert!(!body["data"]["id"].as_str().unwrap().is_empty());
    assert!(!body["data"]["createdAt"].as_str().unwrap().is_empty());

    // Verify the record landed in the database
    let id = body["data"]["id"].as_str().unwrap();
    let stored = app
        .db
        .responses()
        .find_one(doc! { "_id": id }, None)
        .await
        .unwrap()
        .expect("Response not found in DB");

    assert_eq!(stored.prompt, "Tell me a joke");
    assert_eq!(stored.content, "Mock response for: Tell me a joke");

    app.cleanup().await;
}

#[tokio::test]
async fn generate_without_prompt_returns_400_and_calls_nothing() {
    let provider = Arc::new(CountingProvider {
        calls: AtomicUsize::new(0),
    });
    let app = TestApp::spawn_with_provider(provider.clone()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/generate", app.address))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST.as_u16(), response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Prompt is required");

    // The provider was never called and nothing was stored
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    let count = app
        .db
        .responses()
        .count_documents(None, None)
        .await
        .unwrap();
    assert_eq!(count, 0);

    app.cleanup().await;
}

#[tokio::test]
async fn generate_with_empty_prompt_returns_400() {
    let provider = Arc::new(CountingProvider {
        calls: AtomicUsize::new(0),
    });
    let app = TestApp::spawn_with_provider(provider.clone()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/generate", app.address))
        .json(&json!({ "prompt": "" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST.as_u16(), response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Prompt is required");
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);

    app.cleanup().await;
}

#[tokio::test]
async fn generate_returns_500_when_store_rejects_insert() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    // Make every insert fail: require a field no record ever carries. The
    // collection already exists because index bootstrap created it.
    app.db
        .client()
        .database(&app.db_name)
        .run_command(
            doc! {
                "collMod": "responses",
                "validator": {
                    "$jsonSchema": {
                        "bsonType": "object",
                        "required": ["field_that_never_exists"]
                    }
                },
                "validationAction": "error"
            },
            None,
        )
        .await
        .expect("Failed to install collection validator");

    let response = client
        .post(format!("{}/api/generate", app.address))
        .json(&json!({ "prompt": "Tell me a joke" }))
        .send()
        .await
        .expect("Failed to execute request");

    // Generation succeeded but persistence failed; the generated text is
    // lost and the caller sees an opaque 500.
    assert_eq!(
        StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        response.status().as_u16()
    );

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Database error");

    let count = app
        .db
        .responses()
        .count_documents(None, None)
        .await
        .unwrap();
    assert_eq!(count, 0);

    app.cleanup().await;
}

#[tokio::test]
async fn generate_returns_500_when_provider_fails_and_stores_nothing() {
    let app = TestApp::spawn_with_provider(Arc::new(FailingProvider)).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/generate", app.address))
        .json(&json!({ "prompt": "Tell me a joke" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        response.status().as_u16()
    );

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Error generating content");

    let count = app
        .db
        .responses()
        .count_documents(None, None)
        .await
        .unwrap();
    assert_eq!(count, 0);

    app.cleanup().await;
}
