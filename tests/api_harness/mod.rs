//! Shared test harness for driving the full router over HTTP.
//!
//! Provides `spawn_app` for booting the application against a fresh
//! in-memory database, and the `resource_api_tests!` macro generating the
//! API contract suite for a resource.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod api_harness;
//! use api_harness::*;
//!
//! resource_api_tests!("/v1/invoices", "Invoice", json!({...}), |id| json!({...}));
//! ```

#![allow(dead_code)]

use axum_test::TestServer;
use billing::config::AppConfig;
use billing::server::build_app;
use billing::storage::sqlite::connect;
use std::sync::Arc;

/// Boot the full application against a fresh in-memory database.
pub async fn spawn_app() -> TestServer {
    let config = Arc::new(AppConfig::default_config());
    let pool = connect(":memory:").await.expect("database");
    let app = build_app(config, pool).await.expect("router");
    TestServer::try_new(app).expect("test server")
}

/// Generate the API contract test suite for one resource.
///
/// - `$path`: collection path (e.g. `"/v1/invoices"`)
/// - `$title`: capitalized singular used in confirmation messages
/// - `$payload`: a create payload with every field at a non-zero value
/// - `$update`: closure from an id to a full update payload embedding it
#[macro_export]
macro_rules! resource_api_tests {
    ($path:expr, $title:expr, $payload:expr, $update:expr) => {
        mod resource_api_contract_tests {
            use super::*;
            use axum::http::{Method, StatusCode};
            use serde_json::Value;

            /// POST the sample payload and return the assigned id.
            ///
            /// The create response carries only a confirmation message, so
            /// the id is discovered through the listing.
            async fn create_one(server: &axum_test::TestServer) -> i64 {
                let response = server.post($path).json(&$payload).await;
                assert_eq!(response.status_code(), StatusCode::CREATED);
                let body: Value = response.json();
                assert_eq!(
                    body["message"],
                    format!("{} created successfully", $title)
                );

                let listed: Value = server.get($path).await.json();
                listed
                    .as_array()
                    .expect("listing is an array")
                    .last()
                    .expect("listing contains the created entity")["id"]
                    .as_i64()
                    .expect("entity has a numeric id")
            }

            fn with_id(mut payload: Value, id: i64) -> Value {
                payload["id"] = serde_json::json!(id);
                payload
            }

            fn error_text(body: &Value) -> &str {
                body["error"].as_str().expect("error body has a message")
            }

            // ==============================================================
            // Create
            // ==============================================================

            #[tokio::test]
            async fn test_create_then_fetch_round_trips() {
                let server = spawn_app().await;
                let id = create_one(&server).await;
                assert!(id > 0, "assigned id should be positive");

                let response = server.get(&format!("{}/{}", $path, id)).await;
                assert_eq!(response.status_code(), StatusCode::OK);
                let fetched: Value = response.json();
                assert_eq!(fetched, with_id($payload, id));
            }

            #[tokio::test]
            async fn test_create_assigns_fresh_ids() {
                let server = spawn_app().await;
                let first = create_one(&server).await;
                let second = create_one(&server).await;
                assert!(second > first, "ids should never be reused");
            }

            #[tokio::test]
            async fn test_create_malformed_body_is_400() {
                let server = spawn_app().await;
                let response = server.post($path).text("{not json").await;
                assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert!(!error_text(&body).is_empty());
            }

            // ==============================================================
            // List
            // ==============================================================

            #[tokio::test]
            async fn test_list_empty_returns_empty_array() {
                let server = spawn_app().await;
                let response = server.get($path).await;
                assert_eq!(response.status_code(), StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(body, serde_json::json!([]));
            }

            #[tokio::test]
            async fn test_list_returns_all_entities() {
                let server = spawn_app().await;
                create_one(&server).await;
                create_one(&server).await;

                let listed: Value = server.get($path).await.json();
                assert_eq!(listed.as_array().unwrap().len(), 2);
            }

            // ==============================================================
            // Update
            // ==============================================================

            #[tokio::test]
            async fn test_update_existing() {
                let server = spawn_app().await;
                let id = create_one(&server).await;

                let response = server
                    .put(&format!("{}/{}", $path, id))
                    .json(&$update(id))
                    .await;
                assert_eq!(response.status_code(), StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(
                    body["message"],
                    format!("{} updated successfully", $title)
                );

                let fetched: Value = server.get(&format!("{}/{}", $path, id)).await.json();
                assert_eq!(fetched, $update(id));
            }

            #[tokio::test]
            async fn test_update_without_payload_id_uses_path() {
                let server = spawn_app().await;
                let id = create_one(&server).await;

                let mut payload = ($update)(0);
                payload.as_object_mut().unwrap().remove("id");
                let response = server.put(&format!("{}/{}", $path, id)).json(&payload).await;
                assert_eq!(response.status_code(), StatusCode::OK);

                let fetched: Value = server.get(&format!("{}/{}", $path, id)).await.json();
                assert_eq!(fetched, with_id(payload, id));
            }

            #[tokio::test]
            async fn test_update_identity_mismatch_is_400() {
                let server = spawn_app().await;
                let id = create_one(&server).await;

                let response = server
                    .put(&format!("{}/{}", $path, id))
                    .json(&$update(id + 1))
                    .await;
                assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert!(!error_text(&body).is_empty());

                // The store was never reached.
                let fetched: Value = server.get(&format!("{}/{}", $path, id)).await.json();
                assert_eq!(fetched, with_id($payload, id));
            }

            #[tokio::test]
            async fn test_update_malformed_body_is_422() {
                let server = spawn_app().await;
                let id = create_one(&server).await;

                let response = server
                    .put(&format!("{}/{}", $path, id))
                    .text("{not json")
                    .await;
                assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
                let body: Value = response.json();
                assert!(!error_text(&body).is_empty());
            }

            #[tokio::test]
            async fn test_update_unknown_id_is_404() {
                let server = spawn_app().await;
                let response = server
                    .put(&format!("{}/9999", $path))
                    .json(&$update(9999))
                    .await;
                assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_update_non_numeric_id_is_500() {
                let server = spawn_app().await;
                let response = server
                    .put(&format!("{}/abc", $path))
                    .json(&$update(0))
                    .await;
                assert_eq!(
                    response.status_code(),
                    StatusCode::INTERNAL_SERVER_ERROR
                );
            }

            // ==============================================================
            // Fetch
            // ==============================================================

            #[tokio::test]
            async fn test_fetch_unknown_id_is_404() {
                let server = spawn_app().await;
                let response = server.get(&format!("{}/9999", $path)).await;
                assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
                let body: Value = response.json();
                assert!(!error_text(&body).is_empty());
            }

            #[tokio::test]
            async fn test_fetch_non_numeric_id_is_500() {
                let server = spawn_app().await;
                let response = server.get(&format!("{}/abc", $path)).await;
                assert_eq!(
                    response.status_code(),
                    StatusCode::INTERNAL_SERVER_ERROR
                );
            }

            #[tokio::test]
            async fn test_fetch_is_repeatable() {
                let server = spawn_app().await;
                let id = create_one(&server).await;

                let first: Value = server.get(&format!("{}/{}", $path, id)).await.json();
                let second: Value = server.get(&format!("{}/{}", $path, id)).await.json();
                assert_eq!(first, second);
            }

            // ==============================================================
            // Delete
            // ==============================================================

            #[tokio::test]
            async fn test_delete_then_fetch_is_404() {
                let server = spawn_app().await;
                let id = create_one(&server).await;

                let response = server.delete(&format!("{}/{}", $path, id)).await;
                assert_eq!(response.status_code(), StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(
                    body["message"],
                    format!("{} deleted successfully", $title)
                );

                let response = server.get(&format!("{}/{}", $path, id)).await;
                assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_delete_unknown_id_is_500() {
                let server = spawn_app().await;
                let response = server.delete(&format!("{}/9999", $path)).await;
                assert_eq!(
                    response.status_code(),
                    StatusCode::INTERNAL_SERVER_ERROR
                );
            }

            #[tokio::test]
            async fn test_delete_is_idempotent_in_failure() {
                let server = spawn_app().await;
                let id = create_one(&server).await;
                server.delete(&format!("{}/{}", $path, id)).await;

                // Re-deleting keeps failing identically with no side effect.
                let first = server.delete(&format!("{}/{}", $path, id)).await;
                let second = server.delete(&format!("{}/{}", $path, id)).await;
                assert_eq!(
                    first.status_code(),
                    StatusCode::INTERNAL_SERVER_ERROR
                );
                assert_eq!(first.status_code(), second.status_code());
            }

            #[tokio::test]
            async fn test_delete_non_numeric_id_is_500() {
                let server = spawn_app().await;
                let response = server.delete(&format!("{}/abc", $path)).await;
                assert_eq!(
                    response.status_code(),
                    StatusCode::INTERNAL_SERVER_ERROR
                );
            }

            // ==============================================================
            // Stubs
            // ==============================================================

            #[tokio::test]
            async fn test_patch_stub_acknowledges_without_side_effect() {
                let server = spawn_app().await;
                let response = server.patch(&format!("{}/1", $path)).await;
                assert_eq!(response.status_code(), StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(body["message"], "PATCH");

                // The service was never reached: nothing was created.
                let listed: Value = server.get($path).await.json();
                assert_eq!(listed, serde_json::json!([]));
            }

            #[tokio::test]
            async fn test_options_stub() {
                let server = spawn_app().await;
                let response = server.method(Method::OPTIONS, $path).await;
                assert_eq!(response.status_code(), StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(body["message"], "OPTIONS");
            }

            #[tokio::test]
            async fn test_head_stub() {
                let server = spawn_app().await;
                let response = server.method(Method::HEAD, $path).await;
                assert_eq!(response.status_code(), StatusCode::OK);
            }
        }
    };
}
