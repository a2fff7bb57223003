//! Shared test harness for integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use book_library::application::service::LibraryService;
use book_library::infra::memory_store::SharedStore;
use book_library::interface::http::router;

// =============================================================================
// Service / Router builders
// =============================================================================

/// 初期データ2冊入りのService。
pub fn seeded_service() -> LibraryService<SharedStore> {
    LibraryService::new(SharedStore::seeded())
}

/// 初期データ2冊入りのRouter。
pub fn seeded_app() -> Router {
    router(seeded_service())
}

// =============================================================================
// Request helper — in-process oneshot
// =============================================================================

/// Routerにリクエストを1回送り、(status, JSON body) を返す。
/// bodyが空のレスポンスはValue::Null。
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
