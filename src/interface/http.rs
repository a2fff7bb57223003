//! HTTP interface for book-library
//!
//! REST (axum) <-> application::LibraryService
//!
//! 5 routes: GET /books, GET /books/{id}, POST /books, PUT /books/{id},
//! DELETE /books/{id}

use std::net::SocketAddr;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::application::error::AppError;
use crate::application::service::LibraryService;
use crate::domain::error::DomainError;
use crate::domain::model::book::Book;
use crate::domain::model::id::BookId;
use crate::infra::memory_store::SharedStore;

type AppService = LibraryService<SharedStore>;

// =============================================================================
// Public entry point
// =============================================================================

/// HTTP Serverを起動する。初期データ入りのStoreを1つ所有して全ハンドラで共有する。
pub async fn run(addr: SocketAddr) -> anyhow::Result<()> {
    let service = LibraryService::new(SharedStore::seeded());
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "book library API listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Routerを構築する。テストからも直接使う。
pub fn router(service: AppService) -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(service)
}

// =============================================================================
// Request / response types
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
struct CreateBookPayload {
    title: Option<String>,
    author: Option<String>,
}

/// 更新は欠落フィールドを空文字で上書きする（createと異なり検証しない）。
#[derive(Debug, Clone, Deserialize)]
struct UpdateBookPayload {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
}

#[derive(Debug, Serialize)]
struct DeletedBody {
    message: String,
    book: Book,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

// =============================================================================
// Handlers
// =============================================================================

async fn list_books(State(svc): State<AppService>) -> Response {
    match svc.list_books() {
        Ok(books) => (StatusCode::OK, Json(books)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn get_book(State(svc): State<AppService>, Path(raw_id): Path<String>) -> Response {
    let Some(id) = parse_book_id(&raw_id) else {
        return not_found_response();
    };
    match svc.get_book(id) {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn create_book(
    State(svc): State<AppService>,
    Json(payload): Json<CreateBookPayload>,
) -> Response {
    let title = payload.title.unwrap_or_default();
    let author = payload.author.unwrap_or_default();
    match svc.create_book(title, author) {
        Ok(book) => (StatusCode::CREATED, Json(book)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn update_book(
    State(svc): State<AppService>,
    Path(raw_id): Path<String>,
    Json(payload): Json<UpdateBookPayload>,
) -> Response {
    let Some(id) = parse_book_id(&raw_id) else {
        return not_found_response();
    };
    match svc.update_book(id, payload.title, payload.author) {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn delete_book(State(svc): State<AppService>, Path(raw_id): Path<String>) -> Response {
    let Some(id) = parse_book_id(&raw_id) else {
        return not_found_response();
    };
    match svc.delete_book(id) {
        Ok(book) => (
            StatusCode::OK,
            Json(DeletedBody {
                message: "Book deleted".to_string(),
                book,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// パスのIDセグメントを解釈する。
/// 数値でない場合はNone（存在しないIDの検索と同じ扱い、専用エラーにはしない）。
fn parse_book_id(raw: &str) -> Option<BookId> {
    raw.parse::<u64>().ok().map(BookId::new)
}

fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            message: "Book not found".to_string(),
        }),
    )
        .into_response()
}

fn error_response(e: AppError) -> Response {
    match e {
        AppError::Domain(DomainError::BookNotFound(_)) => not_found_response(),
        AppError::Domain(DomainError::MissingFields) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                message: "Title and author are required".to_string(),
            }),
        )
            .into_response(),
        AppError::Storage(source) => {
            tracing::error!(error = %source, "storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    message: "Internal server error".to_string(),
                }),
            )
                .into_response()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
