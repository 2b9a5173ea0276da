//! Item HTTP Routes
//!
//! # Responsibility
//! - Parse path/body input and delegate to `ItemService`.
//! - Open a storage handle per request on the blocking pool.
//!
//! # Invariants
//! - No connection outlives the request that opened it.
//! - Handlers hold no state besides the database location.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use itemstore_core::db::open_db;
use itemstore_core::{
    liveness_message, Item, ItemId, ItemPatch, ItemService, NewItem, RepoResult,
    SqliteItemRepository,
};
use log::{info, log, Level};

use crate::error::{ApiError, ApiResult};

/// Shared handler state: where to open storage handles from.
#[derive(Debug, Clone)]
pub struct AppState {
    db_path: PathBuf,
}

impl AppState {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

/// Create item routes
pub fn item_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/items", post(create_item_handler))
        .route(
            "/items/:item_id",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )
        .with_state(state)
}

async fn root_handler() -> Json<&'static str> {
    Json(liveness_message())
}

async fn create_item_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewItem>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    let started_at = Instant::now();
    let result = with_item_service(&state, move |service| service.create_item(&request)).await;
    log_outcome("item_create", started_at, &result, None);
    result.map(|item| (StatusCode::CREATED, Json(item)))
}

async fn get_item_handler(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<ItemId>,
) -> ApiResult<Json<Item>> {
    let started_at = Instant::now();
    let result = with_item_service(&state, move |service| service.get_item(item_id)).await;
    log_outcome("item_get", started_at, &result, Some(item_id));
    result.map(Json)
}

async fn update_item_handler(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<ItemId>,
    Json(patch): Json<ItemPatch>,
) -> ApiResult<Json<Item>> {
    let started_at = Instant::now();
    let result =
        with_item_service(&state, move |service| service.update_item(item_id, &patch)).await;
    log_outcome("item_update", started_at, &result, Some(item_id));
    result.map(Json)
}

async fn delete_item_handler(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<ItemId>,
) -> ApiResult<Json<Item>> {
    let started_at = Instant::now();
    let result = with_item_service(&state, move |service| service.delete_item(item_id)).await;
    log_outcome("item_delete", started_at, &result, Some(item_id));
    result.map(Json)
}

/// Runs `op` against a service bound to a freshly opened connection.
///
/// The connection is dropped when the blocking task returns, on success and
/// on error alike.
async fn with_item_service<T, F>(state: &AppState, op: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&ItemService<SqliteItemRepository<'_>>) -> RepoResult<T> + Send + 'static,
{
    let db_path = state.db_path.clone();
    tokio::task::spawn_blocking(move || {
        let conn = open_db(&db_path)?;
        let service = ItemService::new(SqliteItemRepository::new(&conn));
        op(&service).map_err(ApiError::from)
    })
    .await
    .map_err(|err| ApiError::Internal(format!("storage task failed: {err}")))?
}

fn log_outcome(
    event: &str,
    started_at: Instant,
    result: &ApiResult<Item>,
    item_id: Option<ItemId>,
) {
    let duration_ms = started_at.elapsed().as_millis();
    match result {
        Ok(item) => info!(
            "event={event} module=http status=ok item_id={} duration_ms={duration_ms}",
            item.id
        ),
        Err(err) => {
            // Missing ids are routine client traffic; keep them off stderr.
            let level = match err {
                ApiError::Internal(_) => Level::Warn,
                _ => Level::Info,
            };
            log!(
                level,
                "event={event} module=http status=error item_id={} duration_ms={duration_ms} http_status={}",
                item_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                err.status_code().as_u16()
            );
        }
    }
}
