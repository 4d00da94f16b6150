// File: ./src/server/handlers.rs
//! Request handlers for the three `/api` endpoints.
use crate::server::ShimState;
use crate::store::StoreError;
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Not-found and unexpected failures; clients only ever see the status.
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            StoreError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            StoreError::Io(e) => {
                log::error!("[local-api] {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

/// `GET /api/runs`
pub async fn list_runs(State(state): State<ShimState>) -> Result<Json<Vec<String>>, StoreError> {
    Ok(Json(state.tree.list_runs().await?))
}

/// `GET /api/run/{run}/files`
pub async fn list_files(
    State(state): State<ShimState>,
    Path(run): Path<String>,
) -> Result<Json<Vec<String>>, StoreError> {
    Ok(Json(state.tree.list_files(&run).await?))
}

/// `GET /api/run/{run}/file/{file}`
pub async fn fetch_file(
    State(state): State<ShimState>,
    Path((run, file)): Path<(String, String)>,
) -> Result<impl IntoResponse, StoreError> {
    let text = state.tree.read_file(&run, &file).await?;
    Ok(([(header::CONTENT_TYPE, CSV_CONTENT_TYPE)], text))
}
