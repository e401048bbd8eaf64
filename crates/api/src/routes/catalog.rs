//! Catalog route handlers.
//!
//! Every request under `/api` lands here with the remaining path; the route
//! table decides which catalog operation runs.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use pineapple_core::envelope::{MessageBody, WELCOME_MESSAGE};

use super::table::{ReadRoute, WriteRoute};
use crate::error::{AppError, Result};
use crate::services::catalog;
use crate::state::AppState;

/// `GET /api`
pub async fn read_root(State(state): State<AppState>) -> Result<Response> {
    read(&state, "").await
}

/// `GET /api/{*path}`
pub async fn read_path(State(state): State<AppState>, Path(path): Path<String>) -> Result<Response> {
    read(&state, &path).await
}

/// `POST /api`
pub async fn write_root(State(state): State<AppState>) -> Result<Response> {
    write(&state, "").await
}

/// `POST /api/{*path}`
pub async fn write_path(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response> {
    write(&state, &path).await
}

#[instrument(skip(state))]
async fn read(state: &AppState, path: &str) -> Result<Response> {
    let store = state.store();
    let response = match ReadRoute::resolve(path) {
        ReadRoute::ListAll => Json(catalog::list_all(store).await?).into_response(),
        ReadRoute::ListByCategory(category) => {
            Json(catalog::list_by_category(store, category).await?).into_response()
        }
        ReadRoute::GetProduct(id) => Json(catalog::get_product(store, id).await?).into_response(),
        ReadRoute::Welcome => Json(MessageBody {
            message: WELCOME_MESSAGE.to_string(),
        })
        .into_response(),
    };
    Ok(response)
}

#[instrument(skip(state))]
async fn write(state: &AppState, path: &str) -> Result<Response> {
    match WriteRoute::resolve(path) {
        WriteRoute::Seed => Ok(Json(catalog::seed(state.store()).await?).into_response()),
        WriteRoute::Invalid => Err(AppError::InvalidEndpoint(path.to_string())),
    }
}
