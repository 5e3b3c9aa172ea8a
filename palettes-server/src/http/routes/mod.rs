//! Route handlers organized by resource

pub mod health;
pub mod palettes;
pub mod projects;

use axum::Router;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::server::AppState;
use crate::db::Table;

/// Body of a 201 response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Resource routes mounted under `/api/v1`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(projects::router())
        .merge(palettes::router())
}

/// Fail with 404 unless a row with `id` exists in `table`.
async fn ensure_exists(state: &AppState, table: Table, id: i64) -> Result<(), ApiError> {
    if state.store().exists(table, id).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound {
            resource: table.as_str(),
        })
    }
}
