//! `GET /paginated`: one page of raw broker records as JSON.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::Json;
use corretoras_lib::types::Broker;
use corretoras_lib::{PageRequest, Paginated};

use crate::error::AppError;
use crate::state::AppState;

/// Invalid or non-positive `page`/`pageSize` values fall back to the
/// defaults instead of rejecting the request.
pub async fn get_paginated(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Paginated<Broker>>, AppError> {
    let request = PageRequest::from_query(query.as_deref());
    let page = state.directory.page(request).await?;
    tracing::info!(
        page = page.page,
        page_size = page.page_size,
        returned = page.data.len(),
        total_items = page.total_items,
        "served broker page"
    );
    Ok(Json(page))
}
