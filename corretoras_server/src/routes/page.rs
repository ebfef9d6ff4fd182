//! `GET /`: the full broker list as an HTML table, plus the 404 fallback.

use std::sync::Arc;

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use corretoras_lib::BrokerDisplay;

use crate::error::AppError;
use crate::state::AppState;

pub const NOT_FOUND_BODY: &str = "Wrong route, young boy";

#[derive(Template)]
#[template(path = "brokers.html")]
pub struct BrokersPage {
    pub brokers: Vec<BrokerDisplay>,
}

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let brokers = state.directory.display_list().await?;
    let count = brokers.len();
    let html = BrokersPage { brokers }.render()?;
    tracing::info!(count, "rendered broker page");
    Ok(Html(html))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
