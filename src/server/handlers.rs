// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::TrackerError;
use crate::models::Entry;
use crate::schema::Category;
use crate::server::AppState;
use crate::summary::{self, Dashboard, GoalStatus};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(error = %self, "request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = ErrorBody {
            error: self.to_string(),
            code: self.code(),
            detail: self.detail().map(str::to_string),
        };
        (status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, TrackerError>;

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "fintrack"
    }))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Vec<Entry>> {
    let category: Category = category.parse()?;
    match state.ledger.list(category) {
        Ok(entries) => Ok(Json(entries)),
        Err(e) => {
            tracing::warn!(%category, error = %e, "listing unreadable data file as empty");
            Ok(Json(Vec::new()))
        }
    }
}

pub async fn add_entry(
    State(state): State<AppState>,
    Path(category): Path<String>,
    body: Bytes,
) -> ApiResult<Value> {
    let category: Category = category.parse()?;
    append(&state, category, &body)
}

pub async fn add_goal(State(state): State<AppState>, body: Bytes) -> ApiResult<Value> {
    append(&state, Category::Goals, &body)
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path((category, index)): Path<(String, String)>,
) -> ApiResult<Value> {
    let category: Category = category.parse()?;
    let index: usize = index
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidIndex(index.clone()))?;
    state.ledger.delete_at(category, index)?;
    Ok(Json(json!({
        "message": format!("{} entry deleted successfully", category)
    })))
}

pub async fn dashboard(State(state): State<AppState>) -> Json<Dashboard> {
    Json(summary::dashboard(state.ledger.store()))
}

pub async fn list_goals(State(state): State<AppState>) -> ApiResult<Vec<GoalStatus>> {
    Ok(Json(summary::goals_with_progress(state.ledger.store())?))
}

fn append(state: &AppState, category: Category, body: &[u8]) -> ApiResult<Value> {
    let fields = parse_fields(body)?;
    state.ledger.append(category, &fields)?;
    Ok(Json(json!({ "message": "Entry added successfully" })))
}

fn parse_fields(body: &[u8]) -> Result<Map<String, Value>, TrackerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(TrackerError::EmptyPayload);
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| TrackerError::InvalidPayload(e.to_string()))?;
    match value {
        Value::Object(fields) => Ok(fields),
        Value::Null => Err(TrackerError::EmptyPayload),
        _ => Err(TrackerError::InvalidPayload(
            "expected a JSON object".to_string(),
        )),
    }
}
