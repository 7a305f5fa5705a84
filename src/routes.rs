//! HTTP surface: the form page and the operational health probe.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Json, Router};
use serde::Serialize;

use crate::features::ProductionRecord;
use crate::page::{self, PageOutcome};
use crate::service::PredictionService;

pub const MODEL_UNAVAILABLE: &str = "Model not loaded. Please check server logs.";

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn show_form() -> Html<String> {
    Html(page::render(None))
}

pub async fn submit(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    // Readiness is checked before any field is touched.
    if !state.service.is_ready() {
        return (StatusCode::INTERNAL_SERVER_ERROR, MODEL_UNAVAILABLE).into_response();
    }

    let outcome = match ProductionRecord::from_form(&fields) {
        Ok(record) => match state.service.predict(&record.feature_vector()) {
            Ok(prediction) => PageOutcome::Result(prediction),
            Err(_) => {
                return (StatusCode::INTERNAL_SERVER_ERROR, MODEL_UNAVAILABLE).into_response()
            }
        },
        Err(err) => {
            tracing::warn!("rejected submission: {err}");
            PageOutcome::Failure(format!("Error: Could not process request. Details: {err}"))
        }
    };

    Html(page::render(Some(&outcome))).into_response()
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let ready = state.service.is_ready();
    Json(HealthResponse {
        status: if ready { "ok" } else { "degraded" },
        model_loaded: ready,
    })
}
