//! Observation HTTP Routes (surrogate-key variant)
//!
//! Endpoints for the observations table keyed by an auto-incrementing `id`.
//! Each handler performs exactly one statement against a freshly opened
//! store connection.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::store::surrogate::{NewObservation, SurrogateStore};

// ==================
// Shared State
// ==================

/// Observation state shared across handlers
pub struct SurrogateState {
    pub store: SurrogateStore,
}

impl SurrogateState {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            store: SurrogateStore::new(database_path),
        }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct ObservationPayload {
    pub radius: i64,
    pub rssivalue: f64,
    pub lqivalue: f64,
    pub throughput: f64,
}

impl From<ObservationPayload> for NewObservation {
    fn from(payload: ObservationPayload) -> Self {
        Self {
            radius: payload.radius,
            rssivalue: payload.rssivalue,
            lqivalue: payload.lqivalue,
            throughput: payload.throughput,
        }
    }
}

/// Wire shape of one listed row: positional field values, id first.
pub type ObservationRow = (i64, i64, f64, f64, f64);

/// Echo of an update: the path id merged with the submitted fields.
#[derive(Debug, Serialize)]
pub struct UpdatedObservation {
    pub id: i64,
    pub radius: i64,
    pub rssivalue: f64,
    pub lqivalue: f64,
    pub throughput: f64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

// ==================
// Observation Routes
// ==================

/// Create observation routes keyed by surrogate id
pub fn surrogate_routes(state: Arc<SurrogateState>) -> Router {
    Router::new()
        .route("/", get(list_observations_handler))
        .route("/", post(create_observation_handler))
        .route("/{id}", put(update_observation_handler))
        .route("/{id}", delete(delete_observation_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_observations_handler(
    State(state): State<Arc<SurrogateState>>,
) -> Result<Json<Vec<ObservationRow>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = state.store.list().map_err(|e| {
        error!("failed to fetch observations: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: "Failed to fetch observations".to_string(),
            }),
        )
    })?;

    Ok(Json(
        rows.into_iter()
            .map(|o| (o.id, o.radius, o.rssivalue, o.lqivalue, o.throughput))
            .collect(),
    ))
}

async fn create_observation_handler(
    State(state): State<Arc<SurrogateState>>,
    Json(payload): Json<ObservationPayload>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    state.store.insert(&payload.into()).map_err(|e| {
        error!("failed to create observation: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: "Failed to create observation".to_string(),
            }),
        )
    })?;

    Ok(Json(MessageResponse {
        message: "Observation added successfully".to_string(),
    }))
}

async fn update_observation_handler(
    State(state): State<Arc<SurrogateState>>,
    Path(id): Path<i64>,
    Json(payload): Json<ObservationPayload>,
) -> Result<Json<UpdatedObservation>, (StatusCode, Json<ErrorResponse>)> {
    let observation = NewObservation::from(payload);

    // A missing id matches zero rows and still reports success; the caller
    // cannot tell a no-op apart from a real update.
    state.store.update(id, &observation).map_err(|e| {
        error!("failed to update observation {}: {}", id, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: "Failed to update observation".to_string(),
            }),
        )
    })?;

    Ok(Json(UpdatedObservation {
        id,
        radius: observation.radius,
        rssivalue: observation.rssivalue,
        lqivalue: observation.lqivalue,
        throughput: observation.throughput,
    }))
}

async fn delete_observation_handler(
    State(state): State<Arc<SurrogateState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    state.store.delete(id).map_err(|e| {
        error!("failed to delete observation {}: {}", id, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: "Failed to delete observation".to_string(),
            }),
        )
    })?;

    Ok(Json(MessageResponse {
        message: "Observation deleted".to_string(),
    }))
}
