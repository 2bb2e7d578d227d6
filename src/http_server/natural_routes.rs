//! Observation HTTP Routes (natural-key variant)
//!
//! Endpoints for the observations table keyed by the `radius` field itself.
//! Near-duplicate of the surrogate-key routes; the differences are the key
//! column, the three-field update body, and the primary-key constraint that
//! turns a duplicate radius into a store error on create.

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

use crate::store::natural::{NaturalStore, Observation, ObservationValues};

// ==================
// Shared State
// ==================

/// Observation state shared across handlers
pub struct NaturalState {
    pub store: NaturalStore,
}

impl NaturalState {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            store: NaturalStore::new(database_path),
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

impl From<ObservationPayload> for Observation {
    fn from(payload: ObservationPayload) -> Self {
        Self {
            radius: payload.radius,
            rssivalue: payload.rssivalue,
            lqivalue: payload.lqivalue,
            throughput: payload.throughput,
        }
    }
}

/// Replacement values for an update; the radius key comes from the path.
#[derive(Debug, Deserialize)]
pub struct ObservationValuesPayload {
    pub rssivalue: f64,
    pub lqivalue: f64,
    pub throughput: f64,
}

/// Wire shape of one listed row: positional field values, radius first.
pub type ObservationRow = (i64, f64, f64, f64);

/// Echo of an update: the path radius merged with the submitted fields.
#[derive(Debug, Serialize)]
pub struct UpdatedObservation {
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

/// Create observation routes keyed by radius
pub fn natural_routes(state: Arc<NaturalState>) -> Router {
    Router::new()
        .route("/", get(list_observations_handler))
        .route("/", post(create_observation_handler))
        .route("/{radius}", put(update_observation_handler))
        .route("/{radius}", delete(delete_observation_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_observations_handler(
    State(state): State<Arc<NaturalState>>,
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
            .map(|o| (o.radius, o.rssivalue, o.lqivalue, o.throughput))
            .collect(),
    ))
}

async fn create_observation_handler(
    State(state): State<Arc<NaturalState>>,
    Json(payload): Json<ObservationPayload>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    // An already-present radius violates the primary key and surfaces here
    // as a store error, like any other store failure.
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
    State(state): State<Arc<NaturalState>>,
    Path(radius): Path<i64>,
    Json(payload): Json<ObservationValuesPayload>,
) -> Result<Json<UpdatedObservation>, (StatusCode, Json<ErrorResponse>)> {
    let values = ObservationValues {
        rssivalue: payload.rssivalue,
        lqivalue: payload.lqivalue,
        throughput: payload.throughput,
    };

    // A missing radius matches zero rows and still reports success; the
    // caller cannot tell a no-op apart from a real update.
    state.store.update(radius, &values).map_err(|e| {
        error!("failed to update observation {}: {}", radius, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: "Failed to update observation".to_string(),
            }),
        )
    })?;

    Ok(Json(UpdatedObservation {
        radius,
        rssivalue: values.rssivalue,
        lqivalue: values.lqivalue,
        throughput: values.throughput,
    }))
}

async fn delete_observation_handler(
    State(state): State<Arc<NaturalState>>,
    Path(radius): Path<i64>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    state.store.delete(radius).map_err(|e| {
        error!("failed to delete observation {}: {}", radius, e);
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
