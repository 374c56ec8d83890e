//! Endpoints HTTP du skill
//!
//! - `POST /` and `POST /skill`: request envelope in, response envelope out
//! - `GET /stations`: registry content in file order
//! - `GET /info`: service name, version and station count

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use pirateradio::models::RequestEnvelope;
use pirateradio::{Error, ResponseEnvelope, Skill, Station, StationRegistry};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, warn};

/// Service name reported by `/info`
pub const SERVICE_NAME: &str = "pirate-radio";

// ============ Gestion des erreurs ============

struct ApiError(Error);

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            Error::Json(_) => StatusCode::BAD_REQUEST,
            Error::SkillIdMismatch { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.0.is_client_error() {
            warn!("Rejected skill request: {}", self.0);
        } else {
            error!("Skill request failed: {}", self.0);
        }

        let body = Json(serde_json::json!({
            "error": self.0.to_string()
        }));

        (status, body).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

/// État partagé par les handlers
#[derive(Clone)]
pub struct SkillState {
    pub skill: Arc<Skill>,
    pub registry: Arc<StationRegistry>,
}

/// Réponse de `GET /info`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub stations: usize,
}

/// Crée le router du skill
pub fn create_router(skill: Arc<Skill>, registry: Arc<StationRegistry>) -> Router {
    Router::new()
        .route("/", post(handle_envelope))
        .route("/skill", post(handle_envelope))
        .route("/stations", get(get_stations))
        .route("/info", get(get_info))
        .with_state(SkillState { skill, registry })
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST / et /skill
///
/// The body is parsed by hand so every malformed envelope gives a 400,
/// whatever the content type sent by the caller.
async fn handle_envelope(
    State(state): State<SkillState>,
    body: Bytes,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let envelope: RequestEnvelope = serde_json::from_slice(&body).map_err(Error::from)?;
    let response = state.skill.invoke(&envelope)?;
    Ok(Json(response))
}

/// GET /stations
async fn get_stations(State(state): State<SkillState>) -> Json<Vec<Station>> {
    Json(state.registry.stations())
}

/// GET /info
async fn get_info(State(state): State<SkillState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        stations: state.registry.len(),
    })
}
