//! Thermostat event intake.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use filpilote_app::ports::{AreaRepository, LineController};

use crate::state::AppState;

/// A thermostat `set mode` event.
#[derive(Deserialize)]
pub struct ThermostatEvent {
    pub device_id: String,
    pub mode: String,
}

/// `POST /api/thermostat/events`
///
/// Always accepted: events for unknown devices or modes are ignored.
pub async fn receive<R, L>(
    State(state): State<AppState<R, L>>,
    Json(event): Json<ThermostatEvent>,
) -> StatusCode
where
    R: AreaRepository + Send + Sync + 'static,
    L: LineController + Send + Sync + 'static,
{
    state
        .thermostat_service
        .on_external_mode_event(&event.device_id, &event.mode)
        .await;
    StatusCode::ACCEPTED
}
