//! JSON handlers for areas and their mode.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use filpilote_app::ports::{AreaRepository, LineController};
use filpilote_domain::area::Area;
use filpilote_domain::error::{FilPiloteError, NotFoundError};
use filpilote_domain::id::AreaId;
use filpilote_domain::mode::Mode;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating an area.
#[derive(Deserialize)]
pub struct CreateAreaRequest {
    pub name: String,
    pub line_a: String,
    pub line_b: String,
}

/// Request body for changing the mode of an area.
#[derive(Deserialize)]
pub struct SetModeRequest {
    pub mode: String,
}

/// Outcome of a mode change.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetModeResponse {
    /// `false` when a line could not be driven and the previous mode was restored.
    pub applied: bool,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Area>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Area>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Area>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the set-mode endpoint.
pub enum SetModeResult {
    Ok(Json<SetModeResponse>),
}

impl IntoResponse for SetModeResult {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_id(id: &str) -> Result<AreaId, ApiError> {
    AreaId::from_str(id).map_err(|_| {
        ApiError::from(FilPiloteError::from(NotFoundError {
            entity: "Area",
            id: id.to_string(),
        }))
    })
}

/// `GET /api/areas`
pub async fn list<R, L>(State(state): State<AppState<R, L>>) -> Result<ListResponse, ApiError>
where
    R: AreaRepository + Send + Sync + 'static,
    L: LineController + Send + Sync + 'static,
{
    let areas = state.area_service.list_areas().await?;
    Ok(ListResponse::Ok(Json(areas)))
}

/// `GET /api/areas/{id}`
pub async fn get<R, L>(
    State(state): State<AppState<R, L>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: AreaRepository + Send + Sync + 'static,
    L: LineController + Send + Sync + 'static,
{
    let area = state.area_service.get_area(parse_id(&id)?).await?;
    Ok(GetResponse::Ok(Json(area)))
}

/// `POST /api/areas`
pub async fn create<R, L>(
    State(state): State<AppState<R, L>>,
    Json(req): Json<CreateAreaRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: AreaRepository + Send + Sync + 'static,
    L: LineController + Send + Sync + 'static,
{
    let created = state
        .area_service
        .create_area(&req.name, &req.line_a, &req.line_b)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /api/areas/{id}`
pub async fn delete<R, L>(
    State(state): State<AppState<R, L>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: AreaRepository + Send + Sync + 'static,
    L: LineController + Send + Sync + 'static,
{
    state.area_service.delete_area(parse_id(&id)?).await?;
    Ok(DeleteResponse::NoContent)
}

/// `PUT /api/areas/{id}/mode`
pub async fn set_mode<R, L>(
    State(state): State<AppState<R, L>>,
    Path(id): Path<String>,
    Json(req): Json<SetModeRequest>,
) -> Result<SetModeResult, ApiError>
where
    R: AreaRepository + Send + Sync + 'static,
    L: LineController + Send + Sync + 'static,
{
    let area_id = parse_id(&id)?;
    let mode = Mode::from_str(&req.mode)?;
    let applied = state.area_service.set_mode(area_id, mode).await?;
    Ok(SetModeResult::Ok(Json(SetModeResponse { applied })))
}
