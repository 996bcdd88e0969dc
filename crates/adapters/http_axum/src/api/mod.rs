//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod areas;
pub mod thermostat;

use axum::Router;
use axum::routing::{get, post, put};

use filpilote_app::ports::{AreaRepository, LineController};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R, L>() -> Router<AppState<R, L>>
where
    R: AreaRepository + Send + Sync + 'static,
    L: LineController + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/areas",
            get(areas::list::<R, L>).post(areas::create::<R, L>),
        )
        .route(
            "/areas/{id}",
            get(areas::get::<R, L>).delete(areas::delete::<R, L>),
        )
        .route("/areas/{id}/mode", put(areas::set_mode::<R, L>))
        .route("/thermostat/events", post(thermostat::receive::<R, L>))
}
