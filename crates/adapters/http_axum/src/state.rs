//! Shared application state for axum handlers.

use std::sync::Arc;

use filpilote_app::ports::{AreaRepository, LineController};
use filpilote_app::services::area_service::AreaService;
use filpilote_app::services::thermostat_service::ThermostatService;

/// Application state shared across all axum handlers.
///
/// Generic over the area repository and line controller to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<R, L> {
    /// Area lifecycle and mode service.
    pub area_service: Arc<AreaService<R, L>>,
    /// Thermostat event translator.
    pub thermostat_service: ThermostatService<R, L>,
}

impl<R, L> Clone for AppState<R, L> {
    fn clone(&self) -> Self {
        Self {
            area_service: Arc::clone(&self.area_service),
            thermostat_service: self.thermostat_service.clone(),
        }
    }
}

impl<R, L> AppState<R, L>
where
    R: AreaRepository + Send + Sync + 'static,
    L: LineController + Send + Sync + 'static,
{
    /// Create a new application state from the area service.
    pub fn new(area_service: AreaService<R, L>) -> Self {
        Self::from_arc(Arc::new(area_service))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is shared with other tasks.
    pub fn from_arc(area_service: Arc<AreaService<R, L>>) -> Self {
        Self {
            thermostat_service: ThermostatService::new(Arc::clone(&area_service)),
            area_service,
        }
    }
}
