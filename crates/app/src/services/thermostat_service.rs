//! Thermostat service: turns thermostat events into area mode changes.
//!
//! Thermostat events are broadcast to every consumer; an event addressed to a
//! device this system does not know belongs to someone else and is ignored.

use std::str::FromStr;
use std::sync::Arc;

use filpilote_domain::error::FilPiloteError;
use filpilote_domain::id::AreaId;
use filpilote_domain::thermostat;

use crate::ports::{AreaRepository, LineController};
use crate::services::area_service::AreaService;

/// Renders thermostat mode events onto fil-pilote areas.
pub struct ThermostatService<R, L> {
    areas: Arc<AreaService<R, L>>,
}

impl<R, L> Clone for ThermostatService<R, L> {
    fn clone(&self) -> Self {
        Self {
            areas: Arc::clone(&self.areas),
        }
    }
}

impl<R: AreaRepository, L: LineController> ThermostatService<R, L> {
    /// Create a service delegating mode changes to `areas`.
    pub fn new(areas: Arc<AreaService<R, L>>) -> Self {
        Self { areas }
    }

    /// Handle a thermostat `set mode` event for `device_id`.
    ///
    /// Unknown modes and devices are ignored. Failures of the resulting mode
    /// change are logged, never returned.
    #[tracing::instrument(skip(self))]
    pub async fn on_external_mode_event(&self, device_id: &str, external_mode: &str) {
        let Some(mode) = thermostat::translate(external_mode) else {
            // TODO: confirm with product whether unknown thermostat modes should be reported
            tracing::debug!("unrecognised thermostat mode, no mode change");
            return;
        };
        let Ok(area_id) = AreaId::from_str(device_id) else {
            tracing::debug!("device is not a fil-pilote area");
            return;
        };

        match self.areas.set_mode(area_id, mode).await {
            Ok(true) => {}
            Ok(false) => tracing::warn!(%area_id, %mode, "thermostat mode not applied"),
            Err(FilPiloteError::NotFound(_)) => {
                tracing::debug!(%area_id, "device is not a fil-pilote area");
            }
            Err(err) => tracing::error!(error = %err, %area_id, %mode, "thermostat mode failed"),
        }
    }
}
