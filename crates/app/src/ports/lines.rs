//! Line controller port: ownership and actuation of physical output lines.
//!
//! The controller is an external subsystem: it may refuse a reservation
//! (line unknown, already taken) and any call may fail independently.

use std::future::Future;

use filpilote_domain::error::FilPiloteError;
use filpilote_domain::line::{LineHandle, LineRequest};

/// Reserves, releases and drives binary output lines.
pub trait LineController {
    /// Reserve the physical line named in `request` as an output.
    fn reserve(
        &self,
        request: LineRequest,
    ) -> impl Future<Output = Result<LineHandle, FilPiloteError>> + Send;

    /// Give a previously reserved line back to the controller.
    fn release(
        &self,
        handle: &LineHandle,
    ) -> impl Future<Output = Result<(), FilPiloteError>> + Send;

    /// Turn a reserved line on or off.
    fn set_state(
        &self,
        handle: &LineHandle,
        on: bool,
    ) -> impl Future<Output = Result<(), FilPiloteError>> + Send;
}

impl<T: LineController + Send + Sync> LineController for std::sync::Arc<T> {
    fn reserve(
        &self,
        request: LineRequest,
    ) -> impl Future<Output = Result<LineHandle, FilPiloteError>> + Send {
        (**self).reserve(request)
    }

    fn release(
        &self,
        handle: &LineHandle,
    ) -> impl Future<Output = Result<(), FilPiloteError>> + Send {
        (**self).release(handle)
    }

    fn set_state(
        &self,
        handle: &LineHandle,
        on: bool,
    ) -> impl Future<Output = Result<(), FilPiloteError>> + Send {
        (**self).set_state(handle, on)
    }
}
