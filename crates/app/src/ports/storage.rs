//! Storage port: repository trait for area persistence.

use std::future::Future;

use filpilote_domain::area::Area;
use filpilote_domain::error::FilPiloteError;
use filpilote_domain::id::AreaId;
use filpilote_domain::mode::Mode;

/// Repository for persisting and querying [`Area`]s.
pub trait AreaRepository {
    /// Create a new area in storage.
    fn create(&self, area: Area) -> impl Future<Output = Result<Area, FilPiloteError>> + Send;

    /// Get an area by its unique identifier.
    fn get_by_id(
        &self,
        id: AreaId,
    ) -> impl Future<Output = Result<Option<Area>, FilPiloteError>> + Send;

    /// Find an area by its exact (case-sensitive) name.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Area>, FilPiloteError>> + Send;

    /// Get all areas.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Area>, FilPiloteError>> + Send;

    /// Overwrite the persisted mode of an area.
    ///
    /// Returns [`FilPiloteError::NotFound`] when no record matches `id`.
    fn update_mode(
        &self,
        id: AreaId,
        mode: Mode,
    ) -> impl Future<Output = Result<(), FilPiloteError>> + Send;

    /// Delete an area by its unique identifier.
    fn delete(&self, id: AreaId) -> impl Future<Output = Result<(), FilPiloteError>> + Send;
}
