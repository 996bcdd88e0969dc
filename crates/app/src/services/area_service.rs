//! Area service: area lifecycle and mode application.
//!
//! Areas span two independent subsystems (the area store and the line
//! controller) that share no transaction. Every multi-step operation here is
//! a sequence of forward steps, each followed by explicit compensating calls
//! when a later step fails:
//!
//! - **create**: reserve line A, reserve line B, persist. A failed step
//!   releases whatever was reserved before it.
//! - **delete**: release both lines (best-effort), then remove the record.
//! - **set mode**: persist the new mode, drive line A then line B. A failed
//!   actuation writes the previous mode back.

use tokio::sync::{Mutex, OwnedMutexGuard};

use filpilote_domain::area::{self, Area};
use filpilote_domain::error::{FilPiloteError, NotFoundError, ValidationError};
use filpilote_domain::id::AreaId;
use filpilote_domain::line::{LineHandle, LineRequest, LineSlot};
use filpilote_domain::mode::Mode;

use crate::area_locks::AreaLocks;
use crate::ports::{AreaRepository, LineController};

/// Application service orchestrating areas, their lines and their mode.
pub struct AreaService<R, L> {
    repo: R,
    lines: L,
    locks: AreaLocks,
    creating: Mutex<()>,
}

impl<R: AreaRepository, L: LineController> AreaService<R, L> {
    /// Create a new service backed by the given repository and line controller.
    pub fn new(repo: R, lines: L) -> Self {
        Self {
            repo,
            lines,
            locks: AreaLocks::default(),
            creating: Mutex::new(()),
        }
    }

    /// Create an area bound to two physical lines, in [`Mode::Stop`].
    ///
    /// Line A is reserved first, then line B, then the record is persisted.
    /// A failed attempt leaves no line reserved.
    ///
    /// # Errors
    ///
    /// - [`FilPiloteError::Validation`] when the name is empty or already in
    ///   use, or when the line references are empty or identical.
    /// - [`FilPiloteError::LineReservation`] when a line cannot be reserved.
    /// - a storage error when the record cannot be persisted.
    #[tracing::instrument(skip(self))]
    pub async fn create_area(
        &self,
        name: &str,
        line_a: &str,
        line_b: &str,
    ) -> Result<Area, FilPiloteError> {
        area::validate_name(name)?;
        area::validate_lines(line_a, line_b)?;

        // uniqueness check and insert must not interleave with another create
        let _creating = self.creating.lock().await;

        if self.repo.find_by_name(name).await?.is_some() {
            return Err(ValidationError::DuplicateName(name.to_string()).into());
        }

        let handle_a = self.reserve(name, LineSlot::A, line_a).await?;
        let handle_b = match self.reserve(name, LineSlot::B, line_b).await {
            Ok(handle) => handle,
            Err(err) => {
                self.release(name, LineSlot::A, &handle_a).await;
                return Err(err);
            }
        };

        let built = Area::builder()
            .name(name)
            .mode(Mode::Stop)
            .line_a(handle_a.clone())
            .line_b(handle_b.clone())
            .build();
        let created = match built {
            Ok(area) => self.repo.create(area).await,
            Err(err) => Err(err),
        };

        match created {
            Ok(area) => {
                tracing::info!(area_id = %area.id, area = %area.name, "area created");
                Ok(area)
            }
            Err(err) => {
                tracing::error!(error = %err, area = name, "unable to save new area");
                self.release(name, LineSlot::A, &handle_a).await;
                self.release(name, LineSlot::B, &handle_b).await;
                Err(err)
            }
        }
    }

    /// Delete an area, releasing its lines first.
    ///
    /// Line release failures are logged and do not stop the deletion.
    /// Returns `true` once the record is gone.
    ///
    /// # Errors
    ///
    /// Returns [`FilPiloteError::NotFound`] when no area with `id` exists,
    /// or a storage error when the record cannot be removed (the lines are
    /// already released at that point).
    #[tracing::instrument(skip(self))]
    pub async fn delete_area(&self, id: AreaId) -> Result<bool, FilPiloteError> {
        let (_guard, area) = self.lock_area(id).await?;

        self.release(&area.name, LineSlot::A, &area.line_a).await;
        self.release(&area.name, LineSlot::B, &area.line_b).await;

        self.repo.delete(id).await.inspect_err(|err| {
            tracing::error!(error = %err, area_id = %id, area = %area.name, "unable to delete area");
        })?;
        self.locks.forget(id);

        tracing::info!(area_id = %id, area = %area.name, "area deleted");
        Ok(true)
    }

    /// Switch an area to `mode` and drive its lines accordingly.
    ///
    /// The new mode is persisted before any line is driven. If either line
    /// cannot be driven, the previous mode is written back and `false` is
    /// returned: the record never claims a mode the lines did not reach.
    ///
    /// # Errors
    ///
    /// Returns [`FilPiloteError::NotFound`] when no area with `id` exists, or
    /// a storage error when the new mode (or its rollback) cannot be written.
    #[tracing::instrument(skip(self))]
    pub async fn set_mode(&self, id: AreaId, mode: Mode) -> Result<bool, FilPiloteError> {
        let (_guard, area) = self.lock_area(id).await?;
        let previous = area.mode;

        self.repo.update_mode(id, mode).await.inspect_err(|err| {
            tracing::error!(error = %err, area = %area.name, %mode, "unable to set mode");
        })?;

        if self.drive_lines(&area, mode).await {
            tracing::info!(area = %area.name, %mode, "mode applied");
            return Ok(true);
        }

        self.repo.update_mode(id, previous).await.inspect_err(|err| {
            tracing::error!(
                error = %err,
                area = %area.name,
                %previous,
                "unable to restore previous mode"
            );
        })?;
        tracing::warn!(area = %area.name, %mode, %previous, "mode not applied, previous mode restored");
        Ok(false)
    }

    /// Look up an area by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`FilPiloteError::NotFound`] when no area with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_area(&self, id: AreaId) -> Result<Area, FilPiloteError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Area",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all areas.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_areas(&self) -> Result<Vec<Area>, FilPiloteError> {
        self.repo.get_all().await
    }

    async fn lock_area(&self, id: AreaId) -> Result<(OwnedMutexGuard<()>, Area), FilPiloteError> {
        let guard = self.locks.acquire(id).await;
        match self.get_area(id).await {
            Ok(area) => Ok((guard, area)),
            Err(err) => {
                if matches!(err, FilPiloteError::NotFound(_)) {
                    self.locks.forget(id);
                }
                Err(err)
            }
        }
    }

    async fn reserve(
        &self,
        area_name: &str,
        slot: LineSlot,
        line: &str,
    ) -> Result<LineHandle, FilPiloteError> {
        let request = LineRequest::for_area(area_name, slot, line);
        self.lines.reserve(request).await.map_err(|err| {
            tracing::error!(error = %err, area = area_name, ?slot, line, "unable to reserve line");
            FilPiloteError::LineReservation {
                line: line.to_string(),
                source: Box::new(err),
            }
        })
    }

    async fn release(&self, area_name: &str, slot: LineSlot, handle: &LineHandle) {
        if let Err(err) = self.lines.release(handle).await {
            tracing::warn!(
                error = %err,
                area = area_name,
                ?slot,
                line = %handle.line,
                line_id = %handle.id,
                "unable to release line"
            );
        }
    }

    async fn drive_lines(&self, area: &Area, mode: Mode) -> bool {
        let states = mode.line_states();
        for (slot, on) in [(LineSlot::A, states.line_a), (LineSlot::B, states.line_b)] {
            let handle = area.line(slot);
            if let Err(err) = self.lines.set_state(handle, on).await {
                tracing::error!(
                    error = %err,
                    area = %area.name,
                    ?slot,
                    line = %handle.line,
                    on,
                    "unable to drive line"
                );
                return false;
            }
        }
        true
    }
}
