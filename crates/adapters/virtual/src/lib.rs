//! # filpilote-adapter-virtual
//!
//! Virtual line controller that simulates binary output lines, for testing
//! and demonstration on machines without GPIO hardware.
//!
//! ## Behaviour
//!
//! | Call | Effect |
//! |------|--------|
//! | `reserve` | Takes exclusive ownership of a physical line, initially off |
//! | `release` | Gives the line back; it can be reserved again |
//! | `set_state` | Records the on/off state of a reserved line |
//!
//! When built with an explicit list of lines, reserving any other line fails.
//!
//! ## Dependency rule
//!
//! Depends on `filpilote-app` (port traits) and `filpilote-domain` only.

mod error;

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use filpilote_app::ports::LineController;
use filpilote_domain::error::FilPiloteError;
use filpilote_domain::id::LineId;
use filpilote_domain::line::{LineHandle, LineRequest};

pub use error::LineError;

struct VirtualLine {
    handle: LineHandle,
    on: bool,
}

/// Simulated line controller holding reservations and states in memory.
#[derive(Default)]
pub struct VirtualLineController {
    available: Option<HashSet<String>>,
    lines: Mutex<HashMap<LineId, VirtualLine>>,
}

impl VirtualLineController {
    /// Restrict reservations to the given physical lines.
    ///
    /// An empty list leaves the controller unrestricted.
    #[must_use]
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let available: HashSet<String> = lines.into_iter().map(Into::into).collect();
        Self {
            available: (!available.is_empty()).then_some(available),
            lines: Mutex::default(),
        }
    }

    /// Current state of a physical line, or `None` when it is not reserved.
    #[must_use]
    pub fn state(&self, line: &str) -> Option<bool> {
        self.lock_lines()
            .values()
            .find(|l| l.handle.line == line)
            .map(|l| l.on)
    }

    /// Physical lines currently reserved, sorted.
    #[must_use]
    pub fn reserved_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .lock_lines()
            .values()
            .map(|l| l.handle.line.clone())
            .collect();
        lines.sort();
        lines
    }

    fn reserve_line(&self, request: LineRequest) -> Result<LineHandle, LineError> {
        let known = self
            .available
            .as_ref()
            .is_none_or(|available| available.contains(&request.line));
        if !known {
            return Err(LineError::UnknownLine(request.line));
        }

        let mut lines = self.lock_lines();
        if lines.values().any(|l| l.handle.line == request.line) {
            return Err(LineError::AlreadyReserved(request.line));
        }

        let handle = LineHandle {
            id: LineId::new(),
            name: request.name,
            line: request.line,
        };
        lines.insert(
            handle.id,
            VirtualLine {
                handle: handle.clone(),
                on: false,
            },
        );
        tracing::info!(line = %handle.line, name = %handle.name, "virtual line reserved");
        Ok(handle)
    }

    fn release_line(&self, handle: &LineHandle) -> Result<(), LineError> {
        self.lock_lines()
            .remove(&handle.id)
            .ok_or(LineError::NotReserved(handle.id))?;
        tracing::info!(line = %handle.line, "virtual line released");
        Ok(())
    }

    fn drive_line(&self, handle: &LineHandle, on: bool) -> Result<(), LineError> {
        let mut lines = self.lock_lines();
        let line = lines
            .get_mut(&handle.id)
            .ok_or(LineError::NotReserved(handle.id))?;
        line.on = on;
        tracing::debug!(line = %handle.line, on, "virtual line driven");
        Ok(())
    }

    fn lock_lines(&self) -> MutexGuard<'_, HashMap<LineId, VirtualLine>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LineController for VirtualLineController {
    async fn reserve(&self, request: LineRequest) -> Result<LineHandle, FilPiloteError> {
        Ok(self.reserve_line(request)?)
    }

    async fn release(&self, handle: &LineHandle) -> Result<(), FilPiloteError> {
        Ok(self.release_line(handle)?)
    }

    async fn set_state(&self, handle: &LineHandle, on: bool) -> Result<(), FilPiloteError> {
        Ok(self.drive_line(handle, on)?)
    }
}
