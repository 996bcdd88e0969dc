//! Area: a heating zone driven by one fil-pilote pair of output lines.

use serde::{Deserialize, Serialize};

use crate::error::{FilPiloteError, ValidationError};
use crate::id::AreaId;
use crate::line::{LineHandle, LineSlot};
use crate::mode::Mode;

/// A heating zone such as a floor, bound to two reserved output lines.
///
/// The line pair is fixed for the lifetime of the area. Only [`Area::mode`]
/// changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    pub mode: Mode,
    pub line_a: LineHandle,
    pub line_b: LineHandle,
}

impl Area {
    /// Create a builder for constructing an [`Area`].
    #[must_use]
    pub fn builder() -> AreaBuilder {
        AreaBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FilPiloteError::Validation`] when `name` is empty or both
    /// slots reference the same physical line.
    pub fn validate(&self) -> Result<(), FilPiloteError> {
        validate_name(&self.name)?;
        validate_lines(&self.line_a.line, &self.line_b.line)?;
        Ok(())
    }

    /// Handle bound to the given slot.
    #[must_use]
    pub fn line(&self, slot: LineSlot) -> &LineHandle {
        match slot {
            LineSlot::A => &self.line_a,
            LineSlot::B => &self.line_b,
        }
    }
}

/// Reject an empty area name.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyName`] when `name` is empty.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Reject empty or identical physical line references.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyLine`] or [`ValidationError::SameLine`].
pub fn validate_lines(line_a: &str, line_b: &str) -> Result<(), ValidationError> {
    if line_a.is_empty() || line_b.is_empty() {
        return Err(ValidationError::EmptyLine);
    }
    if line_a == line_b {
        return Err(ValidationError::SameLine(line_a.to_string()));
    }
    Ok(())
}

/// Step-by-step builder for [`Area`].
#[derive(Debug, Default)]
pub struct AreaBuilder {
    id: Option<AreaId>,
    name: Option<String>,
    mode: Option<Mode>,
    line_a: Option<LineHandle>,
    line_b: Option<LineHandle>,
}

impl AreaBuilder {
    #[must_use]
    pub fn id(mut self, id: AreaId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn line_a(mut self, handle: LineHandle) -> Self {
        self.line_a = Some(handle);
        self
    }

    #[must_use]
    pub fn line_b(mut self, handle: LineHandle) -> Self {
        self.line_b = Some(handle);
        self
    }

    /// Consume the builder, validate, and return an [`Area`].
    ///
    /// New areas start in [`Mode::Stop`] unless a mode is given.
    ///
    /// # Errors
    ///
    /// Returns [`FilPiloteError::Validation`] if `name` is missing or empty,
    /// or if a line handle is missing or both handles share a physical line.
    pub fn build(self) -> Result<Area, FilPiloteError> {
        let (Some(line_a), Some(line_b)) = (self.line_a, self.line_b) else {
            return Err(ValidationError::EmptyLine.into());
        };
        let area = Area {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            mode: self.mode.unwrap_or_default(),
            line_a,
            line_b,
        };
        area.validate()?;
        Ok(area)
    }
}
