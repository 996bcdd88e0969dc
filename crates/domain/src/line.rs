//! Output lines: the physical binary channels bound to an area.

use serde::{Deserialize, Serialize};

use crate::id::LineId;

/// Position of a line inside an area's fil-pilote pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSlot {
    A,
    B,
}

impl LineSlot {
    /// 1-based index used in reservation names.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Self::A => 1,
            Self::B => 2,
        }
    }
}

/// Request sent to the line controller to reserve an output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRequest {
    /// Reservation label, unique per area and slot.
    pub name: String,
    /// Physical line reference (e.g. `GPIO18`).
    pub line: String,
}

impl LineRequest {
    /// Build the reservation request for one slot of an area.
    #[must_use]
    pub fn for_area(area_name: &str, slot: LineSlot, line: impl Into<String>) -> Self {
        Self {
            name: format!("filpilote_{area_name}_line{}", slot.index()),
            line: line.into(),
        }
    }
}

/// A successfully reserved output line, as returned by the line controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineHandle {
    pub id: LineId,
    pub name: String,
    pub line: String,
}
