//! Heating modes and the fil-pilote mode table.
//!
//! A fil-pilote pair encodes the heater mode in the combined state of its two
//! output lines. The table below is fixed and never mutated at runtime.
//!
//! | Mode | line A | line B |
//! |------|--------|--------|
//! | `ANTIFROST` | on | off |
//! | `COMFORT` | off | off |
//! | `ECO` | on | on |
//! | `STOP` | off | on |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Operating mode of an [`Area`](crate::area::Area).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    Antifrost,
    Comfort,
    Eco,
    #[default]
    Stop,
}

/// Required on/off state of both lines of an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStates {
    pub line_a: bool,
    pub line_b: bool,
}

// Indexed by `Mode` discriminant.
const MODE_TABLE: [(Mode, LineStates); 4] = [
    (
        Mode::Antifrost,
        LineStates {
            line_a: true,
            line_b: false,
        },
    ),
    (
        Mode::Comfort,
        LineStates {
            line_a: false,
            line_b: false,
        },
    ),
    (
        Mode::Eco,
        LineStates {
            line_a: true,
            line_b: true,
        },
    ),
    (
        Mode::Stop,
        LineStates {
            line_a: false,
            line_b: true,
        },
    ),
];

impl Mode {
    /// Every defined mode.
    pub const ALL: [Mode; 4] = [Mode::Antifrost, Mode::Comfort, Mode::Eco, Mode::Stop];

    /// Look up the line states this mode requires.
    #[must_use]
    pub fn line_states(self) -> LineStates {
        MODE_TABLE[self as usize].1
    }

    /// Canonical upper-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Antifrost => "ANTIFROST",
            Self::Comfort => "COMFORT",
            Self::Eco => "ECO",
            Self::Stop => "STOP",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_stop() {
        assert_eq!(Mode::default(), Mode::Stop);
    }

    #[test]
    fn should_drive_both_lines_on_for_eco() {
        assert_eq!(
            Mode::Eco.line_states(),
            LineStates {
                line_a: true,
                line_b: true
            }
        );
    }

    #[test]
    fn should_map_each_mode_to_a_distinct_line_pair() {
        for (i, a) in Mode::ALL.iter().enumerate() {
            for b in &Mode::ALL[i + 1..] {
                assert_ne!(a.line_states(), b.line_states());
            }
        }
        assert_eq!(
            Mode::Antifrost.line_states(),
            LineStates {
                line_a: true,
                line_b: false
            }
        );
        assert_eq!(
            Mode::Comfort.line_states(),
            LineStates {
                line_a: false,
                line_b: false
            }
        );
        assert_eq!(
            Mode::Stop.line_states(),
            LineStates {
                line_a: false,
                line_b: true
            }
        );
    }

    #[test]
    fn should_keep_table_in_discriminant_order() {
        for (index, mode) in Mode::ALL.iter().enumerate() {
            assert_eq!(MODE_TABLE[index].0, *mode);
        }
    }

    #[test]
    fn should_parse_canonical_names() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn should_reject_unknown_mode_name() {
        assert_eq!(
            "amode".parse::<Mode>(),
            Err(ValidationError::InvalidMode("amode".to_string()))
        );
    }

    #[test]
    fn should_match_names_case_sensitively() {
        assert!("eco".parse::<Mode>().is_err());
    }

    #[test]
    fn should_serialize_as_upper_case() {
        let json = serde_json::to_string(&Mode::Antifrost).unwrap();
        assert_eq!(json, "\"ANTIFROST\"");
    }
}
