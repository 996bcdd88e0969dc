//! Thermostat vocabulary and its translation into fil-pilote [`Mode`]s.
//!
//! External thermostats speak a richer language than a fil-pilote pair can
//! express: several comfort levels collapse into [`Mode::Comfort`].

use crate::mode::Mode;

/// A mode requested by an external thermostat event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermostatMode {
    /// `comfort`, or a numbered level such as `comfort2`.
    Comfort(u8),
    Eco,
    Antifrost,
    Stop,
}

impl ThermostatMode {
    /// Parse an external mode value.
    ///
    /// Returns `None` for values outside the known vocabulary; callers treat
    /// those as "no mode change".
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "eco" => Some(Self::Eco),
            "antifrost" => Some(Self::Antifrost),
            "stop" => Some(Self::Stop),
            "comfort" => Some(Self::Comfort(1)),
            other => other
                .strip_prefix("comfort")
                .filter(|level| !level.is_empty() && level.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|level| level.parse().ok())
                .map(Self::Comfort),
        }
    }
}

impl From<ThermostatMode> for Mode {
    fn from(mode: ThermostatMode) -> Self {
        match mode {
            ThermostatMode::Comfort(_) => Mode::Comfort,
            ThermostatMode::Eco => Mode::Eco,
            ThermostatMode::Antifrost => Mode::Antifrost,
            ThermostatMode::Stop => Mode::Stop,
        }
    }
}

/// Translate an external mode value straight into a [`Mode`].
#[must_use]
pub fn translate(external: &str) -> Option<Mode> {
    ThermostatMode::parse(external).map(Mode::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_collapse_comfort_levels() {
        for value in ["comfort", "comfort1", "comfort2", "comfort3"] {
            assert_eq!(translate(value), Some(Mode::Comfort), "{value}");
        }
    }

    #[test]
    fn should_translate_simple_modes() {
        assert_eq!(translate("eco"), Some(Mode::Eco));
        assert_eq!(translate("antifrost"), Some(Mode::Antifrost));
        assert_eq!(translate("stop"), Some(Mode::Stop));
    }

    #[test]
    fn should_ignore_unknown_values() {
        assert_eq!(translate("boost"), None);
        assert_eq!(translate("comfortable"), None);
        assert_eq!(translate("ECO"), None);
        assert_eq!(translate(""), None);
    }

    #[test]
    fn should_keep_comfort_level() {
        assert_eq!(
            ThermostatMode::parse("comfort3"),
            Some(ThermostatMode::Comfort(3))
        );
    }
}
