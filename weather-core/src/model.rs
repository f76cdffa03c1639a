use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Unit system sent to the provider; it decides which units come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Metric,
    Imperial,
}

impl Unit {
    /// Token used in the provider's `units` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Metric => "metric",
            Unit::Imperial => "imperial",
        }
    }

    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            Unit::Metric => "°C",
            Unit::Imperial => "°F",
        }
    }

    pub fn wind_speed_unit(&self) -> &'static str {
        match self {
            Unit::Metric => "m/s",
            Unit::Imperial => "mph",
        }
    }

    pub const fn all() -> &'static [Unit] {
        &[Unit::Metric, Unit::Imperial]
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Unit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        match lower.as_str() {
            "metric" | "celsius" | "c" => Ok(Unit::Metric),
            "imperial" | "fahrenheit" | "f" => Ok(Unit::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported: metric (celsius), imperial (fahrenheit)."
            )),
        }
    }
}

/// A single lookup: free-form place name (or "lat,lon") plus the unit system.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherQuery {
    pub location: String,
    pub unit: Unit,
}

impl WeatherQuery {
    pub fn new(location: impl Into<String>, unit: Unit) -> Self {
        Self { location: location.into(), unit }
    }
}

/// Current-conditions snapshot for one location.
///
/// Only successful (`cod == 200`) responses produce this type; provider
/// errors surface as [`crate::FetchError::Provider`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    pub condition: String,
    pub icon_code: String,
    /// Observation time, seconds since the Unix epoch. `None` when the
    /// provider omitted it or sent something that is not an integer.
    pub epoch_utc: Option<i64>,
    /// Shift from UTC of the queried location, in seconds.
    pub timezone_offset_secs: Option<i32>,
}

/// One 3-hour forecast entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSlot {
    /// Provider's `dt_txt`, formatted `yyyy-MM-dd HH:mm:ss`.
    pub local_timestamp: String,
    pub temperature: f64,
    pub condition: String,
    pub icon_code: String,
}

impl ForecastSlot {
    /// `HH:MM` cut out of the timestamp; the whole timestamp if it is too short.
    pub fn hour_label(&self) -> &str {
        self.local_timestamp.get(11..16).unwrap_or(&self.local_timestamp)
    }
}

/// Slots in the order the provider returned them.
pub type ForecastSeries = Vec<ForecastSlot>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_as_str_roundtrip() {
        for unit in Unit::all() {
            let parsed = Unit::try_from(unit.as_str()).expect("roundtrip should succeed");
            assert_eq!(*unit, parsed);
        }
    }

    #[test]
    fn unit_accepts_scale_names() {
        assert_eq!(Unit::try_from("Celsius").unwrap(), Unit::Metric);
        assert_eq!(Unit::try_from("Fahrenheit").unwrap(), Unit::Imperial);
    }

    #[test]
    fn unknown_unit_error() {
        let err = Unit::try_from("kelvin").unwrap_err();
        assert!(err.to_string().contains("Unknown unit system"));
    }

    #[test]
    fn hour_label_is_cut_from_timestamp() {
        let slot = ForecastSlot {
            local_timestamp: "2023-11-15 03:00:00".into(),
            temperature: 4.2,
            condition: "light rain".into(),
            icon_code: "10n".into(),
        };
        assert_eq!(slot.hour_label(), "03:00");

        let short = ForecastSlot { local_timestamp: "03:00".into(), ..slot };
        assert_eq!(short.hour_label(), "03:00");
    }
}
