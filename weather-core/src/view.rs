//! Presentation state for a weather lookup screen.
//!
//! `WeatherView` owns everything a front end displays and exposes one user
//! action, [`WeatherView::on_fetch`]. It knows nothing about widgets; a front
//! end reads the state back after each action and draws it however it likes.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::{
    error::{FetchError, Notification},
    model::{CurrentConditions, ForecastSeries, Unit, WeatherQuery},
    provider::WeatherSource,
    text::title_case,
    time::derive_local_time,
};

mod background;
mod history;

pub use background::Background;
pub use history::{HISTORY_CAPACITY, History, HistoryEntry};

/// How many forecast slots are shown.
pub const FORECAST_SLOTS: usize = 3;

/// Current-conditions fields, already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentPanel {
    pub location: String,
    pub local_time: String,
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
    pub conditions: String,
    pub icon_code: String,
    /// Undecoded image bytes; `None` leaves the icon area blank.
    pub icon: Option<Bytes>,
}

impl CurrentPanel {
    fn new(
        location: &str,
        local_time: String,
        current: &CurrentConditions,
        unit: Unit,
        icon: Option<Bytes>,
    ) -> Self {
        Self {
            location: location.to_string(),
            local_time,
            temperature: format!("{:.1} {}", current.temperature, unit.temperature_symbol()),
            humidity: format!("{}%", current.humidity_pct),
            wind: format!("{:.1} {}", current.wind_speed, unit.wind_speed_unit()),
            conditions: title_case(&current.condition),
            icon_code: current.icon_code.clone(),
            icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastLine {
    pub hour_label: String,
    pub summary: String,
    pub icon_code: String,
    pub icon: Option<Bytes>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ForecastPanel {
    /// Nothing fetched yet.
    #[default]
    Empty,
    Slots(Vec<ForecastLine>),
    /// The provider answered with an empty list.
    NoEntries,
    /// The provider rejected the forecast request; shown inline.
    Unavailable(String),
}

impl ForecastPanel {
    pub fn placeholder(&self) -> Option<String> {
        match self {
            ForecastPanel::Empty | ForecastPanel::Slots(_) => None,
            ForecastPanel::NoEntries => Some("No forecast entries available.".to_string()),
            ForecastPanel::Unavailable(message) => Some(format!("Forecast error: {message}")),
        }
    }
}

#[derive(Debug)]
pub struct WeatherView<S> {
    source: S,
    current: Option<CurrentPanel>,
    forecast: ForecastPanel,
    history: History,
    background: Background,
}

impl<S: WeatherSource> WeatherView<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            current: None,
            forecast: ForecastPanel::default(),
            history: History::new(),
            background: Background::default(),
        }
    }

    pub fn current(&self) -> Option<&CurrentPanel> {
        self.current.as_ref()
    }

    pub fn forecast(&self) -> &ForecastPanel {
        &self.forecast
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn background(&self) -> Background {
        self.background
    }

    /// The "get weather" action.
    ///
    /// Nothing displayed changes unless the action succeeds. A forecast that
    /// the provider refuses is not a failure: it is shown inline in the
    /// forecast panel and the rest of the screen still updates.
    pub async fn on_fetch(&mut self, location_input: &str, unit: Unit) -> Result<(), Notification> {
        let location = location_input.trim();
        if location.is_empty() {
            return Err(Notification::from(&FetchError::Validation));
        }

        let query = WeatherQuery::new(location, unit);
        debug!(location, %unit, "fetch action started");

        let current = self.source.fetch_current(&query).await.map_err(|err| {
            warn!(location, error = %err, "current conditions unavailable");
            Notification::from(&err)
        })?;

        let forecast = match self.source.fetch_forecast(&query).await {
            Ok(series) => Ok(series),
            Err(FetchError::Provider { message, .. }) => Err(message),
            Err(err) => {
                warn!(location, error = %err, "forecast unavailable");
                return Err(Notification::from(&err));
            }
        };

        let icon = self.source.fetch_icon(&current.icon_code).await;
        let forecast = match forecast {
            Ok(series) => self.forecast_panel(series, unit).await,
            Err(message) => ForecastPanel::Unavailable(message),
        };

        let local_time = derive_local_time(&current);
        self.background = Background::from_local_time(&local_time);
        self.history.push(HistoryEntry::new(location, local_time.clone()));
        self.current = Some(CurrentPanel::new(location, local_time, &current, unit, icon));
        self.forecast = forecast;

        debug!(location, background = self.background.as_str(), "view updated");
        Ok(())
    }

    async fn forecast_panel(&self, series: ForecastSeries, unit: Unit) -> ForecastPanel {
        if series.is_empty() {
            return ForecastPanel::NoEntries;
        }

        let mut lines = Vec::with_capacity(FORECAST_SLOTS);
        for slot in series.into_iter().take(FORECAST_SLOTS) {
            let icon = self.source.fetch_icon(&slot.icon_code).await;
            lines.push(ForecastLine {
                hour_label: slot.hour_label().to_string(),
                summary: format!(
                    "{}, {:.1}{}",
                    title_case(&slot.condition),
                    slot.temperature,
                    unit.temperature_symbol()
                ),
                icon_code: slot.icon_code,
                icon,
            });
        }

        ForecastPanel::Slots(lines)
    }
}
