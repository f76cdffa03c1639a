//! Core library for the `weather` lookup app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeatherMap client and the `WeatherSource` seam in front of it
//! - Local-time and text helpers used to present provider data
//! - `WeatherView`, the toolkit-independent presentation state
//!
//! It is used by `weather-app`, but any front end can drive a `WeatherView`.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod text;
pub mod time;
pub mod view;

pub use config::{Config, DisplayConfig, ProviderConfig};
pub use error::{FetchError, Notification};
pub use model::{CurrentConditions, ForecastSeries, ForecastSlot, Unit, WeatherQuery};
pub use provider::{WeatherClient, WeatherSource};
pub use view::{Background, History, HistoryEntry, WeatherView};
