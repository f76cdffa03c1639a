use crate::{
    Config, FetchError,
    model::{CurrentConditions, ForecastSeries, WeatherQuery},
};
use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::automock;

pub mod openweather;

pub use openweather::WeatherClient;

/// Where a [`crate::WeatherView`] gets its data from.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch_current(&self, query: &WeatherQuery) -> Result<CurrentConditions, FetchError>;

    async fn fetch_forecast(&self, query: &WeatherQuery) -> Result<ForecastSeries, FetchError>;

    /// Raw image bytes for an icon code. Failures are not errors: the icon
    /// area simply stays blank.
    async fn fetch_icon(&self, icon_code: &str) -> Option<Bytes>;
}

/// Construct the OpenWeatherMap client from config.
pub fn client_from_config(config: &Config) -> anyhow::Result<WeatherClient> {
    let api_key = config.api_key()?;
    let client = WeatherClient::new(api_key.to_owned(), &config.provider)?;
    Ok(client)
}
