use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    config::ProviderConfig,
    error::FetchError,
    model::{CurrentConditions, ForecastSeries, ForecastSlot, WeatherQuery},
    text::encode_location,
};

use super::WeatherSource;

const SUCCESS_CODE: i64 = 200;
const CURRENT_ERROR_DEFAULT: &str = "Unknown error";
const FORECAST_ERROR_DEFAULT: &str = "Unable to fetch forecast";

/// Client for the OpenWeatherMap current-weather and 3-hour forecast endpoints.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    current_url: String,
    forecast_url: String,
    icon_url: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: String, provider: &ProviderConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .connect_timeout(provider.connect_timeout())
            .read_timeout(provider.read_timeout())
            .build()?;

        Ok(Self::with_http_client(api_key, provider, http))
    }

    /// Use an already configured HTTP client; the timeouts in `provider` are ignored.
    pub fn with_http_client(api_key: String, provider: &ProviderConfig, http: Client) -> Self {
        Self {
            api_key,
            current_url: provider.current_url.clone(),
            forecast_url: provider.forecast_url.clone(),
            icon_url: provider.icon_url.clone(),
            http,
        }
    }

    pub fn current_url(&self, query: &WeatherQuery) -> String {
        build_request_url(&self.current_url, query, &self.api_key)
    }

    pub fn forecast_url(&self, query: &WeatherQuery) -> String {
        build_request_url(&self.forecast_url, query, &self.api_key)
    }

    pub fn icon_url(&self, icon_code: &str) -> String {
        icon_url(&self.icon_url, icon_code)
    }

    /// GET `url` and parse the body as JSON whatever the HTTP status: the
    /// provider puts its error details in the body of 4xx responses.
    async fn get_json(&self, url: &str, endpoint: &str) -> Result<Value, FetchError> {
        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(endpoint, %status, bytes = body.len(), "provider response received");

        serde_json::from_str(&body)
            .map_err(|e| FetchError::Parse(format!("{endpoint} body is not valid JSON: {e}")))
    }
}

#[async_trait]
impl WeatherSource for WeatherClient {
    async fn fetch_current(&self, query: &WeatherQuery) -> Result<CurrentConditions, FetchError> {
        debug!(location = %query.location, units = %query.unit, "fetching current conditions");
        let body = self.get_json(&self.current_url(query), "current").await?;
        parse_current(body)
    }

    async fn fetch_forecast(&self, query: &WeatherQuery) -> Result<ForecastSeries, FetchError> {
        debug!(location = %query.location, units = %query.unit, "fetching forecast");
        let body = self.get_json(&self.forecast_url(query), "forecast").await?;
        parse_forecast(body)
    }

    async fn fetch_icon(&self, icon_code: &str) -> Option<Bytes> {
        let res = match self.http.get(self.icon_url(icon_code)).send().await {
            Ok(res) => res,
            Err(err) => {
                debug!(icon_code, error = %err, "icon request failed");
                return None;
            }
        };

        if !res.status().is_success() {
            debug!(icon_code, status = %res.status(), "icon not available");
            return None;
        }

        match res.bytes().await {
            Ok(bytes) if !bytes.is_empty() => Some(bytes),
            Ok(_) => None,
            Err(err) => {
                debug!(icon_code, error = %err, "icon body could not be read");
                None
            }
        }
    }
}

/// `base?q=<location>&units=<metric|imperial>&appid=<key>`, with spaces in
/// the location escaped as `%20` and nothing else escaped.
pub fn build_request_url(base: &str, query: &WeatherQuery, api_key: &str) -> String {
    format!(
        "{base}?q={}&units={}&appid={api_key}",
        encode_location(&query.location),
        query.unit.as_str(),
    )
}

pub fn icon_url(template: &str, icon_code: &str) -> String {
    template.replace("{icon}", icon_code)
}

/// Convert a current-weather body into [`CurrentConditions`].
pub fn parse_current(body: Value) -> Result<CurrentConditions, FetchError> {
    ensure_success(&body, CURRENT_ERROR_DEFAULT)?;

    let parsed: OwCurrentResponse = serde_json::from_value(body)?;
    let weather = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::Parse("current response has no weather entries".into()))?;

    Ok(CurrentConditions {
        temperature: parsed.main.temp,
        humidity_pct: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        condition: weather.description,
        icon_code: weather.icon,
        epoch_utc: parsed.dt.as_i64(),
        timezone_offset_secs: parsed.timezone.as_i64().and_then(|v| i32::try_from(v).ok()),
    })
}

/// Convert a forecast body into the ordered slot list.
pub fn parse_forecast(body: Value) -> Result<ForecastSeries, FetchError> {
    ensure_success(&body, FORECAST_ERROR_DEFAULT)?;

    let parsed: OwForecastResponse = serde_json::from_value(body)?;

    parsed
        .list
        .into_iter()
        .map(|entry| -> Result<ForecastSlot, FetchError> {
            let weather = entry.weather.into_iter().next().ok_or_else(|| {
                FetchError::Parse(format!("forecast slot {} has no weather entries", entry.dt_txt))
            })?;

            Ok(ForecastSlot {
                local_timestamp: entry.dt_txt,
                temperature: entry.main.temp,
                condition: weather.description,
                icon_code: weather.icon,
            })
        })
        .collect()
}

/// `default_message` is used when the error body has no `message` string.
fn ensure_success(body: &Value, default_message: &str) -> Result<(), FetchError> {
    let code = status_code(body);
    if code == SUCCESS_CODE {
        return Ok(());
    }

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(default_message)
        .to_string();

    debug!(code, %message, "provider reported an error");
    Err(FetchError::Provider { code, message })
}

/// `cod` arrives as a number on some endpoints and as a string on others.
/// Anything unreadable counts as 0.
fn status_code(body: &Value) -> i64 {
    match body.get("cod") {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwSlotMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    wind: OwWind,
    weather: Vec<OwWeather>,
    // Kept loose: a missing or non-integer value only disables local-time derivation.
    #[serde(default)]
    dt: Value,
    #[serde(default)]
    timezone: Value,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwSlotMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}
