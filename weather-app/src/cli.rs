use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Select, Text};
use tracing::info;
use weather_core::{
    Config, Unit, WeatherView,
    provider::{WeatherClient, client_from_config},
};

use crate::render;

const QUIT_COMMAND: &str = ":q";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather and a short forecast from OpenWeatherMap")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key and default units.
    Configure,

    /// Show weather for one location and exit.
    Show {
        /// City name (e.g. "Montreal") or coordinates ("43.65,-79.38").
        location: String,

        /// "metric"/"celsius" or "imperial"/"fahrenheit"; defaults to the configured units.
        #[arg(long)]
        units: Option<String>,
    },

    /// Look up locations one after another, keeping a history of recent searches.
    Session {
        #[arg(long)]
        units: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, units } => {
                let config = Config::load()?;
                let unit = resolve_unit(units.as_deref(), &config)?;
                show(client_from_config(&config)?, &location, unit).await
            }
            Command::Session { units } => {
                let config = Config::load()?;
                let unit = resolve_unit(units.as_deref(), &config)?;
                session(client_from_config(&config)?, unit).await
            }
        }
    }
}

fn resolve_unit(flag: Option<&str>, config: &Config) -> anyhow::Result<Unit> {
    match flag {
        Some(value) => Unit::try_from(value),
        None => Ok(config.display.units),
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("API key prompt was cancelled")?;
    if api_key.trim().is_empty() {
        return Err(anyhow!("API key must not be empty"));
    }

    let units = Select::new("Default units:", Unit::all().to_vec())
        .prompt()
        .context("Units prompt was cancelled")?;

    config.set_api_key(api_key);
    config.set_default_units(units);
    config.save()?;

    let path = Config::config_file_path()?;
    info!(path = %path.display(), "configuration saved");
    println!("Saved configuration to {}", path.display());
    Ok(())
}

async fn show(client: WeatherClient, location: &str, unit: Unit) -> anyhow::Result<()> {
    let mut view = WeatherView::new(client);

    match view.on_fetch(location, unit).await {
        Ok(()) => {
            render::view(&view)?;
            Ok(())
        }
        Err(notification) => Err(anyhow!("{notification}")),
    }
}

async fn session(client: WeatherClient, unit: Unit) -> anyhow::Result<()> {
    let mut view = WeatherView::new(client);

    loop {
        let input = match Text::new("Location:")
            .with_help_message("city name or \"lat,lon\"; :q or Esc to quit")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        if input.trim() == QUIT_COMMAND {
            break;
        }

        match view.on_fetch(&input, unit).await {
            Ok(()) => render::view(&view)?,
            Err(notification) => render::notification(notification)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_parses_location_and_units() {
        let cli = Cli::try_parse_from(["weather", "show", "New York", "--units", "imperial"])
            .expect("arguments should parse");

        match cli.command {
            Command::Show { location, units } => {
                assert_eq!(location, "New York");
                assert_eq!(units.as_deref(), Some("imperial"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn a_subcommand_is_required() {
        assert!(Cli::try_parse_from(["weather"]).is_err());
    }

    #[test]
    fn units_flag_overrides_config() {
        let mut config = Config::default();
        config.set_default_units(Unit::Imperial);

        assert_eq!(resolve_unit(None, &config).unwrap(), Unit::Imperial);
        assert_eq!(resolve_unit(Some("celsius"), &config).unwrap(), Unit::Metric);
        assert!(resolve_unit(Some("kelvin"), &config).is_err());
    }
}
