//! Terminal drawing of a `WeatherView`.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize, style};
use weather_core::{
    Notification, WeatherSource, WeatherView,
    view::{Background, ForecastPanel},
};

const PANEL_WIDTH: usize = 44;

pub fn view<S: WeatherSource>(view: &WeatherView<S>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_view(&mut out, view)?;
    out.flush()
}

pub fn notification(notification: Notification) -> io::Result<()> {
    let colour = match notification {
        Notification::InputRequired => Color::Yellow,
        Notification::FetchFailed => Color::Red,
    };

    let mut err = io::stderr().lock();
    writeln!(err, "{}", style(notification.title()).with(colour).bold())?;
    for line in notification.message().lines() {
        writeln!(err, "  {line}")?;
    }
    err.flush()
}

pub fn write_view<W: Write, S: WeatherSource>(out: &mut W, view: &WeatherView<S>) -> io::Result<()> {
    let background = view.background();

    match view.current() {
        Some(current) => {
            let glyph = current.icon.as_ref().map_or("", |_| icon_glyph(&current.icon_code));
            panel_line(out, background, &format!("{}  {}", current.location, glyph))?;
            panel_line(out, background, &format!("Local time:  {}", current.local_time))?;
            panel_line(out, background, &format!("Temperature: {}", current.temperature))?;
            panel_line(out, background, &format!("Humidity:    {}", current.humidity))?;
            panel_line(out, background, &format!("Wind:        {}", current.wind))?;
            panel_line(out, background, &format!("Conditions:  {}", current.conditions))?;
        }
        None => {
            for label in ["Temperature", "Humidity", "Wind", "Conditions"] {
                panel_line(out, background, &format!("{label}: N/A"))?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", "Next 3 Hours Forecast".bold())?;
    match view.forecast() {
        ForecastPanel::Slots(lines) => {
            for line in lines {
                let glyph = line.icon.as_ref().map_or(" ", |_| icon_glyph(&line.icon_code));
                writeln!(out, "  {}:  {glyph}  {}", line.hour_label, line.summary)?;
            }
        }
        other => {
            if let Some(text) = other.placeholder() {
                writeln!(out, "  {text}")?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", "Recent Searches".bold())?;
    for entry in view.history().iter() {
        writeln!(out, "  {entry}")?;
    }

    Ok(())
}

fn panel_line<W: Write>(out: &mut W, background: Background, text: &str) -> io::Result<()> {
    let (r, g, b) = background.rgb();
    let foreground = if background.is_dark() { Color::White } else { Color::Black };
    let padded = format!(" {text:<width$}", width = PANEL_WIDTH - 1);

    writeln!(out, "{}", style(padded).with(foreground).on(Color::Rgb { r, g, b }))
}

/// Terminal stand-in for the provider's icon image, keyed on the code's
/// two-digit condition group.
fn icon_glyph(icon_code: &str) -> &'static str {
    match icon_code.get(..2) {
        Some("01") => "☀",
        Some("02") => "⛅",
        Some("03") | Some("04") => "☁",
        Some("09") | Some("10") => "☂",
        Some("11") => "⚡",
        Some("13") => "❄",
        Some("50") => "≋",
        _ => "?",
    }
}
