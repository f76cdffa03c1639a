//! Wall-clock time at the queried location.
//!
//! The provider reports an observation instant (`dt`) and the location's
//! offset from UTC (`timezone`). Adding the two and formatting the sum as a
//! UTC instant yields the location's local time without involving the
//! machine's own time zone. When either value is unusable the helpers quietly
//! fall back to the machine's local clock.

use chrono::{DateTime, Local, Timelike};

use crate::model::CurrentConditions;

pub const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Local time at the queried location, `yyyy-MM-dd HH:mm`.
pub fn derive_local_time(current: &CurrentConditions) -> String {
    local_time_at(current.epoch_utc, current.timezone_offset_secs)
        .unwrap_or_else(|| Local::now().format(LOCAL_TIME_FORMAT).to_string())
}

/// Date part (`yyyy-MM-dd`) of [`derive_local_time`].
pub fn derive_local_date(current: &CurrentConditions) -> String {
    date_of_label(&derive_local_time(current)).to_string()
}

/// Hour (0..=23) of [`derive_local_time`]; the machine's current hour if it
/// cannot be read back.
pub fn derive_local_hour(current: &CurrentConditions) -> u32 {
    hour_of_label(&derive_local_time(current)).unwrap_or_else(|| Local::now().hour())
}

/// Formats `epoch + offset` as a UTC wall-clock label. `None` if either input
/// is missing or the sum is outside chrono's range.
pub fn local_time_at(epoch_utc: Option<i64>, offset_secs: Option<i32>) -> Option<String> {
    let local_epoch = epoch_utc?.checked_add(i64::from(offset_secs?))?;
    let instant = DateTime::from_timestamp(local_epoch, 0)?;
    Some(instant.format(LOCAL_TIME_FORMAT).to_string())
}

/// First whitespace-delimited token of a local time label.
pub fn date_of_label(label: &str) -> &str {
    label.split_whitespace().next().unwrap_or(label)
}

/// Reads the hour out of a `yyyy-MM-dd HH:mm` label.
pub fn hour_of_label(label: &str) -> Option<u32> {
    let (_, time) = label.split_once(' ')?;
    let (hour, _) = time.split_once(':')?;
    hour.trim().parse::<u32>().ok().filter(|h| *h < 24)
}
