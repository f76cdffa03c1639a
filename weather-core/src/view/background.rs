use crate::time::hour_of_label;

/// Background cue keyed to the queried location's local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    /// 05:00 to 11:59
    Morning,
    /// 12:00 to 16:59, also used when the hour cannot be read
    #[default]
    Day,
    /// 17:00 to 19:59
    Evening,
    Night,
}

impl Background {
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Background::Morning,
            12..=16 => Background::Day,
            17..=19 => Background::Evening,
            _ => Background::Night,
        }
    }

    /// Band for a `yyyy-MM-dd HH:mm` label; `Day` if the hour is unreadable.
    pub fn from_local_time(label: &str) -> Self {
        hour_of_label(label).map_or(Background::Day, Background::for_hour)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Background::Morning => (255, 250, 205),
            Background::Day => (173, 216, 230),
            Background::Evening => (255, 99, 71),
            Background::Night => (25, 25, 112),
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Background::Night)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Background::Morning => "morning",
            Background::Day => "day",
            Background::Evening => "evening",
            Background::Night => "night",
        }
    }
}
