use thiserror::Error;

/// Everything that can go wrong between a user action and a parsed payload.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Empty location input; raised before any request is made.
    #[error("no location entered")]
    Validation,

    /// The provider answered but reported a non-200 `cod` in the body.
    #[error("provider returned code {code}: {message}")]
    Provider { code: i64, message: String },

    /// Stored without its URL, which carries the API key.
    #[error("request failed: {0}")]
    Network(reqwest::Error),

    /// Body was not JSON, or a field the caller needs is missing.
    #[error("malformed provider response: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn is_provider(&self) -> bool {
        matches!(self, FetchError::Provider { .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.without_url())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// What the user gets to see when a fetch action does not succeed.
///
/// Provider, network and parse failures all collapse into the same
/// `FetchFailed` notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    InputRequired,
    FetchFailed,
}

impl Notification {
    pub fn title(&self) -> &'static str {
        match self {
            Notification::InputRequired => "Input Required",
            Notification::FetchFailed => "Fetch Error",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notification::InputRequired => {
                "Please enter a city name or coordinates (e.g. \"Montreal\" or \"43.65,-79.38\")."
            }
            Notification::FetchFailed => {
                "Unable to retrieve weather data.\nCheck your network/API key and try again."
            }
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

impl From<&FetchError> for Notification {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::Validation => Notification::InputRequired,
            FetchError::Provider { .. } | FetchError::Network(_) | FetchError::Parse(_) => {
                Notification::FetchFailed
            }
        }
    }
}
