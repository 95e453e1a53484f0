use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One current-conditions observation from the provider, metric units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Resolved location name as reported by the provider.
    pub city_name: String,
    /// Headline condition, e.g. "Snow" or "Clear".
    pub condition: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    /// Snowfall over the last hour in cm; 0 when the provider omits it.
    pub snow_last_hour_cm: f64,
}

/// Result of one lookup: the heuristic score plus the observation it was
/// derived from. Transient, rebuilt per lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Capped additive score, always one of {0,10,20,30,70,80,90,100}.
    pub chance_percent: u8,
    pub city_name: String,
    pub condition: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub snow_last_hour_cm: f64,
    /// When the lookup ran; localized formatting lives in [`crate::i18n`].
    pub checked_at: DateTime<Utc>,
}
