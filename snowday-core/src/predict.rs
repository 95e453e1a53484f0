//! The snow day chance heuristic.

use crate::model::WeatherObservation;

/// Hourly snowfall above this many cm is the dominant signal.
const HEAVY_SNOW_CM: f64 = 5.0;
/// Temperatures below this many °C add to the score.
const DEEP_FREEZE_C: f64 = -5.0;
/// Wind above this many m/s (about 50 km/h) adds to the score.
const STRONG_WIND_MPS: f64 = 14.0;

/// Additive score over three independent thresholds, capped at 100.
///
/// Pure function of the observation: the same input always yields the same
/// chance, and the result is one of {0, 10, 20, 30, 70, 80, 90, 100}.
pub fn predict(obs: &WeatherObservation) -> u8 {
    let mut chance: u8 = 0;

    if obs.snow_last_hour_cm > HEAVY_SNOW_CM {
        chance += 70;
    }
    if obs.temperature_c < DEEP_FREEZE_C {
        chance += 20;
    }
    if obs.wind_speed_mps > STRONG_WIND_MPS {
        chance += 10;
    }

    chance.min(100)
}
