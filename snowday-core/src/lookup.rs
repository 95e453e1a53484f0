//! One full lookup: classify the query, fetch an observation, score it.

use chrono::Utc;

use crate::{
    error::LookupError,
    location,
    model::Prediction,
    predict::predict,
    provider::WeatherProvider,
};

/// Resolve `input` into request parameters, fetch one observation and
/// derive a [`Prediction`].
///
/// Exactly one provider round-trip; every failure is terminal for this
/// lookup and surfaces to the caller untouched.
pub async fn resolve_and_fetch(
    provider: &dyn WeatherProvider,
    input: &str,
) -> Result<Prediction, LookupError> {
    let query = input.trim();
    let params = location::parse(query)?;

    // The provider sees the resolved value (e.g. "814146,IN"); a not-found
    // answer should echo what the user actually typed.
    let obs = provider.observe(&params).await.map_err(|e| match e {
        LookupError::NotFound { .. } => LookupError::NotFound { query: query.to_string() },
        other => other,
    })?;

    let chance_percent = predict(&obs);

    Ok(Prediction {
        chance_percent,
        city_name: obs.city_name,
        condition: obs.condition,
        temperature_c: obs.temperature_c,
        feels_like_c: obs.feels_like_c,
        humidity_pct: obs.humidity_pct,
        wind_speed_mps: obs.wind_speed_mps,
        snow_last_hour_cm: obs.snow_last_hour_cm,
        checked_at: Utc::now(),
    })
}
