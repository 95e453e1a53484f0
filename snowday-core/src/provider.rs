use crate::{error::LookupError, location::ResolvedParams, model::WeatherObservation};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Boundary to the external weather data source.
///
/// One call per lookup, no retries and no explicit timeout; a failure
/// surfaces directly to the caller as a [`LookupError`].
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn observe(&self, params: &ResolvedParams) -> Result<WeatherObservation, LookupError>;
}
