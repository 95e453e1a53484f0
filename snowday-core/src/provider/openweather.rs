use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{error::LookupError, location::ResolvedParams, model::WeatherObservation};

use super::WeatherProvider;

const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Client for the OpenWeatherMap current weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn observe(&self, params: &ResolvedParams) -> Result<WeatherObservation, LookupError> {
        let (param, value) = params.to_query_pair();

        let res = self
            .http
            .get(CURRENT_WEATHER_URL)
            .query(&[
                (param, value.as_str()),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| LookupError::Provider { message: format!("request failed: {e}") })?;

        let body = res.text().await.map_err(|e| LookupError::Provider {
            message: format!("failed to read response body: {e}"),
        })?;

        classify_body(&body, &value)
    }
}

/// Classify a raw response body into an observation or a lookup failure.
///
/// OpenWeather reports errors in-band through the `cod` field (a string on
/// errors, a number on success), so classification reads the body rather
/// than the HTTP status line.
fn classify_body(body: &str, query: &str) -> Result<WeatherObservation, LookupError> {
    let envelope: OwEnvelope = serde_json::from_str(body).map_err(|e| LookupError::Provider {
        message: format!("unparseable response: {e}"),
    })?;

    match envelope.cod.as_ref().and_then(OwCod::value) {
        Some(200) | None => {}
        Some(401) => return Err(LookupError::Auth),
        Some(404) => return Err(LookupError::NotFound { query: query.to_string() }),
        Some(_) => {
            return Err(LookupError::Provider {
                message: envelope
                    .message
                    .unwrap_or_else(|| "unknown provider error".to_string()),
            });
        }
    }

    let main = envelope.main.ok_or_else(|| missing_field("main"))?;
    let wind = envelope.wind.ok_or_else(|| missing_field("wind"))?;

    let condition = envelope
        .weather
        .and_then(|w| w.into_iter().next())
        .map(|w| w.main)
        .unwrap_or_else(|| "Unknown".to_string());

    // The snow object is absent entirely for most locations.
    let snow_last_hour_cm = envelope.snow.and_then(|s| s.one_hour).unwrap_or(0.0);

    let city_name = envelope.name.unwrap_or_else(|| query.to_string());

    Ok(WeatherObservation {
        city_name,
        condition,
        temperature_c: main.temp,
        feels_like_c: main.feels_like,
        humidity_pct: main.humidity,
        wind_speed_mps: wind.speed,
        snow_last_hour_cm,
    })
}

fn missing_field(field: &str) -> LookupError {
    LookupError::Provider { message: format!("provider response missing `{field}`") }
}

#[derive(Debug, Deserialize)]
struct OwEnvelope {
    cod: Option<OwCod>,
    message: Option<String>,
    name: Option<String>,
    main: Option<OwMain>,
    wind: Option<OwWind>,
    weather: Option<Vec<OwWeather>>,
    snow: Option<OwSnow>,
}

/// `cod` is `200` (number) on success but `"404"` (string) on errors.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OwCod {
    Number(u16),
    Text(String),
}

impl OwCod {
    fn value(&self) -> Option<u16> {
        match self {
            OwCod::Number(n) => Some(*n),
            OwCod::Text(s) => s.parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwSnow {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS_WITH_SNOW: &str = r#"{
        "cod": 200,
        "name": "Shimla",
        "main": {"temp": -7.2, "feels_like": -12.0, "humidity": 86},
        "wind": {"speed": 4.1},
        "weather": [{"main": "Snow", "description": "heavy snow"}],
        "snow": {"1h": 6.5}
    }"#;

    const SUCCESS_NO_SNOW: &str = r#"{
        "cod": 200,
        "name": "Chennai",
        "main": {"temp": 31.0, "feels_like": 35.5, "humidity": 70},
        "wind": {"speed": 3.0},
        "weather": [{"main": "Clear", "description": "clear sky"}]
    }"#;

    #[test]
    fn success_body_maps_all_fields() {
        let obs = classify_body(SUCCESS_WITH_SNOW, "Shimla").expect("should classify");

        assert_eq!(obs.city_name, "Shimla");
        assert_eq!(obs.condition, "Snow");
        assert_eq!(obs.temperature_c, -7.2);
        assert_eq!(obs.feels_like_c, -12.0);
        assert_eq!(obs.humidity_pct, 86);
        assert_eq!(obs.wind_speed_mps, 4.1);
        assert_eq!(obs.snow_last_hour_cm, 6.5);
    }

    #[test]
    fn absent_snow_object_defaults_to_zero() {
        let obs = classify_body(SUCCESS_NO_SNOW, "Chennai").expect("should classify");
        assert_eq!(obs.snow_last_hour_cm, 0.0);
    }

    #[test]
    fn absent_one_hour_field_defaults_to_zero() {
        let body = r#"{
            "cod": 200,
            "name": "Oslo",
            "main": {"temp": -1.0, "feels_like": -4.0, "humidity": 90},
            "wind": {"speed": 2.0},
            "weather": [{"main": "Snow"}],
            "snow": {}
        }"#;

        let obs = classify_body(body, "Oslo").expect("should classify");
        assert_eq!(obs.snow_last_hour_cm, 0.0);
    }

    #[test]
    fn cod_404_yields_not_found_with_query() {
        let body = r#"{"cod": "404", "message": "city not found"}"#;
        let err = classify_body(body, "Atlantis,GR").unwrap_err();

        match err {
            LookupError::NotFound { query } => assert_eq!(query, "Atlantis,GR"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn cod_401_yields_auth_error() {
        let body = r#"{"cod": 401, "message": "Invalid API key"}"#;
        assert!(matches!(classify_body(body, "Oslo"), Err(LookupError::Auth)));
    }

    #[test]
    fn other_cod_carries_the_provider_message() {
        let body = r#"{"cod": "429", "message": "rate limited"}"#;
        let err = classify_body(body, "Oslo").unwrap_err();

        match err {
            LookupError::Provider { message } => assert_eq!(message, "rate limited"),
            other => panic!("expected Provider, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_body_is_a_provider_error() {
        let err = classify_body("<html>bad gateway</html>", "Oslo").unwrap_err();
        assert!(matches!(err, LookupError::Provider { .. }));
    }

    #[test]
    fn missing_weather_array_falls_back_to_unknown() {
        let body = r#"{
            "cod": 200,
            "name": "Oslo",
            "main": {"temp": 0.0, "feels_like": 0.0, "humidity": 50},
            "wind": {"speed": 1.0}
        }"#;

        let obs = classify_body(body, "Oslo").expect("should classify");
        assert_eq!(obs.condition, "Unknown");
    }
}
