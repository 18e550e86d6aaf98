//! # Weather Feature
//!
//! Current conditions from OpenWeatherMap, rendered as one spoken sentence.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: true

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;
use std::time::Duration;

/// HTTP timeout for weather lookups (seconds)
const WEATHER_TIMEOUT_SECS: u64 = 7;

/// Produces a human-readable weather summary
///
/// Failures are reported inside the returned text, never as errors.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: Option<&str>) -> String;
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    name: Option<String>,
    weather: Vec<Condition>,
    main: MainReadings,
    wind: Wind,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    feels_like: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

#[derive(Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    default_city: String,
    country_code: String,
}

impl OpenWeatherClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        default_city: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(WEATHER_TIMEOUT_SECS))
            .build()?;
        Ok(OpenWeatherClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            default_city: default_city.into(),
            country_code: country_code.into(),
        })
    }

    async fn fetch(&self, api_key: &str, city: &str) -> Result<String> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        let location = format!("{city},{}", self.country_code);
        debug!("Requesting weather for {location}");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", location.as_str()),
                ("appid", api_key),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| "unknown".to_string());
            return Ok(format!("Weather error: {message}"));
        }

        let data: WeatherResponse = serde_json::from_str(&body)?;
        Ok(format_report(city, &data))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: Option<&str>) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return "Weather needs an OpenWeatherMap API key in your .env.".to_string();
        };
        let city = city
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.default_city);

        match self.fetch(api_key, city).await {
            Ok(report) => report,
            Err(e) => {
                warn!("Weather lookup for {city} failed: {e}");
                format!("Couldn't fetch weather: {e}")
            }
        }
    }
}

fn format_report(requested_city: &str, data: &WeatherResponse) -> String {
    let city = data
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(requested_city);
    let description = data
        .weather
        .first()
        .map(|c| c.description.as_str())
        .unwrap_or("unknown conditions");

    format!(
        "Current weather in {city}: {description}, {}°C, feels like {}°C, humidity {}%, wind {} m/s.",
        data.main.temp.round(),
        data.main.feels_like.round(),
        data.main.humidity.round(),
        data.wind.speed.round()
    )
}
