use anyhow::Result;
use async_trait::async_trait;
use httpmock::prelude::*;
use std::collections::VecDeque;
use std::sync::Mutex;
use weather_agent::core::points;
use weather_agent::{AgentError, Fetcher, HttpFetcher, TextGenerator, WeatherAgent};

/// Generator that replays a scripted sequence of model replies.
struct ScriptedGenerator {
    replies: Mutex<VecDeque<String>>,
}

impl ScriptedGenerator {
    fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|s| (*s).to_string()).collect()),
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _prompt: &str) -> weather_agent::Result<String> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AgentError::Model {
                message: "no scripted reply".to_string(),
            })
    }
}

#[tokio::test]
async fn test_two_hop_fetch_chain_against_mock_weather_service() -> Result<()> {
    let server = MockServer::start();

    let forecast_path = "/gridpoints/SEW/125,68/forecast";
    let points_mock = server.mock(|when, then| {
        when.method(GET).path("/points/47.6062,-122.3321");
        then.status(200)
            .header("Content-Type", "application/geo+json")
            .json_body(serde_json::json!({
                "properties": {
                    "gridId": "SEW",
                    "forecast": server.url(forecast_path),
                }
            }));
    });
    let forecast_mock = server.mock(|when, then| {
        when.method(GET).path(forecast_path);
        then.status(200)
            .header("Content-Type", "application/geo+json")
            .json_body(serde_json::json!({
                "properties": {
                    "periods": [
                        {"name": "Tonight", "temperature": 52, "shortForecast": "Light Rain"},
                        {"name": "Tuesday", "temperature": 61, "shortForecast": "Partly Sunny"}
                    ]
                }
            }));
    });

    // The same two sequential hops the orchestrator performs: points lookup,
    // forecast URL extraction, forecast fetch.
    let fetcher = HttpFetcher::new(5)?;
    let points_body = fetcher
        .fetch(&server.url("/points/47.6062,-122.3321"))
        .await?;
    let forecast_url = points::extract_forecast_url(&points_body)?;
    assert_eq!(forecast_url, server.url(forecast_path));

    let forecast_body = fetcher.fetch(&forecast_url).await?;
    assert!(forecast_body.contains("Light Rain"));

    points_mock.assert();
    forecast_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_points_error_body_fails_extraction() -> Result<()> {
    let server = MockServer::start();

    let _points_mock = server.mock(|when, then| {
        when.method(GET).path("/points/91.0000,-500.0000");
        then.status(200)
            .header("Content-Type", "application/problem+json")
            .json_body(serde_json::json!({
                "title": "Invalid Parameter",
                "detail": "'91.0000,-500.0000' does not appear to be a valid coordinate"
            }));
    });

    // Hallucinated coordinates pass the prefix check and reach the service;
    // the pipeline only fails once the response lacks a forecast URL.
    let fetcher = HttpFetcher::new(5)?;
    let body = fetcher.fetch(&server.url("/points/91.0000,-500.0000")).await?;
    let err = points::extract_forecast_url(&body).unwrap_err();
    assert!(err.to_string().contains("missing field `properties`"));
    Ok(())
}

#[tokio::test]
async fn test_console_session_with_scripted_model() -> Result<()> {
    let server = MockServer::start();

    // The planner's prefix check pins URLs to api.weather.gov, so the console
    // session uses a fetcher that maps any URL onto the mock server's routes.
    struct RoutedFetcher {
        inner: HttpFetcher,
        base_url: String,
    }

    #[async_trait]
    impl Fetcher for RoutedFetcher {
        async fn fetch(&self, url: &str) -> weather_agent::Result<String> {
            let path = url
                .trim_start_matches("https://api.weather.gov")
                .to_string();
            self.inner.fetch(&format!("{}{}", self.base_url, path)).await
        }
    }

    let _points_mock = server.mock(|when, then| {
        when.method(GET).path("/points/47.6062,-122.3321");
        then.status(200).json_body(serde_json::json!({
            "properties": {
                "forecast": "https://api.weather.gov/gridpoints/SEW/125,68/forecast"
            }
        }));
    });
    let _forecast_mock = server.mock(|when, then| {
        when.method(GET).path("/gridpoints/SEW/125,68/forecast");
        then.status(200).json_body(serde_json::json!({
            "properties": {"periods": [{"name": "Tonight", "shortForecast": "Rain"}]}
        }));
    });

    let generator = ScriptedGenerator::new(&[
        "https://api.weather.gov/points/47.6062,-122.3321",
        "Rain tonight in Seattle, clearing tomorrow.",
    ]);
    let fetcher = RoutedFetcher {
        inner: HttpFetcher::new(5)?,
        base_url: server.base_url(),
    };

    let agent = WeatherAgent::new(generator, fetcher);
    let input = b"Seattle\nquit\n";
    let mut out = Vec::new();
    agent.run(&input[..], &mut out).await?;

    let console = String::from_utf8(out)?;
    assert!(console.contains(
        "[SUCCESS] Generated Points API URL: https://api.weather.gov/points/47.6062,-122.3321"
    ));
    assert!(console.contains("Rain tonight in Seattle, clearing tomorrow."));
    assert!(console.contains("[SUCCESS] Weather analysis complete for 'Seattle'!"));
    assert!(console.contains("Thanks for using the Weather Agent!"));
    Ok(())
}
