//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Weather adapter against a mocked AccuWeather API
//! - Full route planning through the real adapters

use std::sync::Arc;

use application::{ApplicationError, ProviderError, RouteForecastService, WeatherPort};
use domain::{ForecastDays, Location};
use infrastructure::{AppConfig, StaticLocationResolver, WeatherAdapter};
use integration_weather::WeatherConfig;
use secrecy::SecretString;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter(server: &MockServer) -> WeatherAdapter {
    WeatherAdapter::with_config(WeatherConfig {
        base_url: server.uri(),
        api_key: SecretString::from("test-key".to_string()),
        timeout_secs: 5,
        ..WeatherConfig::default()
    })
    .unwrap()
}

fn day(phrase: &str, max: f64) -> serde_json::Value {
    serde_json::json!({
        "Temperature": {"Minimum": {"Value": 1.0}, "Maximum": {"Value": max}},
        "RealFeelTemperature": {"Maximum": {"Value": max, "Phrase": "Pleasant"}},
        "Day": {
            "ShortPhrase": phrase,
            "HasPrecipitation": false,
            "RelativeHumidity": {"Average": 55},
            "Wind": {"Speed": {"Value": 10.0}},
            "TotalLiquid": {"Value": 0.0}
        }
    })
}

fn five_days() -> serde_json::Value {
    serde_json::json!({
        "DailyForecasts": [
            day("Sunny", 20.0),
            day("Thunderstorms", 22.0),
            day("Sunny", 24.0),
            day("Cloudy", 18.0),
            day("Sunny", 19.0),
        ]
    })
}

async fn mount_location(server: &MockServer, q: &str, key: &str) {
    Mock::given(method("GET"))
        .and(path("/locations/v1/cities/geoposition/search"))
        .and(query_param("q", q))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"Key": key})))
        .mount(server)
        .await;
}

// ============================================================================
// Weather adapter
// ============================================================================

mod weather_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn fetch_daily_maps_observations() {
        let server = MockServer::start().await;
        mount_location(&server, "55.75,37.61", "294021").await;
        Mock::given(method("GET"))
            .and(path("/forecasts/v1/daily/5day/294021"))
            .respond_with(ResponseTemplate::new(200).set_body_json(five_days()))
            .mount(&server)
            .await;

        let location = Location::new(55.75, 37.61).unwrap();
        let observations = adapter(&server)
            .fetch_daily(&location, ForecastDays::new(3).unwrap())
            .await
            .unwrap();

        assert_eq!(observations.len(), 3);
        assert_eq!(observations[1].condition_text, "Thunderstorms");
        assert_eq!(observations[0].feels_like_phrase, "Pleasant");
        assert!((observations[2].temperature_celsius - 24.0).abs() < f64::EPSILON);
        assert!((observations[0].humidity_percent - 55.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn quota_maps_to_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let location = Location::new(55.75, 37.61).unwrap();
        let err = adapter(&server).fetch_current(&location).await.unwrap_err();

        assert_eq!(err, ApplicationError::Provider(ProviderError::QuotaExceeded));
    }

    #[tokio::test]
    async fn rejected_key_maps_to_credentials_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let adapter = adapter(&server);
        let location = Location::new(55.75, 37.61).unwrap();
        let err = adapter.fetch_current(&location).await.unwrap_err();

        assert_eq!(
            err,
            ApplicationError::Provider(ProviderError::InvalidCredentials)
        );
        assert!(!adapter.is_available().await);
    }
}

// ============================================================================
// Route planning end to end
// ============================================================================

mod route_planning_tests {
    use super::*;

    fn resolver() -> StaticLocationResolver {
        [("Moscow", 55.75, 37.61), ("Kazan", 55.79, 49.12)]
            .into_iter()
            .map(|(name, lat, lon)| (name.to_string(), Location::new(lat, lon).unwrap()))
            .collect()
    }

    fn service(server: &MockServer) -> RouteForecastService {
        RouteForecastService::new(
            Arc::new(resolver()),
            Arc::new(adapter(server)),
            AppConfig::default().classifier(),
        )
    }

    #[tokio::test]
    async fn plan_route_classifies_each_day() {
        let server = MockServer::start().await;
        mount_location(&server, "55.75,37.61", "1").await;
        mount_location(&server, "55.79,49.12", "2").await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/forecasts/v1/daily/5day/[12]$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(five_days()))
            .expect(2)
            .mount(&server)
            .await;

        let plan = service(&server).plan(["Moscow", "Kazan"], 3).await.unwrap();

        assert_eq!(plan.verdicts.len(), 2);
        for place in &plan.verdicts {
            let bad: Vec<bool> = place.days.iter().map(|d| d.is_bad).collect();
            assert_eq!(bad, [false, true, false]);
        }
        assert!(plan.series.iter().all(|s| s.series.len() == 3));
    }

    #[tokio::test]
    async fn unknown_place_makes_no_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = service(&server)
            .plan(["Moscow", "Atlantis"], 3)
            .await
            .unwrap_err();

        assert_eq!(err, ApplicationError::PlaceNotFound("Atlantis".to_string()));
    }

    #[tokio::test]
    async fn single_day_uses_current_conditions() {
        let server = MockServer::start().await;
        mount_location(&server, "55.75,37.61", "1").await;
        mount_location(&server, "55.79,49.12", "2").await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/currentconditions/v1/[12]$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "WeatherText": "Clear",
                "HasPrecipitation": false,
                "Temperature": {"Metric": {"Value": 15.0}},
                "RealFeelTemperatureShade": {"Metric": {"Value": 14.0, "Phrase": "Pleasant"}},
                "RelativeHumidity": 40,
                "Wind": {"Speed": {"Metric": {"Value": 8.0}}},
                "PrecipitationSummary": {"Precipitation": {"Metric": {"Value": 0.0}}}
            }])))
            .expect(2)
            .mount(&server)
            .await;

        let plan = service(&server).plan(["Moscow", "Kazan"], 1).await.unwrap();

        assert!(plan.verdicts.iter().all(|p| p.days.len() == 1 && !p.days[0].is_bad));
    }
}
