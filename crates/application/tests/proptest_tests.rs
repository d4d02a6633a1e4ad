//! Property-based tests for the travel weather classifier

use application::{ClassifierRules, ReportLabels, WeatherClassifier};
use domain::WeatherObservation;
use proptest::prelude::*;

fn calm(temperature: f64) -> WeatherObservation {
    WeatherObservation {
        condition_text: "Clear".to_string(),
        temperature_celsius: temperature,
        feels_like_phrase: "Pleasant".to_string(),
        humidity_percent: 50.0,
        wind_speed_kmh: 5.0,
        precipitation_mm: 0.0,
        has_precipitation: false,
    }
}

fn classifier() -> WeatherClassifier {
    WeatherClassifier::default()
}

// ============================================================================
// Threshold Property Tests
// ============================================================================

mod threshold_tests {
    use super::*;

    proptest! {
        #[test]
        fn comfortable_temperatures_are_good(t in 0.0f64..35.0f64) {
            prop_assert!(!classifier().is_bad_for_travel(&calm(t)));
        }

        #[test]
        fn freezing_temperatures_are_bad(t in -80.0f64..-0.0001f64) {
            prop_assert!(classifier().is_bad_for_travel(&calm(t)));
        }

        #[test]
        fn hot_temperatures_are_bad(t in 35.0f64..70.0f64) {
            prop_assert!(classifier().is_bad_for_travel(&calm(t)));
        }

        #[test]
        fn wind_above_limit_is_bad(w in 50.0001f64..300.0f64) {
            let obs = WeatherObservation { wind_speed_kmh: w, ..calm(20.0) };
            prop_assert!(classifier().is_bad_for_travel(&obs));
        }

        #[test]
        fn wind_up_to_limit_is_good(w in 0.0f64..=50.0f64) {
            let obs = WeatherObservation { wind_speed_kmh: w, ..calm(20.0) };
            prop_assert!(!classifier().is_bad_for_travel(&obs));
        }

        #[test]
        fn precipitation_only_counts_when_flagged(mm in 0.0f64..500.0f64) {
            let obs = WeatherObservation {
                precipitation_mm: mm,
                has_precipitation: false,
                ..calm(20.0)
            };
            prop_assert!(!classifier().is_bad_for_travel(&obs));

            let flagged = WeatherObservation { has_precipitation: true, ..obs };
            prop_assert_eq!(classifier().is_bad_for_travel(&flagged), mm > 5.0);
        }
    }
}

// ============================================================================
// Keyword Property Tests
// ============================================================================

mod keyword_tests {
    use super::*;

    proptest! {
        #[test]
        fn storm_keyword_anywhere_is_bad(
            prefix in "[a-z ]{0,10}",
            suffix in "[a-z ]{0,10}",
            keyword in prop::sample::select(vec!["thunder", "STORM", "Hail"])
        ) {
            let obs = WeatherObservation {
                condition_text: format!("{prefix}{keyword}{suffix}"),
                ..calm(20.0)
            };
            prop_assert!(classifier().is_bad_for_travel(&obs));
        }

        #[test]
        fn russian_keywords_match_any_case(
            keyword in prop::sample::select(vec!["Гром и молния", "ШТОРМ", "град"])
        ) {
            let classifier = WeatherClassifier::new(ClassifierRules::russian(), ReportLabels::russian());
            let obs = WeatherObservation {
                condition_text: keyword.to_string(),
                ..calm(20.0)
            };
            prop_assert!(classifier.is_bad_for_travel(&obs));
        }

        #[test]
        fn report_always_has_six_lines(
            t in -50.0f64..50.0f64,
            wind in 0.0f64..150.0f64,
            mm in 0.0f64..50.0f64,
            wet in any::<bool>()
        ) {
            let obs = WeatherObservation {
                wind_speed_kmh: wind,
                precipitation_mm: mm,
                has_precipitation: wet,
                ..calm(t)
            };
            prop_assert_eq!(classifier().render_report(&obs).lines().len(), 6);
        }
    }
}
