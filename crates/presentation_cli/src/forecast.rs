//! Route forecast wiring and terminal rendering

use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::Context;
use application::{RoutePlan, RouteForecastService};
use domain::SeriesMetric;
use infrastructure::{AppConfig, StaticLocationResolver, WeatherAdapter};

/// Build the route forecast service from loaded configuration
pub fn build_service(config: &AppConfig) -> anyhow::Result<RouteForecastService> {
    let weather = WeatherAdapter::with_config(config.weather.clone())
        .context("Failed to initialize weather provider")?;

    Ok(RouteForecastService::new(
        Arc::new(StaticLocationResolver::new(config.city_coordinates.clone())),
        Arc::new(weather),
        config.classifier(),
    ))
}

/// Per-place verdicts with their reports, one line per report field
pub fn render_reports(plan: &RoutePlan) -> String {
    let mut out = String::new();

    for (index, place) in plan.verdicts.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, place.name);
        for day in &place.days {
            let verdict = match day.concern {
                Some(concern) => format!("bad ({})", concern.description()),
                None => "good".to_string(),
            };
            let _ = writeln!(out, "   Day {}: {verdict}", day.day);
            for line in day.report.lines() {
                let _ = writeln!(out, "     {line}");
            }
        }
    }

    out
}

/// One row of numbers per place for the chosen metric
pub fn render_series(plan: &RoutePlan, metric: SeriesMetric) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({}) by day:", metric.as_str(), metric.unit());

    for place in &plan.series {
        let values: Vec<String> = place
            .series
            .get(metric)
            .iter()
            .map(|v| format!("{v:.1}"))
            .collect();
        let _ = writeln!(out, "   {}: {}", place.name, values.join(", "));
    }

    out
}

/// Full text output of the `forecast` command
pub fn render_plan(plan: &RoutePlan, metric: SeriesMetric) -> String {
    format!(
        "Route: {} ({} day(s))\n\n{}\n{}",
        plan.route.places().join(" -> "),
        plan.forecast.days,
        render_reports(plan),
        render_series(plan, metric)
    )
}
