//! Route forecast handler
//!
//! Takes the dashboard form fields, plans the route and returns the per-day
//! verdict list together with one chart trace per place.

use application::{PlaceSeries, PlaceVerdicts, RoutePlan};
use axum::{Json, extract::State};
use domain::{Route, SeriesMetric};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Dashboard form submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RouteForecastRequest {
    /// Start place
    #[validate(length(min = 1, max = 100, message = "start place is required"))]
    pub start: String,
    /// Comma-separated intermediate places
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub intermediate: Option<String>,
    /// End place
    #[validate(length(min = 1, max = 100, message = "end place is required"))]
    pub end: String,
    /// Forecast window in days
    #[validate(range(min = 1, max = 15, message = "must be between 1 and 15"))]
    pub days: i64,
    /// Metric plotted on the chart
    #[serde(default)]
    pub metric: SeriesMetric,
}

/// Route forecast response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteForecastResponse {
    pub places: Vec<PlaceView>,
    pub chart: ChartView,
}

/// One place in route order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceView {
    /// 1-based position on the route
    pub index: usize,
    pub name: String,
    pub days: Vec<DayView>,
}

/// One forecast day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayView {
    pub day: usize,
    pub is_bad: bool,
    /// `good` or `bad`
    pub verdict: String,
    /// Why the day is bad
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concern: Option<String>,
    pub report_html: String,
}

/// Line chart for the chosen metric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartView {
    pub metric: SeriesMetric,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// Day numbers starting at 1
    pub x: Vec<usize>,
    pub traces: Vec<TraceView>,
}

/// One chart line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceView {
    pub name: String,
    pub y: Vec<f64>,
}

impl PlaceView {
    fn from_verdicts(index: usize, place: &PlaceVerdicts) -> Self {
        Self {
            index,
            name: place.name.clone(),
            days: place
                .days
                .iter()
                .map(|day| DayView {
                    day: day.day,
                    is_bad: day.is_bad,
                    verdict: if day.is_bad { "bad" } else { "good" }.to_string(),
                    concern: day.concern.map(|c| c.description().to_string()),
                    report_html: day.report.to_html(),
                })
                .collect(),
        }
    }
}

impl ChartView {
    fn build(metric: SeriesMetric, days: usize, series: &[PlaceSeries]) -> Self {
        Self {
            metric,
            title: format!("Weather by day: {}", metric.as_str()),
            x_title: "Day".to_string(),
            y_title: format!("{} ({})", metric.as_str(), metric.unit()),
            x: (1..=days).collect(),
            traces: series
                .iter()
                .map(|place| TraceView {
                    name: place.name.clone(),
                    y: place.series.get(metric).to_vec(),
                })
                .collect(),
        }
    }
}

impl RouteForecastResponse {
    /// Shape a plan for the dashboard
    pub fn from_plan(plan: &RoutePlan, metric: SeriesMetric) -> Self {
        Self {
            places: plan
                .verdicts
                .iter()
                .enumerate()
                .map(|(i, place)| PlaceView::from_verdicts(i + 1, place))
                .collect(),
            chart: ChartView::build(metric, plan.forecast.days.as_len(), &plan.series),
        }
    }
}

/// Plan a route and return verdicts plus chart data
#[instrument(skip(state, request), fields(days = request.days, metric = %request.metric))]
pub async fn route_forecast(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RouteForecastRequest>,
) -> Result<Json<RouteForecastResponse>, ApiError> {
    let route = Route::from_form(
        &request.start,
        request.intermediate.as_deref(),
        &request.end,
    )
    .map_err(application::ApplicationError::from)?;

    let plan = state.route_service.plan_route(route, request.days).await?;

    info!(places = plan.route.len(), "Route forecast served");

    Ok(Json(RouteForecastResponse::from_plan(&plan, request.metric)))
}
