//! Application services - Use case implementations

mod route_dialog;
mod route_forecast_service;
mod weather_classifier;

pub use route_dialog::{
    DialogOutcome, DialogSessions, DialogState, ForecastInterval, RouteDialog, RouteRequest,
};
pub use route_forecast_service::{
    DayVerdict, PlaceForecast, PlaceSeries, PlaceVerdicts, RouteForecast,
    RouteForecastService, RoutePlan,
};
pub use weather_classifier::{
    ClassifierRules, HTML_LINE_BREAK, ReportLabels, TravelConcern, WeatherClassifier,
    WeatherReport,
};
