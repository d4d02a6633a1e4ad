//! HTTP request handlers

pub mod health;
pub mod places;
pub mod route_forecast;
