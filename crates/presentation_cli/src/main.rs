//! Routecast CLI
//!
//! Plan route forecasts from the terminal, walk through the route dialog
//! interactively, or check a running dashboard server.

#![allow(clippy::print_stdout)]

mod chat;
mod forecast;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use domain::{Route, SeriesMetric};
use infrastructure::{AppConfig, LogFormat, init_logging};
use presentation_http::handlers::health::ReadinessResponse;

/// Routecast CLI
#[derive(Debug, Parser)]
#[command(name = "routecast")]
#[command(author, version, about = "Weather along a travel route", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "ROUTECAST_CONFIG_PATH",
        default_value = "config.toml"
    )]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Forecast every place on a route
    ///
    /// Example: routecast forecast --start Moscow --via Tver --end "Saint Petersburg" --days 3
    Forecast {
        /// Start place
        #[arg(long)]
        start: String,

        /// Comma-separated intermediate places
        #[arg(long)]
        via: Option<String>,

        /// End place
        #[arg(long)]
        end: String,

        /// Number of forecast days
        #[arg(short, long, default_value_t = 1)]
        days: i64,

        /// Metric for the per-day series
        #[arg(short, long, default_value = "temperature")]
        metric: SeriesMetric,

        /// Print the whole plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the places that can be used on a route
    Places,

    /// Interactive route dialog (/weather to begin, /quit to leave)
    Chat,

    /// Check a running server (used by container healthchecks)
    Health {
        /// Server URL
        #[arg(short, long, default_value = "http://127.0.0.1:8080")]
        url: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Format endpoint URL
fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn load_config(path: &std::path::Path) -> anyhow::Result<AppConfig> {
    AppConfig::load_from(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(LogFormat::Text, log_filter_from_verbosity(cli.verbose))?;

    match cli.command {
        Commands::Forecast {
            start,
            via,
            end,
            days,
            metric,
            json,
        } => {
            let config = load_config(&cli.config)?;
            let service = forecast::build_service(&config)?;

            let route = Route::from_form(&start, via.as_deref(), &end)?;
            let plan = service.plan_route(route, days).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print!("{}", forecast::render_plan(&plan, metric));
            }
        },

        Commands::Places => {
            let config = load_config(&cli.config)?;
            for name in config.city_coordinates.keys() {
                println!("{name}");
            }
        },

        Commands::Chat => {
            let config = load_config(&cli.config)?;
            let service = forecast::build_service(&config)?;

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            chat::run_chat(&service, stdin.lock(), &mut stdout).await?;
        },

        Commands::Health { url } => {
            let client = reqwest::Client::new();
            match client.get(endpoint_url(&url, "/ready")).send().await {
                Ok(resp) => {
                    let status = resp.status();
                    let readiness = resp.json::<ReadinessResponse>().await.ok();
                    match readiness {
                        Some(r) if status.is_success() && r.ready => {
                            println!("Healthy ({} places)", r.places);
                            std::process::exit(0);
                        },
                        Some(r) => {
                            println!(
                                "Unhealthy: HTTP {status}, weather provider healthy: {}, places: {}",
                                r.weather_provider.healthy, r.places
                            );
                            std::process::exit(1);
                        },
                        None => {
                            println!("Unhealthy: HTTP {status}");
                            std::process::exit(1);
                        },
                    }
                },
                Err(e) => {
                    println!("Unhealthy: {e}");
                    std::process::exit(1);
                },
            }
        },
    }

    Ok(())
}
