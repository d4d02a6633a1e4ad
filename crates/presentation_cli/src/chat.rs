//! Interactive route dialog over a line-based terminal

use std::io::{BufRead, Write};

use application::{DialogOutcome, RouteDialog, RouteForecastService, RouteRequest};
use tracing::warn;

use crate::forecast::render_reports;

/// Inputs that end the session
const QUIT_COMMANDS: [&str; 2] = ["/quit", "/exit"];

/// Run the dialog until end of input or a quit command
///
/// Every completed form is planned right away and the per-day reports are
/// written back before the next prompt.
pub async fn run_chat<R, W>(
    service: &RouteForecastService,
    input: R,
    output: &mut W,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut dialog = RouteDialog::new();

    if let DialogOutcome::Reply(greeting) = dialog.handle("/start") {
        writeln!(output, "{greeting}")?;
    }

    for line in input.lines() {
        let line = line?;
        if QUIT_COMMANDS.contains(&line.trim()) {
            break;
        }

        match dialog.handle(&line) {
            DialogOutcome::Reply(text) => writeln!(output, "{text}")?,
            DialogOutcome::Ready(request) => answer(service, &request, output).await?,
        }
        output.flush()?;
    }

    Ok(())
}

async fn answer<W: Write>(
    service: &RouteForecastService,
    request: &RouteRequest,
    output: &mut W,
) -> anyhow::Result<()> {
    writeln!(
        output,
        "Forecast request:\nStart: {}\nEnd: {}\nDays: {}",
        request.start, request.end, request.days
    )?;

    let route = match request.to_route() {
        Ok(route) => route,
        Err(e) => {
            writeln!(output, "Error: {e}")?;
            return Ok(());
        },
    };

    match service.plan_route(route, request.days).await {
        Ok(plan) => write!(output, "{}", render_reports(&plan))?,
        Err(e) => {
            warn!(error = %e, "Route forecast failed");
            writeln!(output, "Error: {e}")?;
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::forecast::tests::service;

    async fn transcript(input: &str) -> String {
        let mut output = Vec::new();
        run_chat(&service(), Cursor::new(input.to_string()), &mut output)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn greets_on_start() {
        let text = transcript("").await;
        assert!(text.starts_with("Hi!"));
    }

    #[tokio::test]
    async fn completed_form_prints_reports() {
        let text = transcript("/weather\nMoscow\nTver\nforecast_3d\n").await;

        assert!(text.contains("Where does the route start?"));
        assert!(text.contains("Where does the route end?"));
        assert!(text.contains("Start: Moscow\nEnd: Tver\nDays: 3"));
        assert!(text.contains("1. Moscow"));
        assert!(text.contains("2. Tver"));
        assert!(text.contains("   Day 3: good"));
    }

    #[tokio::test]
    async fn unknown_place_reported_and_dialog_continues() {
        let text = transcript("/weather\nMoscow\nAtlantis\n3\n/help\n").await;

        assert!(text.contains("Error: Place not found: Atlantis"));
        assert!(text.contains("/cancel"));
    }

    #[tokio::test]
    async fn same_start_and_end_is_rejected() {
        let text = transcript("/weather\nTver\nTver\n7\n").await;
        assert!(text.contains("Error: Duplicate place in route: Tver"));
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let text = transcript("/quit\n/weather\n").await;
        assert!(!text.contains("Where does the route start?"));
    }
}
