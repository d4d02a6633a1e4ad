//! Conversational route form
//!
//! Drives the `/weather` flow of a chat front-end: ask for the start, then
//! the destination, then the forecast interval. The dialog knows nothing
//! about the transport; callers feed it raw user input and relay the
//! replies.

use std::collections::HashMap;
use std::fmt;

use domain::{DomainError, Route};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

const GREETING: &str = "Hi! I can check the weather along your route. Send /weather to begin.";
const HELP: &str = "/weather - plan a route and get a travel forecast\n\
                    /cancel - abort the current request\n\
                    /help - show this message";
const ASK_START: &str = "Where does the route start?";
const ASK_END: &str = "Where does the route end?";
const ASK_INTERVAL: &str = "Choose the forecast interval: forecast_3d (3 days) or forecast_7d (7 days)";
const UNKNOWN_INTERVAL: &str = "Unknown interval. Choose forecast_3d or forecast_7d.";
const EMPTY_INPUT: &str = "Please enter a place name.";
const CANCELLED: &str = "Request cancelled.";
const IDLE_HINT: &str = "Send /weather to plan a route.";

/// Forecast interval offered by the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ForecastInterval {
    ThreeDays,
    SevenDays,
}

impl ForecastInterval {
    /// All intervals in display order
    pub const ALL: [Self; 2] = [Self::ThreeDays, Self::SevenDays];

    /// Identifier a client sends to pick this interval
    pub const fn key(self) -> &'static str {
        match self {
            Self::ThreeDays => "forecast_3d",
            Self::SevenDays => "forecast_7d",
        }
    }

    /// Number of forecast days
    pub const fn days(self) -> i64 {
        match self {
            Self::ThreeDays => 3,
            Self::SevenDays => 7,
        }
    }

    /// Parse an interval key or a bare day count
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|i| input.eq_ignore_ascii_case(i.key()) || input == i.days().to_string())
    }
}

/// Completed form, ready for the route forecast service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRequest {
    pub start: String,
    pub end: String,
    pub days: i64,
}

impl RouteRequest {
    /// Place names in travel order
    pub fn places(&self) -> [&str; 2] {
        [&self.start, &self.end]
    }

    /// Validate the request into a route
    pub fn to_route(&self) -> Result<Route, DomainError> {
        Route::build(self.places())
    }
}

/// What the caller should do after feeding input to the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Send this text back to the user
    Reply(String),
    /// The form is complete
    Ready(RouteRequest),
}

impl DialogOutcome {
    fn reply(text: &str) -> Self {
        Self::Reply(text.to_string())
    }
}

/// Current step of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Idle,
    AwaitingStart,
    AwaitingEnd {
        start: String,
    },
    AwaitingInterval {
        start: String,
        end: String,
    },
}

/// Single-user route form state machine
#[derive(Debug, Clone, Default)]
pub struct RouteDialog {
    state: DialogState,
}

impl RouteDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> &DialogState {
        &self.state
    }

    /// Whether no form is in progress
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, DialogState::Idle)
    }

    /// Feed one user message
    pub fn handle(&mut self, input: &str) -> DialogOutcome {
        let input = input.trim();

        match input {
            "/start" => return DialogOutcome::reply(GREETING),
            "/help" => return DialogOutcome::reply(HELP),
            "/weather" => {
                self.state = DialogState::AwaitingStart;
                return DialogOutcome::reply(ASK_START);
            },
            "/cancel" => {
                self.state = DialogState::Idle;
                return DialogOutcome::reply(CANCELLED);
            },
            _ => {},
        }

        match std::mem::take(&mut self.state) {
            DialogState::Idle => DialogOutcome::reply(IDLE_HINT),
            DialogState::AwaitingStart if input.is_empty() => {
                self.state = DialogState::AwaitingStart;
                DialogOutcome::reply(EMPTY_INPUT)
            },
            DialogState::AwaitingStart => {
                self.state = DialogState::AwaitingEnd {
                    start: input.to_string(),
                };
                DialogOutcome::reply(ASK_END)
            },
            DialogState::AwaitingEnd { start } if input.is_empty() => {
                self.state = DialogState::AwaitingEnd { start };
                DialogOutcome::reply(EMPTY_INPUT)
            },
            DialogState::AwaitingEnd { start } => {
                self.state = DialogState::AwaitingInterval {
                    start,
                    end: input.to_string(),
                };
                DialogOutcome::reply(ASK_INTERVAL)
            },
            DialogState::AwaitingInterval { start, end } => match ForecastInterval::parse(input) {
                Some(interval) => {
                    debug!(interval = interval.key(), "Route form completed");
                    DialogOutcome::Ready(RouteRequest {
                        start,
                        end,
                        days: interval.days(),
                    })
                },
                None => {
                    self.state = DialogState::AwaitingInterval { start, end };
                    DialogOutcome::reply(UNKNOWN_INTERVAL)
                },
            },
        }
    }
}

/// In-memory dialogs keyed by session id
#[derive(Default)]
pub struct DialogSessions {
    sessions: Mutex<HashMap<String, RouteDialog>>,
}

impl fmt::Debug for DialogSessions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogSessions")
            .field("active", &self.len())
            .finish()
    }
}

impl DialogSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a message to the session's dialog
    ///
    /// Sessions that finish or return to idle are dropped.
    pub fn handle(&self, session_id: &str, input: &str) -> DialogOutcome {
        let mut sessions = self.sessions.lock();
        let dialog = sessions.entry(session_id.to_string()).or_default();
        let outcome = dialog.handle(input);
        if dialog.is_idle() {
            sessions.remove(session_id);
        }
        outcome
    }

    /// Drop a session's dialog, if any
    pub fn reset(&self, session_id: &str) {
        self.sessions.lock().remove(session_id);
    }

    /// Number of forms in progress
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(outcome: DialogOutcome) -> String {
        match outcome {
            DialogOutcome::Reply(text) => text,
            DialogOutcome::Ready(req) => panic!("unexpected completion: {req:?}"),
        }
    }

    #[test]
    fn full_flow_produces_request() {
        let mut dialog = RouteDialog::new();

        assert_eq!(reply(dialog.handle("/weather")), ASK_START);
        assert_eq!(reply(dialog.handle(" Moscow ")), ASK_END);
        assert_eq!(reply(dialog.handle("Kazan")), ASK_INTERVAL);

        let outcome = dialog.handle("forecast_3d");
        assert_eq!(
            outcome,
            DialogOutcome::Ready(RouteRequest {
                start: "Moscow".to_string(),
                end: "Kazan".to_string(),
                days: 3,
            })
        );
        assert!(dialog.is_idle());
    }

    #[test]
    fn unknown_interval_keeps_waiting() {
        let mut dialog = RouteDialog::new();
        dialog.handle("/weather");
        dialog.handle("Moscow");
        dialog.handle("Kazan");

        assert_eq!(reply(dialog.handle("forecast_10d")), UNKNOWN_INTERVAL);
        assert!(matches!(
            dialog.state(),
            DialogState::AwaitingInterval { .. }
        ));

        match dialog.handle("7") {
            DialogOutcome::Ready(req) => assert_eq!(req.days, 7),
            DialogOutcome::Reply(text) => panic!("expected completion, got {text}"),
        }
    }

    #[test]
    fn blank_place_is_asked_again() {
        let mut dialog = RouteDialog::new();
        dialog.handle("/weather");
        assert_eq!(reply(dialog.handle("   ")), EMPTY_INPUT);
        assert_eq!(dialog.state(), &DialogState::AwaitingStart);

        dialog.handle("Moscow");
        assert_eq!(reply(dialog.handle("")), EMPTY_INPUT);
        assert_eq!(
            dialog.state(),
            &DialogState::AwaitingEnd {
                start: "Moscow".to_string()
            }
        );
    }

    #[test]
    fn commands_work_in_any_state() {
        let mut dialog = RouteDialog::new();
        dialog.handle("/weather");
        dialog.handle("Moscow");

        assert_eq!(reply(dialog.handle("/help")), HELP);
        assert!(matches!(dialog.state(), DialogState::AwaitingEnd { .. }));

        assert_eq!(reply(dialog.handle("/cancel")), CANCELLED);
        assert!(dialog.is_idle());

        assert_eq!(reply(dialog.handle("/start")), GREETING);
        assert_eq!(reply(dialog.handle("hello")), IDLE_HINT);
    }

    #[test]
    fn weather_restarts_form() {
        let mut dialog = RouteDialog::new();
        dialog.handle("/weather");
        dialog.handle("Moscow");
        dialog.handle("/weather");
        assert_eq!(dialog.state(), &DialogState::AwaitingStart);
    }

    #[test]
    fn interval_parsing() {
        assert_eq!(
            ForecastInterval::parse("FORECAST_7D"),
            Some(ForecastInterval::SevenDays)
        );
        assert_eq!(ForecastInterval::parse(" 3 "), Some(ForecastInterval::ThreeDays));
        assert_eq!(ForecastInterval::parse("5"), None);
    }

    #[test]
    fn request_builds_route() {
        let request = RouteRequest {
            start: "Moscow".to_string(),
            end: "Kazan".to_string(),
            days: 3,
        };
        assert_eq!(request.to_route().unwrap().places(), &["Moscow", "Kazan"]);

        let same = RouteRequest {
            end: "Moscow".to_string(),
            ..request
        };
        assert_eq!(
            same.to_route().unwrap_err(),
            DomainError::DuplicatePlace("Moscow".to_string())
        );
    }

    #[test]
    fn sessions_are_isolated_and_cleared() {
        let sessions = DialogSessions::new();

        sessions.handle("a", "/weather");
        sessions.handle("b", "/weather");
        sessions.handle("a", "Moscow");
        assert_eq!(sessions.len(), 2);

        sessions.handle("a", "Kazan");
        let outcome = sessions.handle("a", "forecast_3d");
        assert!(matches!(outcome, DialogOutcome::Ready(_)));
        assert_eq!(sessions.len(), 1);

        sessions.reset("b");
        assert!(sessions.is_empty());
    }

    #[test]
    fn idle_messages_do_not_create_sessions() {
        let sessions = DialogSessions::new();
        sessions.handle("a", "/start");
        sessions.handle("a", "hello");
        assert!(sessions.is_empty());
    }
}
