//! Mock API page: simulated latency in front of the fixture client

use crate::api::{ApiError, ApiResponse, Endpoint};
use crate::state::dynamic::{DelayPolicy, DynamicContent};
use crate::state::pages::ButtonRow;
use std::time::Instant;

pub const API_BUTTONS: &[&str] = &["Fetch users", "Fetch broken endpoint", "Toggle raw JSON"];

#[derive(Debug, Clone)]
pub struct ApiPage {
    pub buttons: ButtonRow,
    pub loader: DynamicContent,
    /// Endpoint of the request in flight or last completed
    pub endpoint: Option<Endpoint>,
    pub outcome: Option<Result<ApiResponse, ApiError>>,
    pub show_raw: bool,
}

impl ApiPage {
    pub fn new(delay: DelayPolicy) -> Self {
        Self {
            buttons: ButtonRow::new(API_BUTTONS),
            loader: DynamicContent::new(delay),
            endpoint: None,
            outcome: None,
            show_raw: false,
        }
    }

    /// Press the focused button
    pub fn activate(&mut self, now: Instant) {
        match self.buttons.selected {
            0 => {
                self.request(Endpoint::Users, now);
            }
            1 => {
                self.request(Endpoint::Broken, now);
            }
            _ => self.show_raw = !self.show_raw,
        }
    }

    /// Start a request. Ignored while another one is in flight.
    pub fn request(&mut self, endpoint: Endpoint, now: Instant) -> bool {
        if !self.loader.trigger(now) {
            return false;
        }
        self.endpoint = Some(endpoint);
        self.outcome = None;
        true
    }

    /// Endpoint to call now that the simulated latency has elapsed
    pub fn tick(&mut self, now: Instant) -> Option<Endpoint> {
        if self.loader.tick(now) {
            self.endpoint
        } else {
            None
        }
    }

    pub fn complete(&mut self, outcome: Result<ApiResponse, ApiError>) {
        if let Err(e) = &outcome {
            tracing::debug!("API request failed: {e}");
        }
        self.outcome = Some(outcome);
    }
}
