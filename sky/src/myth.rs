//! Myth lookups for clicked stars.
//!
//! A click produces a [`MythRequest`] keyed by `(seed, star_id)`. The host
//! (or [`fetch_myth`] in the browser build) performs `GET /api/myth` and the
//! response is folded into a [`MythOutcome`]. Every outcome, including
//! network failures and malformed bodies, becomes something displayable;
//! nothing here panics or propagates.
//!
//! SEQUENCING
//! ==========
//! Rapid clicks can leave several requests in flight. Each request carries a
//! token from [`MythTracker`]; only the response for the newest token is
//! shown, older ones are dropped when they land.

#[cfg(test)]
#[path = "myth_test.rs"]
mod myth_test;

use serde::Deserialize;

use crate::star::StarId;

const REJECTED_TITLE: &str = "A nameless star";
const REJECTED_TEXT: &str = "The sky keeps this story to itself.";
const FAILED_TITLE: &str = "The stars are silent";
const FAILED_TEXT: &str = "No myth could be heard right now. Try again in a moment.";

/// A myth lookup for one clicked star.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MythRequest {
    pub seed: String,
    pub star_id: StarId,
    pub token: u64,
}

impl MythRequest {
    /// Request path and query, relative to the page origin.
    ///
    /// Seeds are validated to `[a-zA-Z0-9]` before they reach the engine, so
    /// no escaping is needed.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/api/myth?seed={}&starId={}", self.seed, self.star_id)
    }
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Myth {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub story: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// What came back from a myth request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MythOutcome {
    /// 2xx with a well-formed body.
    Told(Myth),
    /// Non-2xx status; `message` is the server's `error` field when present.
    Rejected { status: u16, message: String },
    /// Network failure or a 2xx body that could not be parsed.
    Failed(String),
}

/// Title and text to show for an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MythDisplay {
    pub title: String,
    pub text: String,
}

impl MythOutcome {
    #[must_use]
    pub fn is_told(&self) -> bool {
        matches!(self, Self::Told(_))
    }

    /// Display text, with fixed fallbacks for failures.
    #[must_use]
    pub fn display(&self) -> MythDisplay {
        match self {
            Self::Told(myth) => MythDisplay { title: myth.title.clone(), text: myth.story.clone() },
            Self::Rejected { .. } => MythDisplay { title: REJECTED_TITLE.into(), text: REJECTED_TEXT.into() },
            Self::Failed(_) => MythDisplay { title: FAILED_TITLE.into(), text: FAILED_TEXT.into() },
        }
    }
}

/// Fold an HTTP status and body text into an outcome.
#[must_use]
pub fn classify_response(status: u16, body: &str) -> MythOutcome {
    if (200..300).contains(&status) {
        return match serde_json::from_str::<Myth>(body) {
            Ok(myth) => MythOutcome::Told(myth),
            Err(e) => MythOutcome::Failed(format!("malformed myth body: {e}")),
        };
    }
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => err.error,
        Err(_) => format!("HTTP {status}"),
    };
    MythOutcome::Rejected { status, message }
}

/// Issues request tokens and tells which response is still wanted.
#[derive(Debug, Clone, Default)]
pub struct MythTracker {
    latest: u64,
}

impl MythTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request for `(seed, star_id)`, superseding any in flight.
    pub fn issue(&mut self, seed: &str, star_id: StarId) -> MythRequest {
        self.latest += 1;
        MythRequest { seed: seed.to_owned(), star_id, token: self.latest }
    }

    /// Whether a response for `token` should still be shown.
    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        token != 0 && token == self.latest
    }

    /// Drop interest in every request issued so far.
    pub fn cancel_all(&mut self) {
        self.latest += 1;
    }
}

/// Perform the request with `gloo-net`. Never fails; errors become outcomes.
#[cfg(feature = "browser")]
pub async fn fetch_myth(request: &MythRequest) -> MythOutcome {
    let response = match gloo_net::http::Request::get(&request.path()).send().await {
        Ok(response) => response,
        Err(e) => return MythOutcome::Failed(e.to_string()),
    };
    let status = response.status();
    match response.text().await {
        Ok(body) => classify_response(status, &body),
        Err(e) => MythOutcome::Failed(e.to_string()),
    }
}
