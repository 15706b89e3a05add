// Newsletter signup: input hygiene, request payload and error mapping.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// RFC 5321 path length limit.
pub const MAX_EMAIL_LEN: usize = 254;

/// PostgreSQL `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Failure reasons, each rendered as the message shown under the form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Please enter an email address.")]
    Empty,
    #[error("Please enter a valid email address.")]
    Invalid,
    #[error("You're already subscribed to our newsletter!")]
    AlreadySubscribed,
    #[error("Something went wrong. Please try again later.")]
    Remote(String),
    #[error("Newsletter signup is currently unavailable.")]
    Unavailable,
}

pub const SUCCESS_MESSAGE: &str = "Thank you! Welcome to the LYMINA family! 🎵";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("static pattern")
    })
}

pub fn sanitize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn is_valid(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LEN && email_pattern().is_match(email)
}

/// Sanitize then validate raw form input.
pub fn prepare(raw: &str) -> Result<String, SignupError> {
    let email = sanitize(raw);
    if email.is_empty() {
        return Err(SignupError::Empty);
    }
    if !is_valid(&email) {
        return Err(SignupError::Invalid);
    }
    Ok(email)
}

#[derive(Debug, Serialize)]
struct InsertRow<'a> {
    email: &'a str,
}

/// JSON body for a single-row insert into the `emails` table.
pub fn insert_body(email: &str) -> serde_json::Result<String> {
    serde_json::to_string(&[InsertRow { email }])
}

/// Error payload returned by the REST gateway.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct RemoteError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl RemoteError {
    pub fn classify(&self) -> SignupError {
        if self.code.as_deref() == Some(UNIQUE_VIOLATION) || self.message.contains("duplicate key") {
            SignupError::AlreadySubscribed
        } else {
            SignupError::Remote(self.message.clone())
        }
    }
}

/// Map a non-success HTTP response to a signup error.
///
/// Bodies that are not the expected JSON shape still produce a
/// [`SignupError::Remote`] carrying the status.
pub fn classify_response(status: u16, body: &str) -> SignupError {
    match serde_json::from_str::<RemoteError>(body) {
        Ok(err) => err.classify(),
        Err(_) if status == 409 => SignupError::AlreadySubscribed,
        Err(_) => SignupError::Remote(format!("HTTP {}", status)),
    }
}

/// Hosted database REST endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupEndpoint {
    pub base_url: String,
    pub anon_key: String,
}

impl SignupEndpoint {
    /// Both parts must be present and non-blank.
    pub fn from_parts(base_url: Option<&str>, anon_key: Option<&str>) -> Option<Self> {
        let base_url = base_url.map(str::trim).filter(|s| !s.is_empty())?;
        let anon_key = anon_key.map(str::trim).filter(|s| !s.is_empty())?;
        Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub fn headers(&self) -> [(&'static str, String); 4] {
        [
            ("apikey", self.anon_key.clone()),
            ("Authorization", format!("Bearer {}", self.anon_key)),
            ("Content-Type", "application/json".to_string()),
            ("Prefer", "return=minimal".to_string()),
        ]
    }
}

/// Rejects a second submission while one is in flight.
#[derive(Clone, Copy, Debug, Default)]
pub struct SubmitGuard {
    in_flight: bool,
}

impl SubmitGuard {
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}
