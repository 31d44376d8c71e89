//! Route payloads carried in `Envelope.data`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Welcome to PingMe API!";
pub const HEALTHY: &str = "healthy";
pub const ECHO_PREFIX: &str = "Echo: ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingPayload {
    pub greeting: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthPayload {
    pub status: String,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoPayload {
    pub original: String,
    pub echoed: String,
    /// Number of Unicode scalar values in `original`.
    pub length: usize,
    pub timestamp: DateTime<Utc>,
}

impl GreetingPayload {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            greeting: GREETING.to_string(),
            timestamp,
        }
    }
}

impl HealthPayload {
    pub fn new(time: DateTime<Utc>) -> Self {
        Self {
            status: HEALTHY.to_string(),
            time,
        }
    }
}

impl EchoPayload {
    pub fn from_message(message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        let original = message.into();
        Self {
            echoed: format!("{}{}", ECHO_PREFIX, original),
            length: original.chars().count(),
            original,
            timestamp,
        }
    }
}
