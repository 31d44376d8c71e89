//! The `{success, message, data, error}` wrapper shared by every response

use super::payloads::{EchoPayload, GreetingPayload, HealthPayload};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Route payloads, serialized as the bare payload object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    Greeting(GreetingPayload),
    Health(HealthPayload),
    Echo(EchoPayload),
}

impl Envelope {
    pub fn success(message: impl Into<String>, data: ResponseData) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(error.into()),
        }
    }
}

impl From<GreetingPayload> for ResponseData {
    fn from(payload: GreetingPayload) -> Self {
        ResponseData::Greeting(payload)
    }
}

impl From<HealthPayload> for ResponseData {
    fn from(payload: HealthPayload) -> Self {
        ResponseData::Health(payload)
    }
}

impl From<EchoPayload> for ResponseData {
    fn from(payload: EchoPayload) -> Self {
        ResponseData::Echo(payload)
    }
}
