use serde_json::Value;
use thiserror::Error;

/// Outbound command asking the server to toggle its recognition loop.
pub const TOGGLE_COMMAND: &str = "toggle_recognition";

/// Inbound event reporting one completed server-side action.
pub const ACTION_LOG_EVENT: &str = "action_log";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("action_log payload is not an object")]
    NotAnObject,
    #[error("action_log payload has no text `data` field")]
    MissingData,
}

/// The parsed `action_log` payload: a free-text description of the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionNotification {
    pub data: String,
}

impl ActionNotification {
    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let obj = payload.as_object().ok_or(PayloadError::NotAnObject)?;
        let data = obj
            .get("data")
            .and_then(Value::as_str)
            .ok_or(PayloadError::MissingData)?;

        Ok(Self { data: data.to_string() })
    }
}
