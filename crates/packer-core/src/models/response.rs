//! JSON response envelope: `{ "ok": bool, "message"?: string, "data"?: T }`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response<T> {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Response<T> {
    pub fn new(ok: bool, message: Option<String>, data: Option<T>) -> Self {
        Self { ok, message, data }
    }

    /// Successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self::new(true, None, Some(data))
    }

    /// Failed response carrying only a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(false, Some(message.into()), None)
    }
}
