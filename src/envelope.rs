use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Message used by [`ResponseEnvelope::success`] when the caller supplies none.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Uniform wrapper for API responses: a success flag, a message, an optional
/// payload and the time the envelope was created.
///
/// Fields are public and can be changed freely after construction. Nothing
/// ties `data` to `success`; by convention only successful envelopes carry a
/// payload.
pub struct ResponseEnvelope<T> {
    pub success: bool,
    pub message: Option<String>,
    /// Omitted from the serialized form when `None`. A present field always
    /// decodes to `Some`, even when the payload itself encodes as `null`.
    #[serde(
        default = "Option::default",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present",
        bound(deserialize = "T: Deserialize<'de>")
    )]
    pub data: Option<T>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl<T> Default for ResponseEnvelope<T> {
    fn default() -> Self {
        ResponseEnvelope {
            success: false,
            message: None,
            data: None,
            timestamp: now_millis(),
        }
    }
}

impl<T> ResponseEnvelope<T> {
    /// Creates an envelope without a payload.
    pub fn new(success: bool, message: impl Into<String>) -> Self {
        ResponseEnvelope {
            success,
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Creates an envelope carrying `data`.
    pub fn with_data(success: bool, message: impl Into<String>, data: T) -> Self {
        ResponseEnvelope {
            data: Some(data),
            ..Self::new(success, message)
        }
    }

    /// Successful envelope with the default `"Success"` message.
    pub fn success(data: T) -> Self {
        Self::with_data(true, DEFAULT_SUCCESS_MESSAGE, data)
    }

    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self::with_data(true, message, data)
    }

    /// Failed envelope. Never carries a payload.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(false, message)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_error(&self) -> bool {
        !self.success
    }

    /// Converts the payload, keeping the flag, message and timestamp.
    pub fn map_data<U, F>(self, f: F) -> ResponseEnvelope<U>
    where
        F: FnOnce(T) -> U,
    {
        ResponseEnvelope {
            success: self.success,
            message: self.message,
            data: self.data.map(f),
            timestamp: self.timestamp,
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for ResponseEnvelope<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => ResponseEnvelope::success(data),
            Err(e) => ResponseEnvelope::error(e.to_string()),
        }
    }
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
