//! REST error taxonomy

use mrd_ui::GENERIC_ERROR_MESSAGE;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Everything that can go wrong with a REST call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    /// 400/422 with itemized messages from the server
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    /// 409 with a single message from the server
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Any other non-2xx status, or 400/409 without a usable body
    #[error("Server error: HTTP {0}")]
    Status(u16),
    /// 2xx with a body that does not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-2xx response to an error.
    pub fn from_response(status: u16, body: &str) -> Self {
        let json: Option<Value> = serde_json::from_str(body).ok();
        match status {
            400 | 422 => {
                let messages = json.as_ref().map(validation_messages).unwrap_or_default();
                if messages.is_empty() {
                    ApiError::Status(status)
                } else {
                    ApiError::Validation(messages)
                }
            }
            409 => match json.as_ref().and_then(single_message) {
                Some(message) => ApiError::Conflict(message),
                None => ApiError::Status(status),
            },
            _ => ApiError::Status(status),
        }
    }

    /// Messages to show the user: itemized for validation failures, the
    /// server's message for conflicts, the generic message otherwise.
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            ApiError::Validation(messages) => messages.clone(),
            ApiError::Conflict(message) => vec![message.clone()],
            _ => vec![GENERIC_ERROR_MESSAGE.to_string()],
        }
    }

    pub fn user_message(&self) -> String {
        self.user_messages().join(" ")
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Accepts `{"messages": [...]}`, `{"errors": [{"message": ...}]}`,
/// `{"errors": ["..."]}`, a bare list, or `{"message": "..."}`.
fn validation_messages(json: &Value) -> Vec<String> {
    let list = json
        .get("messages")
        .or_else(|| json.get("errors"))
        .or(Some(json))
        .and_then(Value::as_array);

    match list {
        Some(entries) => entries.iter().filter_map(entry_message).collect(),
        None => single_message(json).into_iter().collect(),
    }
}

fn single_message(json: &Value) -> Option<String> {
    json.get("message")
        .and_then(Value::as_str)
        .or_else(|| {
            json.get("messages")
                .and_then(Value::as_array)
                .and_then(|list| list.first())
                .and_then(Value::as_str)
        })
        .map(str::to_string)
}

fn entry_message(entry: &Value) -> Option<String> {
    entry
        .as_str()
        .or_else(|| entry.get("message").and_then(Value::as_str))
        .or_else(|| entry.get("defaultMessage").and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_list() {
        let err = ApiError::from_response(400, r#"{"messages":["Username is taken","Email is invalid"]}"#);
        assert_eq!(
            err,
            ApiError::Validation(vec!["Username is taken".into(), "Email is invalid".into()])
        );
        assert_eq!(err.user_messages().len(), 2);
    }

    #[test]
    fn test_validation_error_objects() {
        let err = ApiError::from_response(
            422,
            r#"{"errors":[{"field":"email","message":"must be a well-formed email address"}]}"#,
        );
        assert_eq!(
            err,
            ApiError::Validation(vec!["must be a well-formed email address".into()])
        );
    }

    #[test]
    fn test_validation_without_body_is_generic() {
        let err = ApiError::from_response(400, "");
        assert_eq!(err, ApiError::Status(400));
        assert_eq!(err.user_messages(), vec![GENERIC_ERROR_MESSAGE.to_string()]);
    }

    #[test]
    fn test_conflict_message() {
        let err = ApiError::from_response(409, r#"{"message":"Email already in use"}"#);
        assert_eq!(err, ApiError::Conflict("Email already in use".into()));
        assert_eq!(err.user_message(), "Email already in use");
    }

    #[test]
    fn test_other_statuses_are_generic() {
        for status in [401, 403, 404, 500, 503] {
            let err = ApiError::from_response(status, r#"{"message":"boom"}"#);
            assert_eq!(err, ApiError::Status(status));
            assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
        }
    }

    #[test]
    fn test_timeout_display() {
        let err = ApiError::Timeout(Duration::from_secs(60));
        assert_eq!(err.to_string(), "Request timed out after 60s");
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }
}
