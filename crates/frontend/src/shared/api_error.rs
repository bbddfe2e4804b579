//! Error type for REST calls.

use gloo_net::http::Response;

/// Failure of a single API request.
///
/// Mutation paths surface `user_message` to the operator; the load path
/// only logs via `Display`.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status, when a response was received at all
    pub status: Option<u16>,
    /// Server-provided human-readable message, when the body carried one
    pub message: Option<String>,
    /// Transport-level description, for logs only
    pub detail: Option<String>,
}

impl ApiError {
    /// Request never produced a response (network failure, serialization)
    pub fn transport(detail: impl std::fmt::Display) -> Self {
        Self {
            status: None,
            message: None,
            detail: Some(detail.to_string()),
        }
    }

    /// No stored access token to attach to the request
    pub fn unauthenticated() -> Self {
        Self {
            status: None,
            message: None,
            detail: Some("not authenticated".to_string()),
        }
    }

    /// Build from a non-2xx response, pulling the conventional
    /// `{"message": ...}` field out of the body when present.
    pub async fn from_response(response: Response) -> Self {
        let status = response.status();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .as_ref()
            .and_then(extract_server_message);
        Self {
            status: Some(status),
            message,
            detail: None,
        }
    }

    /// Message to show the operator: the server's own wording when
    /// available, otherwise the caller's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.status, &self.message, &self.detail) {
            (Some(status), Some(message), _) => write!(f, "HTTP {}: {}", status, message),
            (Some(status), None, _) => write!(f, "HTTP {}", status),
            (None, _, Some(detail)) => write!(f, "{}", detail),
            _ => write!(f, "request failed"),
        }
    }
}

/// `{"message": "..."}` is the conventional location for human-readable
/// error text in the backend's failure bodies.
pub fn extract_server_message(body: &serde_json::Value) -> Option<String> {
    body.get("message")?.as_str().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_conventional_message_field() {
        let body = serde_json::json!({"message": "Lỗi xóa bài"});
        assert_eq!(
            extract_server_message(&body),
            Some("Lỗi xóa bài".to_string())
        );
    }

    #[test]
    fn missing_or_non_string_message_yields_none() {
        assert_eq!(extract_server_message(&serde_json::json!({})), None);
        assert_eq!(
            extract_server_message(&serde_json::json!({"message": 42})),
            None
        );
    }

    #[test]
    fn server_wording_wins_over_fallback() {
        let err = ApiError {
            status: Some(400),
            message: Some("Lỗi xóa bài".to_string()),
            detail: None,
        };
        assert_eq!(err.user_message("generic"), "Lỗi xóa bài");
    }

    #[test]
    fn fallback_applies_without_server_message() {
        let err = ApiError::transport("connection refused");
        assert_eq!(err.user_message("Lỗi xóa bài"), "Lỗi xóa bài");
        assert_eq!(err.to_string(), "connection refused");
    }
}
