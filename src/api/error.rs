//! Client Error Types

use thiserror::Error;

/// Errors that can occur when calling the reservation API
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Reservation API unavailable at {0}")]
    Unavailable(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub(crate) fn from_transport(error: reqwest::Error, base_url: &str) -> Self {
        if error.is_timeout() {
            ClientError::Timeout
        } else if error.is_connect() {
            ClientError::Unavailable(base_url.to_string())
        } else {
            ClientError::Request(error)
        }
    }

    /// Message for the error banner: the server's own message when it sent
    /// one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status reported by the API, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let with_message = ClientError::Api {
            status: 409,
            message: Some("La mesa 4 ya existe".to_string()),
        };
        assert_eq!(with_message.user_message("Error al guardar la mesa"), "La mesa 4 ya existe");

        let without = ClientError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(without.user_message("Error al guardar la mesa"), "Error al guardar la mesa");
        assert_eq!(without.to_string(), "API error 500: no message");

        assert_eq!(ClientError::Timeout.user_message("x"), "x");
        assert!(ClientError::Api { status: 404, message: None }.is_not_found());
    }
}
