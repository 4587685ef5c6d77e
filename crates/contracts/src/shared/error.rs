//! Error taxonomy shared by every screen.
//!
//! Validation errors never reach this type: they are collected per field in
//! [`crate::shared::validation::FieldErrors`] before any request is made.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...)
    #[error("Error de red: {0}")]
    Network(String),

    /// The server answered with a non-2xx status. `message` is the part
    /// meant for users; `body` is the response text as received.
    #[error("Error {status}: {message}")]
    Http { status: u16, message: String, body: String },

    /// The server rejected the record as a duplicate (409 or equivalent body)
    #[error("{0}")]
    Conflict(String),

    /// The response body did not match the expected shape
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),

    /// The request could not be built from local data
    #[error("{0}")]
    Validation(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Builds the error for a non-2xx response, keeping the server's message
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            message: extract_server_message(body),
            body: body.to_string(),
        }
    }

    /// True when the request itself failed rather than the server refusing it
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Conflict(_) => Some(409),
            _ => None,
        }
    }
}

/// Message carried by an error body.
///
/// The backend answers `{ "error": "Prefix: detail" }`; the detail after the
/// first colon is what users should read. Anything else is returned trimmed.
pub fn extract_server_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => match parsed.error.split_once(':') {
            Some((_, detail)) if !detail.trim().is_empty() => detail.trim().to_string(),
            _ => parsed.error.trim().to_string(),
        },
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message_from_error_body() {
        assert_eq!(
            extract_server_message(r#"{"error":"Validation error: usuario ya existe"}"#),
            "usuario ya existe"
        );
        assert_eq!(
            extract_server_message(r#"{"error":"sin detalle"}"#),
            "sin detalle"
        );
    }

    #[test]
    fn test_extract_message_from_plain_text() {
        assert_eq!(extract_server_message("  Internal error \n"), "Internal error");
    }

    #[test]
    fn test_from_response_keeps_status() {
        let err = ApiError::from_response(500, r#"{"error":"DB: caído"}"#);
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "Error 500: caído");
        assert!(!err.is_network());
    }

    #[test]
    fn test_from_response_keeps_raw_body() {
        let raw = r#"{"error":"Registro duplicado: el armazon ya existe"}"#;
        match ApiError::from_response(400, raw) {
            ApiError::Http { message, body, .. } => {
                assert_eq!(message, "el armazon ya existe");
                assert_eq!(body, raw);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
