use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Trait for structured errors that an HTTP layer can render
///
/// Implemented by [`RestError`](crate::RestError). Handlers depend on
/// this capability set rather than the concrete representation, keeping
/// the value decoupled from any server framework. The combined
/// human-readable rendering is the `Display` impl required by the
/// `std::error::Error` supertrait.
pub trait RestErr: std::error::Error {
    /// Message safe to expose to API consumers
    fn message(&self) -> &str;

    /// Numeric status code carried on the wire
    fn status(&self) -> u16;

    /// Underlying causes, empty when none were recorded
    fn causes(&self) -> &[Value];

    /// Typed status code for the consuming HTTP layer
    ///
    /// Falls back to 500 when the stored status is not a valid HTTP
    /// status code.
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Failures of the encode/decode operations themselves
///
/// Distinct from [`RestError`](crate::RestError), which is the value
/// being modeled, not a failure of this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input bytes are not valid JSON or not shaped as a rest error
    ///
    /// The underlying parser diagnostic is deliberately not surfaced.
    #[error("invalid json")]
    InvalidPayload,

    /// Value could not be encoded to JSON
    #[error("serialization failed")]
    Serialize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RestError;

    #[test]
    fn status_code_maps_known_statuses() {
        assert_eq!(RestError::bad_request("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(RestError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(RestError::unauthorized("x").status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn status_code_falls_back_to_500_for_out_of_range() {
        let err = RestError::new("weird", 7, "weird_status", Vec::new());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_payload_message_is_fixed() {
        assert_eq!(ParseError::InvalidPayload.to_string(), "invalid json");
    }
}
