use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ParseError, RestErr};

/// Machine-readable tags carried in the `ErrError` wire field
pub mod kind {
    /// Tag for 400 responses
    pub const BAD_REQUEST: &str = "bad_request";
    /// Tag for 404 responses
    pub const NOT_FOUND: &str = "not_found";
    /// Tag for 401 responses
    pub const UNAUTHORIZED: &str = "unauthorized";
    /// Tag for 500 responses
    pub const INTERNAL_SERVER_ERROR: &str = "internal_server_error";
    /// Malformed 500 tag emitted by legacy producers
    ///
    /// Kept verbatim for consumers that match on the old bytes. New
    /// code should use [`INTERNAL_SERVER_ERROR`].
    pub const INTERNAL_SERVER_ERROR_LEGACY: &str = "internal_server ErrError";
}

/// Structured API error value
///
/// Immutable once constructed. Serializes to the fixed wire shape
/// consumers parse:
///
/// ```json
/// {
///   "ErrMessage": "<string>",
///   "ErrStatus": <integer>,
///   "ErrError": "<string>",
///   "ErrCauses": [<any>, ...]
/// }
/// ```
///
/// `ErrCauses` is omitted when empty; `null` and a missing key both
/// deserialize to no causes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestError {
    /// Human-readable description of the error
    #[serde(rename = "ErrMessage", default)]
    message: String,
    /// Numeric status code, mirroring HTTP status semantics
    #[serde(rename = "ErrStatus", default)]
    status: u16,
    /// Machine-readable kind tag (e.g. `not_found`)
    #[serde(rename = "ErrError", default)]
    kind: String,
    /// Underlying causes, typically text descriptions
    #[serde(
        rename = "ErrCauses",
        default,
        deserialize_with = "causes_from_wire",
        skip_serializing_if = "Vec::is_empty"
    )]
    causes: Vec<Value>,
}

impl RestError {
    /// Create an error with all four fields supplied verbatim
    ///
    /// No validation is performed; named constructors below fix the
    /// status and kind for the common HTTP error classes.
    pub fn new(
        message: impl Into<String>,
        status: u16,
        kind: impl Into<String>,
        causes: Vec<Value>,
    ) -> Self {
        Self {
            message: message.into(),
            status,
            kind: kind.into(),
            causes,
        }
    }

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST.as_u16(), kind::BAD_REQUEST, Vec::new())
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::NOT_FOUND.as_u16(), kind::NOT_FOUND, Vec::new())
    }

    /// 401 Unauthorized
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::UNAUTHORIZED.as_u16(), kind::UNAUTHORIZED, Vec::new())
    }

    /// 500 Internal Server Error
    ///
    /// When a cause is given, its textual description becomes the sole
    /// element of `causes`.
    pub fn internal_server_error(
        message: impl Into<String>,
        cause: Option<&dyn std::error::Error>,
    ) -> Self {
        let causes = cause.map_or_else(Vec::new, |e| vec![Value::String(e.to_string())]);
        Self::new(
            message,
            StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            kind::INTERNAL_SERVER_ERROR,
            causes,
        )
    }

    /// 500 Internal Server Error carrying the legacy kind tag
    ///
    /// Only for byte-for-byte compatibility with consumers that match
    /// on [`kind::INTERNAL_SERVER_ERROR_LEGACY`].
    pub fn internal_server_error_legacy(
        message: impl Into<String>,
        cause: Option<&dyn std::error::Error>,
    ) -> Self {
        let mut err = Self::internal_server_error(message, cause);
        err.kind = kind::INTERNAL_SERVER_ERROR_LEGACY.to_owned();
        err
    }

    /// Append a cause, consuming and returning the value
    #[must_use]
    pub fn with_cause(mut self, cause: Value) -> Self {
        self.causes.push(cause);
        self
    }

    /// Machine-readable kind tag
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Decode an error from its JSON byte payload
    ///
    /// Unknown fields are ignored; missing fields take their zero
    /// value. Malformed or structurally incompatible input fails with
    /// [`ParseError::InvalidPayload`] without surfacing the parser
    /// diagnostic.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        serde_json::from_slice(bytes).map_err(|_| ParseError::InvalidPayload)
    }

    /// Encode the error to its JSON byte payload
    pub fn to_bytes(&self) -> Result<Vec<u8>, ParseError> {
        serde_json::to_vec(self).map_err(|_| ParseError::Serialize)
    }
}

/// Accepts `null` as an empty causes list
fn causes_from_wire<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl fmt::Display for RestError {
    /// Fixed combined rendering, part of the observable contract:
    /// `ErrMessage: <message> - ErrStatus: <status> - ErrError: <kind> - ErrCauses: <causes> `
    /// with causes rendered as a compact JSON array (`[]` when empty)
    /// and a trailing space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let causes = serde_json::to_string(&self.causes).unwrap_or_else(|_| "[]".to_owned());
        write!(
            f,
            "ErrMessage: {} - ErrStatus: {} - ErrError: {} - ErrCauses: {causes} ",
            self.message, self.status, self.kind
        )
    }
}

impl std::error::Error for RestError {}

impl RestErr for RestError {
    fn message(&self) -> &str {
        &self.message
    }

    fn status(&self) -> u16 {
        self.status
    }

    fn causes(&self) -> &[Value] {
        &self.causes
    }
}
