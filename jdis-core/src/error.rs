//! Error types for jdis
//!
//! Two tiers of error live here:
//!
//! - [`Error`]: the library-level error returned by fallible jdis operations
//! - [`JsonRpcErrorData`]: the wire-format error object embedded in the
//!   `error` field of a response
//!
//! Protocol-tier failures (malformed JSON, bad envelopes, unknown methods)
//! use the reserved codes below and are built via the factory methods on
//! [`JsonRpcErrorData`]; application-tier errors are whatever handlers put in
//! their `Err` and pass through unmodified.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for jdis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parse error: invalid JSON was received.
pub const CODE_PARSE_ERROR: i32 = -32700;
/// Invalid request: the JSON sent is not a valid request object.
pub const CODE_INVALID_REQUEST: i32 = -32600;
/// Method not found: the method does not exist or is not available.
pub const CODE_METHOD_NOT_FOUND: i32 = -32601;
/// Invalid params: invalid method parameter(s).
pub const CODE_INVALID_PARAMS: i32 = -32602;
/// Internal error: internal JSON-RPC error.
pub const CODE_INTERNAL_ERROR: i32 = -32603;

/// Library-level error type
///
/// Every fallible jdis operation returns this through [`Result`]; there is no
/// out-of-band error signaling.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A JSON-RPC protocol error, already in wire shape
    #[error("JSON-RPC error: {0}")]
    JsonRpc(#[from] JsonRpcErrorData),

    /// Failure converting between Rust values and JSON text
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A registry was frozen with no methods registered
    #[error("registry contains no methods")]
    EmptyRegistry,
}

/// JSON-RPC 2.0 error object
///
/// The exact wire format of the `error` member of a response: a required
/// integer `code`, an optional `message`, and an optional structured `data`
/// payload. Codes `-32700` through `-32603` are reserved by JSON-RPC 2.0;
/// `-32000..=-32099` are open for server-defined errors.
///
/// # Examples
///
/// ```rust
/// use jdis_core::JsonRpcErrorData;
/// use serde_json::json;
///
/// let err = JsonRpcErrorData::method_not_found();
/// assert_eq!(err.code, -32601);
///
/// let custom = JsonRpcErrorData::with_data(
///     -32000,
///     "insufficient funds",
///     json!({"balance": 50, "required": 100}),
/// );
/// assert!(custom.data.is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcErrorData {
    /// Numeric error code
    pub code: i32,
    /// Short human-readable description, omitted from the wire when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Additional structured information, omitted from the wire when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcErrorData {
    /// Create an error with a code and message.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Create an error with a code only.
    pub fn from_code(code: i32) -> Self {
        Self {
            code,
            message: None,
            data: None,
        }
    }

    /// Create an error with a code, message and data payload.
    pub fn with_data(code: i32, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            code,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// Parse error (`-32700`): the request text was not valid JSON.
    pub fn parse_error() -> Self {
        Self::new(CODE_PARSE_ERROR, "parse error")
    }

    /// Invalid request (`-32600`): valid JSON, but not a valid request
    /// envelope.
    pub fn invalid_request() -> Self {
        Self::new(CODE_INVALID_REQUEST, "invalid request")
    }

    /// Method not found (`-32601`).
    pub fn method_not_found() -> Self {
        Self::new(CODE_METHOD_NOT_FOUND, "method not found")
    }

    /// Invalid params (`-32602`), with a caller-supplied reason. The
    /// recommended code for handlers rejecting their inputs.
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::new(CODE_INVALID_PARAMS, msg)
    }

    /// Internal error (`-32603`), with a caller-supplied reason.
    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::new(CODE_INTERNAL_ERROR, msg)
    }
}

impl fmt::Display for JsonRpcErrorData {
    /// Formats as `[code] message` for logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "[{}] {}", self.code, msg),
            None => write!(f, "[{}]", self.code),
        }
    }
}

impl std::error::Error for JsonRpcErrorData {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reserved_error_codes() {
        assert_eq!(JsonRpcErrorData::parse_error().code, -32700);
        assert_eq!(JsonRpcErrorData::invalid_request().code, -32600);
        assert_eq!(JsonRpcErrorData::method_not_found().code, -32601);
        assert_eq!(JsonRpcErrorData::invalid_params("x").code, -32602);
        assert_eq!(JsonRpcErrorData::internal_error("x").code, -32603);
    }

    #[test]
    fn dispatcher_error_messages() {
        assert_eq!(
            JsonRpcErrorData::parse_error().message.as_deref(),
            Some("parse error")
        );
        assert_eq!(
            JsonRpcErrorData::invalid_request().message.as_deref(),
            Some("invalid request")
        );
        assert_eq!(
            JsonRpcErrorData::method_not_found().message.as_deref(),
            Some("method not found")
        );
    }

    #[test]
    fn message_omitted_from_wire_when_absent() {
        let err = JsonRpcErrorData::from_code(-32000);
        let text = serde_json::to_string(&err).unwrap();
        assert_eq!(text, r#"{"code":-32000}"#);
    }

    #[test]
    fn error_with_data_round_trips() {
        let err = JsonRpcErrorData::with_data(-32000, "custom", json!({"key": "value"}));
        let text = serde_json::to_string(&err).unwrap();
        let back: JsonRpcErrorData = serde_json::from_str(&text).unwrap();
        assert_eq!(back.code, err.code);
        assert_eq!(back.message, err.message);
        assert_eq!(back.data, err.data);
    }

    #[test]
    fn display_formatting() {
        let err = JsonRpcErrorData::method_not_found();
        let shown = format!("{}", err);
        assert!(shown.contains("-32601"));
        assert!(shown.contains("method not found"));

        let bare = JsonRpcErrorData::from_code(-32099);
        assert_eq!(format!("{}", bare), "[-32099]");
    }

    #[test]
    fn library_error_display() {
        let err = Error::Serialization("bad value".into());
        assert!(format!("{}", err).contains("bad value"));
        assert!(format!("{}", Error::EmptyRegistry).contains("no methods"));
    }

    #[test]
    fn jsonrpc_error_converts_into_library_error() {
        let err: Error = JsonRpcErrorData::parse_error().into();
        match err {
            Error::JsonRpc(data) => assert_eq!(data.code, -32700),
            other => panic!("expected JsonRpc variant, got {other:?}"),
        }
    }
}
