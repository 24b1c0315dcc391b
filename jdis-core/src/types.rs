//! JSON-RPC 2.0 envelope types
//!
//! Implements the message objects from the JSON-RPC 2.0 specification
//! (https://www.jsonrpc.org/specification):
//!
//! 1. **Request**: a call that expects a response, correlated by `id`
//! 2. **Notification**: a call with no `id` field and no response
//! 3. **Response**: the outcome of a request, carrying exactly one of
//!    `result` or `error`
//!
//! The request/notification split is load-bearing: on the wire, *presence*
//! of the `id` field decides whether a reply is owed. A request whose caller
//! supplied no id still serializes `"id":null`; only a [`JsonRpcNotification`]
//! omits the field entirely.

use crate::error::JsonRpcErrorData;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Protocol version string carried in every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request ID
///
/// An id may be a number, a string, or null. Numbers are kept as
/// [`serde_json::Number`] so fractional and full-range unsigned ids
/// round-trip unchanged.
///
/// # Examples
///
/// ```rust
/// use jdis_core::Id;
///
/// let id: Id = 42i64.into();
/// assert_eq!(id.to_string(), "42");
/// assert_eq!(Id::from("req-7").to_string(), "\"req-7\"");
/// assert_eq!(Id::Null.to_string(), "null");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// Numeric identifier
    Number(serde_json::Number),
    /// String identifier, e.g. a UUID or correlation token
    String(String),
    /// Explicit null. Legal, but makes correlation impossible; the
    /// dispatcher also uses it when no id could be recovered.
    Null,
}

impl Id {
    /// Convert a raw JSON value into an id.
    ///
    /// Returns `None` for values outside the wire grammar for ids
    /// (objects, arrays, booleans).
    pub fn from_value(value: &serde_json::Value) -> Option<Id> {
        match value {
            serde_json::Value::Null => Some(Id::Null),
            serde_json::Value::Number(n) => Some(Id::Number(n.clone())),
            serde_json::Value::String(s) => Some(Id::String(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Id {
    /// Formats the id in its JSON representation: strings quoted, numbers
    /// as-is, null as `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::String(s) => write!(f, "\"{}\"", s),
            Id::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(serde_json::Number::from(n))
    }
}

impl From<u64> for Id {
    fn from(n: u64) -> Self {
        Id::Number(serde_json::Number::from(n))
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::String(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::String(s)
    }
}

/// JSON-RPC 2.0 request message
///
/// A request must carry `jsonrpc: "2.0"` and a method name, and may carry
/// `params`. The `id` field is always serialized, as [`Id::Null`] when the
/// caller has none; use [`JsonRpcNotification`] for a message that omits the
/// field and expects no reply.
///
/// # Examples
///
/// ```rust
/// use jdis_core::{Id, JsonRpcRequest};
/// use serde_json::json;
///
/// let req = JsonRpcRequest::new("subtract", Some(json!({"minuend": 42})), 1i64);
/// assert_eq!(req.jsonrpc, "2.0");
///
/// // No id supplied: the field is still emitted as null on the wire.
/// let req = JsonRpcRequest::new("ping", None, Id::Null);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, always "2.0"
    pub jsonrpc: String,
    /// Name of the method to invoke
    pub method: String,
    /// Optional parameters, omitted from the wire when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
    /// Correlation id; serialized even when null
    pub id: Id,
}

impl JsonRpcRequest {
    /// Create a request. The `jsonrpc` field is filled in automatically.
    pub fn new(
        method: impl Into<String>,
        params: Option<serde_json::Value>,
        id: impl Into<Id>,
    ) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id: id.into(),
        }
    }
}

/// JSON-RPC 2.0 notification message
///
/// A notification is a request without an `id` field. The receiver must not
/// reply to it, even on error.
///
/// # Examples
///
/// ```rust
/// use jdis_core::JsonRpcNotification;
/// use serde_json::json;
///
/// let notif = JsonRpcNotification::new("status.update", Some(json!({"status": "online"})));
/// assert_eq!(notif.method, "status.update");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    /// Protocol version, always "2.0"
    pub jsonrpc: String,
    /// Name of the method or event
    pub method: String,
    /// Optional parameters, omitted from the wire when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl JsonRpcNotification {
    /// Create a notification. The `jsonrpc` field is filled in automatically.
    pub fn new(method: impl Into<String>, params: Option<serde_json::Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC 2.0 response message
///
/// Carries exactly one of `result` or `error`, plus the id of the request it
/// answers ([`Id::Null`] when the request id could not be recovered). The
/// mutual exclusion is enforced by the [`success`](JsonRpcResponse::success)
/// and [`error`](JsonRpcResponse::error) constructors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version, always "2.0"
    pub jsonrpc: String,
    /// Result value, present only on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error object, present only on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcErrorData>,
    /// Id of the request being answered
    pub id: Id,
}

impl JsonRpcResponse {
    /// Create a success response wrapping `result`.
    pub fn success(result: serde_json::Value, id: Id) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response wrapping `error`.
    pub fn error(error: JsonRpcErrorData, id: Id) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }

    /// True if the response carries a result.
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }

    /// True if the response carries an error.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_display() {
        assert_eq!(Id::from("test").to_string(), "\"test\"");
        assert_eq!(Id::from(42i64).to_string(), "42");
        assert_eq!(Id::Null.to_string(), "null");
    }

    #[test]
    fn id_from_value() {
        assert_eq!(Id::from_value(&json!(7)), Some(Id::from(7i64)));
        assert_eq!(Id::from_value(&json!("x")), Some(Id::from("x")));
        assert_eq!(Id::from_value(&json!(null)), Some(Id::Null));
        assert_eq!(Id::from_value(&json!([1])), None);
        assert_eq!(Id::from_value(&json!({"a": 1})), None);
        assert_eq!(Id::from_value(&json!(true)), None);
    }

    #[test]
    fn id_fractional_number_round_trips() {
        let id: Id = serde_json::from_str("1.5").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "1.5");
    }

    #[test]
    fn request_serialization_emits_null_id() {
        let req = JsonRpcRequest::new("test", None, Id::Null);
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"jsonrpc":"2.0","method":"test","id":null}"#);
    }

    #[test]
    fn request_serialization_with_params() {
        let req = JsonRpcRequest::new("test", Some(json!({"a": 1})), 1i64);
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"jsonrpc\":\"2.0\""));
        assert!(json.contains("\"params\":{\"a\":1}"));
        assert!(json.contains("\"id\":1"));
    }

    #[test]
    fn notification_serialization_omits_id() {
        let notif = JsonRpcNotification::new("notify", None);
        let json = serde_json::to_string(&notif).unwrap();
        assert!(json.contains("\"method\":\"notify\""));
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn response_success() {
        let resp = JsonRpcResponse::success(json!({"status": "ok"}), Id::from(1i64));
        assert!(resp.is_success());
        assert!(!resp.is_error());
    }

    #[test]
    fn response_error() {
        let resp = JsonRpcResponse::error(
            JsonRpcErrorData::internal_error("boom"),
            Id::from(1i64),
        );
        assert!(!resp.is_success());
        assert!(resp.is_error());
    }
}
