//! Serialization helpers for JSON-RPC messages
//!
//! Thin wrappers over serde_json that map failures onto jdis error types:
//! unparseable request text becomes the wire-level parse error (`-32700`),
//! encoding failures become [`Error::Serialization`].
//!
//! # Examples
//!
//! ```rust
//! use jdis_core::{codec, Id, JsonRpcRequest};
//!
//! let request = JsonRpcRequest::new("ping", None, Id::Null);
//! let text = codec::encode_request(&request).unwrap();
//! assert_eq!(text, r#"{"jsonrpc":"2.0","method":"ping","id":null}"#);
//! ```

use crate::error::{Error, JsonRpcErrorData, Result};
use crate::types::{JsonRpcNotification, JsonRpcRequest, JsonRpcResponse};
use serde::{Deserialize, Serialize};

/// Encode any serializable message to compact JSON text.
pub fn encode<T: Serialize>(msg: &T) -> Result<String> {
    serde_json::to_string(msg).map_err(|e| Error::Serialization(e.to_string()))
}

/// Encode a request to wire text.
pub fn encode_request(req: &JsonRpcRequest) -> Result<String> {
    encode(req)
}

/// Encode a notification to wire text.
pub fn encode_notification(notif: &JsonRpcNotification) -> Result<String> {
    encode(notif)
}

/// Encode a response to wire text.
pub fn encode_response(resp: &JsonRpcResponse) -> Result<String> {
    encode(resp)
}

/// Parse request text into a JSON value tree.
///
/// Failure means the text was not valid JSON at all and maps to the
/// `-32700` parse error, wrapped as [`Error::JsonRpc`]. Envelope
/// validation is a separate, later step.
pub fn parse(text: &str) -> Result<serde_json::Value> {
    serde_json::from_str(text).map_err(|_| Error::JsonRpc(JsonRpcErrorData::parse_error()))
}

/// Decode wire text directly into a specific message type.
pub fn decode_as<'de, T: Deserialize<'de>>(text: &'de str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| Error::Serialization(e.to_string()))
}

/// Decode wire text into a response.
pub fn decode_response(text: &str) -> Result<JsonRpcResponse> {
    decode_as(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Id;
    use serde_json::json;

    #[test]
    fn encode_decode_request_round_trip() {
        let req = JsonRpcRequest::new("add", Some(json!({"a": 1, "b": 2})), 9i64);
        let text = encode_request(&req).unwrap();
        let back: JsonRpcRequest = decode_as(&text).unwrap();
        assert_eq!(back.method, "add");
        assert_eq!(back.id, Id::from(9i64));
        assert_eq!(back.params, Some(json!({"a": 1, "b": 2})));
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let err = parse("{not json").unwrap_err();
        match err {
            Error::JsonRpc(data) => assert_eq!(data.code, -32700),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn parse_accepts_any_json_value() {
        assert!(parse("[1,2,3]").unwrap().is_array());
        assert!(parse("\"text\"").unwrap().is_string());
    }

    #[test]
    fn decode_response_success() {
        let text = r#"{"jsonrpc":"2.0","result":42,"id":1}"#;
        let resp = decode_response(text).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.result, Some(json!(42)));
    }

    #[test]
    fn decode_response_error() {
        let text = r#"{"jsonrpc":"2.0","error":{"code":-32601,"message":"method not found"},"id":5}"#;
        let resp = decode_response(text).unwrap();
        assert!(resp.is_error());
        assert_eq!(resp.error.unwrap().code, -32601);
        assert_eq!(resp.id, Id::from(5i64));
    }
}
