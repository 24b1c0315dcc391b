//! Core JSON-RPC 2.0 types and codec for jdis
//!
//! This crate provides the foundational pieces for working with JSON-RPC 2.0
//! messages at the object level:
//!
//! - **Types**: request, notification and response envelopes plus the wire
//!   error object
//! - **Codec**: serialization and deserialization helpers for those envelopes
//! - **Error handling**: the library error type and the reserved error codes
//!
//! The crate is transport-agnostic. It builds and validates message objects
//! and turns them into wire text, but never touches a socket; `jdis-server`
//! layers method registration and dispatch on top of it.
//!
//! # Example
//!
//! ```rust
//! use jdis_core::{codec, Id, JsonRpcRequest};
//!
//! let request = JsonRpcRequest::new("add", Some(serde_json::json!({"a": 5, "b": 3})), 1i64);
//! let text = codec::encode_request(&request).unwrap();
//! assert!(text.contains("\"method\":\"add\""));
//! ```

pub mod codec;
pub mod error;
pub mod types;

pub use error::{Error, JsonRpcErrorData, Result};
pub use types::{Id, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
