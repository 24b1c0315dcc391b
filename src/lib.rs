//! jdis - JSON-RPC 2.0 Dispatch Kit
//!
//! This is the convenience crate that re-exports the jdis sub-crates as a
//! single dependency.
//!
//! # Architecture
//!
//! - **jdis-core**: envelope types, codec, error handling
//! - **jdis-server**: method registry, parameter accessors, dispatcher
//!
//! jdis implements the JSON-RPC 2.0 protocol at the object level and stops
//! there: some transport of your choosing feeds request text in and carries
//! response text out. Dispatch is synchronous; a frozen registry can be
//! shared between threads when its handlers allow it.
//!
//! # Quick Start
//!
//! ```rust
//! use jdis::{from_fn, params, Dispatcher, Method, MethodRegistry};
//! use serde_json::{json, Value};
//!
//! # fn main() -> jdis::Result<()> {
//! let registry = MethodRegistry::from_table(vec![
//!     Method::new("add", from_fn(|p: Option<&Value>| {
//!         let a = params::get_double(p, "a").map_err(|e| e.invalid_params("a"))?;
//!         let b = params::get_double(p, "b").map_err(|e| e.invalid_params("b"))?;
//!         Ok(json!(a + b))
//!     })),
//! ])?;
//!
//! let dispatcher = Dispatcher::new(registry);
//!
//! // A call carries an id and is answered.
//! let reply = dispatcher
//!     .dispatch(r#"{"jsonrpc":"2.0","method":"add","params":{"a":1,"b":2},"id":1}"#)?;
//! assert_eq!(reply.as_deref(), Some(r#"{"jsonrpc":"2.0","result":3.0,"id":1}"#));
//!
//! // A notification omits the id and the reply is suppressed.
//! let reply = dispatcher.dispatch(r#"{"jsonrpc":"2.0","method":"add","params":{"a":1,"b":2}}"#)?;
//! assert!(reply.is_none());
//! # Ok(())
//! # }
//! ```

pub use jdis_core as core;
pub use jdis_server as server;

// Convenience re-exports of the most commonly used items, so `jdis::` alone
// covers typical request building and dispatching.
pub use jdis_core::{
    codec, Error, Id, JsonRpcErrorData, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse,
    Result, JSONRPC_VERSION,
};
pub use jdis_server::{
    from_fn, from_typed_fn, params, Dispatcher, Handler, HandlerOutcome, Method, MethodRegistry,
    ParamError, RegistryBuilder,
};
