//! Transport-agnostic JSON-RPC 2.0 serving side
//!
//! This crate implements the serving half of the protocol without any I/O:
//! a frozen [`MethodRegistry`] maps method names to [`Handler`]s, and a
//! [`Dispatcher`] turns raw request text into raw response text. Some
//! transport outside this crate moves the strings; handlers read their
//! inputs through the [`params`] accessors or a typed adapter.
//!
//! Execution is fully synchronous. A dispatch call runs to completion on
//! the calling thread, and the registry is never mutated after
//! construction, so one dispatcher can be shared between threads whenever
//! the registered handlers themselves can.
//!
//! # Quick Start
//!
//! ```rust
//! use jdis_server::{from_fn, params, Dispatcher, Method, MethodRegistry};
//! use serde_json::{json, Value};
//!
//! # fn main() -> jdis_core::Result<()> {
//! let registry = MethodRegistry::from_table(vec![
//!     Method::new("add", from_fn(|p: Option<&Value>| {
//!         let a = params::get_double(p, "a").map_err(|e| e.invalid_params("a"))?;
//!         let b = params::get_double(p, "b").map_err(|e| e.invalid_params("b"))?;
//!         Ok(json!(a + b))
//!     })),
//! ])?;
//!
//! let dispatcher = Dispatcher::new(registry);
//! let reply = dispatcher
//!     .dispatch(r#"{"jsonrpc":"2.0","method":"add","params":{"a":1,"b":2},"id":1}"#)?;
//! assert_eq!(reply.as_deref(), Some(r#"{"jsonrpc":"2.0","result":3.0,"id":1}"#));
//! # Ok(())
//! # }
//! ```

mod dispatch;
mod handler;
pub mod params;
mod registry;

pub use dispatch::Dispatcher;
pub use handler::{from_fn, from_typed_fn, FnHandler, Handler, HandlerOutcome};
pub use params::{ParamError, ParamResult};
pub use registry::{Method, MethodRegistry, RegistryBuilder};
