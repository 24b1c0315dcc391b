//! Handler traits and adapters for JSON-RPC methods
//!
//! A [`Handler`] implements one RPC method. It receives the request's
//! `params` as a borrowed, possibly-absent JSON value and must return
//! exactly one of a result or a wire error; [`HandlerOutcome`] makes any
//! other shape unrepresentable.
//!
//! Handlers are usually created from closures:
//!
//! - [`from_fn`] wraps a closure working on raw JSON values
//! - [`from_typed_fn`] wraps a closure taking a deserialized parameter
//!   struct and returning a serializable result
//!
//! # Examples
//!
//! ```rust
//! use jdis_server::from_fn;
//! use serde_json::Value;
//!
//! let handler = from_fn(|params: Option<&Value>| {
//!     Ok(serde_json::json!({"echo": params}))
//! });
//! ```

use jdis_core::JsonRpcErrorData;
use serde_json::Value;

/// Outcome of one handler invocation: a result value to embed in a success
/// response, or a wire error to embed in an error response.
pub type HandlerOutcome = std::result::Result<Value, JsonRpcErrorData>;

/// Trait for JSON-RPC method handlers
///
/// The `params` argument is a read-only borrow of the request's `params`
/// member, valid only for the duration of the call; `None` means the request
/// carried no `params` field. The returned value is moved into the response
/// and released after serialization.
///
/// Handlers must be `Send + Sync`: a frozen registry may be shared across
/// threads, and the dispatcher offers no locking between invocations.
pub trait Handler: Send + Sync {
    /// Handle one invocation of the method.
    fn handle(&self, params: Option<&Value>) -> HandlerOutcome;
}

/// Adapter implementing [`Handler`] for a plain closure.
pub struct FnHandler<F>
where
    F: Fn(Option<&Value>) -> HandlerOutcome + Send + Sync,
{
    func: F,
}

impl<F> FnHandler<F>
where
    F: Fn(Option<&Value>) -> HandlerOutcome + Send + Sync,
{
    /// Wrap a closure. Usually reached through [`from_fn`].
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Handler for FnHandler<F>
where
    F: Fn(Option<&Value>) -> HandlerOutcome + Send + Sync,
{
    fn handle(&self, params: Option<&Value>) -> HandlerOutcome {
        (self.func)(params)
    }
}

/// Create a handler from a closure over raw JSON values.
///
/// # Examples
///
/// ```rust
/// use jdis_core::JsonRpcErrorData;
/// use jdis_server::from_fn;
/// use serde_json::Value;
///
/// let handler = from_fn(|params: Option<&Value>| match params {
///     Some(p) => Ok(p.clone()),
///     None => Err(JsonRpcErrorData::invalid_params("params required")),
/// });
/// ```
pub fn from_fn<F>(func: F) -> Box<dyn Handler>
where
    F: Fn(Option<&Value>) -> HandlerOutcome + Send + Sync + 'static,
{
    Box::new(FnHandler::new(func))
}

/// Create a handler from a closure with typed parameters and result.
///
/// The request params are deserialized into `P` before the closure runs and
/// the closure's result is serialized back into a JSON value. An absent
/// `params` member deserializes from JSON null, which succeeds for types
/// with optional fields. Deserialization failures surface as invalid params
/// (`-32602`); result serialization failures as internal error (`-32603`).
///
/// # Examples
///
/// ```rust
/// use jdis_server::from_typed_fn;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Deserialize)]
/// struct AddParams {
///     a: f64,
///     b: f64,
/// }
///
/// #[derive(Serialize)]
/// struct AddResult {
///     sum: f64,
/// }
///
/// let handler = from_typed_fn(|p: AddParams| Ok(AddResult { sum: p.a + p.b }));
/// ```
pub fn from_typed_fn<P, R, F>(func: F) -> Box<dyn Handler>
where
    P: serde::de::DeserializeOwned + 'static,
    R: serde::Serialize + 'static,
    F: Fn(P) -> std::result::Result<R, JsonRpcErrorData> + Send + Sync + 'static,
{
    from_fn(move |params: Option<&Value>| {
        let raw = params.cloned().unwrap_or(Value::Null);
        let typed: P = serde_json::from_value(raw)
            .map_err(|e| JsonRpcErrorData::invalid_params(e.to_string()))?;
        let result = func(typed)?;
        serde_json::to_value(result).map_err(|e| JsonRpcErrorData::internal_error(e.to_string()))
    })
}
