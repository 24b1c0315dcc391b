//! Request dispatcher: the parse/validate/resolve/invoke/respond pipeline
//!
//! [`Dispatcher::dispatch`] takes raw request text from a transport and
//! returns raw response text for it, or nothing when the request was a
//! notification. One call runs to completion before returning; the
//! dispatcher holds no state besides the frozen registry and never mutates
//! it, so a single dispatcher may serve many threads at once as long as the
//! individual handlers tolerate that.
//!
//! Protocol-tier failures are answered, not raised:
//!
//! - unparseable text → `-32700` with a null id (a parse failure can never
//!   be classed as a notification, since the id cannot be recovered)
//! - a bad envelope → `-32600` with a null id
//! - an unknown method → `-32601`, suppressed when the request had no id
//!
//! Batch arrays are not recognized; an array is simply not a request object
//! and fails envelope validation.

use crate::registry::MethodRegistry;
use jdis_core::{codec, Id, JsonRpcErrorData, JsonRpcResponse, Result, JSONRPC_VERSION};
use serde_json::Value;
use tracing::{debug, warn};

/// Validated request envelope, borrowing from the parsed request tree.
struct Envelope<'a> {
    method: &'a str,
    params: Option<&'a Value>,
    /// `None` marks a notification. An explicit `"id":null` is a call and
    /// is answered with a null id.
    id: Option<Id>,
}

fn validate_envelope(request: &Value) -> std::result::Result<Envelope<'_>, JsonRpcErrorData> {
    let obj = request
        .as_object()
        .ok_or_else(JsonRpcErrorData::invalid_request)?;

    match obj.get("jsonrpc") {
        Some(Value::String(version)) if version == JSONRPC_VERSION => {}
        _ => return Err(JsonRpcErrorData::invalid_request()),
    }

    let method = match obj.get("method") {
        Some(Value::String(name)) if !name.is_empty() => name.as_str(),
        _ => return Err(JsonRpcErrorData::invalid_request()),
    };

    // Presence of the id field is what separates a call from a
    // notification. An id outside the number|string|null wire grammar
    // cannot be echoed back reliably, so the envelope is rejected.
    let id = match obj.get("id") {
        None => None,
        Some(value) => {
            Some(Id::from_value(value).ok_or_else(JsonRpcErrorData::invalid_request)?)
        }
    };

    Ok(Envelope {
        method,
        params: obj.get("params"),
        id,
    })
}

/// Synchronous JSON-RPC request dispatcher
///
/// # Examples
///
/// ```rust
/// use jdis_server::{from_fn, Dispatcher, Method, MethodRegistry};
/// use serde_json::Value;
///
/// # fn main() -> jdis_core::Result<()> {
/// let registry = MethodRegistry::from_table(vec![
///     Method::new("ping", from_fn(|_: Option<&Value>| Ok(serde_json::json!("pong")))),
/// ])?;
/// let dispatcher = Dispatcher::new(registry);
///
/// let reply = dispatcher.dispatch(r#"{"jsonrpc":"2.0","method":"ping","id":1}"#)?;
/// assert_eq!(reply.as_deref(), Some(r#"{"jsonrpc":"2.0","result":"pong","id":1}"#));
///
/// // Notifications produce no reply at all.
/// let reply = dispatcher.dispatch(r#"{"jsonrpc":"2.0","method":"ping"}"#)?;
/// assert_eq!(reply, None);
/// # Ok(())
/// # }
/// ```
pub struct Dispatcher {
    registry: MethodRegistry,
}

impl Dispatcher {
    /// Create a dispatcher over a frozen registry.
    pub fn new(registry: MethodRegistry) -> Self {
        Self { registry }
    }

    /// The registry this dispatcher resolves methods against.
    pub fn registry(&self) -> &MethodRegistry {
        &self.registry
    }

    /// Handle one request.
    ///
    /// Returns `Ok(Some(text))` with the serialized response, or `Ok(None)`
    /// when the request was a notification and the reply is suppressed.
    /// `Ok(None)` is the only no-body marker; an emitted response is never
    /// empty. `Err` is reserved for response serialization failure.
    pub fn dispatch(&self, request_text: &str) -> Result<Option<String>> {
        let request: Value = match serde_json::from_str(request_text) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "request text is not valid JSON");
                return emit(JsonRpcResponse::error(
                    JsonRpcErrorData::parse_error(),
                    Id::Null,
                ));
            }
        };

        let envelope = match validate_envelope(&request) {
            Ok(envelope) => envelope,
            Err(error) => {
                warn!("request envelope is invalid");
                return emit(JsonRpcResponse::error(error, Id::Null));
            }
        };

        debug!(method = envelope.method, notification = envelope.id.is_none(), "dispatching");

        let method = match self.registry.lookup(envelope.method) {
            Some(method) => method,
            None => {
                debug!(method = envelope.method, "method not found");
                return match envelope.id {
                    Some(id) => emit(JsonRpcResponse::error(
                        JsonRpcErrorData::method_not_found(),
                        id,
                    )),
                    None => Ok(None),
                };
            }
        };

        // Handlers run for notifications too; only the reply is suppressed.
        let outcome = method.handler().handle(envelope.params);

        let id = match envelope.id {
            Some(id) => id,
            None => {
                debug!(method = envelope.method, "notification, reply suppressed");
                return Ok(None);
            }
        };

        match outcome {
            Ok(result) => emit(JsonRpcResponse::success(result, id)),
            Err(error) => emit(JsonRpcResponse::error(error, id)),
        }
    }
}

fn emit(response: JsonRpcResponse) -> Result<Option<String>> {
    codec::encode_response(&response).map(Some)
}
