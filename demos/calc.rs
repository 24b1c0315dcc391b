//! Calculator demo: two arithmetic methods behind a dispatcher
//!
//! Run with `RUST_LOG=debug` to watch the dispatcher's diagnostics.

use jdis::{codec, from_fn, from_typed_fn, params, Dispatcher, JsonRpcRequest, Method, MethodRegistry};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Deserialize)]
struct MultiplyParams {
    a: f64,
    b: f64,
}

#[derive(Serialize)]
struct MultiplyResult {
    product: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // "add" reads its params field by field, "multiply" deserializes a
    // typed struct; both styles end up behind the same Handler trait.
    let registry = MethodRegistry::from_table(vec![
        Method::new(
            "add",
            from_fn(|p: Option<&Value>| {
                let a = params::get_double(p, "a").map_err(|e| e.invalid_params("a"))?;
                let b = params::get_double(p, "b").map_err(|e| e.invalid_params("b"))?;
                Ok(json!(a + b))
            }),
        ),
        Method::new(
            "multiply",
            from_typed_fn(|p: MultiplyParams| Ok(MultiplyResult { product: p.a * p.b })),
        ),
    ])?;
    let dispatcher = Dispatcher::new(registry);

    let request = JsonRpcRequest::new("add", Some(json!({"a": 24.6, "b": 17.4})), 1i64);
    let reply = dispatcher.dispatch(&codec::encode_request(&request)?)?;
    println!("{}", reply.expect("calls are always answered"));

    let request = JsonRpcRequest::new("multiply", Some(json!({"a": 24.6, "b": 17.4})), 2i64);
    let reply = dispatcher.dispatch(&codec::encode_request(&request)?)?;
    println!("{}", reply.expect("calls are always answered"));

    Ok(())
}
