//! Smallest useful dispatcher: a version query and an echo method

use jdis::{codec, from_fn, Dispatcher, Id, JsonRpcErrorData, JsonRpcRequest, Method, MethodRegistry};
use serde_json::{json, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let registry = MethodRegistry::from_table(vec![
        Method::new(
            "get-version",
            from_fn(|_: Option<&Value>| Ok(json!(env!("CARGO_PKG_VERSION")))),
        ),
        Method::new(
            "echo",
            from_fn(|p: Option<&Value>| match p {
                Some(value) => Ok(value.clone()),
                None => Err(JsonRpcErrorData::invalid_params("params required")),
            }),
        ),
    ])?;
    let dispatcher = Dispatcher::new(registry);

    let request = JsonRpcRequest::new("get-version", None, 42i64);
    let reply = dispatcher.dispatch(&codec::encode_request(&request)?)?;
    println!("{}", reply.expect("calls are always answered"));

    let request = JsonRpcRequest::new("echo", Some(json!("foo")), Id::from("bar"));
    let reply = dispatcher.dispatch(&codec::encode_request(&request)?)?;
    println!("{}", reply.expect("calls are always answered"));

    Ok(())
}
