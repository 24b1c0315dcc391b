//! Registry built from several independent method tables
//!
//! Each subsystem contributes its own table; the builder concatenates them
//! in call order into one frozen registry.

use jdis::{codec, from_fn, Dispatcher, JsonRpcRequest, Method, MethodRegistry};
use serde_json::{json, Value};

fn foo_table() -> Vec<Method> {
    vec![
        Method::new("foo.1", from_fn(|_: Option<&Value>| Ok(json!("foo1")))),
        Method::new("foo.2", from_fn(|_: Option<&Value>| Ok(json!("foo2")))),
    ]
}

fn bar_table() -> Vec<Method> {
    vec![
        Method::new("bar.1", from_fn(|_: Option<&Value>| Ok(json!("bar1")))),
        Method::new("bar.2", from_fn(|_: Option<&Value>| Ok(json!("bar2")))),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let registry = MethodRegistry::builder()
        .table(foo_table())
        .table(bar_table())
        .build()?;
    let dispatcher = Dispatcher::new(registry);

    for (method, id) in [("foo.1", 11i64), ("foo.2", 12), ("bar.1", 21), ("bar.2", 22)] {
        let request = JsonRpcRequest::new(method, None, id);
        let reply = dispatcher.dispatch(&codec::encode_request(&request)?)?;
        println!("{}", reply.expect("calls are always answered"));
    }

    Ok(())
}
