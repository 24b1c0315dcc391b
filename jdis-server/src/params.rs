//! Typed, range-checked parameter extraction
//!
//! Handlers receive their inputs as an opaque, possibly-absent JSON value.
//! The accessors here pull scalar fields out of that container with strict
//! type checks: no coercion between numbers, booleans and strings.
//!
//! An absent container, a null container, or a container that is not an
//! object all read as "field not found" ([`ParamError::Missing`]); they are
//! never a distinct error.
//!
//! Integer reads go through the floating domain first: the range is checked
//! on the raw numeric value, then integrality. An out-of-range non-integer
//! therefore reports [`ParamError::OutOfRange`], not
//! [`ParamError::NotInteger`].
//!
//! # Examples
//!
//! ```rust
//! use jdis_server::params;
//! use serde_json::json;
//!
//! let p = json!({"count": 3, "label": "xyz"});
//! assert_eq!(params::get_int_range(Some(&p), "count", 0, 10), Ok(3));
//! assert_eq!(params::get_string(Some(&p), "label"), Ok("xyz".to_string()));
//! ```

use jdis_core::JsonRpcErrorData;
use serde_json::Value;
use thiserror::Error;

/// Outcome of a failed parameter read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamError {
    /// The field is absent, or there is no parameter container at all
    #[error("missing")]
    Missing,
    /// The field exists but has the wrong JSON type
    #[error("wrong type")]
    WrongType,
    /// The field is numeric but not mathematically integral
    #[error("not an integer")]
    NotInteger,
    /// The field is numeric but outside the requested bounds
    #[error("out of range")]
    OutOfRange,
}

impl ParamError {
    /// Wrap this failure as the `-32602` wire error for the named parameter,
    /// ready to return from a handler.
    pub fn invalid_params(self, name: &str) -> JsonRpcErrorData {
        JsonRpcErrorData::invalid_params(format!("invalid param '{}': {}", name, self))
    }
}

/// Result type for parameter reads.
pub type ParamResult<T> = std::result::Result<T, ParamError>;

fn field<'a>(params: Option<&'a Value>, name: &str) -> ParamResult<&'a Value> {
    params.and_then(|p| p.get(name)).ok_or(ParamError::Missing)
}

/// Read a numeric field as a double.
pub fn get_double(params: Option<&Value>, name: &str) -> ParamResult<f64> {
    field(params, name)?.as_f64().ok_or(ParamError::WrongType)
}

/// Read a numeric field as a double, requiring `min <= value <= max`.
pub fn get_double_range(
    params: Option<&Value>,
    name: &str,
    min: f64,
    max: f64,
) -> ParamResult<f64> {
    let value = get_double(params, name)?;
    if value < min || value > max {
        return Err(ParamError::OutOfRange);
    }
    Ok(value)
}

/// Read an integral numeric field over the full representable range.
pub fn get_int(params: Option<&Value>, name: &str) -> ParamResult<i64> {
    get_int_range(params, name, i64::MIN, i64::MAX)
}

/// Read an integral numeric field, requiring `min <= value <= max`.
///
/// Delegates to [`get_double_range`] over the same bounds, then requires the
/// value to be mathematically integral. The range check runs first.
pub fn get_int_range(params: Option<&Value>, name: &str, min: i64, max: i64) -> ParamResult<i64> {
    let value = get_double_range(params, name, min as f64, max as f64)?;
    if value.floor() != value {
        return Err(ParamError::NotInteger);
    }
    Ok(value as i64)
}

/// Read a boolean field. Numeric and string values are not coerced.
pub fn get_bool(params: Option<&Value>, name: &str) -> ParamResult<bool> {
    field(params, name)?.as_bool().ok_or(ParamError::WrongType)
}

/// Read a string field as a newly owned copy, independent of the parameter
/// container's lifetime.
pub fn get_string(params: Option<&Value>, name: &str) -> ParamResult<String> {
    field(params, name)?
        .as_str()
        .map(|s| s.to_owned())
        .ok_or(ParamError::WrongType)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_container_is_missing() {
        assert_eq!(get_double(None, "x"), Err(ParamError::Missing));
        assert_eq!(get_bool(None, "x"), Err(ParamError::Missing));
        assert_eq!(get_string(None, "x"), Err(ParamError::Missing));
    }

    #[test]
    fn null_or_non_object_container_is_missing() {
        let null = json!(null);
        assert_eq!(get_double(Some(&null), "x"), Err(ParamError::Missing));
        let array = json!([1, 2, 3]);
        assert_eq!(get_double(Some(&array), "x"), Err(ParamError::Missing));
    }

    #[test]
    fn double_type_checks() {
        let p = json!({"x": 1.001, "s": "text"});
        assert_eq!(get_double(Some(&p), "x"), Ok(1.001));
        assert_eq!(get_double(Some(&p), "y"), Err(ParamError::Missing));
        assert_eq!(get_double(Some(&p), "s"), Err(ParamError::WrongType));
    }

    #[test]
    fn double_range_bounds_are_inclusive() {
        let p = json!({"x": 5.0});
        assert_eq!(get_double_range(Some(&p), "x", 5.0, 10.0), Ok(5.0));
        assert_eq!(get_double_range(Some(&p), "x", 0.0, 5.0), Ok(5.0));
        assert_eq!(
            get_double_range(Some(&p), "x", 5.1, 10.0),
            Err(ParamError::OutOfRange)
        );
        assert_eq!(
            get_double_range(Some(&p), "x", 0.0, 4.9),
            Err(ParamError::OutOfRange)
        );
    }

    #[test]
    fn int_requires_integral_value() {
        let p = json!({"x": 3.5});
        assert_eq!(
            get_int_range(Some(&p), "x", 0, 10),
            Err(ParamError::NotInteger)
        );
        let p = json!({"x": 3.0});
        assert_eq!(get_int_range(Some(&p), "x", 0, 10), Ok(3));
    }

    #[test]
    fn int_range_checked_before_integrality() {
        let p = json!({"x": 15});
        assert_eq!(
            get_int_range(Some(&p), "x", 0, 10),
            Err(ParamError::OutOfRange)
        );
        // 3.7 is both out of range and non-integral; range wins.
        let p = json!({"x": 3.7});
        assert_eq!(
            get_int_range(Some(&p), "x", 0, 3),
            Err(ParamError::OutOfRange)
        );
    }

    #[test]
    fn int_full_range() {
        let p = json!({"x": -40});
        assert_eq!(get_int(Some(&p), "x"), Ok(-40));
        let p = json!({"x": 2.25});
        assert_eq!(get_int(Some(&p), "x"), Err(ParamError::NotInteger));
    }

    #[test]
    fn bool_rejects_coercion() {
        let p = json!({"t": true, "f": false, "n": 1, "s": "true"});
        assert_eq!(get_bool(Some(&p), "t"), Ok(true));
        assert_eq!(get_bool(Some(&p), "f"), Ok(false));
        assert_eq!(get_bool(Some(&p), "n"), Err(ParamError::WrongType));
        assert_eq!(get_bool(Some(&p), "s"), Err(ParamError::WrongType));
    }

    #[test]
    fn string_returns_owned_copy() {
        let p = json!({"s": "hello"});
        let value = get_string(Some(&p), "s").unwrap();
        drop(p);
        assert_eq!(value, "hello");
    }

    #[test]
    fn invalid_params_wrapping() {
        let err = ParamError::Missing.invalid_params("speed");
        assert_eq!(err.code, -32602);
        assert_eq!(err.message.as_deref(), Some("invalid param 'speed': missing"));
    }
}
