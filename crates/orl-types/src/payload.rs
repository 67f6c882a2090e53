//! The flat key/value record returned by off-chain backends.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{TypeError, TypeResult};

/// Untyped flat record returned by an adapter `download`.
///
/// Keys are field names; values are arbitrary JSON. The resolution core
/// never interprets values beyond what the declared field schema asks for
/// (a recursive field's value must be a URI string, everything else is
/// passed through as-is).
pub type Payload = BTreeMap<String, Value>;

/// Convert a JSON value into a [`Payload`].
///
/// Fails with [`TypeError::PayloadNotObject`] unless `value` is an object.
pub fn payload_from_json(value: Value) -> TypeResult<Payload> {
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Err(TypeError::PayloadNotObject),
    }
}
