//! Query filters for count and list operations.

use serde::Serialize;
use serde_json::Value;

use crate::rest::ServiceError;

/// A set of optional query criteria.
///
/// Filters are plain serde structs: every field that is `None` is omitted,
/// every set field becomes one query parameter named after its serialized
/// key, in declaration order. Arrays become comma-separated values.
///
/// ```rust
/// use serde::Serialize;
/// use shopify_services::rest::QueryFilter;
///
/// #[derive(Serialize)]
/// struct ByPath {
///     path: Option<String>,
///     limit: Option<u32>,
/// }
///
/// impl QueryFilter for ByPath {}
///
/// let filter = ByPath { path: Some("/old".to_string()), limit: None };
/// assert_eq!(
///     filter.to_parameters().unwrap(),
///     vec![("path".to_string(), "/old".to_string())]
/// );
/// ```
pub trait QueryFilter: Serialize {
    /// Returns the `(name, value)` query pairs for every set field.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidArgument`] if the filter does not
    /// serialize to a JSON object.
    fn to_parameters(&self) -> Result<Vec<(String, String)>, ServiceError> {
        serialize_to_parameters(self)
    }
}

/// The empty filter.
impl QueryFilter for () {}

/// Converts a serializable value into ordered query pairs, skipping nulls.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidArgument`] if `params` cannot be serialized
/// or serializes to something other than an object (or `null`).
pub fn serialize_to_parameters<T: Serialize + ?Sized>(
    params: &T,
) -> Result<Vec<(String, String)>, ServiceError> {
    let value = serde_json::to_value(params)
        .map_err(|e| ServiceError::invalid_argument("filter", format!("cannot serialize: {e}")))?;

    let map = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(ServiceError::invalid_argument(
                "filter",
                format!("expected an object of criteria, got {other}"),
            ))
        }
    };

    let mut parameters = Vec::with_capacity(map.len());
    for (key, val) in map {
        match val {
            Value::Null => {}
            Value::String(s) => parameters.push((key, s)),
            Value::Number(n) => parameters.push((key, n.to_string())),
            Value::Bool(b) => parameters.push((key, b.to_string())),
            Value::Array(arr) => {
                let values: Vec<String> = arr
                    .iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect();
                if !values.is_empty() {
                    parameters.push((key, values.join(",")));
                }
            }
            Value::Object(_) => parameters.push((key, val.to_string())),
        }
    }

    Ok(parameters)
}
