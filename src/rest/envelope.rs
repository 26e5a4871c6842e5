//! Root-keyed JSON envelopes.
//!
//! Every Admin REST payload is nested under one top-level property named after
//! the resource (`{"metafield": {...}}`, `{"metafields": [...]}`,
//! `{"count": 3}`), and request bodies are wrapped the same way.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::rest::ServiceError;

/// Extracts `root_element` from a response body and deserializes it as `T`.
///
/// Unknown fields inside the payload are ignored and missing optional fields
/// come back as `None`.
///
/// # Errors
///
/// Returns [`ServiceError::MalformedResponse`] if the body is not a JSON
/// object, lacks `root_element`, or the payload does not fit `T`.
///
/// ```rust
/// use shopify_services::rest::unwrap_root;
///
/// let count: u64 = unwrap_root(r#"{"count": 7}"#, "count").unwrap();
/// assert_eq!(count, 7);
/// assert!(unwrap_root::<u64>(r#"{"total": 7}"#, "count").is_err());
/// ```
pub fn unwrap_root<T: DeserializeOwned>(body: &str, root_element: &str) -> Result<T, ServiceError> {
    let mut envelope: Map<String, Value> = serde_json::from_str(body).map_err(|e| {
        ServiceError::malformed(root_element, format!("body is not a JSON object: {e}"))
    })?;

    let payload = envelope.remove(root_element).ok_or_else(|| {
        ServiceError::malformed(root_element, "root element missing from response body")
    })?;

    serde_json::from_value(payload).map_err(|e| ServiceError::malformed(root_element, e.to_string()))
}

/// Wraps `payload` as `{ root_element: payload }`.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidArgument`] if `payload` cannot be
/// represented as JSON.
pub fn wrap_root<T: Serialize + ?Sized>(root_element: &str, payload: &T) -> Result<Value, ServiceError> {
    let value = serde_json::to_value(payload)
        .map_err(|e| ServiceError::invalid_argument("body", format!("cannot serialize: {e}")))?;

    let mut envelope = Map::new();
    envelope.insert(root_element.to_string(), value);
    Ok(Value::Object(envelope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Item {
        id: Option<u64>,
        key: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    }

    #[test]
    fn test_unwraps_single_entity() {
        let item: Item = unwrap_root(r#"{"metafield": {"id": 1, "key": "a"}}"#, "metafield").unwrap();
        assert_eq!(item.id, Some(1));
        assert_eq!(item.key.as_deref(), Some("a"));
        assert!(item.value.is_none());
    }

    #[test]
    fn test_missing_root_is_malformed() {
        let result = unwrap_root::<Item>(r#"{"redirect": {"id": 1}}"#, "metafield");
        assert!(matches!(
            result,
            Err(ServiceError::MalformedResponse { root_element, .. }) if root_element == "metafield"
        ));
    }

    #[test]
    fn test_non_object_body_is_malformed() {
        assert!(matches!(
            unwrap_root::<Item>("[1, 2]", "metafield"),
            Err(ServiceError::MalformedResponse { .. })
        ));
        assert!(matches!(
            unwrap_root::<Item>("", "metafield"),
            Err(ServiceError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let result = unwrap_root::<Vec<Item>>(r#"{"metafields": {"id": 1}}"#, "metafields");
        assert!(matches!(result, Err(ServiceError::MalformedResponse { .. })));
    }

    #[test]
    fn test_list_keeps_server_order_and_ignores_unknown_fields() {
        let body = r#"{"metafields": [
            {"id": 9, "key": "z", "extra": true},
            {"id": 2, "key": "a"}
        ]}"#;
        let items: Vec<Item> = unwrap_root(body, "metafields").unwrap();
        let ids: Vec<Option<u64>> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![Some(9), Some(2)]);
    }

    #[test]
    fn test_empty_list_is_empty_vec() {
        let items: Vec<Item> = unwrap_root(r#"{"metafields": []}"#, "metafields").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_wrap_root() {
        let item = Item {
            id: None,
            key: Some("a".to_string()),
            value: None,
        };
        let body = wrap_root("metafield", &item).unwrap();
        assert_eq!(body, json!({"metafield": {"id": null, "key": "a"}}));
    }
}
