//! Product payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// POST body shared by the four product collections
///
/// `price` stays a raw JSON value: both `12.5` and `"12.5"` are accepted,
/// anything else is rejected by validation with a 400.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: Option<String>,
    pub price: Option<Value>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_wire_names() {
        let body: ProductCreate = serde_json::from_str(
            r#"{"name":"Lamp","price":"19.90","imageUrl":"/images/lamp.png","category":"home"}"#,
        )
        .unwrap();
        assert_eq!(body.image_url.as_deref(), Some("/images/lamp.png"));
        assert_eq!(body.price, Some(Value::String("19.90".into())));
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let body: ProductCreate = serde_json::from_str(r#"{"name":"Lamp"}"#).unwrap();
        assert!(body.price.is_none());
        assert!(body.image_url.is_none());
        assert!(body.category.is_none());
    }
}
