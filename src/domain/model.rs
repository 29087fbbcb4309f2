use serde::Serialize;
use serde_json::Value;

/// DynamoDB 文字檢視的 item:屬性名稱 -> 單一型別標籤的包裝物件。
///
/// `serde_json` 的 `preserve_order` feature 讓屬性順序與輸入一致。
pub type Item = serde_json::Map<String, Value>;

/// Closed union over the typed-value wrappers we can size.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// `{"N": <number>}` — variable-length number, up to 38 significant digits
    Number(f64),
    /// `{"S": <text>}`
    Text(String),
    /// 其他標籤或格式不對的包裝,略過不產生 breakdown
    Unsupported,
}

impl TypedValue {
    /// Classifies a raw typed-value wrapper.
    ///
    /// Anything that is not an object with exactly one recognized tag and a
    /// payload of the matching JSON type is `Unsupported`.
    pub fn classify(raw: &Value) -> Self {
        let wrapper = match raw.as_object() {
            Some(wrapper) => wrapper,
            None => return Self::Unsupported,
        };

        let mut entries = wrapper.iter();
        let (tag, payload) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => return Self::Unsupported,
        };

        match (tag.as_str(), payload) {
            ("N", Value::Number(n)) => n.as_f64().map_or(Self::Unsupported, Self::Number),
            ("S", Value::String(s)) => Self::Text(s.clone()),
            _ => Self::Unsupported,
        }
    }
}

/// Per-attribute size breakdown, in the store's byte-accounting units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSizes {
    pub attribute_key: usize,
    pub attribute_value: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_recognized_tags() {
        assert_eq!(
            TypedValue::classify(&json!({ "N": 123124 })),
            TypedValue::Number(123124.0)
        );
        assert_eq!(
            TypedValue::classify(&json!({ "S": "hello" })),
            TypedValue::Text("hello".to_string())
        );
    }

    #[test]
    fn test_classify_unsupported() {
        // 未知標籤
        assert_eq!(TypedValue::classify(&json!({ "B": "xyz" })), TypedValue::Unsupported);
        // 多於一個標籤
        assert_eq!(
            TypedValue::classify(&json!({ "N": 1, "S": "x" })),
            TypedValue::Unsupported
        );
        // 不是物件、空物件、payload 型別不對
        assert_eq!(TypedValue::classify(&json!(5)), TypedValue::Unsupported);
        assert_eq!(TypedValue::classify(&json!({})), TypedValue::Unsupported);
        assert_eq!(TypedValue::classify(&json!({ "N": "123" })), TypedValue::Unsupported);
        assert_eq!(TypedValue::classify(&json!({ "S": 123 })), TypedValue::Unsupported);
    }

    #[test]
    fn test_attribute_sizes_serializes_camel_case() {
        let sizes = AttributeSizes { attribute_key: 1, attribute_value: 5, total: 6 };
        let json = serde_json::to_string(&sizes).unwrap();
        assert_eq!(json, r#"{"attributeKey":1,"attributeValue":5,"total":6}"#);
    }
}
