// 容量計算慣例:https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/CapacityUnitCalculations.html

use crate::core::{AttributeSizes, Item, Result, TypedValue};

/// 以儲存引擎的計費單位計算字串長度(每個字元一單位)。
pub fn string_size(value: &str) -> usize {
    value.chars().count()
}

/// Breakdown for a string attribute: key size + value size, nothing extra.
pub fn string_attribute_size(attribute_key: &str, attribute_value: &str) -> AttributeSizes {
    let key_size = string_size(attribute_key);
    let value_size = string_size(attribute_value);
    AttributeSizes {
        attribute_key: key_size,
        attribute_value: value_size,
        total: key_size + value_size,
    }
}

/// Numbers are variable length, with up to 38 significant digits. Leading and
/// trailing zeroes are trimmed. The documented size is approximately
/// (length of attribute name) + (1 byte per two significant digits) + (1 byte).
///
/// 這裡沿用「數值減半取 ceiling,再量測十進位文字長度」的近似法來估
/// 「每兩位有效數字一個 byte」,而不是精確地數位數 — 維持與既有估算相容。
pub fn number_attribute_size(attribute_key: &str, attribute_value: f64) -> AttributeSizes {
    let key_size = string_size(attribute_key);
    let half = (attribute_value / 2.0).ceil();
    // -0.0 的文字形式是 "-0",估算上視同 "0"
    let half_text = if half == 0.0 { "0".to_string() } else { half.to_string() };
    let value_size = string_size(&half_text);
    let extra_byte = 1;
    AttributeSizes {
        attribute_key: key_size,
        attribute_value: value_size,
        total: key_size + value_size + extra_byte,
    }
}

/// Walks the item's attributes in order and dispatches on the type tag.
///
/// Attributes with unrecognized or malformed typed-value wrappers produce no
/// breakdown and are otherwise ignored.
pub fn item_statistics(item: &Item) -> Vec<AttributeSizes> {
    let mut item_stats = Vec::new();

    for (attribute_key, raw_value) in item {
        match TypedValue::classify(raw_value) {
            TypedValue::Number(n) => item_stats.push(number_attribute_size(attribute_key, n)),
            TypedValue::Text(s) => item_stats.push(string_attribute_size(attribute_key, &s)),
            TypedValue::Unsupported => {
                tracing::debug!("Skipping attribute with unsupported type tag: {}", attribute_key);
            }
        }
    }

    item_stats
}

/// Same as [`item_statistics`], but takes the item as JSON text (the form the
/// table's item view hands out) and decodes it first.
///
/// Text that is not a well-formed JSON object fails with
/// [`crate::SizerError::InvalidInputError`].
pub fn item_statistics_from_json(text: &str) -> Result<Vec<AttributeSizes>> {
    let item: Item = serde_json::from_str(text)?;
    Ok(item_statistics(&item))
}
