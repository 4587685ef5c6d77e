//! Deserializers for numeric columns that the backend sometimes sends as
//! strings (DECIMAL columns) and sometimes as JSON numbers.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn f64_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("número fuera de rango")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("número inválido: {s}"))),
        Value::Null => Ok(0.0),
        other => Err(serde::de::Error::custom(format!("se esperaba un número: {other}"))),
    }
}

pub fn i64_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64_from_any(deserializer)?;
    Ok(value as i64)
}

/// Size of an optional relation the backend sends either as a collection or
/// as a precomputed count
pub fn count_of(value: &Option<Value>) -> usize {
    match value {
        Some(Value::Array(items)) => items.len(),
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0) as usize,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "f64_from_any")]
        costo: f64,
        #[serde(deserialize_with = "i64_from_any")]
        cantidad: i64,
    }

    #[test]
    fn test_numbers_and_strings() {
        let row: Row = serde_json::from_str(r#"{"costo":"12.50","cantidad":3}"#).unwrap();
        assert_eq!(row.costo, 12.5);
        assert_eq!(row.cantidad, 3);
        let row: Row = serde_json::from_str(r#"{"costo":7,"cantidad":"4"}"#).unwrap();
        assert_eq!(row.costo, 7.0);
        assert_eq!(row.cantidad, 4);
        assert!(serde_json::from_str::<Row>(r#"{"costo":"abc","cantidad":1}"#).is_err());
    }

    #[test]
    fn test_count_of() {
        assert_eq!(count_of(&Some(serde_json::json!([1, 2, 3]))), 3);
        assert_eq!(count_of(&Some(serde_json::json!(5))), 5);
        assert_eq!(count_of(&None), 0);
    }
}
