//! Option lists served by the legacy backup origin (`/back/tipos/...`).
//!
//! Depending on the table the endpoint answers a plain string array or an
//! array of objects carrying `descripcion`; both shapes are accepted.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SuggestionItem {
    Text(String),
    Described { descripcion: String },
}

impl SuggestionItem {
    pub fn text(&self) -> &str {
        match self {
            SuggestionItem::Text(s) => s,
            SuggestionItem::Described { descripcion } => descripcion,
        }
    }
}

/// Trimmed, non-empty, first occurrence wins
pub fn dedupe_suggestions(items: Vec<SuggestionItem>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let text = item.text().trim();
        if text.is_empty() || out.iter().any(|seen| seen == text) {
            continue;
        }
        out.push(text.to_string());
    }
    out
}

/// Suggestions not already used by any existing record (case-insensitive)
pub fn missing_suggestions<'a>(
    suggestions: &[String],
    existing: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let taken: Vec<String> = existing.into_iter().map(|s| s.trim().to_lowercase()).collect();
    suggestions
        .iter()
        .filter(|s| !taken.contains(&s.trim().to_lowercase()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_both_shapes_and_dedupes() {
        let plain: Vec<SuggestionItem> =
            serde_json::from_str(r#"["ACETATO","METAL","ACETATO"]"#).unwrap();
        assert_eq!(dedupe_suggestions(plain), vec!["ACETATO", "METAL"]);

        let described: Vec<SuggestionItem> = serde_json::from_str(
            r#"[{"descripcion":"VIDRIERA"},{"descripcion":" DEPOSITO "},{"descripcion":"VIDRIERA"}]"#,
        )
        .unwrap();
        assert_eq!(dedupe_suggestions(described), vec!["VIDRIERA", "DEPOSITO"]);
    }

    #[test]
    fn test_missing_suggestions_skips_existing() {
        let all = vec!["GEN".to_string(), "BS AS".to_string(), "MOA".to_string()];
        let missing = missing_suggestions(&all, ["gen", "MOA "]);
        assert_eq!(missing, vec!["BS AS"]);
    }
}
