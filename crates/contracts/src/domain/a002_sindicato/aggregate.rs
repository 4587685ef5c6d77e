use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

use crate::domain::common::lenient::count_of;
use crate::domain::common::Entity;
use crate::shared::list_query::{Searchable, Sortable};

// ============================================================================
// Aggregate
// ============================================================================

/// Union (sindicato) whose affiliates are served by the ópticas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sindicato {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub activo: bool,
    /// Related records, only ever shown as counts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opticas: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clientes: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fichas: Option<Value>,
}

impl Sindicato {
    pub fn opticas_count(&self) -> usize {
        count_of(&self.opticas)
    }

    pub fn clientes_count(&self) -> usize {
        count_of(&self.clientes)
    }

    pub fn fichas_count(&self) -> usize {
        count_of(&self.fichas)
    }
}

impl Entity for Sindicato {
    fn id(&self) -> i64 {
        self.id
    }

    fn is_activo(&self) -> bool {
        self.activo
    }

    fn caption(&self) -> String {
        self.nombre.clone()
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "sindicatos"
    }

    fn element_name() -> &'static str {
        "Sindicato"
    }

    fn list_name() -> &'static str {
        "Sindicatos"
    }
}

impl Searchable for Sindicato {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.nombre.clone(),
            if self.activo { "activo" } else { "inactivo" }.to_string(),
        ]
    }
}

impl Sortable for Sindicato {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "activo" => self.activo.cmp(&other.activo),
            _ => self.nombre.to_lowercase().cmp(&other.nombre.to_lowercase()),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /api/sindicatos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SindicatoDto {
    pub nombre: String,
    pub activo: bool,
}

/// Body of `PUT /api/sindicatos/update`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SindicatoUpdateDto {
    pub id_sindicato: i64,
    pub nombre: String,
    pub activo: bool,
}

/// Body of `DELETE /api/sindicatos/remove`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SindicatoRemoveDto {
    pub id_sindicato: i64,
}

/// 3..=100 characters after trimming
pub fn validate_nombre(nombre: &str) -> Result<String, String> {
    let trimmed = nombre.trim();
    let len = trimmed.chars().count();
    if len == 0 {
        return Err("El nombre es requerido".into());
    }
    if len < 3 {
        return Err("El nombre debe tener al menos 3 caracteres".into());
    }
    if len > 100 {
        return Err("El nombre debe tener menos de 100 caracteres".into());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_from_arrays_or_numbers() {
        let s: Sindicato = serde_json::from_str(
            r#"{"id":1,"nombre":"UOM","activo":true,"opticas":[{"id":1},{"id":2}],"fichas":7}"#,
        )
        .unwrap();
        assert_eq!(s.opticas_count(), 2);
        assert_eq!(s.fichas_count(), 7);
        assert_eq!(s.clientes_count(), 0);
    }

    #[test]
    fn test_update_body_uses_id_sindicato() {
        let body = serde_json::to_value(SindicatoUpdateDto {
            id_sindicato: 3,
            nombre: "UOCRA".into(),
            activo: true,
        })
        .unwrap();
        assert_eq!(body["idSindicato"], 3);
    }

    #[test]
    fn test_validate_nombre() {
        assert!(validate_nombre("  ").is_err());
        assert!(validate_nombre("ab").is_err());
        assert!(validate_nombre(&"x".repeat(101)).is_err());
        assert_eq!(validate_nombre("  UOM ").unwrap(), "UOM");
    }
}
