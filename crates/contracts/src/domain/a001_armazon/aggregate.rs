use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::lenient::{f64_from_any, i64_from_any};
use crate::domain::common::Entity;
use crate::shared::list_query::{Searchable, Sortable};

// ============================================================================
// Aggregate
// ============================================================================

/// Frame (armazón) kept in stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Armazon {
    pub id: i64,
    pub codigo_patilla: String,
    pub codigo_interno: String,
    pub codigo_color: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub letra_color: Option<String>,
    #[serde(default)]
    pub tipo_armazon: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub ubicacion: String,
    #[serde(default, deserialize_with = "i64_from_any")]
    pub cantidad: i64,
    #[serde(default, deserialize_with = "i64_from_any")]
    pub cantidad_minima: i64,
    #[serde(default, deserialize_with = "f64_from_any")]
    pub costo: f64,
    #[serde(default, deserialize_with = "f64_from_any")]
    pub precio_venta: f64,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

fn default_activo() -> bool {
    true
}

impl Armazon {
    pub fn codes(&self) -> CodeTriple {
        CodeTriple {
            codigo_patilla: self.codigo_patilla.clone(),
            codigo_interno: self.codigo_interno.clone(),
            codigo_color: self.codigo_color.clone(),
        }
    }

    /// Stock at or below the configured minimum
    pub fn is_low_stock(&self) -> bool {
        self.cantidad <= self.cantidad_minima
    }

    /// `codigoInterno-letraColor-codigoPatilla-codigoColor`, used by the
    /// ficha form to pick a frame
    pub fn option_label(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.codigo_interno,
            self.letra_color.as_deref().unwrap_or(""),
            self.codigo_patilla,
            self.codigo_color
        )
    }
}

impl Entity for Armazon {
    fn id(&self) -> i64 {
        self.id
    }

    fn is_activo(&self) -> bool {
        self.activo
    }

    fn caption(&self) -> String {
        format!("{} ({})", self.codigo_interno, self.descripcion)
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "armazones"
    }

    fn element_name() -> &'static str {
        "Armazón"
    }

    fn list_name() -> &'static str {
        "Armazones"
    }
}

impl Searchable for Armazon {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.codigo_patilla.clone(),
            self.codigo_interno.clone(),
            self.codigo_color.clone(),
            self.descripcion.clone(),
            self.letra_color.clone().unwrap_or_default(),
            self.tipo_armazon.clone(),
            self.material.clone(),
            self.ubicacion.clone(),
            self.cantidad.to_string(),
            self.cantidad_minima.to_string(),
            self.costo.to_string(),
            self.precio_venta.to_string(),
        ]
    }
}

impl Sortable for Armazon {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "codigoPatilla" => self.codigo_patilla.cmp(&other.codigo_patilla),
            "codigoInterno" => self.codigo_interno.cmp(&other.codigo_interno),
            "codigoColor" => self.codigo_color.cmp(&other.codigo_color),
            "descripcion" => self
                .descripcion
                .to_lowercase()
                .cmp(&other.descripcion.to_lowercase()),
            "material" => self.material.cmp(&other.material),
            "ubicacion" => self.ubicacion.cmp(&other.ubicacion),
            "cantidad" => self.cantidad.cmp(&other.cantidad),
            "costo" => self.costo.total_cmp(&other.costo),
            "precioVenta" => self.precio_venta.total_cmp(&other.precio_venta),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// The three identifying codes of a frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CodeTriple {
    #[serde(default)]
    pub codigo_patilla: String,
    #[serde(default)]
    pub codigo_interno: String,
    #[serde(default)]
    pub codigo_color: String,
}

impl CodeTriple {
    pub fn upper(&self) -> Self {
        Self {
            codigo_patilla: self.codigo_patilla.trim().to_uppercase(),
            codigo_interno: self.codigo_interno.trim().to_uppercase(),
            codigo_color: self.codigo_color.trim().to_uppercase(),
        }
    }
}

/// Body of `POST /api/armazones`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmazonDto {
    pub codigo_patilla: String,
    pub codigo_interno: String,
    pub codigo_color: String,
    pub descripcion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letra_color: Option<String>,
    pub tipo_armazon: String,
    pub material: String,
    pub ubicacion: String,
    pub cantidad: i64,
    pub cantidad_minima: i64,
    pub costo: f64,
    pub precio_venta: f64,
    pub activo: bool,
}

impl ArmazonDto {
    pub fn codes(&self) -> CodeTriple {
        CodeTriple {
            codigo_patilla: self.codigo_patilla.clone(),
            codigo_interno: self.codigo_interno.clone(),
            codigo_color: self.codigo_color.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_row() {
        let json = r#"{
            "id": 4, "codigoPatilla": "CP001", "codigoInterno": "CI001",
            "codigoColor": "CC001", "descripcion": "Aviador", "letraColor": null,
            "tipoArmazon": "RECETA", "material": "METAL", "ubicacion": "VIDRIERA",
            "cantidad": 2, "cantidadMinima": 3, "costo": "1500.00", "precioVenta": 3000,
            "activo": true
        }"#;
        let armazon: Armazon = serde_json::from_str(json).unwrap();
        assert_eq!(armazon.costo, 1500.0);
        assert!(armazon.is_low_stock());
        assert_eq!(armazon.option_label(), "CI001--CP001-CC001");
    }

    #[test]
    fn test_dto_serializes_camel_case() {
        let dto = ArmazonDto {
            codigo_patilla: "A".into(),
            codigo_interno: "B".into(),
            codigo_color: "C".into(),
            descripcion: "d".into(),
            letra_color: None,
            tipo_armazon: "SOL".into(),
            material: "METAL".into(),
            ubicacion: "X".into(),
            cantidad: 1,
            cantidad_minima: 1,
            costo: 0.01,
            precio_venta: 0.01,
            activo: true,
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["codigoPatilla"], "A");
        assert_eq!(value["precioVenta"], 0.01);
        assert!(value.get("letraColor").is_none());
    }
}
