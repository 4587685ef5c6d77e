//! Argentine government geographic API (datos.gob.ar georef), used to pick
//! the province and locality of a new delegation.

use serde::{Deserialize, Serialize};

pub const PROVINCIAS_MAX: u32 = 100;
pub const LOCALIDADES_MAX: u32 = 1000;

/// Query string of both georef endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeorefQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provincia: Option<String>,
    pub campos: String,
    pub max: u32,
}

impl GeorefQuery {
    pub fn provincias() -> Self {
        Self {
            provincia: None,
            campos: "id,nombre".into(),
            max: PROVINCIAS_MAX,
        }
    }

    pub fn localidades(provincia_id: &str) -> Self {
        Self {
            provincia: Some(provincia_id.to_string()),
            campos: "id,nombre".into(),
            max: LOCALIDADES_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeorefPlace {
    pub id: String,
    pub nombre: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProvinciasResponse {
    #[serde(default)]
    pub provincias: Vec<GeorefPlace>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalidadesResponse {
    #[serde(default)]
    pub localidades: Vec<GeorefPlace>,
}

/// Alphabetical by name
pub fn sorted_by_nombre(mut places: Vec<GeorefPlace>) -> Vec<GeorefPlace> {
    places.sort_by(|a, b| a.nombre.to_lowercase().cmp(&b.nombre.to_lowercase()));
    places
}

impl ProvinciasResponse {
    pub fn into_sorted(self) -> Vec<GeorefPlace> {
        sorted_by_nombre(self.provincias)
    }
}

impl LocalidadesResponse {
    pub fn into_sorted(self) -> Vec<GeorefPlace> {
        sorted_by_nombre(self.localidades)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provincias_sorted() {
        let resp: ProvinciasResponse = serde_json::from_str(
            r#"{"cantidad":3,"provincias":[{"id":"82","nombre":"Santa Fe"},{"id":"06","nombre":"Buenos Aires"},{"id":"14","nombre":"Córdoba"}]}"#,
        )
        .unwrap();
        let names: Vec<String> = resp.into_sorted().into_iter().map(|p| p.nombre).collect();
        assert_eq!(names, vec!["Buenos Aires", "Córdoba", "Santa Fe"]);
    }
}
