use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::Entity;
use crate::shared::list_query::{Searchable, Sortable};
use crate::shared::validation::FieldErrors;

/// Regional office, identified by province and locality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegacion {
    pub id: i64,
    #[serde(default)]
    pub provincia: String,
    #[serde(default)]
    pub localidad: String,
    #[serde(default)]
    pub activo: bool,
}

impl Entity for Delegacion {
    fn id(&self) -> i64 {
        self.id
    }

    fn is_activo(&self) -> bool {
        self.activo
    }

    fn caption(&self) -> String {
        format!("{} - {}", self.provincia, self.localidad)
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "delegaciones"
    }

    fn element_name() -> &'static str {
        "Delegación"
    }

    fn list_name() -> &'static str {
        "Delegaciones"
    }
}

impl Searchable for Delegacion {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.provincia.clone(),
            self.localidad.clone(),
        ]
    }
}

impl Sortable for Delegacion {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "localidad" => self.localidad.cmp(&other.localidad),
            _ => self
                .provincia
                .cmp(&other.provincia)
                .then_with(|| self.localidad.cmp(&other.localidad)),
        }
    }
}

/// Body of `POST /api/delegaciones`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegacionDto {
    pub provincia: String,
    pub localidad: String,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DelegacionForm {
    pub provincia: String,
    pub localidad: String,
    pub activo: bool,
}

impl DelegacionForm {
    pub fn validate(&self) -> Result<DelegacionDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.provincia.trim().is_empty() {
            errors.add("provincia", "Debe seleccionar una provincia");
        }
        if self.localidad.trim().is_empty() {
            errors.add("localidad", "Debe seleccionar una localidad");
        }
        errors.into_result(DelegacionDto {
            provincia: self.provincia.trim().to_string(),
            localidad: self.localidad.trim().to_string(),
            activo: self.activo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provincia_and_localidad_required() {
        let errors = DelegacionForm::default().validate().unwrap_err();
        assert!(errors.has("provincia"));
        assert!(errors.has("localidad"));

        let dto = DelegacionForm {
            provincia: "Córdoba".into(),
            localidad: "Río Cuarto".into(),
            activo: true,
        }
        .validate()
        .unwrap();
        assert_eq!(dto.localidad, "Río Cuarto");
    }
}
