use serde::{Deserialize, Serialize};

use crate::domain::common::{CatalogEntry, Entity, SuggestionSource};

pub const LABORATORIOS_CONOCIDOS: &[&str] = &["GEN", "BS AS", "MOA", "SEBA"];

/// Lens laboratory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Laboratorio {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub activo: bool,
}

impl Entity for Laboratorio {
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
        "a006"
    }

    fn collection_name() -> &'static str {
        "laboratorios"
    }

    fn element_name() -> &'static str {
        "Laboratorio"
    }

    fn list_name() -> &'static str {
        "Laboratorios"
    }
}

impl CatalogEntry for Laboratorio {
    fn nombre(&self) -> &str {
        &self.nombre
    }

    fn suggestion_source() -> SuggestionSource {
        SuggestionSource::Fixed(LABORATORIOS_CONOCIDOS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::catalog::{pending_suggestions, sorted_by_id};

    #[test]
    fn test_pending_labs() {
        let labs = sorted_by_id(vec![
            Laboratorio { id: 3, nombre: "MOA".into(), activo: false },
            Laboratorio { id: 1, nombre: "GEN".into(), activo: true },
        ]);
        assert_eq!(labs[0].id, 1);
        let candidates: Vec<String> = LABORATORIOS_CONOCIDOS.iter().map(|s| s.to_string()).collect();
        assert_eq!(pending_suggestions(&candidates, &labs), vec!["BS AS", "SEBA"]);
    }
}
