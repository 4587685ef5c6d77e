use serde::{Deserialize, Serialize};

use crate::domain::common::{CatalogEntry, Entity, SuggestionSource};

pub const ESTADOS_CONOCIDOS: &[&str] = &[
    "Pasado",
    "Enviado",
    "Revisión",
    "Laboratorio",
    "Pendiente",
    "Reclamo al Lab.",
    "En Control",
];

/// Processing state of a lens order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estado {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub activo: bool,
}

impl Entity for Estado {
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
        "a007"
    }

    fn collection_name() -> &'static str {
        "estados"
    }

    fn element_name() -> &'static str {
        "Estado"
    }

    fn list_name() -> &'static str {
        "Estados"
    }
}

impl CatalogEntry for Estado {
    fn nombre(&self) -> &str {
        &self.nombre
    }

    fn suggestion_source() -> SuggestionSource {
        SuggestionSource::Fixed(ESTADOS_CONOCIDOS)
    }
}
