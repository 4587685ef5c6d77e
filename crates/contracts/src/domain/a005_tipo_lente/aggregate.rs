use serde::{Deserialize, Serialize};

use crate::domain::common::{CatalogEntry, Entity, SuggestionSource};

/// Lens type offered in fichas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipoLente {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub activo: bool,
}

impl Entity for TipoLente {
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
        "a005"
    }

    fn collection_name() -> &'static str {
        "tipos/lentes"
    }

    fn element_name() -> &'static str {
        "Lente"
    }

    fn list_name() -> &'static str {
        "Tipos de lente"
    }

    fn id_field() -> &'static str {
        "idTipoLente"
    }
}

impl CatalogEntry for TipoLente {
    fn nombre(&self) -> &str {
        &self.nombre
    }

    fn suggestion_source() -> SuggestionSource {
        SuggestionSource::Backup("/back/tipos/lentes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ActivoChange;

    #[test]
    fn test_toggle_uses_id_tipo_lente() {
        assert_eq!(ActivoChange::Delete.path::<TipoLente>(), "/api/tipos/lentes/delete");
        assert_eq!(
            ActivoChange::body::<TipoLente>(9),
            serde_json::json!({"idTipoLente": 9})
        );
    }
}
