use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;

use crate::domain::a002_sindicato::Sindicato;
use crate::domain::a003_delegacion::Delegacion;
use crate::domain::common::Entity;
use crate::shared::list_query::{Searchable, Sortable};

// ============================================================================
// Aggregate
// ============================================================================

/// Optical shop. Unions and delegations are many-to-many and only change
/// through the add/remove endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Optica {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub activo: bool,
    #[serde(default)]
    pub sindicatos: Vec<Sindicato>,
    #[serde(default)]
    pub delegaciones: Vec<Delegacion>,
}

impl Optica {
    pub fn has_sindicato(&self, id: i64) -> bool {
        self.sindicatos.iter().any(|s| s.id == id)
    }

    pub fn has_delegacion(&self, id: i64) -> bool {
        self.delegaciones.iter().any(|d| d.id == id)
    }
}

impl Entity for Optica {
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
        "a004"
    }

    fn collection_name() -> &'static str {
        "opticas"
    }

    fn element_name() -> &'static str {
        "Óptica"
    }

    fn list_name() -> &'static str {
        "Ópticas"
    }
}

impl Searchable for Optica {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.id.to_string(), self.nombre.clone()];
        fields.extend(self.sindicatos.iter().map(|s| s.nombre.clone()));
        fields.extend(self.delegaciones.iter().map(|d| d.caption()));
        fields
    }
}

impl Sortable for Optica {
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

/// Body of `POST /api/opticas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticaDto {
    pub nombre: String,
    pub activo: bool,
}

/// Body of `PUT /api/opticas/update`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticaUpdateDto {
    pub id: i64,
    pub nombre: String,
    pub activo: bool,
}

/// Relationship edits of one óptica
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpticaLinkAction {
    AddSindicato,
    RemoveSindicato,
    AddDelegacion,
    RemoveDelegacion,
}

impl OpticaLinkAction {
    /// `PATCH` path
    pub fn path(&self) -> &'static str {
        match self {
            OpticaLinkAction::AddSindicato => "/api/opticas/addSindicato",
            OpticaLinkAction::RemoveSindicato => "/api/opticas/removeSindicato",
            OpticaLinkAction::AddDelegacion => "/api/opticas/addDelegacion",
            OpticaLinkAction::RemoveDelegacion => "/api/opticas/removeDelegacion",
        }
    }

    fn related_field(&self) -> &'static str {
        match self {
            OpticaLinkAction::AddSindicato | OpticaLinkAction::RemoveSindicato => "idSindicato",
            OpticaLinkAction::AddDelegacion | OpticaLinkAction::RemoveDelegacion => "idDelegacion",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            OpticaLinkAction::AddSindicato => "Sindicato agregado exitosamente",
            OpticaLinkAction::RemoveSindicato => "Sindicato quitado exitosamente",
            OpticaLinkAction::AddDelegacion => "Delegación agregada exitosamente",
            OpticaLinkAction::RemoveDelegacion => "Delegación quitada exitosamente",
        }
    }
}

/// A relationship edit ready to send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpticaLink {
    pub action: OpticaLinkAction,
    pub optica_id: i64,
    pub related_id: i64,
}

impl OpticaLink {
    /// Refuses to add a relation that already exists
    pub fn new(action: OpticaLinkAction, optica: &Optica, related_id: i64) -> Result<Self, String> {
        match action {
            OpticaLinkAction::AddSindicato if optica.has_sindicato(related_id) => {
                return Err("Este sindicato ya está agregado".into())
            }
            OpticaLinkAction::AddDelegacion if optica.has_delegacion(related_id) => {
                return Err("Esta delegación ya está agregada".into())
            }
            _ => {}
        }
        if related_id <= 0 {
            return Err(match action {
                OpticaLinkAction::AddSindicato | OpticaLinkAction::RemoveSindicato => {
                    "Debe seleccionar un sindicato".into()
                }
                _ => "Debe seleccionar una delegación".into(),
            });
        }
        Ok(Self {
            action,
            optica_id: optica.id,
            related_id,
        })
    }

    /// `{ "idSindicato" | "idDelegacion": related, "id": optica }`
    pub fn body(&self) -> Value {
        let mut map = Map::new();
        map.insert(self.action.related_field().to_string(), Value::from(self.related_id));
        map.insert("id".to_string(), Value::from(self.optica_id));
        Value::Object(map)
    }
}

/// More than 3 characters once inner whitespace is collapsed, and not used by
/// another óptica (case-insensitive)
pub fn validate_optica_nombre(nombre: &str, others: &[Optica]) -> Result<String, String> {
    let collapsed = nombre.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= 3 {
        return Err("El nombre es obligatorio".into());
    }
    let lower = collapsed.to_lowercase();
    if others.iter().any(|o| o.nombre.trim().to_lowercase() == lower) {
        return Err("Ya existe una optica con ese nombre".into());
    }
    Ok(collapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn optica(id: i64, nombre: &str) -> Optica {
        Optica {
            id,
            nombre: nombre.into(),
            activo: true,
            sindicatos: vec![],
            delegaciones: vec![],
        }
    }

    #[test]
    fn test_link_body() {
        let link = OpticaLink::new(OpticaLinkAction::AddSindicato, &optica(7, "Centro"), 3).unwrap();
        assert_eq!(link.body(), serde_json::json!({"idSindicato": 3, "id": 7}));
        assert_eq!(link.action.path(), "/api/opticas/addSindicato");

        let link = OpticaLink::new(OpticaLinkAction::RemoveDelegacion, &optica(7, "Centro"), 2).unwrap();
        assert_eq!(link.body(), serde_json::json!({"idDelegacion": 2, "id": 7}));
    }

    #[test]
    fn test_link_rejects_existing_relation() {
        let mut o = optica(1, "Centro");
        o.sindicatos.push(Sindicato {
            id: 4,
            nombre: "UOM".into(),
            activo: true,
            opticas: None,
            clientes: None,
            fichas: None,
        });
        assert!(OpticaLink::new(OpticaLinkAction::AddSindicato, &o, 4).is_err());
        assert!(OpticaLink::new(OpticaLinkAction::RemoveSindicato, &o, 4).is_ok());
        assert!(OpticaLink::new(OpticaLinkAction::AddDelegacion, &o, 0).is_err());
    }

    #[test]
    fn test_validate_nombre() {
        let others = vec![optica(2, "Optica Norte")];
        assert!(validate_optica_nombre("  a  b ", &others).is_err());
        assert!(validate_optica_nombre("optica   NORTE", &others).is_err());
        assert_eq!(validate_optica_nombre(" Optica   Sur ", &others).unwrap(), "Optica Sur");
    }
}
