use super::entity::Entity;
use serde_json::{Map, Value};

/// Soft-delete toggle. The backend never hard-deletes records except
/// sindicatos; everything else flips `activo` through these endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivoChange {
    Delete,
    Restore,
}

impl ActivoChange {
    /// Change that moves a record to the requested state
    pub fn towards(activo: bool) -> Self {
        if activo {
            ActivoChange::Restore
        } else {
            ActivoChange::Delete
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivoChange::Delete => "delete",
            ActivoChange::Restore => "restore",
        }
    }

    /// `PATCH` path for the given entity type
    pub fn path<T: Entity>(&self) -> String {
        format!("/api/{}/{}", T::collection_name(), self.as_str())
    }

    /// Request body: `{ "<id_field>": id }`
    pub fn body<T: Entity>(id: i64) -> Value {
        let mut map = Map::new();
        map.insert(T::id_field().to_string(), Value::from(id));
        Value::Object(map)
    }

    /// Past participle for notices ("activado" / "desactivado")
    pub fn done_label(&self) -> &'static str {
        match self {
            ActivoChange::Delete => "desactivado",
            ActivoChange::Restore => "activado",
        }
    }
}

impl std::fmt::Display for ActivoChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
