use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::Entity;
use crate::shared::list_query::{Searchable, Sortable};

// ============================================================================
// Roles
// ============================================================================

/// Known role names. Anything else is kept verbatim and has no routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoleName {
    Admin,
    Boss,
    Owner,
    Employed,
    Other(String),
}

impl RoleName {
    pub fn parse(nombre: &str) -> Self {
        match nombre.trim() {
            "admin" => RoleName::Admin,
            "boss" => RoleName::Boss,
            "owner" => RoleName::Owner,
            "employed" => RoleName::Employed,
            other => RoleName::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RoleName::Admin => "admin",
            RoleName::Boss => "boss",
            RoleName::Owner => "owner",
            RoleName::Employed => "employed",
            RoleName::Other(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rol {
    pub id: i64,
    pub nombre: String,
}

impl Rol {
    pub fn role_name(&self) -> RoleName {
        RoleName::parse(&self.nombre)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Application user. `clave` is write-only and never read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub usuario: String,
    pub rol: Rol,
    #[serde(default)]
    pub activo: bool,
}

impl Usuario {
    pub fn role_name(&self) -> RoleName {
        self.rol.role_name()
    }
}

impl Entity for Usuario {
    fn id(&self) -> i64 {
        self.id
    }

    fn is_activo(&self) -> bool {
        self.activo
    }

    fn caption(&self) -> String {
        format!("{} ({})", self.nombre, self.usuario)
    }

    fn aggregate_index() -> &'static str {
        "u001"
    }

    fn collection_name() -> &'static str {
        "usuarios"
    }

    fn element_name() -> &'static str {
        "Usuario"
    }

    fn list_name() -> &'static str {
        "Usuarios"
    }
}

impl Searchable for Usuario {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.nombre.clone(),
            self.usuario.clone(),
            self.rol.nombre.clone(),
        ]
    }
}

impl Sortable for Usuario {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "usuario" => self.usuario.cmp(&other.usuario),
            "rol" => self.rol.nombre.cmp(&other.rol.nombre),
            _ => self.nombre.to_lowercase().cmp(&other.nombre.to_lowercase()),
        }
    }
}

/// Users are listed by name, ignoring case
pub fn sort_by_nombre(mut usuarios: Vec<Usuario>) -> Vec<Usuario> {
    usuarios.sort_by(|a, b| a.compare_by_field(b, "nombre"));
    usuarios
}

/// Password assigned by "reiniciar": `gprovision<YY>!`
pub fn reset_password_for_year(year: i32) -> String {
    format!("gprovision{:02}!", year.rem_euclid(100))
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /api/usuarios`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioDto {
    pub nombre: String,
    pub usuario: String,
    pub clave: String,
    pub rol_id: i64,
}

/// Body of `PUT /api/usuarios/update`; only the present fields change
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioUpdateDto {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clave: Option<String>,
}

impl UsuarioUpdateDto {
    pub fn reset_password(id: i64, year: i32) -> Self {
        Self {
            id,
            clave: Some(reset_password_for_year(year)),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario(id: i64, nombre: &str) -> Usuario {
        Usuario {
            id,
            nombre: nombre.into(),
            usuario: format!("user{id}"),
            rol: Rol {
                id: 1,
                nombre: "employed".into(),
            },
            activo: true,
        }
    }

    #[test]
    fn test_sorted_case_insensitive() {
        let sorted = sort_by_nombre(vec![usuario(1, "carlos"), usuario(2, "Ana"), usuario(3, "bruno")]);
        let names: Vec<&str> = sorted.iter().map(|u| u.nombre.as_str()).collect();
        assert_eq!(names, vec!["Ana", "bruno", "carlos"]);
    }

    #[test]
    fn test_reset_password() {
        assert_eq!(reset_password_for_year(2026), "gprovision26!");
        assert_eq!(reset_password_for_year(2105), "gprovision05!");
        let body = serde_json::to_value(UsuarioUpdateDto::reset_password(8, 2026)).unwrap();
        assert_eq!(body, serde_json::json!({"id": 8, "clave": "gprovision26!"}));
    }

    #[test]
    fn test_role_names() {
        assert_eq!(RoleName::parse("boss"), RoleName::Boss);
        assert_eq!(RoleName::parse("auditor"), RoleName::Other("auditor".into()));
        assert_eq!(RoleName::parse("auditor").as_str(), "auditor");
    }

    #[test]
    fn test_clave_is_never_read_back() {
        let u: Usuario = serde_json::from_str(
            r#"{"id":1,"nombre":"Ana","usuario":"ana","clave":"x","rol":{"id":2,"nombre":"owner"},"activo":false}"#,
        )
        .unwrap();
        assert!(!serde_json::to_string(&u).unwrap().contains("clave"));
    }
}
