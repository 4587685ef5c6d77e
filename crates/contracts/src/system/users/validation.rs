use super::aggregate::{Usuario, UsuarioDto, UsuarioUpdateDto};
use crate::shared::validation::FieldErrors;

const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Create / edit form of a user. `clave` is ignored when editing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsuarioForm {
    pub nombre: String,
    pub usuario: String,
    pub clave: String,
    pub rol_id: String,
}

fn collapsed(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl UsuarioForm {
    pub fn from_usuario(u: &Usuario) -> Self {
        Self {
            nombre: u.nombre.clone(),
            usuario: u.usuario.clone(),
            clave: String::new(),
            rol_id: u.rol.id.to_string(),
        }
    }

    /// `others` excludes the user being edited
    fn check_common(&self, errors: &mut FieldErrors, others: &[Usuario]) -> Option<i64> {
        if collapsed(&self.nombre).chars().count() <= 3 {
            errors.add("nombre", "El nombre es obligatorio, minimo 3 caracteres");
        }
        let usuario = self.usuario.trim();
        if collapsed(usuario).chars().count() <= 8 {
            errors.add("usuario", "Minimo 8 caracteres");
        } else if others.iter().any(|u| u.usuario == usuario) {
            errors.add("usuario", "No puede haber 2 usuarios con el mismo nombre");
        }
        match self.rol_id.trim().parse::<i64>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                errors.add("rolId", "Debes seleccionar un rol");
                None
            }
        }
    }

    pub fn validate_new(&self, existing: &[Usuario]) -> Result<UsuarioDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let rol_id = self.check_common(&mut errors, existing);

        let clave = &self.clave;
        if clave.chars().count() <= 8 {
            errors.add("clave", "Minimo 8 caracteres");
        } else if !clave.chars().any(|c| c.is_ascii_uppercase()) {
            errors.add("clave", "Debe tener 1 mayuscula");
        } else if !clave.chars().any(|c| c.is_ascii_digit()) {
            errors.add("clave", "Debe tener al menos 1 numero");
        } else if !clave.chars().any(|c| SPECIAL_CHARS.contains(c)) {
            errors.add("clave", "Debe contener un caracter especial");
        }

        match rol_id {
            Some(rol_id) if errors.is_empty() => Ok(UsuarioDto {
                nombre: collapsed(&self.nombre),
                usuario: self.usuario.trim().to_string(),
                clave: clave.clone(),
                rol_id,
            }),
            _ => Err(errors),
        }
    }

    pub fn validate_edit(&self, id: i64, others: &[Usuario]) -> Result<UsuarioUpdateDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let rol_id = self.check_common(&mut errors, others);
        match rol_id {
            Some(rol_id) if errors.is_empty() => Ok(UsuarioUpdateDto {
                id,
                nombre: Some(collapsed(&self.nombre)),
                usuario: Some(self.usuario.trim().to_string()),
                rol_id: Some(rol_id),
                clave: None,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::users::Rol;

    fn existing() -> Vec<Usuario> {
        vec![Usuario {
            id: 1,
            nombre: "Ana Gómez".into(),
            usuario: "ana.gomez".into(),
            rol: Rol {
                id: 2,
                nombre: "owner".into(),
            },
            activo: true,
        }]
    }

    fn form() -> UsuarioForm {
        UsuarioForm {
            nombre: "Bruno  Díaz".into(),
            usuario: "bruno.diaz".into(),
            clave: "Secreta123!".into(),
            rol_id: "3".into(),
        }
    }

    #[test]
    fn test_valid_new_user() {
        let dto = form().validate_new(&existing()).unwrap();
        assert_eq!(dto.nombre, "Bruno Díaz");
        assert_eq!(dto.rol_id, 3);
    }

    #[test]
    fn test_password_rules() {
        for (clave, expected) in [
            ("corta", "Minimo 8 caracteres"),
            ("sinmayuscula1!", "Debe tener 1 mayuscula"),
            ("SinNumeros!!", "Debe tener al menos 1 numero"),
            ("SinEspecial12", "Debe contener un caracter especial"),
        ] {
            let errors = UsuarioForm {
                clave: clave.into(),
                ..form()
            }
            .validate_new(&existing())
            .unwrap_err();
            assert_eq!(errors.get("clave"), Some(expected), "{clave}");
        }
    }

    #[test]
    fn test_duplicate_usuario_and_missing_role() {
        let errors = UsuarioForm {
            usuario: "ana.gomez".into(),
            rol_id: "".into(),
            ..form()
        }
        .validate_new(&existing())
        .unwrap_err();
        assert!(errors.has("usuario"));
        assert!(errors.has("rolId"));
    }

    #[test]
    fn test_edit_ignores_clave() {
        let dto = UsuarioForm {
            clave: String::new(),
            ..form()
        }
        .validate_edit(9, &existing())
        .unwrap();
        assert_eq!(dto.id, 9);
        assert_eq!(dto.clave, None);
        assert_eq!(dto.rol_id, Some(3));
    }
}
