use serde::{Deserialize, Serialize};

use crate::shared::validation::FieldErrors;
use crate::system::users::Usuario;

pub const MIN_CREDENTIAL_LEN: usize = 4;

/// Body of `POST /api/usuarios/verify`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub user: String,
    pub clave: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.user.trim().chars().count() < MIN_CREDENTIAL_LEN {
            errors.add("user", "El usuario debe tener mínimo 4 caracteres");
        }
        if self.clave.chars().count() < MIN_CREDENTIAL_LEN {
            errors.add("clave", "La clave debe tener mínimo 4 caracteres");
        }
        errors.into_result(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub usuario: Usuario,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        let bad = LoginRequest {
            user: "ab".into(),
            clave: "123".into(),
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.has("user") && errors.has("clave"));

        let ok = LoginRequest {
            user: "admin".into(),
            clave: "secreta".into(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_login_response_shape() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"usuario":{"id":1,"nombre":"Ana","usuario":"ana.admin","rol":{"id":1,"nombre":"admin"},"activo":true}}"#,
        )
        .unwrap();
        assert_eq!(resp.usuario.rol.nombre, "admin");
    }
}
