use contracts::shared::error::ApiError;
use contracts::system::auth::{LoginRequest, LoginResponse};
use contracts::system::users::Usuario;

use crate::shared::api_utils::post_json;

/// Check credentials against the backend and return the profile
pub async fn verify(request: &LoginRequest) -> Result<Usuario, ApiError> {
    let response: LoginResponse = post_json("/api/usuarios/verify", request).await?;
    log::info!("Logged in as {}", response.usuario.usuario);
    Ok(response.usuario)
}
