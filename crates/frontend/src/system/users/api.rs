use contracts::domain::common::collection_path;
use contracts::shared::error::ApiError;
use contracts::system::users::{sort_by_nombre, Rol, Usuario, UsuarioDto, UsuarioUpdateDto};

use crate::shared::api_utils::{api_url, fetch_all, get_json, post, put};

const UPDATE_PATH: &str = "/api/usuarios/update";

/// All users, ordered by name
pub async fn fetch_usuarios() -> Result<Vec<Usuario>, ApiError> {
    Ok(sort_by_nombre(fetch_all::<Usuario>().await?))
}

pub async fn fetch_roles() -> Result<Vec<Rol>, ApiError> {
    get_json(&api_url("/api/roles")).await
}

pub async fn create_usuario(dto: &UsuarioDto) -> Result<(), ApiError> {
    post(&collection_path::<Usuario>(), dto).await
}

pub async fn update_usuario(dto: &UsuarioUpdateDto) -> Result<(), ApiError> {
    put(UPDATE_PATH, dto).await
}

/// Sets the yearly default password
pub async fn reset_password(id: i64, year: i32) -> Result<(), ApiError> {
    put(UPDATE_PATH, &UsuarioUpdateDto::reset_password(id, year)).await?;
    log::info!("password of usuario {} reset", id);
    Ok(())
}
