use contracts::domain::a002_sindicato::aggregate::SindicatoRemoveDto;
use contracts::domain::a002_sindicato::{Sindicato, SindicatoUpdateDto};
use contracts::shared::error::ApiError;

use crate::shared::api_utils::{delete, fetch_by_id, put};

pub async fn fetch(id: i64) -> Result<Sindicato, ApiError> {
    fetch_by_id::<Sindicato>(id).await
}

pub async fn update(dto: &SindicatoUpdateDto) -> Result<(), ApiError> {
    put("/api/sindicatos/update", dto).await
}

/// Hard delete, only offered for sindicatos
pub async fn remove(id: i64) -> Result<(), ApiError> {
    delete("/api/sindicatos/remove", &SindicatoRemoveDto { id_sindicato: id }).await
}
