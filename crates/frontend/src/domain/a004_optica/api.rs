use contracts::domain::a002_sindicato::Sindicato;
use contracts::domain::a003_delegacion::Delegacion;
use contracts::domain::a004_optica::{Optica, OpticaDto, OpticaLink, OpticaUpdateDto};
use contracts::domain::common::collection_path;
use contracts::shared::error::ApiError;

use crate::shared::api_utils::{fetch_all, fetch_by_id, patch, post, put};

const UPDATE_PATH: &str = "/api/opticas/update";

pub async fn fetch_opticas() -> Result<Vec<Optica>, ApiError> {
    fetch_all::<Optica>().await
}

pub async fn fetch_optica(id: i64) -> Result<Optica, ApiError> {
    fetch_by_id::<Optica>(id).await
}

pub async fn create_optica(dto: &OpticaDto) -> Result<(), ApiError> {
    post(&collection_path::<Optica>(), dto).await
}

pub async fn update_optica(dto: &OpticaUpdateDto) -> Result<(), ApiError> {
    put(UPDATE_PATH, dto).await
}

/// Adds or removes one sindicato/delegación of an óptica
pub async fn apply_link(link: &OpticaLink) -> Result<(), ApiError> {
    patch(link.action.path(), &link.body()).await?;
    log::info!("optica {} {:?} {}", link.optica_id, link.action, link.related_id);
    Ok(())
}

/// Ópticas with every sindicato and delegación, for the grouped views
pub struct OpticaRelations {
    pub opticas: Vec<Optica>,
    pub sindicatos: Vec<Sindicato>,
    pub delegaciones: Vec<Delegacion>,
}

pub async fn fetch_relations() -> Result<OpticaRelations, ApiError> {
    let opticas = fetch_opticas().await?;
    let sindicatos = fetch_all::<Sindicato>().await?;
    let delegaciones = fetch_all::<Delegacion>().await?;
    Ok(OpticaRelations {
        opticas,
        sindicatos,
        delegaciones,
    })
}
