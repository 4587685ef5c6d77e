use contracts::domain::a003_delegacion::{
    Delegacion, DelegacionDto, GeorefPlace, GeorefQuery, LocalidadesResponse, ProvinciasResponse,
};
use contracts::domain::common::collection_path;
use contracts::shared::error::ApiError;

use crate::shared::api_utils::{fetch_all, fetch_by_id, get_json_with_query, post};
use crate::shared::config::config;

fn georef_url(resource: &str) -> String {
    format!("{}/{}", config().api.georef_base.trim_end_matches('/'), resource)
}

pub async fn fetch_delegaciones() -> Result<Vec<Delegacion>, ApiError> {
    fetch_all::<Delegacion>().await
}

pub async fn fetch_delegacion(id: i64) -> Result<Delegacion, ApiError> {
    fetch_by_id::<Delegacion>(id).await
}

pub async fn create_delegacion(dto: &DelegacionDto) -> Result<(), ApiError> {
    post(&collection_path::<Delegacion>(), dto).await
}

/// Provinces sorted by name
pub async fn fetch_provincias() -> Result<Vec<GeorefPlace>, ApiError> {
    let response: ProvinciasResponse =
        get_json_with_query(&georef_url("provincias"), &GeorefQuery::provincias()).await?;
    Ok(response.into_sorted())
}

/// Localities of one province sorted by name
pub async fn fetch_localidades(provincia_id: &str) -> Result<Vec<GeorefPlace>, ApiError> {
    let response: LocalidadesResponse =
        get_json_with_query(&georef_url("localidades"), &GeorefQuery::localidades(provincia_id)).await?;
    Ok(response.into_sorted())
}
