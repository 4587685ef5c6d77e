use async_trait::async_trait;
use contracts::domain::a001_armazon::duplicates::VerificarDuplicadosResponse;
use contracts::domain::a001_armazon::{Armazon, ArmazonDto, ArmazonGateway, CodeTriple};
use contracts::domain::common::collection_path;
use contracts::shared::error::ApiError;

use crate::shared::api_utils::{fetch_all, fetch_suggestions, post, post_json};

const VERIFY_PATH: &str = "/api/armazones/verificar-duplicados";

/// Backup-origin lists feeding the create form
pub const MATERIALES_PATH: &str = "/back/tipos/materiales";
pub const TIPOS_ARMAZON_PATH: &str = "/back/tipos/armazones";
pub const UBICACIONES_PATH: &str = "/back/tipos/ubicaciones";

/// REST implementation of the frame gateway
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpArmazonGateway;

#[async_trait(?Send)]
impl ArmazonGateway for HttpArmazonGateway {
    async fn verify_duplicates(&self, codes: &CodeTriple) -> Result<VerificarDuplicadosResponse, ApiError> {
        post_json(VERIFY_PATH, codes).await
    }

    async fn list(&self) -> Result<Vec<Armazon>, ApiError> {
        fetch_armazones().await
    }

    async fn create(&self, dto: &ArmazonDto) -> Result<(), ApiError> {
        post(&collection_path::<Armazon>(), dto).await
    }
}

pub async fn fetch_armazones() -> Result<Vec<Armazon>, ApiError> {
    fetch_all::<Armazon>().await
}

/// Suggestions for material, tipo de armazón and ubicación.
/// A failing list comes back empty together with its error.
pub async fn fetch_form_suggestions() -> ([Vec<String>; 3], Vec<ApiError>) {
    let mut lists: [Vec<String>; 3] = Default::default();
    let mut failures = Vec::new();
    for (slot, path) in lists
        .iter_mut()
        .zip([MATERIALES_PATH, TIPOS_ARMAZON_PATH, UBICACIONES_PATH])
    {
        match fetch_suggestions(path).await {
            Ok(items) => *slot = items,
            Err(e) => {
                log::warn!("{} unavailable: {}", path, e);
                failures.push(e);
            }
        }
    }
    (lists, failures)
}
