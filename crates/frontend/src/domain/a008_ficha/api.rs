use contracts::domain::a008_ficha::Ficha;
use contracts::domain::common::{collection_path, only_activos, Entity};
use contracts::shared::error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{fetch_all, fetch_by_id, post};
use crate::shared::notice::NoticeHandle;

pub async fn fetch_fichas() -> Result<Vec<Ficha>, ApiError> {
    fetch_all::<Ficha>().await
}

pub async fn fetch_ficha(id: i64) -> Result<Ficha, ApiError> {
    fetch_by_id::<Ficha>(id).await
}

pub async fn create_ficha(ficha: &Ficha) -> Result<(), ApiError> {
    post(&collection_path::<Ficha>(), ficha).await
}

/// Starts loading one reference list into `target`, keeping active rows.
/// Each call is an independent task so the lists arrive in parallel.
pub fn load_reference<T>(target: RwSignal<Vec<T>>, notice: NoticeHandle)
where
    T: Entity + DeserializeOwned + Send + Sync + 'static,
{
    spawn_local(async move {
        match fetch_all::<T>().await {
            Ok(items) => {
                let _ = target.try_set(only_activos(items));
            }
            Err(e) => {
                log::warn!("{} unavailable: {}", T::list_name(), e);
                notice.warning(format!("No se pudo cargar {}: {}", T::list_name(), e));
            }
        }
    });
}
