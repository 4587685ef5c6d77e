use contracts::domain::a001_armazon::Armazon;
use contracts::shared::error::ApiError;
use leptos::prelude::*;

use super::list::ArmazonTable;
use crate::domain::a001_armazon::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::list_utils::ListState;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;

/// Frames at or below their minimum quantity
#[component]
pub fn ArmazonesStockPage() -> impl IntoView {
    let list = ListState::<Armazon>::new(Some("cantidad"));

    list.load(async {
        let frames = api::fetch_armazones().await?;
        Ok::<_, ApiError>(frames.into_iter().filter(Armazon::is_low_stock).collect())
    });

    view! {
        <PageFrame page_id="a001_armazon--report" category=PageCategory::Report>
            <PageHeader
                title="Armazones Stock"
                subtitle="Armazones con cantidad igual o menor a la mínima"
                back="/armazones"
            >
                {()}
            </PageHeader>
            <ArmazonTable list=list />
        </PageFrame>
    }
}
