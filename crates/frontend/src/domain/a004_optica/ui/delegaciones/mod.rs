use contracts::domain::a003_delegacion::Delegacion;
use contracts::domain::a004_optica::Optica;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a004_optica::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::notice::{NoticeBar, NoticeHandle};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::shared::route_params::use_id_param;

/// Delegaciones of one óptica; each leads to its sindicatos view
#[component]
pub fn OpticaDelegacionesPage() -> impl IntoView {
    let id = use_id_param("id");
    let notice = NoticeHandle::new();
    let optica = RwSignal::new(Option::<Optica>::None);

    Effect::new(move |_| {
        let Some(id) = id.get() else {
            notice.error("Identificador de óptica inválido");
            return;
        };
        spawn_local(async move {
            match api::fetch_optica(id).await {
                Ok(o) => {
                    let _ = optica.try_set(Some(o));
                }
                Err(e) => notice.error(format!("Error al cargar la óptica: {}", e)),
            }
        });
    });

    let title = Signal::derive(move || {
        optica
            .with(|o| o.as_ref().map(|o| format!("{}: delegaciones", o.nombre)))
            .unwrap_or_else(|| "Delegaciones".to_string())
    });
    let back = Signal::derive(move || id.get().map(|id| format!("/opticas/{}", id)).unwrap_or_else(|| "/opticas".into()));

    view! {
        <PageFrame page_id="a004_optica--delegaciones" category=PageCategory::List>
            <PageHeader title=title>
                <A href=move || back.get() attr:class="page__back">"← Volver"</A>
            </PageHeader>
            <NoticeBar handle=notice />

            {move || match optica.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(o) if o.delegaciones.is_empty() => view! {
                    <div class="table__empty">"Esta óptica no tiene delegaciones"</div>
                }
                .into_any(),
                Some(o) => {
                    let optica_id = o.id;
                    view! {
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Provincia"</TableHeaderCell>
                                    <TableHeaderCell>"Localidad"</TableHeaderCell>
                                    <TableHeaderCell>"Estado"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {o.delegaciones.into_iter().map(|d: Delegacion| view! {
                                    <TableRow>
                                        <TableCell>{d.provincia}</TableCell>
                                        <TableCell>{d.localidad}</TableCell>
                                        <TableCell>
                                            {if d.activo {
                                                view! { <Badge color=BadgeColor::Success>"Activo"</Badge> }.into_any()
                                            } else {
                                                view! { <Badge color=BadgeColor::Danger>"Inactivo"</Badge> }.into_any()
                                            }}
                                        </TableCell>
                                        <TableCell>
                                            <A
                                                href=format!("/opticas/{}/{}/sindicatos", optica_id, d.id)
                                                attr:class="table__link"
                                            >
                                                "Sindicatos"
                                            </A>
                                        </TableCell>
                                    </TableRow>
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    }
                    .into_any()
                }
            }}
        </PageFrame>
    }
}
