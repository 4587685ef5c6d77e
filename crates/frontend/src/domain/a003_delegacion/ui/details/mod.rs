use contracts::domain::a003_delegacion::Delegacion;
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_delegacion::api;
use crate::shared::api_utils::set_activo;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, ButtonStyle};
use crate::shared::icons::icon;
use crate::shared::notice::{confirm, NoticeBar, NoticeHandle};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::shared::route_params::use_id_param;

#[component]
pub fn DelegacionDetails() -> impl IntoView {
    let id = use_id_param("id");
    let notice = NoticeHandle::new();
    let delegacion = RwSignal::new(Option::<Delegacion>::None);
    let busy = RwSignal::new(false);

    let load = move |id: i64| {
        spawn_local(async move {
            match api::fetch_delegacion(id).await {
                Ok(d) => {
                    let _ = delegacion.try_set(Some(d));
                }
                Err(e) => notice.error(format!("Error al cargar la delegación: {}", e)),
            }
        });
    };

    Effect::new(move |_| match id.get() {
        Some(id) => load(id),
        None => notice.error("Identificador de delegación inválido"),
    });

    let toggle = move |_| {
        let Some(d) = delegacion.get_untracked() else {
            return;
        };
        let question = if d.activo {
            format!("¿Desactivar la delegación {}?", d.caption())
        } else {
            format!("¿Activar la delegación {}?", d.caption())
        };
        if !confirm(&question) {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            match set_activo::<Delegacion>(d.id, !d.activo).await {
                Ok(change) => {
                    notice.success(format!("Delegación {} correctamente", change.done_label()));
                    load(d.id);
                }
                Err(e) => notice.error(format!("Error al actualizar el estado: {}", e)),
            }
            let _ = busy.try_set(false);
        });
    };

    let title = Signal::derive(move || {
        delegacion
            .with(|d| d.as_ref().map(Entity::caption))
            .unwrap_or_else(|| "Delegación".to_string())
    });

    view! {
        <PageFrame page_id="a003_delegacion--detail" category=PageCategory::Detail>
            <PageHeader title=title back="/delegaciones">
                {move || delegacion.get().map(|d| view! {
                    <Button
                        style=if d.activo { ButtonStyle::Cancel } else { ButtonStyle::Check }
                        outline=true
                        disabled=Signal::derive(move || busy.get())
                        on_click=Callback::new(toggle)
                    >
                        {if d.activo { " Desactivar" } else { " Activar" }}
                    </Button>
                })}
            </PageHeader>
            <NoticeBar handle=notice />

            {move || match delegacion.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(d) => view! {
                    <dl class="details__grid">
                        <dt>"Provincia"</dt>
                        <dd>{d.provincia.clone()}</dd>
                        <dt>"Localidad"</dt>
                        <dd>{d.localidad.clone()}</dd>
                        <dt>"Estado"</dt>
                        <dd>
                            {if d.activo {
                                view! { <Badge color=BadgeColor::Success>"Activo"</Badge> }.into_any()
                            } else {
                                view! { <Badge color=BadgeColor::Danger>"Inactivo"</Badge> }.into_any()
                            }}
                        </dd>
                    </dl>
                }
                .into_any(),
            }}
        </PageFrame>
    }
}
