use contracts::domain::a003_delegacion::Delegacion;
use contracts::domain::a004_optica::{group_by_sindicato, Optica, OpticaLink, OpticaLinkAction, SindicatoGroup};
use contracts::domain::common::Entity;
use contracts::shared::error::ApiError;
use contracts::shared::list_query::{ExpansionMode, ExpansionState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a004_optica::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, ListState, SearchInput};
use crate::shared::notice::{confirm, NoticeBar, NoticeHandle};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::shared::route_params::use_id_param;

fn group_key(group: &SindicatoGroup) -> (i64, Vec<i64>) {
    (group.id(), group.opticas.iter().map(|o| o.id).collect())
}

/// Sindicatos of one delegación with the ópticas serving them. Groups open
/// independently; the óptica from the route can be added to or removed
/// from each sindicato.
#[component]
pub fn OpticaSindicatosPage() -> impl IntoView {
    let optica_id = use_id_param("id");
    let delegacion_id = use_id_param("delegacion");
    let list = ListState::<SindicatoGroup>::new(Some("nombre"));
    let expansion = RwSignal::new(ExpansionState::new(ExpansionMode::Multiple));
    let optica = RwSignal::new(Option::<Optica>::None);
    let delegacion = RwSignal::new(Option::<Delegacion>::None);
    let notice = NoticeHandle::new();
    let busy = RwSignal::new(false);
    let page = list.page();
    let term = list.term();

    let load = move || {
        let Some(delegacion_key) = delegacion_id.get_untracked() else {
            notice.error("Identificador de delegación inválido");
            return;
        };
        let current = optica_id.get_untracked();
        list.load(async move {
            let rel = api::fetch_relations().await?;
            let _ = optica.try_set(current.and_then(|id| rel.opticas.iter().find(|o| o.id == id).cloned()));
            let _ = delegacion.try_set(rel.delegaciones.iter().find(|d| d.id == delegacion_key).cloned());
            Ok::<_, ApiError>(group_by_sindicato(&rel.sindicatos, &rel.opticas, Some(delegacion_key)))
        });
    };

    Effect::new(move |_| {
        optica_id.track();
        delegacion_id.track();
        load();
    });

    let link = move |action: OpticaLinkAction, sindicato_id: i64| {
        let Some(o) = optica.get_untracked() else {
            return;
        };
        let link = match OpticaLink::new(action, &o, sindicato_id) {
            Ok(link) => link,
            Err(message) => {
                notice.error(message);
                return;
            }
        };
        if action == OpticaLinkAction::RemoveSindicato
            && !confirm(&format!("¿Quitar el sindicato de la óptica {}?", o.nombre))
        {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            match api::apply_link(&link).await {
                Ok(()) => {
                    notice.success(link.action.success_message());
                    load();
                }
                Err(e) => notice.error(format!("Error al actualizar la óptica: {}", e)),
            }
            let _ = busy.try_set(false);
        });
    };

    let title = Signal::derive(move || match (optica.get(), delegacion.get()) {
        (Some(o), Some(d)) => format!("{} en {}", o.nombre, d.caption()),
        _ => "Sindicatos".to_string(),
    });
    let back = move || match optica_id.get() {
        Some(id) => format!("/opticas/{}/delegaciones", id),
        None => "/opticas".to_string(),
    };

    view! {
        <PageFrame page_id="a004_optica--sindicatos" category=PageCategory::List>
            <PageHeader title=title subtitle="Sindicatos de la delegación y sus ópticas">
                <A href=back attr:class="page__back">"← Volver"</A>
            </PageHeader>
            <NoticeBar handle=notice />

            <div class="page__content">
                {move || list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <div class="filter-panel">
                    <SearchInput value=term on_change=Callback::new(move |t| list.set_term(t)) />
                    <button class="button button--default-outline" on:click=move |_| expansion.update(|x| x.collapse_all())>
                        "Contraer todo"
                    </button>
                </div>

                <Show when=move || list.loading.get()>
                    <Spinner />
                </Show>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell attr:style="width: 40px;">""</TableHeaderCell>
                            <SortableHeaderCell label="Sindicato" field="nombre" query=list.query />
                            <SortableHeaderCell label="Ópticas" field="opticas" query=list.query />
                            <TableHeaderCell>"Esta óptica"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || page.get().items
                            key=group_key
                            children=move |group: SindicatoGroup| {
                                let id = group.id();
                                let is_open = move || expansion.with(|x| x.is_expanded(id));
                                let nombre = group.sindicato.nombre.clone();
                                let count = group.opticas.len();
                                let current = optica_id.get_untracked();
                                let linked = current.is_some_and(|oid| group.opticas.iter().any(|o| o.id == oid));
                                let opticas = StoredValue::new(group.opticas.clone());
                                view! {
                                    <TableRow
                                        class="table__row table__row--clickable"
                                        on:click=move |_| expansion.update(|x| x.toggle(id))
                                    >
                                        <TableCell>
                                            {move || if is_open() { icon("chevron-down") } else { icon("chevron-right") }}
                                        </TableCell>
                                        <TableCell>{move || highlight_matches(&nombre, &term.get())}</TableCell>
                                        <TableCell>{count}</TableCell>
                                        <TableCell>
                                            <button
                                                class=if linked { "button button--cancel-outline" } else { "button button--add-outline" }
                                                disabled=move || busy.get()
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    if linked {
                                                        link(OpticaLinkAction::RemoveSindicato, id);
                                                    } else {
                                                        link(OpticaLinkAction::AddSindicato, id);
                                                    }
                                                }
                                            >
                                                {if linked { "Quitar" } else { "Agregar" }}
                                            </button>
                                        </TableCell>
                                    </TableRow>
                                    <Show when=is_open>
                                        <TableRow class="table__row table__row--nested">
                                            <TableCell attr:colspan="4">
                                                {opticas.with_value(|opticas| nested_opticas(opticas, current))}
                                            </TableCell>
                                        </TableRow>
                                    </Show>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}

fn nested_opticas(opticas: &[Optica], current: Option<i64>) -> AnyView {
    if opticas.is_empty() {
        return view! { <div class="table__empty">"Ninguna óptica de esta delegación atiende al sindicato"</div> }.into_any();
    }
    view! {
        <ul class="nested-list">
            {opticas
                .iter()
                .map(|o| {
                    let class = if Some(o.id) == current { "nested-list__item nested-list__item--current" } else { "nested-list__item" };
                    let href = format!("/opticas/{}", o.id);
                    let nombre = o.nombre.clone();
                    view! {
                        <li class=class>
                            <A href=href>{nombre}</A>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_sindicato::Sindicato;

    #[test]
    fn test_group_key_changes_with_membership() {
        let sindicato = Sindicato {
            id: 4,
            nombre: "UOM".into(),
            activo: true,
            opticas: None,
            clientes: None,
            fichas: None,
        };
        let empty = SindicatoGroup {
            sindicato: sindicato.clone(),
            opticas: vec![],
        };
        let one = SindicatoGroup {
            sindicato,
            opticas: vec![Optica {
                id: 2,
                nombre: "Lux".into(),
                activo: true,
                sindicatos: vec![],
                delegaciones: vec![],
            }],
        };
        assert_ne!(group_key(&empty), group_key(&one));
    }
}
