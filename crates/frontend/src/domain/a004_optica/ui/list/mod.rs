use contracts::domain::a003_delegacion::Delegacion;
use contracts::domain::a004_optica::{group_by_delegacion, DelegacionGroup, Optica};
use contracts::domain::common::Entity;
use contracts::shared::error::ApiError;
use contracts::shared::list_query::{ExpansionMode, ExpansionState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a004_optica::api;
use crate::shared::api_utils::{fetch_all, set_activo};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, ListState, SearchInput};
use crate::shared::notice::{confirm, NoticeBar, NoticeHandle};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;

/// Key of a group row; changes whenever a child óptica does
fn group_key(group: &DelegacionGroup) -> (i64, bool, Vec<(i64, bool)>) {
    (
        group.id(),
        group.delegacion.activo,
        group.opticas.iter().map(|o| (o.id, o.activo)).collect(),
    )
}

/// Ópticas grouped by delegación; one group open at a time
#[component]
pub fn OpticasPage() -> impl IntoView {
    let list = ListState::<DelegacionGroup>::new(Some("provincia"));
    let expansion = RwSignal::new(ExpansionState::new(ExpansionMode::Single));
    let notice = NoticeHandle::new();
    let busy_id = RwSignal::new(Option::<i64>::None);
    let page = list.page();
    let term = list.term();

    let load = move || {
        list.load(async {
            let opticas = api::fetch_opticas().await?;
            let delegaciones = fetch_all::<Delegacion>().await?;
            Ok::<_, ApiError>(group_by_delegacion(&delegaciones, &opticas))
        })
    };
    load();

    let toggle_optica = move |optica: Optica| {
        let question = if optica.activo {
            format!("¿Desactivar la óptica {}?", optica.nombre)
        } else {
            format!("¿Activar la óptica {}?", optica.nombre)
        };
        if !confirm(&question) {
            return;
        }
        busy_id.set(Some(optica.id));
        spawn_local(async move {
            match set_activo::<Optica>(optica.id, !optica.activo).await {
                Ok(change) => {
                    notice.success(format!("Óptica {} correctamente", change.done_label()));
                    load();
                }
                Err(e) => notice.error(format!("Error al actualizar el estado de la óptica: {}", e)),
            }
            let _ = busy_id.try_set(None);
        });
    };

    view! {
        <PageFrame page_id="a004_optica--list" category=PageCategory::List>
            <PageHeader title="Ópticas por Delegación">
                <A href="/opticas/crear" attr:class="button button--add-outline">
                    {icon("plus")}
                    " Nueva Óptica"
                </A>
            </PageHeader>
            <NoticeBar handle=notice />

            <div class="page__content">
                {move || list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <div class="filter-panel">
                    <SearchInput
                        value=term
                        on_change=Callback::new(move |t| {
                            list.set_term(t);
                            expansion.update(|x| x.collapse_all());
                        })
                        placeholder="Buscar delegación u óptica..."
                    />
                    <PaginationControls
                        current_page=Signal::derive(move || page.with(|p| p.page))
                        total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                        total_count=Signal::derive(move || page.with(|p| p.total_count))
                        page_size=Signal::derive(move || page.with(|p| p.page_size))
                        on_page_change=Callback::new(move |p| list.go_to(p))
                        on_page_size_change=Callback::new(move |s| list.set_page_size(s))
                    />
                </div>

                <Show when=move || list.loading.get()>
                    <Spinner />
                </Show>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell attr:style="width: 40px;">""</TableHeaderCell>
                            <SortableHeaderCell label="Provincia" field="provincia" query=list.query />
                            <SortableHeaderCell label="Localidad" field="localidad" query=list.query />
                            <SortableHeaderCell label="Ópticas" field="opticas" query=list.query />
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || page.get().items
                            key=group_key
                            children=move |group: DelegacionGroup| {
                                let id = group.id();
                                let is_open = move || expansion.with(|x| x.is_expanded(id));
                                let provincia = group.delegacion.provincia.clone();
                                let localidad = group.delegacion.localidad.clone();
                                let count = group.opticas.len();
                                let opticas = StoredValue::new(group.opticas.clone());
                                view! {
                                    <TableRow
                                        class="table__row table__row--clickable"
                                        on:click=move |_| expansion.update(|x| x.toggle(id))
                                    >
                                        <TableCell>
                                            {move || if is_open() { icon("chevron-down") } else { icon("chevron-right") }}
                                        </TableCell>
                                        <TableCell>{move || highlight_matches(&provincia, &term.get())}</TableCell>
                                        <TableCell>{move || highlight_matches(&localidad, &term.get())}</TableCell>
                                        <TableCell>{count}</TableCell>
                                    </TableRow>
                                    <Show when=is_open>
                                        <TableRow class="table__row table__row--nested">
                                            <TableCell attr:colspan="4">
                                                {optica_table(opticas.get_value(), term, busy_id, toggle_optica)}
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

fn optica_table<F>(
    opticas: Vec<Optica>,
    term: Signal<String>,
    busy_id: RwSignal<Option<i64>>,
    on_toggle: F,
) -> AnyView
where
    F: Fn(Optica) + Copy + Send + Sync + 'static,
{
    if opticas.is_empty() {
        return view! { <div class="table__empty">"No hay ópticas en esta delegación"</div> }.into_any();
    }
    view! {
        <Table attr:class="table--nested">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Óptica"</TableHeaderCell>
                    <TableHeaderCell>"Sindicatos"</TableHeaderCell>
                    <TableHeaderCell>"Estado"</TableHeaderCell>
                    <TableHeaderCell>"Acciones"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {opticas
                    .into_iter()
                    .map(|optica| {
                        let id = optica.id;
                        let nombre = optica.caption();
                        let sindicatos = optica.sindicatos.len();
                        let activo = optica.activo;
                        let href = format!("/opticas/{}", id);
                        let target = optica.clone();
                        view! {
                            <TableRow>
                                <TableCell>
                                    <A href=href attr:class="table__link">
                                        {move || highlight_matches(&nombre, &term.get())}
                                    </A>
                                </TableCell>
                                <TableCell>{sindicatos}</TableCell>
                                <TableCell>
                                    {if activo {
                                        view! { <Badge color=BadgeColor::Success>"Activo"</Badge> }.into_any()
                                    } else {
                                        view! { <Badge color=BadgeColor::Danger>"Inactivo"</Badge> }.into_any()
                                    }}
                                </TableCell>
                                <TableCell>
                                    <button
                                        class=if activo { "button button--cancel-outline" } else { "button button--check-outline" }
                                        title=if activo { "Desactivar" } else { "Activar" }
                                        disabled=move || busy_id.get() == Some(id)
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            on_toggle(target.clone());
                                        }
                                    >
                                        {if activo { icon("x") } else { icon("check") }}
                                    </button>
                                </TableCell>
                            </TableRow>
                        }
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_key_tracks_children() {
        let delegacion = Delegacion {
            id: 3,
            provincia: "Córdoba".into(),
            localidad: "Capital".into(),
            activo: true,
        };
        let optica = Optica {
            id: 9,
            nombre: "Lux".into(),
            activo: true,
            sindicatos: vec![],
            delegaciones: vec![delegacion.clone()],
        };
        let before = group_key(&DelegacionGroup {
            delegacion: delegacion.clone(),
            opticas: vec![optica.clone()],
        });
        let after = group_key(&DelegacionGroup {
            delegacion,
            opticas: vec![Optica { activo: false, ..optica }],
        });
        assert_ne!(before, after);
        assert_eq!(before.0, 3);
    }
}
