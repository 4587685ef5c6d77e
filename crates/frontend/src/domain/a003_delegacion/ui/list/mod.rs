use contracts::domain::a003_delegacion::{Delegacion, DelegacionForm, GeorefPlace};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::a003_delegacion::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Button as UiButton, ButtonStyle, Checkbox, Select};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, ListState, SearchInput};
use crate::shared::notice::{NoticeBar, NoticeHandle};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;

fn place_options(places: &[GeorefPlace], by_id: bool) -> Vec<(String, String)> {
    places
        .iter()
        .map(|p| {
            let value = if by_id { p.id.clone() } else { p.nombre.clone() };
            (value, p.nombre.clone())
        })
        .collect()
}

#[component]
pub fn DelegacionesPage() -> impl IntoView {
    let list = ListState::<Delegacion>::new(Some("provincia"));
    let notice = NoticeHandle::new();
    let navigate = use_navigate();
    let page = list.page();
    let term = list.term();

    let form_open = RwSignal::new(false);
    let form = RwSignal::new(DelegacionForm {
        activo: true,
        ..Default::default()
    });
    let field_errors = RwSignal::new(FieldErrors::new());
    let saving = RwSignal::new(false);

    let provincias = RwSignal::new(Vec::<GeorefPlace>::new());
    let localidades = RwSignal::new(Vec::<GeorefPlace>::new());
    let provincia_id = RwSignal::new(String::new());
    let loading_localidades = RwSignal::new(false);

    let load = move || list.load(api::fetch_delegaciones());
    load();

    // Provinces are only needed once the form is opened
    Effect::new(move |_| {
        if form_open.get() && provincias.with_untracked(|p| p.is_empty()) {
            spawn_local(async move {
                match api::fetch_provincias().await {
                    Ok(items) => {
                        let _ = provincias.try_set(items);
                    }
                    Err(e) => notice.error(format!("No se pudieron cargar las provincias: {}", e)),
                }
            });
        }
    });

    let on_provincia = move |id: String| {
        let nombre = provincias.with_untracked(|p| {
            p.iter()
                .find(|place| place.id == id)
                .map(|place| place.nombre.clone())
                .unwrap_or_default()
        });
        form.update(|f| {
            f.provincia = nombre;
            f.localidad.clear();
        });
        provincia_id.set(id.clone());
        localidades.set(Vec::new());
        if id.is_empty() {
            return;
        }
        loading_localidades.set(true);
        spawn_local(async move {
            let result = api::fetch_localidades(&id).await;
            // Ignore answers for a province that is no longer selected
            if provincia_id.try_get_untracked().as_deref() != Some(id.as_str()) {
                return;
            }
            match result {
                Ok(items) => {
                    let _ = localidades.try_set(items);
                }
                Err(e) => notice.error(format!("No se pudieron cargar las localidades: {}", e)),
            }
            let _ = loading_localidades.try_set(false);
        });
    };

    let reset_form = move || {
        form.set(DelegacionForm {
            activo: true,
            ..Default::default()
        });
        provincia_id.set(String::new());
        localidades.set(Vec::new());
        field_errors.set(FieldErrors::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = match form.with_untracked(|f| f.validate()) {
            Ok(dto) => dto,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(FieldErrors::new());
        saving.set(true);
        spawn_local(async move {
            match api::create_delegacion(&dto).await {
                Ok(()) => {
                    notice.success("Delegación agregada exitosamente");
                    reset_form();
                    let _ = form_open.try_set(false);
                    load();
                }
                Err(e) => notice.error(format!("Error al crear la delegación: {}", e)),
            }
            let _ = saving.try_set(false);
        });
    };

    let field_error = move |field: &'static str| {
        Signal::derive(move || field_errors.with(|e| e.get(field).map(str::to_string)))
    };

    view! {
        <PageFrame page_id="a003_delegacion--list" category=PageCategory::List>
            <PageHeader title="Delegaciones">
                <UiButton
                    style=ButtonStyle::Add
                    outline=true
                    on_click=Callback::new(move |_| form_open.update(|open| *open = !*open))
                >
                    {icon("plus")}
                    " Nueva Delegación"
                </UiButton>
            </PageHeader>

            <NoticeBar handle=notice />

            <Show when=move || form_open.get()>
                <form class="form page__inline-form" on:submit=on_submit novalidate>
                    <h2 class="form__title">"Agregar Delegación"</h2>
                    <Select
                        id="provincia"
                        label="Provincia"
                        placeholder="Seleccione una provincia"
                        value=provincia_id
                        options=Signal::derive(move || provincias.with(|p| place_options(p, true)))
                        on_change=Callback::new(on_provincia)
                        error=field_error("provincia")
                        required=true
                    />
                    <Select
                        id="localidad"
                        label="Localidad"
                        placeholder="Seleccione una localidad"
                        value=Signal::derive(move || form.with(|f| f.localidad.clone()))
                        options=Signal::derive(move || localidades.with(|l| place_options(l, false)))
                        on_change=Callback::new(move |v| form.update(|f| f.localidad = v))
                        error=field_error("localidad")
                        disabled=Signal::derive(move || provincia_id.get().is_empty() || loading_localidades.get())
                        required=true
                    />
                    <Checkbox
                        id="activo"
                        label="Activo"
                        checked=Signal::derive(move || form.with(|f| f.activo))
                        on_change=Callback::new(move |v| form.update(|f| f.activo = v))
                    />
                    <div class="form__actions">
                        <UiButton
                            style=ButtonStyle::Cancel
                            outline=true
                            on_click=Callback::new(move |_| {
                                reset_form();
                                form_open.set(false);
                            })
                        >
                            "Cancelar"
                        </UiButton>
                        <UiButton style=ButtonStyle::Add button_type="submit" disabled=Signal::derive(move || saving.get())>
                            {icon("save")}
                            " Guardar"
                        </UiButton>
                    </div>
                </form>
            </Show>

            <div class="page__content">
                {move || list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <div class="filter-panel">
                    <SearchInput value=term on_change=Callback::new(move |t| list.set_term(t)) />
                    <PaginationControls
                        current_page=Signal::derive(move || page.with(|p| p.page))
                        total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                        total_count=Signal::derive(move || page.with(|p| p.total_count))
                        page_size=Signal::derive(move || page.with(|p| p.page_size))
                        on_page_change=Callback::new(move |p| list.go_to(p))
                        on_page_size_change=Callback::new(move |s| list.set_page_size(s))
                    />
                </div>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Provincia" field="provincia" query=list.query />
                            <SortableHeaderCell label="Localidad" field="localidad" query=list.query />
                            <TableHeaderCell>"Estado"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || page.get().items
                            key=|d| (d.id, d.activo)
                            children=move |d: Delegacion| {
                                let href = format!("/delegaciones/{}", d.id);
                                let navigate = navigate.clone();
                                let provincia = d.provincia.clone();
                                let localidad = d.localidad.clone();
                                view! {
                                    <TableRow
                                        class="table__row table__row--clickable"
                                        on:click=move |_| navigate(&href, Default::default())
                                    >
                                        <TableCell>{move || highlight_matches(&provincia, &term.get())}</TableCell>
                                        <TableCell>{move || highlight_matches(&localidad, &term.get())}</TableCell>
                                        <TableCell>
                                            {if d.activo {
                                                view! { <Badge color=BadgeColor::Success>"Activo"</Badge> }.into_any()
                                            } else {
                                                view! { <Badge color=BadgeColor::Danger>"Inactivo"</Badge> }.into_any()
                                            }}
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_options_value_source() {
        let places = vec![GeorefPlace {
            id: "14".into(),
            nombre: "Córdoba".into(),
        }];
        assert_eq!(place_options(&places, true), vec![("14".to_string(), "Córdoba".to_string())]);
        assert_eq!(place_options(&places, false), vec![("Córdoba".to_string(), "Córdoba".to_string())]);
    }
}
