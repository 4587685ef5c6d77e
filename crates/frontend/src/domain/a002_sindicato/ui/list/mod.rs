use contracts::domain::a002_sindicato::{validate_nombre, Sindicato, SindicatoDto};
use contracts::domain::common::collection_path;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::shared::api_utils::{fetch_all, post};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Button as UiButton, ButtonStyle, Checkbox, Input as UiInput};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, ListState, SearchInput};
use crate::shared::notice::{NoticeBar, NoticeHandle};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;

#[component]
pub fn SindicatosPage() -> impl IntoView {
    let list = ListState::<Sindicato>::new(Some("nombre"));
    let notice = NoticeHandle::new();
    let navigate = use_navigate();
    let page = list.page();
    let term = list.term();

    let form_open = RwSignal::new(false);
    let nombre = RwSignal::new(String::new());
    let activo = RwSignal::new(true);
    let nombre_error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let load = move || list.load(fetch_all::<Sindicato>());
    load();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = match validate_nombre(&nombre.get_untracked()) {
            Ok(value) => value,
            Err(message) => {
                nombre_error.set(Some(message));
                return;
            }
        };
        nombre_error.set(None);
        saving.set(true);
        let dto = SindicatoDto {
            nombre: value,
            activo: activo.get_untracked(),
        };
        spawn_local(async move {
            match post(&collection_path::<Sindicato>(), &dto).await {
                Ok(()) => {
                    notice.success("Sindicato creado correctamente");
                    let _ = nombre.try_set(String::new());
                    let _ = activo.try_set(true);
                    let _ = form_open.try_set(false);
                    load();
                }
                Err(e) => notice.error(format!("Error al crear el sindicato: {}", e)),
            }
            let _ = saving.try_set(false);
        });
    };

    view! {
        <PageFrame page_id="a002_sindicato--list" category=PageCategory::List>
            <PageHeader title="Sindicatos">
                <UiButton
                    style=ButtonStyle::Add
                    outline=true
                    on_click=Callback::new(move |_| form_open.update(|open| *open = !*open))
                >
                    {icon("plus")}
                    " Nuevo Sindicato"
                </UiButton>
            </PageHeader>

            <NoticeBar handle=notice />

            <Show when=move || form_open.get()>
                <form class="form page__inline-form" on:submit=on_submit novalidate>
                    <h2 class="form__title">"Nuevo Sindicato"</h2>
                    <UiInput
                        id="nombre"
                        label="Nombre del Sindicato"
                        placeholder="Ingrese el nombre del sindicato"
                        value=nombre
                        on_input=Callback::new(move |v| nombre.set(v))
                        error=Signal::derive(move || nombre_error.get())
                        required=true
                    />
                    <Checkbox
                        id="activo"
                        label="Activo"
                        checked=activo
                        on_change=Callback::new(move |v| activo.set(v))
                    />
                    <div class="form__actions">
                        <UiButton style=ButtonStyle::Cancel outline=true on_click=Callback::new(move |_| form_open.set(false))>
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
                            <SortableHeaderCell label="Nombre" field="nombre" query=list.query />
                            <SortableHeaderCell label="Estado" field="activo" query=list.query />
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || page.get().items
                            key=|s| (s.id, s.activo, s.nombre.clone())
                            children=move |s: Sindicato| {
                                let href = format!("/sindicatos/{}", s.id);
                                let navigate = navigate.clone();
                                let nombre = s.nombre.clone();
                                view! {
                                    <TableRow
                                        class="table__row table__row--clickable"
                                        on:click=move |_| navigate(&href, Default::default())
                                    >
                                        <TableCell>
                                            {move || highlight_matches(&nombre, &term.get())}
                                        </TableCell>
                                        <TableCell>
                                            {if s.activo {
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
