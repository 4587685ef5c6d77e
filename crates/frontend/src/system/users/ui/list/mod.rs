mod state;

use contracts::system::users::{reset_password_for_year, Usuario};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::UsuarioDialog;
use crate::shared::api_utils::set_activo;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Button as UiButton, ButtonStyle};
use crate::shared::date_utils::current_year;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::notice::{confirm, NoticeBar, NoticeHandle};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::users::api;
use state::create_state;

#[component]
pub fn UsuariosPage() -> impl IntoView {
    let state = create_state();
    let list = state.list;
    let notice = NoticeHandle::new();

    let load = move || list.load(api::fetch_usuarios());

    load();
    spawn_local(async move {
        match api::fetch_roles().await {
            Ok(roles) => {
                let _ = state.roles.try_set(roles);
            }
            Err(e) => notice.error(format!("Error al cargar los roles: {}", e)),
        }
    });

    let reset_password = move |u: Usuario| {
        let year = current_year();
        let message = format!(
            "¿Estás seguro de reiniciar este usuario? Su nueva clave será {}.",
            reset_password_for_year(year)
        );
        if !confirm(&message) {
            return;
        }
        state.busy_id.set(Some(u.id));
        spawn_local(async move {
            match api::reset_password(u.id, year).await {
                Ok(()) => {
                    notice.success("Usuario reiniciado exitosamente");
                    load();
                }
                Err(e) => notice.error(format!("Error al reiniciar el usuario: {}", e)),
            }
            let _ = state.busy_id.try_set(None);
        });
    };

    let toggle_activo = move |u: Usuario| {
        let target = !u.activo;
        let action = if target { "activar" } else { "desactivar" };
        if !confirm(&format!("¿Estás seguro de {} este usuario?", action)) {
            return;
        }
        state.busy_id.set(Some(u.id));
        spawn_local(async move {
            match set_activo::<Usuario>(u.id, target).await {
                Ok(change) => {
                    notice.success(format!("Usuario {} correctamente", change.done_label()));
                    load();
                }
                Err(e) => notice.error(format!("Error al actualizar el usuario: {}", e)),
            }
            let _ = state.busy_id.try_set(None);
        });
    };

    let close_dialog = Callback::new(move |_: ()| {
        state.show_create.set(false);
        state.editing.set(None);
    });
    let after_save = Callback::new(move |_: ()| {
        close_dialog.run(());
        load();
    });

    let page = list.page();

    view! {
        <PageFrame page_id="usuarios--list" category=PageCategory::List>
            <PageHeader title="Usuarios">
                <Badge>{move || page.with(|p| p.total_count.to_string())}</Badge>
                <UiButton style=ButtonStyle::Add on_click=Callback::new(move |_| state.show_create.set(true))>
                    {icon("plus")}
                    " Nuevo"
                </UiButton>
                <UiButton
                    style=ButtonStyle::Default
                    outline=true
                    disabled=Signal::derive(move || list.loading.get())
                    on_click=Callback::new(move |_| load())
                >
                    {icon("refresh")}
                    {move || if list.loading.get() { " Cargando..." } else { " Actualizar" }}
                </UiButton>
            </PageHeader>

            <div class="page__content">
                <NoticeBar handle=notice />
                {move || list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <SearchInput
                        value=list.term()
                        on_change=Callback::new(move |term| list.set_term(term))
                        placeholder="Nombre, usuario o rol..."
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

                <Show
                    when=move || page.with(|p| p.total_count > 0) || list.loading.get()
                    fallback=|| view! { <p class="table__empty">"No hay usuarios disponibles"</p> }
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeaderCell label="Nombre" field="nombre" query=list.query />
                                    <SortableHeaderCell label="Usuario" field="usuario" query=list.query />
                                    <SortableHeaderCell label="Rol" field="rol" query=list.query />
                                    <TableHeaderCell>"Estado"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || page.get().items
                                    key=|u| (u.id, u.activo, u.nombre.clone(), u.usuario.clone(), u.rol.id)
                                    children=move |u: Usuario| {
                                        let id = u.id;
                                        let term = list.term();
                                        let nombre = u.nombre.clone();
                                        let usuario = u.usuario.clone();
                                        let for_edit = u.clone();
                                        let for_reset = u.clone();
                                        let for_toggle = u.clone();
                                        let busy = Signal::derive(move || state.busy_id.get() == Some(id));
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {move || highlight_matches(&nombre, &term.get())}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {move || highlight_matches(&usuario, &term.get())}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <span class="text-uppercase">{u.rol.nombre.clone()}</span>
                                                </TableCell>
                                                <TableCell>
                                                    {if u.activo {
                                                        view! { <Badge color=BadgeColor::Success>"Activo"</Badge> }.into_any()
                                                    } else {
                                                        view! { <Badge color=BadgeColor::Danger>"Inactivo"</Badge> }.into_any()
                                                    }}
                                                </TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <UiButton
                                                            style=ButtonStyle::Edit
                                                            outline=true
                                                            title="Editar"
                                                            on_click=Callback::new(move |_| state.editing.set(Some(for_edit.clone())))
                                                        >
                                                            {icon("edit")}
                                                        </UiButton>
                                                        <UiButton
                                                            style=ButtonStyle::Default
                                                            outline=true
                                                            title="Reiniciar clave"
                                                            disabled=busy
                                                            on_click=Callback::new(move |_| reset_password(for_reset.clone()))
                                                        >
                                                            {icon("refresh")}
                                                        </UiButton>
                                                        <UiButton
                                                            style=if u.activo { ButtonStyle::Cancel } else { ButtonStyle::Check }
                                                            outline=true
                                                            title=if u.activo { "Desactivar" } else { "Activar" }
                                                            disabled=busy
                                                            on_click=Callback::new(move |_| toggle_activo(for_toggle.clone()))
                                                        >
                                                            {if u.activo { icon("trash") } else { icon("restore") }}
                                                        </UiButton>
                                                    </div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>
                </Show>
            </div>

            {move || {
                let editing = state.editing.get();
                let creating = state.show_create.get();
                (creating || editing.is_some()).then(|| view! {
                    <UsuarioDialog
                        editing=editing
                        usuarios=list.rows.get_untracked()
                        roles=state.roles
                        notice=notice
                        on_close=close_dialog
                        on_saved=after_save
                    />
                })
            }}
        </PageFrame>
    }
}
