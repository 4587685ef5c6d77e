use contracts::domain::a004_optica::OpticaLinkAction;
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use super::view_model::OpticaDetailsViewModel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button as UiButton, ButtonStyle, Checkbox, Input as UiInput, Select};
use crate::shared::icons::icon;
use crate::shared::notice::NoticeBar;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::shared::route_params::use_id_param;

#[component]
pub fn OpticaDetails() -> impl IntoView {
    let vm = OpticaDetailsViewModel::new();
    let id = use_id_param("id");

    vm.load_references();
    Effect::new(move |_| match id.get() {
        Some(id) => vm.load(id),
        None => vm.notice.error("Identificador de óptica inválido"),
    });

    let title = Signal::derive(move || {
        vm.optica
            .with(|o| o.as_ref().map(Entity::caption))
            .unwrap_or_else(|| "Óptica".to_string())
    });
    let busy = Signal::derive(move || vm.busy.get());

    view! {
        <PageFrame page_id="a004_optica--detail" category=PageCategory::Detail>
            <PageHeader title=title back="/opticas">
                {move || id.get().map(|id| view! {
                    <A href=format!("/opticas/{}/delegaciones", id) attr:class="button button--default-outline">
                        "Delegaciones"
                    </A>
                })}
                <UiButton
                    style=ButtonStyle::Edit
                    outline=true
                    on_click=Callback::new(move |_| vm.editing.update(|e| *e = !*e))
                >
                    {icon("edit")}
                    " Editar"
                </UiButton>
                <UiButton
                    style=ButtonStyle::Default
                    outline=true
                    disabled=busy
                    on_click=Callback::new(move |_| vm.toggle_activo_command())
                >
                    {move || if vm.optica.with(|o| o.as_ref().is_some_and(|o| o.activo)) { " Desactivar" } else { " Activar" }}
                </UiButton>
            </PageHeader>
            <NoticeBar handle=vm.notice />

            <Show when=move || vm.editing.get()>
                <form
                    class="form page__inline-form"
                    novalidate
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        vm.save_command();
                    }
                >
                    <UiInput
                        id="nombre"
                        label="Nombre de la Óptica"
                        value=vm.nombre
                        on_input=Callback::new(move |v| vm.nombre.set(v))
                        error=Signal::derive(move || vm.nombre_error.get())
                        required=true
                    />
                    <Checkbox
                        id="activo"
                        label="Activo"
                        checked=vm.activo
                        on_change=Callback::new(move |v| vm.activo.set(v))
                    />
                    <div class="form__actions">
                        <UiButton style=ButtonStyle::Add button_type="submit" disabled=busy>
                            {icon("save")}
                            " Guardar"
                        </UiButton>
                    </div>
                </form>
            </Show>

            {move || match vm.optica.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(optica) => view! {
                    <section class="details__section">
                        <h2 class="details__title">"Sindicatos"</h2>
                        <div class="details__add">
                            <Select
                                id="sindicato"
                                placeholder="Seleccione un sindicato"
                                value=vm.sindicato_choice
                                options=Signal::derive(move || vm.sindicato_options())
                                on_change=Callback::new(move |v| vm.sindicato_choice.set(v))
                            />
                            <UiButton
                                style=ButtonStyle::Add
                                disabled=busy
                                on_click=Callback::new(move |_| vm.link_command(OpticaLinkAction::AddSindicato, None))
                            >
                                {icon("plus")}
                                " Agregar"
                            </UiButton>
                        </div>
                        <Table>
                            <TableBody>
                                {optica.sindicatos.iter().map(|s| {
                                    let sid = s.id;
                                    let caption = s.caption();
                                    view! {
                                        <TableRow>
                                            <TableCell>{caption}</TableCell>
                                            <TableCell>
                                                <button
                                                    class="button button--cancel-outline"
                                                    title="Quitar"
                                                    disabled=move || busy.get()
                                                    on:click=move |_| vm.link_command(OpticaLinkAction::RemoveSindicato, Some(sid))
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    </section>

                    <section class="details__section">
                        <h2 class="details__title">"Delegaciones"</h2>
                        <div class="details__add">
                            <Select
                                id="delegacion"
                                placeholder="Seleccione una delegación"
                                value=vm.delegacion_choice
                                options=Signal::derive(move || vm.delegacion_options())
                                on_change=Callback::new(move |v| vm.delegacion_choice.set(v))
                            />
                            <UiButton
                                style=ButtonStyle::Add
                                disabled=busy
                                on_click=Callback::new(move |_| vm.link_command(OpticaLinkAction::AddDelegacion, None))
                            >
                                {icon("plus")}
                                " Agregar"
                            </UiButton>
                        </div>
                        <Table>
                            <TableBody>
                                {optica.delegaciones.iter().map(|d| {
                                    let did = d.id;
                                    let caption = d.caption();
                                    let href = format!("/opticas/{}/{}/sindicatos", optica.id, did);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <A href=href attr:class="table__link">{caption}</A>
                                            </TableCell>
                                            <TableCell>
                                                <button
                                                    class="button button--cancel-outline"
                                                    title="Quitar"
                                                    disabled=move || busy.get()
                                                    on:click=move |_| vm.link_command(OpticaLinkAction::RemoveDelegacion, Some(did))
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    </section>
                }
                .into_any(),
            }}
        </PageFrame>
    }
}
