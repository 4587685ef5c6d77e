use super::view_model::SindicatoDetailsViewModel;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, ButtonStyle, Checkbox, Input};
use crate::shared::icons::icon;
use crate::shared::notice::NoticeBar;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::shared::route_params::use_id_param;

#[component]
pub fn SindicatoDetails() -> impl IntoView {
    let vm = SindicatoDetailsViewModel::new();
    let id = use_id_param("id");
    let navigate = use_navigate();

    Effect::new(move |_| match id.get() {
        Some(id) => vm.load(id),
        None => vm.notice.error("Identificador de sindicato inválido"),
    });

    Effect::new(move |_| {
        if vm.removed.get() {
            navigate("/sindicatos", Default::default());
        }
    });

    let title = Signal::derive(move || {
        vm.sindicato
            .with(|s| s.as_ref().map(|s| s.nombre.clone()))
            .unwrap_or_else(|| "Sindicato".to_string())
    });
    let busy = Signal::derive(move || vm.busy.get());

    view! {
        <PageFrame page_id="a002_sindicato--detail" category=PageCategory::Detail>
            <PageHeader title=title back="/sindicatos">
                <Button style=ButtonStyle::Edit outline=true on_click=Callback::new(move |_| vm.start_edit())>
                    {icon("edit")}
                    " Editar Sindicato"
                </Button>
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
                    <Input
                        id="nombre"
                        label="Nombre del Sindicato"
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
                        <Button style=ButtonStyle::Cancel outline=true on_click=Callback::new(move |_| vm.editing.set(false))>
                            {icon("x")}
                            " Cancelar"
                        </Button>
                        <Button style=ButtonStyle::Add button_type="submit" disabled=busy>
                            {icon("save")}
                            " Guardar"
                        </Button>
                    </div>
                </form>
            </Show>

            {move || vm.sindicato.get().map(|s| view! {
                <dl class="details__grid">
                    <dt>"Estado"</dt>
                    <dd>{if s.activo { "Activo" } else { "Inactivo" }}</dd>
                    <dt>"Ópticas"</dt>
                    <dd>{s.opticas_count()}</dd>
                    <dt>"Clientes"</dt>
                    <dd>{s.clientes_count()}</dd>
                    <dt>"Fichas"</dt>
                    <dd>{s.fichas_count()}</dd>
                </dl>
                <div class="details__actions">
                    <Button
                        style=if s.activo { ButtonStyle::Cancel } else { ButtonStyle::Check }
                        outline=true
                        disabled=busy
                        on_click=Callback::new(move |_| vm.toggle_activo_command())
                    >
                        {if s.activo { icon("x") } else { icon("check") }}
                        {if s.activo { " Desactivar" } else { " Activar" }}
                    </Button>
                    <Button
                        style=ButtonStyle::Cancel
                        disabled=busy
                        on_click=Callback::new(move |_| vm.remove_command())
                    >
                        {icon("trash")}
                        " Eliminar"
                    </Button>
                </div>
            })}
        </PageFrame>
    }
}
