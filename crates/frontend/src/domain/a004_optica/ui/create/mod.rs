use contracts::domain::a004_optica::{validate_optica_nombre, Optica, OpticaDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::domain::a004_optica::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, ButtonStyle, Checkbox, Input};
use crate::shared::icons::icon;
use crate::shared::notice::{NoticeBar, NoticeHandle};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;

#[component]
pub fn OpticaCreatePage() -> impl IntoView {
    let navigate = use_navigate();
    let notice = NoticeHandle::new();
    let existing = RwSignal::new(Vec::<Optica>::new());
    let nombre = RwSignal::new(String::new());
    let activo = RwSignal::new(true);
    let nombre_error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);
    let created = RwSignal::new(false);

    // Needed for the duplicate-name check
    spawn_local(async move {
        match api::fetch_opticas().await {
            Ok(items) => {
                let _ = existing.try_set(items);
            }
            Err(e) => log::warn!("could not load ópticas for the name check: {}", e),
        }
    });

    Effect::new(move |_| {
        if created.get() {
            navigate("/opticas", Default::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = match existing.with_untracked(|others| validate_optica_nombre(&nombre.get_untracked(), others)) {
            Ok(value) => value,
            Err(message) => {
                nombre_error.set(Some(message));
                return;
            }
        };
        nombre_error.set(None);
        saving.set(true);
        let dto = OpticaDto {
            nombre: value,
            activo: activo.get_untracked(),
        };
        spawn_local(async move {
            match api::create_optica(&dto).await {
                Ok(()) => {
                    notice.success("Óptica creada exitosamente");
                    let _ = created.try_set(true);
                }
                Err(e) => {
                    let _ = saving.try_set(false);
                    notice.error(format!("Error al crear la óptica: {}", e));
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a004_optica--form" category=PageCategory::Form>
            <PageHeader title="Nueva Óptica" back="/opticas">
                {()}
            </PageHeader>
            <NoticeBar handle=notice />

            <form class="form" on:submit=on_submit novalidate>
                <Input
                    id="nombre"
                    label="Nombre de la Óptica"
                    placeholder="Ingrese el nombre de la óptica"
                    autocomplete="off"
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
                    <A href="/opticas" attr:class="button button--cancel-outline">
                        {icon("x")}
                        " Cancelar"
                    </A>
                    <Button style=ButtonStyle::Add button_type="submit" disabled=Signal::derive(move || saving.get())>
                        {icon("save")}
                        " Guardar"
                    </Button>
                </div>
            </form>
        </PageFrame>
    }
}
