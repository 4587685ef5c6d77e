//! New-frame form.
//!
//! Codes are normalized while typing; submission validates, runs the
//! duplicate check and only then creates the record.

use contracts::domain::a001_armazon::{normalize_code, submit_new_armazon, ArmazonForm, SubmitError};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::a001_armazon::api::{self, HttpArmazonGateway};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, ButtonStyle, Checkbox, Input, Suggestions, Textarea};
use crate::shared::icons::icon;
use crate::shared::notice::{NoticeBar, NoticeHandle};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;

const MATERIALES_LIST: &str = "armazon-materiales";
const TIPOS_LIST: &str = "armazon-tipos";
const UBICACIONES_LIST: &str = "armazon-ubicaciones";

#[component]
pub fn ArmazonCreatePage() -> impl IntoView {
    let notice = NoticeHandle::new();
    let navigate = use_navigate();
    let created = RwSignal::new(false);
    Effect::new(move |_| {
        if created.get() {
            navigate("/armazones", Default::default());
        }
    });
    let on_success = Callback::new(move |_: ()| created.set(true));

    view! {
        <PageFrame page_id="a001_armazon--form" category=PageCategory::Form>
            <PageHeader title="Nuevo Armazón" back="/armazones">
                {()}
            </PageHeader>
            <NoticeBar handle=notice />
            <ArmazonCreateForm notice=notice on_success=on_success />
        </PageFrame>
    }
}

#[component]
pub fn ArmazonCreateForm(
    notice: NoticeHandle,
    on_success: Callback<()>,
    #[prop(optional)]
    on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let form = RwSignal::new(ArmazonForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let submit_error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    let materiales = RwSignal::new(Vec::<String>::new());
    let tipos = RwSignal::new(Vec::<String>::new());
    let ubicaciones = RwSignal::new(Vec::<String>::new());

    spawn_local(async move {
        let ([m, t, u], failures) = api::fetch_form_suggestions().await;
        let _ = materiales.try_set(m);
        let _ = tipos.try_set(t);
        let _ = ubicaciones.try_set(u);
        if !failures.is_empty() {
            notice.warning("No se pudieron cargar algunas sugerencias. Puede completar los campos manualmente.");
        }
    });

    let text = move |get: fn(&ArmazonForm) -> &String| Signal::derive(move || form.with(|f| get(f).clone()));
    let err = move |name: &'static str| Signal::derive(move || errors.with(|e| e.get(name).map(str::to_string)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        submitting.set(true);
        submit_error.set(None);
        errors.set(FieldErrors::new());

        spawn_local(async move {
            match submit_new_armazon(&HttpArmazonGateway, &current).await {
                Ok(outcome) => {
                    if let Some(warning) = outcome.warning {
                        notice.warning(warning);
                    } else {
                        notice.success("¡Armazón creado exitosamente!");
                    }
                    let _ = form.try_set(ArmazonForm::default());
                    on_success.run(());
                }
                Err(SubmitError::Invalid(field_errors)) => {
                    let _ = errors.try_set(field_errors);
                }
                Err(e) => {
                    log::error!("armazon create failed: {}", e);
                    let _ = submit_error.try_set(Some(e.to_string()));
                    notice.error("Error al crear el armazón");
                }
            }
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <form class="form form--grid" on:submit=on_submit novalidate>
            {move || submit_error.get().map(|e| view! {
                <div class="alert alert--error">{icon("alert")}<span>{e}</span></div>
            })}

            <Input
                id="codigoPatilla"
                label="Código Patilla"
                value=text(|f| &f.codigo_patilla)
                on_input=Callback::new(move |v: String| form.update(|f| f.codigo_patilla = normalize_code(&v)))
                error=err("codigoPatilla")
                required=true
            />
            <Input
                id="codigoInterno"
                label="Código Interno"
                value=text(|f| &f.codigo_interno)
                on_input=Callback::new(move |v: String| form.update(|f| f.codigo_interno = normalize_code(&v)))
                error=err("codigoInterno")
                required=true
            />
            <Input
                id="codigoColor"
                label="Código Color"
                value=text(|f| &f.codigo_color)
                on_input=Callback::new(move |v: String| form.update(|f| f.codigo_color = normalize_code(&v)))
                error=err("codigoColor")
                required=true
            />
            <Input
                id="letraColor"
                label="Letra Color"
                value=text(|f| &f.letra_color)
                on_input=Callback::new(move |v| form.update(|f| f.letra_color = v))
                error=err("letraColor")
            />
            <Textarea
                id="descripcion"
                label="Descripción"
                value=text(|f| &f.descripcion)
                on_input=Callback::new(move |v| form.update(|f| f.descripcion = v))
                error=err("descripcion")
                rows=3
            />
            <Input
                id="tipoArmazon"
                label="Tipo de Armazón"
                value=text(|f| &f.tipo_armazon)
                on_input=Callback::new(move |v| form.update(|f| f.tipo_armazon = v))
                list=TIPOS_LIST
                error=err("tipoArmazon")
                autocomplete="off"
                required=true
            />
            <Suggestions id=TIPOS_LIST options=tipos />
            <Input
                id="material"
                label="Material"
                value=text(|f| &f.material)
                on_input=Callback::new(move |v| form.update(|f| f.material = v))
                list=MATERIALES_LIST
                error=err("material")
                autocomplete="off"
                required=true
            />
            <Suggestions id=MATERIALES_LIST options=materiales />
            <Input
                id="ubicacion"
                label="Ubicación"
                value=text(|f| &f.ubicacion)
                on_input=Callback::new(move |v| form.update(|f| f.ubicacion = v))
                list=UBICACIONES_LIST
                error=err("ubicacion")
                autocomplete="off"
                required=true
            />
            <Suggestions id=UBICACIONES_LIST options=ubicaciones />
            <Input
                id="cantidad"
                label="Cantidad"
                input_type="number"
                value=text(|f| &f.cantidad)
                on_input=Callback::new(move |v| form.update(|f| f.cantidad = v))
                error=err("cantidad")
                required=true
            />
            <Input
                id="cantidadMinima"
                label="Cantidad Mínima"
                input_type="number"
                value=text(|f| &f.cantidad_minima)
                on_input=Callback::new(move |v| form.update(|f| f.cantidad_minima = v))
                error=err("cantidadMinima")
                required=true
            />
            <Input
                id="costo"
                label="Costo"
                input_type="number"
                value=text(|f| &f.costo)
                on_input=Callback::new(move |v| form.update(|f| f.costo = v))
                error=err("costo")
                required=true
            />
            <Input
                id="precioVenta"
                label="Precio de Venta"
                input_type="number"
                value=text(|f| &f.precio_venta)
                on_input=Callback::new(move |v| form.update(|f| f.precio_venta = v))
                error=err("precioVenta")
                required=true
            />
            <Checkbox
                id="activo"
                label="Activo"
                checked=Signal::derive(move || form.with(|f| f.activo))
                on_change=Callback::new(move |checked| form.update(|f| f.activo = checked))
            />

            <div class="form__actions">
                {on_cancel.map(|cancel| view! {
                    <Button style=ButtonStyle::Cancel outline=true on_click=Callback::new(move |_| cancel.run(()))>
                        "Cancelar"
                    </Button>
                })}
                <Button
                    style=ButtonStyle::Add
                    button_type="submit"
                    disabled=Signal::derive(move || submitting.get())
                >
                    {icon("save")}
                    {move || if submitting.get() { " Guardando..." } else { " Guardar Armazón" }}
                </Button>
            </div>
        </form>
    }
}
