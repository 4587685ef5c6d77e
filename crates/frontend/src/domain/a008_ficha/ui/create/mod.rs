mod lens_row;

use contracts::domain::a001_armazon::Armazon;
use contracts::domain::a002_sindicato::Sindicato;
use contracts::domain::a003_delegacion::Delegacion;
use contracts::domain::a004_optica::Optica;
use contracts::domain::a005_tipo_lente::TipoLente;
use contracts::domain::a006_laboratorio::Laboratorio;
use contracts::domain::a007_estado::Estado;
use contracts::domain::a008_ficha::{FichaForm, LensTypeCode, MIN_DNI_LEN};
use contracts::domain::common::Entity;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::domain::a008_ficha::api::{self, load_reference};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, ButtonStyle, Checkbox, Input, Select, Textarea};
use crate::shared::date_utils::today_iso;
use crate::shared::icons::icon;
use crate::shared::notice::{NoticeBar, NoticeHandle};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use lens_row::{LensRowEditor, RowReferences};

fn entity_options<T: Entity>(items: &[T]) -> Vec<(String, String)> {
    items.iter().map(|i| (i.id().to_string(), i.caption())).collect()
}

fn tipos_options() -> Vec<(String, String)> {
    LensTypeCode::ALL
        .iter()
        .map(|c| (c.code().to_string(), c.label().to_string()))
        .collect()
}

#[component]
pub fn FichaCreatePage() -> impl IntoView {
    let navigate = use_navigate();
    let notice = NoticeHandle::new();
    let form = RwSignal::new(FichaForm::new(&today_iso()));
    let errors = RwSignal::new(FieldErrors::new());
    // Bumped on every lens-type change so the row editors are rebuilt
    let generation = RwSignal::new(0u32);
    let saving = RwSignal::new(false);
    let created = RwSignal::new(false);

    let opticas = RwSignal::new(Vec::<Optica>::new());
    let sindicatos = RwSignal::new(Vec::<Sindicato>::new());
    let delegaciones = RwSignal::new(Vec::<Delegacion>::new());
    let refs = RowReferences::new();

    load_reference::<Optica>(opticas, notice);
    load_reference::<Sindicato>(sindicatos, notice);
    load_reference::<Delegacion>(delegaciones, notice);
    load_reference::<Armazon>(refs.armazones, notice);
    load_reference::<Laboratorio>(refs.laboratorios, notice);
    load_reference::<Estado>(refs.estados, notice);
    load_reference::<TipoLente>(refs.tipos_lente, notice);

    // A lens type picked before the estados loaded leaves rows without one
    Effect::new(move |_| {
        let first = refs.estados.with(|e| e.first().map(|e| e.id));
        if first.is_some() {
            form.update(|f| f.fill_missing_estados(first));
        }
    });

    Effect::new(move |_| {
        if created.get() {
            navigate("/fichas", Default::default());
        }
    });

    let error = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)));

    let text = move |id: &'static str, label: &'static str, get: fn(&FichaForm) -> &String, set: fn(&mut FichaForm, String)| {
        view! {
            <Input
                id=id
                label=label
                placeholder=label
                value=Signal::derive(move || form.with(|f| get(f).clone()))
                on_input=Callback::new(move |v| form.update(|f| set(f, v)))
                error=error(id)
            />
        }
    };

    let flag = move |id: &'static str, label: &'static str, get: fn(&FichaForm) -> bool, set: fn(&mut FichaForm, bool)| {
        view! {
            <Checkbox
                id=id
                label=label
                checked=Signal::derive(move || form.with(get))
                on_change=Callback::new(move |v| form.update(|f| set(f, v)))
            />
        }
    };

    let select = move |id: &'static str, label: &'static str, placeholder: &'static str, options: Signal<Vec<(String, String)>>, get: fn(&FichaForm) -> &String, set: fn(&mut FichaForm, String)| {
        view! {
            <Select
                id=id
                label=label
                placeholder=placeholder
                value=Signal::derive(move || form.with(|f| get(f).clone()))
                options=options
                on_change=Callback::new(move |v| form.update(|f| set(f, v)))
                error=error(id)
            />
        }
    };

    let on_tipos = move |raw: String| match LensTypeCode::from_select(&raw) {
        Ok(code) => {
            let first_estado = refs.first_estado();
            form.update(|f| f.select_tipos(code, first_estado));
            generation.update(|g| *g += 1);
            errors.update(|e| e.remove("tipos"));
        }
        Err(message) => errors.update(|e| e.add("tipos", message)),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let ficha = match form.with_untracked(|f| f.to_ficha()) {
            Ok(ficha) => ficha,
            Err(found) => {
                log::debug!("ficha rejected: {}", found);
                errors.set(found);
                notice.error("Revise los campos marcados");
                return;
            }
        };
        errors.set(FieldErrors::new());
        saving.set(true);
        spawn_local(async move {
            match api::create_ficha(&ficha).await {
                Ok(()) => {
                    notice.success("Ficha creada correctamente");
                    let _ = created.try_set(true);
                }
                Err(e) => {
                    notice.error(format!("Error al crear la ficha: {}", e));
                    let _ = saving.try_set(false);
                }
            }
        });
    };

    let rows_visible = move || form.with(FichaForm::rows_visible);
    let validado = move || form.with(|f| f.validado);

    view! {
        <PageFrame page_id="a008_ficha--form" category=PageCategory::Form>
            <PageHeader title="Nueva Ficha" back="/fichas">
                <A href="/fichas" attr:class="button button--cancel-outline">
                    {icon("x")}
                </A>
            </PageHeader>
            <NoticeBar handle=notice />

            <form class="form form--wide" on:submit=on_submit novalidate>
                <div class="form__row">
                    <Input
                        id="fecha"
                        label="Fecha Pedido"
                        input_type="date"
                        value=Signal::derive(move || form.with(|f| f.fecha.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.fecha = v))
                        error=error("fecha")
                        required=true
                    />
                    {flag("esOptica", "¿Es de Óptica Propia?", |f| f.es_optica, |f, v| f.es_optica = v)}
                    <Select
                        id="tipos"
                        label="Tipos de Lente"
                        placeholder="Seleccionar"
                        value=Signal::derive(move || form.with(|f| f.tipos.map(|t| t.code().to_string()).unwrap_or_default()))
                        options=Signal::derive(tipos_options)
                        on_change=Callback::new(on_tipos)
                        error=error("tipos")
                        required=true
                    />
                </div>

                <div class="form__grid">
                    {select("sindicato", "Sindicato", "Seleccione el sindicato",
                        Signal::derive(move || sindicatos.with(|s| entity_options(s))),
                        |f| &f.sindicato, |f, v| f.sindicato = v)}
                    {select("delegacion", "Delegación", "Seleccione la delegación",
                        Signal::derive(move || delegaciones.with(|d| entity_options(d))),
                        |f| &f.delegacion, |f, v| f.delegacion = v)}
                    {select("optica", "Óptica", "Seleccione la óptica",
                        Signal::derive(move || opticas.with(|o| entity_options(o))),
                        |f| &f.optica, |f, v| f.optica = v)}
                    {text("voucher", "Voucher", |f| &f.voucher, |f, v| f.voucher = v)}
                    {flag("lentesEspeciales", "Lentes de Alto Índice / Especiales", |f| f.lentes_especiales, |f, v| f.lentes_especiales = v)}
                    {flag("autorizadoSinVoucher", "Autorizado sin Voucher", |f| f.autorizado_sin_voucher, |f, v| f.autorizado_sin_voucher = v)}
                    {text("beneficiario", "Beneficiario", |f| &f.beneficiario, |f, v| f.beneficiario = v)}
                    {text("dniBeneficiario", "DNI Beneficiario", |f| &f.dni_beneficiario, |f, v| f.dni_beneficiario = v)}
                    {text("titular", "Titular", |f| &f.titular, |f, v| f.titular = v)}
                    {text("nroAfiliado", "Nro Afiliado", |f| &f.nro_afiliado, |f, v| f.nro_afiliado = v)}
                    {flag("esTitular", "Es Titular", |f| f.es_titular, |f, v| f.es_titular = v)}
                </div>

                <div class="form__actions">
                    <Button
                        style=ButtonStyle::Check
                        outline=true
                        on_click=Callback::new(move |_| form.update(FichaForm::toggle_validado))
                    >
                        {icon("check")}
                        {move || if validado() { " Ocultar lentes" } else { " Validar" }}
                    </Button>
                </div>

                <Show when=move || validado() && !rows_visible()>
                    <div class="alert alert--warning">
                        {format!("El DNI del beneficiario debe tener al menos {} caracteres", MIN_DNI_LEN)}
                    </div>
                </Show>

                <Show when=rows_visible>
                    <For
                        each=move || {
                            let g = generation.get();
                            (0..form.with(|f| f.lentes.len())).map(move |i| (g, i)).collect::<Vec<_>>()
                        }
                        key=|pair| *pair
                        children=move |(_, index)| view! { <LensRowEditor form=form index=index refs=refs /> }
                    />
                </Show>

                <Textarea
                    id="comentario"
                    label="Comentario"
                    value=Signal::derive(move || form.with(|f| f.comentario.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.comentario = v))
                />

                <Show when=move || form.with(|f| f.es_optica)>
                    <div class="form__grid">
                        {text("seña", "Seña", |f| &f.sena, |f, v| f.sena = v)}
                        {text("saldo", "Saldo", |f| &f.saldo, |f, v| f.saldo = v)}
                        {text("telefono", "Teléfono", |f| &f.telefono, |f, v| f.telefono = v)}
                    </div>
                </Show>

                <div class="form__actions">
                    <Button style=ButtonStyle::Add button_type="submit" disabled=Signal::derive(move || saving.get())>
                        {icon("save")}
                        " Guardar Ficha"
                    </Button>
                </div>
            </form>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tipos_options_follow_codes() {
        let options = tipos_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], ("1".to_string(), "Lejos".to_string()));
        assert_eq!(options[3], ("4".to_string(), "Lejos y cerca".to_string()));
    }

    #[test]
    fn test_entity_options() {
        let estados = vec![Estado {
            id: 7,
            nombre: "Pasado".into(),
            activo: true,
        }];
        assert_eq!(entity_options(&estados), vec![("7".to_string(), "Pasado".to_string())]);
    }
}
