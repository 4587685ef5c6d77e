//! One lens row of the create form.

use contracts::domain::a001_armazon::Armazon;
use contracts::domain::a005_tipo_lente::TipoLente;
use contracts::domain::a006_laboratorio::Laboratorio;
use contracts::domain::a007_estado::Estado;
use contracts::domain::a008_ficha::aggregate::fecha_envio_locked;
use contracts::domain::a008_ficha::{FichaForm, LenteRow};
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Select, Suggestions};

/// Free-text columns of a [`LenteRow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    EsferaOd,
    EsferaOi,
    CilindroOd,
    CilindroOi,
    EjeOd,
    EjeOi,
    CodArmazon,
    ColorArmazon,
    Laboratorio,
    TypeLente,
    Voucher,
    Adicional,
    CostoAdicional,
    CodBarra,
    FechaEnvio,
    NroPedido,
}

impl RowField {
    pub fn get(self, row: &LenteRow) -> &str {
        match self {
            RowField::EsferaOd => &row.esfera_od,
            RowField::EsferaOi => &row.esfera_oi,
            RowField::CilindroOd => &row.cilindro_od,
            RowField::CilindroOi => &row.cilindro_oi,
            RowField::EjeOd => &row.eje_od,
            RowField::EjeOi => &row.eje_oi,
            RowField::CodArmazon => &row.cod_armazon,
            RowField::ColorArmazon => &row.color_armazon,
            RowField::Laboratorio => &row.laboratorio,
            RowField::TypeLente => &row.type_lente,
            RowField::Voucher => &row.voucher,
            RowField::Adicional => &row.adicional,
            RowField::CostoAdicional => &row.costo_adicional,
            RowField::CodBarra => &row.cod_barra,
            RowField::FechaEnvio => &row.fecha_envio,
            RowField::NroPedido => &row.nro_pedido,
        }
    }

    pub fn get_mut(self, row: &mut LenteRow) -> &mut String {
        match self {
            RowField::EsferaOd => &mut row.esfera_od,
            RowField::EsferaOi => &mut row.esfera_oi,
            RowField::CilindroOd => &mut row.cilindro_od,
            RowField::CilindroOi => &mut row.cilindro_oi,
            RowField::EjeOd => &mut row.eje_od,
            RowField::EjeOi => &mut row.eje_oi,
            RowField::CodArmazon => &mut row.cod_armazon,
            RowField::ColorArmazon => &mut row.color_armazon,
            RowField::Laboratorio => &mut row.laboratorio,
            RowField::TypeLente => &mut row.type_lente,
            RowField::Voucher => &mut row.voucher,
            RowField::Adicional => &mut row.adicional,
            RowField::CostoAdicional => &mut row.costo_adicional,
            RowField::CodBarra => &mut row.cod_barra,
            RowField::FechaEnvio => &mut row.fecha_envio,
            RowField::NroPedido => &mut row.nro_pedido,
        }
    }
}

/// Reference lists shared by every row
#[derive(Clone, Copy)]
pub struct RowReferences {
    pub armazones: RwSignal<Vec<Armazon>>,
    pub laboratorios: RwSignal<Vec<Laboratorio>>,
    pub tipos_lente: RwSignal<Vec<TipoLente>>,
    pub estados: RwSignal<Vec<Estado>>,
}

impl RowReferences {
    pub fn new() -> Self {
        Self {
            armazones: RwSignal::new(Vec::new()),
            laboratorios: RwSignal::new(Vec::new()),
            tipos_lente: RwSignal::new(Vec::new()),
            estados: RwSignal::new(Vec::new()),
        }
    }

    pub fn first_estado(&self) -> Option<i64> {
        self.estados.with_untracked(|e| e.first().map(|e| e.id))
    }

    pub fn pasado_id(&self) -> Option<i64> {
        self.estados.with(|e| e.iter().find(|e| e.nombre == "Pasado").map(|e| e.id))
    }
}

fn row_value(form: RwSignal<FichaForm>, index: usize, field: RowField) -> Signal<String> {
    Signal::derive(move || {
        form.with(|f| f.lentes.get(index).map(|r| field.get(r).to_string()).unwrap_or_default())
    })
}

fn row_setter(form: RwSignal<FichaForm>, index: usize, field: RowField) -> Callback<String> {
    Callback::new(move |value: String| {
        form.update(|f| {
            if let Some(row) = f.lentes.get_mut(index) {
                *field.get_mut(row) = value;
            }
        })
    })
}

#[component]
pub fn LensRowEditor(form: RwSignal<FichaForm>, index: usize, refs: RowReferences) -> impl IntoView {
    let tipo = move || form.with(|f| f.lentes.get(index).map(|r| r.tipo.clone()).unwrap_or_default());
    let armazones_list = format!("armazones-list-{}", index);
    let field_id = move |name: &str| format!("lentes[{}].{}", index, name);

    let text = move |name: &'static str, label: &'static str, field: RowField| {
        view! {
            <Input
                id=field_id(name)
                label=label
                placeholder=label
                value=row_value(form, index, field)
                on_input=row_setter(form, index, field)
            />
        }
    };

    let estado_value = Signal::derive(move || {
        form.with(|f| {
            f.lentes
                .get(index)
                .and_then(|r| r.estado)
                .map(|id| id.to_string())
                .unwrap_or_default()
        })
    });
    let fecha_locked = Signal::derive(move || {
        let pasado = refs.pasado_id();
        form.with(|f| f.lentes.get(index).is_some_and(|r| fecha_envio_locked(r, pasado)))
    });

    view! {
        <fieldset class="lens-row">
            <legend class="lens-row__title">{tipo}</legend>
            <div class="lens-row__grid">
                <Input
                    id=field_id("codArmazon")
                    label="Armazón"
                    placeholder="Armazón"
                    list=armazones_list.clone()
                    value=row_value(form, index, RowField::CodArmazon)
                    on_input=row_setter(form, index, RowField::CodArmazon)
                />
                <Suggestions
                    id=armazones_list
                    options=Signal::derive(move || refs.armazones.with(|a| a.iter().map(Armazon::option_label).collect()))
                />
                {text("colorArmazon", "Color Armazón", RowField::ColorArmazon)}
                {text("nroPedido", "Nro Pedido", RowField::NroPedido)}
                <Select
                    id=field_id("laboratorio")
                    label="Laboratorio"
                    placeholder="Seleccione el laboratorio"
                    value=row_value(form, index, RowField::Laboratorio)
                    options=Signal::derive(move || refs.laboratorios.with(|l| l.iter().map(|l| (l.nombre.clone(), l.nombre.clone())).collect()))
                    on_change=row_setter(form, index, RowField::Laboratorio)
                />
                {text("esferaOd", "Esfera OD", RowField::EsferaOd)}
                {text("esferaOi", "Esfera OI", RowField::EsferaOi)}
                {text("cilindroOd", "Cilindro OD", RowField::CilindroOd)}
                {text("cilindroOi", "Cilindro OI", RowField::CilindroOi)}
                {text("ejeOd", "Eje OD", RowField::EjeOd)}
                {text("ejeOi", "Eje OI", RowField::EjeOi)}
                <Select
                    id=field_id("typeLente")
                    label="Tipo de Lente"
                    placeholder="Seleccione el tipo de lente"
                    value=row_value(form, index, RowField::TypeLente)
                    options=Signal::derive(move || refs.tipos_lente.with(|t| t.iter().map(|t| (t.nombre.clone(), t.nombre.clone())).collect()))
                    on_change=row_setter(form, index, RowField::TypeLente)
                />
                {text("voucher", "Voucher", RowField::Voucher)}
                <Select
                    id=field_id("estado")
                    label="Estado"
                    value=estado_value
                    options=Signal::derive(move || refs.estados.with(|e| e.iter().map(|e| (e.id.to_string(), e.nombre.clone())).collect()))
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| {
                            if let Some(row) = f.lentes.get_mut(index) {
                                row.estado = v.parse().ok();
                            }
                        })
                    })
                />
                {text("adicional", "Adicional", RowField::Adicional)}
                {text("costoAdicional", "Costo Adicional", RowField::CostoAdicional)}
                {text("codBarra", "Cód Barra", RowField::CodBarra)}
                <Input
                    id=field_id("fechaEnvio")
                    label="Fecha de Envío"
                    input_type="date"
                    value=row_value(form, index, RowField::FechaEnvio)
                    on_input=row_setter(form, index, RowField::FechaEnvio)
                    disabled=fecha_locked
                />
            </div>
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_field_reads_what_it_writes() {
        let mut row = LenteRow::blank("Lejos", None);
        *RowField::EsferaOd.get_mut(&mut row) = "-1.25".into();
        *RowField::CodArmazon.get_mut(&mut row) = "A1-R-P2-C3".into();
        assert_eq!(RowField::EsferaOd.get(&row), "-1.25");
        assert_eq!(RowField::EsferaOi.get(&row), "");
        assert_eq!(row.cod_armazon, "A1-R-P2-C3");
    }
}
