use contracts::domain::a002_sindicato::Sindicato;
use contracts::domain::a003_delegacion::Delegacion;
use contracts::domain::a004_optica::Optica;
use contracts::domain::a007_estado::Estado;
use contracts::domain::a008_ficha::{Ficha, LenteRow};
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a008_ficha::api::{self, load_reference};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::notice::{NoticeBar, NoticeHandle};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::shared::route_params::use_id_param;

/// Caption of the referenced entity, or `#id` when it is not loaded
fn caption_of<T: Entity>(items: &[T], id: Option<i64>) -> String {
    match id {
        None => "-".to_string(),
        Some(id) => items
            .iter()
            .find(|i| i.id() == id)
            .map(Entity::caption)
            .unwrap_or_else(|| format!("#{}", id)),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Sí"
    } else {
        "No"
    }
}

/// Read-only view of a ficha
#[component]
pub fn FichaDetails() -> impl IntoView {
    let id = use_id_param("id");
    let notice = NoticeHandle::new();
    let ficha = RwSignal::new(Option::<Ficha>::None);
    let sindicatos = RwSignal::new(Vec::<Sindicato>::new());
    let delegaciones = RwSignal::new(Vec::<Delegacion>::new());
    let opticas = RwSignal::new(Vec::<Optica>::new());
    let estados = RwSignal::new(Vec::<Estado>::new());

    load_reference::<Sindicato>(sindicatos, notice);
    load_reference::<Delegacion>(delegaciones, notice);
    load_reference::<Optica>(opticas, notice);
    load_reference::<Estado>(estados, notice);

    Effect::new(move |_| {
        let Some(id) = id.get() else {
            notice.error("Identificador de ficha inválido");
            return;
        };
        spawn_local(async move {
            match api::fetch_ficha(id).await {
                Ok(f) => {
                    let _ = ficha.try_set(Some(f));
                }
                Err(e) => notice.error(format!("Error al cargar la ficha: {}", e)),
            }
        });
    });

    let title = Signal::derive(move || {
        ficha
            .with(|f| f.as_ref().map(|f| format!("Ficha {}", f.id())))
            .unwrap_or_else(|| "Ficha".to_string())
    });

    view! {
        <PageFrame page_id="a008_ficha--detail" category=PageCategory::Detail>
            <PageHeader title=title subtitle=Signal::derive(move || ficha.with(|f| f.as_ref().map(Entity::caption))) back="/fichas">
                {()}
            </PageHeader>
            <NoticeBar handle=notice />

            {move || match ficha.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(f) => {
                    let (sindicato, delegacion, optica) = (f.sindicato, f.delegacion, f.optica);
                    view! {
                    <dl class="details__grid">
                        <dt>"Fecha"</dt>
                        <dd>{format_date(&f.fecha)}</dd>
                        <dt>"Tipo de lente"</dt>
                        <dd>{f.tipos.map(|t| t.label()).unwrap_or("-")}</dd>
                        <dt>"Sindicato"</dt>
                        <dd>{move || sindicatos.with(|s| caption_of(s, sindicato))}</dd>
                        <dt>"Delegación"</dt>
                        <dd>{move || delegaciones.with(|d| caption_of(d, delegacion))}</dd>
                        <dt>"Óptica"</dt>
                        <dd>{move || opticas.with(|o| caption_of(o, optica))}</dd>
                        <dt>"Voucher"</dt>
                        <dd>{f.voucher.clone()}</dd>
                        <dt>"Autorizado sin voucher"</dt>
                        <dd>{yes_no(f.autorizado_sin_voucher)}</dd>
                        <dt>"Lentes especiales"</dt>
                        <dd>{yes_no(f.lentes_especiales)}</dd>
                        <dt>"Titular"</dt>
                        <dd>{f.titular.clone()}</dd>
                        <dt>"Nro Afiliado"</dt>
                        <dd>{f.nro_afiliado.clone()}</dd>
                        <dt>"Es titular"</dt>
                        <dd>{yes_no(f.es_titular)}</dd>
                        <dt>"Comentario"</dt>
                        <dd>{f.comentario.clone()}</dd>
                    </dl>
                    {f.es_optica.then(|| view! {
                        <dl class="details__grid">
                            <dt>"Seña"</dt>
                            <dd>{f.sena.clone()}</dd>
                            <dt>"Saldo"</dt>
                            <dd>{f.saldo.clone()}</dd>
                            <dt>"Teléfono"</dt>
                            <dd>{f.telefono.clone()}</dd>
                        </dl>
                    })}
                    {lentes_table(f.lentes.clone(), estados)}
                    }
                    .into_any()
                }
            }}
        </PageFrame>
    }
}

fn lentes_table(lentes: Vec<LenteRow>, estados: RwSignal<Vec<Estado>>) -> impl IntoView {
    view! {
        <Table attr:class="table--lentes">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Tipo"</TableHeaderCell>
                    <TableHeaderCell>"Esfera OD / OI"</TableHeaderCell>
                    <TableHeaderCell>"Cilindro OD / OI"</TableHeaderCell>
                    <TableHeaderCell>"Eje OD / OI"</TableHeaderCell>
                    <TableHeaderCell>"Armazón"</TableHeaderCell>
                    <TableHeaderCell>"Laboratorio"</TableHeaderCell>
                    <TableHeaderCell>"Estado"</TableHeaderCell>
                    <TableHeaderCell>"Envío"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {lentes
                    .into_iter()
                    .map(|row| {
                        let estado = row.estado;
                        view! {
                            <TableRow>
                                <TableCell>{row.tipo.clone()}</TableCell>
                                <TableCell>{format!("{} / {}", row.esfera_od, row.esfera_oi)}</TableCell>
                                <TableCell>{format!("{} / {}", row.cilindro_od, row.cilindro_oi)}</TableCell>
                                <TableCell>{format!("{} / {}", row.eje_od, row.eje_oi)}</TableCell>
                                <TableCell>{row.cod_armazon.clone()}</TableCell>
                                <TableCell>{row.laboratorio.clone()}</TableCell>
                                <TableCell>{move || estados.with(|e| caption_of(e, estado))}</TableCell>
                                <TableCell>{format_date(&row.fecha_envio)}</TableCell>
                            </TableRow>
                        }
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_of_falls_back_to_id() {
        let estados = vec![Estado {
            id: 1,
            nombre: "Enviado".into(),
            activo: true,
        }];
        assert_eq!(caption_of(&estados, Some(1)), "Enviado");
        assert_eq!(caption_of(&estados, Some(9)), "#9");
        assert_eq!(caption_of(&estados, None), "-");
    }
}
