use contracts::domain::a001_armazon::Armazon;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use super::create::ArmazonCreateForm;
use crate::domain::a001_armazon::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::ButtonStyle;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, ListState, SearchInput};
use crate::shared::notice::{NoticeBar, NoticeHandle};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;

#[component]
pub fn ArmazonesPage() -> impl IntoView {
    let list = ListState::<Armazon>::new(Some("codigoInterno"));
    let notice = NoticeHandle::new();
    let form_open = RwSignal::new(false);

    let load = move || list.load(api::fetch_armazones());
    load();

    let on_created = Callback::new(move |_: ()| {
        form_open.set(false);
        load();
    });

    view! {
        <PageFrame page_id="a001_armazon--list" category=PageCategory::List>
            <PageHeader title="Inventario de Armazones">
                <A href="/armazones/stock" attr:class="button button--default-outline">
                    {icon("alert")}
                    " Stock bajo"
                </A>
                <button
                    class=move || {
                        let style = if form_open.get() { ButtonStyle::Cancel } else { ButtonStyle::Add };
                        format!("button {}", style.class(false))
                    }
                    aria-label=move || if form_open.get() { "Cerrar formulario" } else { "Agregar nuevo armazón" }
                    on:click=move |_| form_open.update(|open| *open = !*open)
                >
                    {move || if form_open.get() { icon("x") } else { icon("plus") }}
                </button>
            </PageHeader>

            <NoticeBar handle=notice />

            <Show when=move || form_open.get()>
                <div class="page__inline-form">
                    <ArmazonCreateForm
                        notice=notice
                        on_success=on_created
                        on_cancel=Callback::new(move |_| form_open.set(false))
                    />
                </div>
            </Show>

            <ArmazonTable list=list />
        </PageFrame>
    }
}

/// Searchable, sortable, paged table of frames
#[component]
pub(crate) fn ArmazonTable(list: ListState<Armazon>) -> impl IntoView {
    let page = list.page();
    let term = list.term();

    view! {
        <div class="page__content">
            {move || list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="filter-panel">
                <SearchInput
                    value=term
                    on_change=Callback::new(move |t| list.set_term(t))
                    placeholder="Código, descripción, material..."
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

            <Show when=move || !list.loading.get() fallback=|| view! { <Spinner /> }>
                <Show
                    when=move || page.with(|p| !p.items.is_empty())
                    fallback=|| view! { <p class="table__empty">"No hay armazones para mostrar"</p> }
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeaderCell label="C. Patilla" field="codigoPatilla" query=list.query />
                                    <SortableHeaderCell label="C. Interno" field="codigoInterno" query=list.query />
                                    <SortableHeaderCell label="C. Color" field="codigoColor" query=list.query />
                                    <TableHeaderCell>"L. Color"</TableHeaderCell>
                                    <SortableHeaderCell label="Descripción" field="descripcion" query=list.query />
                                    <TableHeaderCell>"Tipo"</TableHeaderCell>
                                    <SortableHeaderCell label="Material" field="material" query=list.query />
                                    <SortableHeaderCell label="Ubicación" field="ubicacion" query=list.query />
                                    <SortableHeaderCell label="Cantidad" field="cantidad" query=list.query />
                                    <SortableHeaderCell label="Costo" field="costo" query=list.query />
                                    <SortableHeaderCell label="P. Venta" field="precioVenta" query=list.query />
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || page.get().items
                                    key=|a| a.id
                                    children=move |a: Armazon| {
                                        let low = a.is_low_stock();
                                        let cells = [
                                            a.codigo_patilla.clone(),
                                            a.codigo_interno.clone(),
                                            a.codigo_color.clone(),
                                            a.letra_color.clone().unwrap_or_default(),
                                            a.descripcion.clone(),
                                            a.tipo_armazon.clone(),
                                            a.material.clone(),
                                            a.ubicacion.clone(),
                                        ];
                                        view! {
                                            <TableRow class=if low { "table__row table__row--warning" } else { "table__row" }>
                                                {cells.into_iter().map(|text| view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {move || highlight_matches(&text, &term.get())}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                }).collect_view()}
                                                <TableCell>
                                                    <strong>{a.cantidad}</strong>
                                                    {low.then(|| view! {
                                                        <Badge color=BadgeColor::Warning appearance=BadgeAppearance::Tint>
                                                            {format!("mín. {}", a.cantidad_minima)}
                                                        </Badge>
                                                    })}
                                                </TableCell>
                                                <TableCellMoney value=a.costo />
                                                <TableCellMoney value=a.precio_venta />
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
