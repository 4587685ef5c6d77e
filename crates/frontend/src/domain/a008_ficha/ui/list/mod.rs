use contracts::domain::a008_ficha::Ficha;
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::a008_ficha::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, ListState, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;

#[component]
pub fn FichasPage() -> impl IntoView {
    let list = ListState::<Ficha>::new(Some("fecha"));
    list.query.update(|q| q.sort_ascending = false);
    let navigate = use_navigate();
    let page = list.page();
    let term = list.term();

    list.load(api::fetch_fichas());

    view! {
        <PageFrame page_id="a008_ficha--list" category=PageCategory::List>
            <PageHeader title="Fichas">
                <A href="/fichas/reporte" attr:class="button button--default-outline">
                    "Reporte"
                </A>
                <A href="/fichas/crear" attr:class="button button--add-outline">
                    {icon("plus")}
                    " Nueva Ficha"
                </A>
            </PageHeader>

            <div class="page__content">
                {move || list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <div class="filter-panel">
                    <SearchInput
                        value=term
                        on_change=Callback::new(move |t| list.set_term(t))
                        placeholder="Buscar por beneficiario, DNI, voucher..."
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

                <Show when=move || list.loading.get()>
                    <Spinner />
                </Show>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Nº" field="id" query=list.query />
                            <SortableHeaderCell label="Fecha" field="fecha" query=list.query />
                            <SortableHeaderCell label="Beneficiario" field="beneficiario" query=list.query />
                            <TableHeaderCell>"DNI"</TableHeaderCell>
                            <TableHeaderCell>"Tipo"</TableHeaderCell>
                            <TableHeaderCell>"Voucher"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || page.get().items
                            key=|f| f.id()
                            children=move |f: Ficha| {
                                let href = format!("/fichas/{}", f.id());
                                let navigate = navigate.clone();
                                let beneficiario = f.beneficiario.clone();
                                let dni = f.dni_beneficiario.clone();
                                let voucher = f.voucher.clone();
                                let id = f.id();
                                let fecha = format_date(&f.fecha);
                                let tipos = f.tipos.map(|t| t.label()).unwrap_or("-");
                                view! {
                                    <TableRow
                                        class="table__row table__row--clickable"
                                        on:click=move |_| navigate(&href, Default::default())
                                    >
                                        <TableCell>{id}</TableCell>
                                        <TableCell>{fecha}</TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {move || highlight_matches(&beneficiario, &term.get())}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>{move || highlight_matches(&dni, &term.get())}</TableCell>
                                        <TableCell>{tipos}</TableCell>
                                        <TableCell>{move || highlight_matches(&voucher, &term.get())}</TableCell>
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
