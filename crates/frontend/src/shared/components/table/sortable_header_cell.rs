//! Clickable table header bound to a [`ListQuery`] sort column
//!
//! ```text
//! <SortableHeaderCell label="Nombre" field="nombre" query=list.query />
//! ```

use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use thaw::*;

use crate::shared::list_utils::get_sort_indicator;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,
    /// Column name understood by the row's `Sortable` impl
    field: &'static str,
    query: RwSignal<ListQuery>,
) -> impl IntoView {
    let indicator = move || {
        query.with(|q| get_sort_indicator(q.sort_field.as_deref(), field, q.sort_ascending))
    };

    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| query.update(|q| q.toggle_sort(field))
            >
                {label}
                <span class="table__sort-indicator">{indicator}</span>
            </div>
        </TableHeaderCell>
    }
}
