use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned money cell, `$ 1.234,56`
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<f64>,
) -> impl IntoView {
    view! {
        <TableCell>
            <div class="table__cell--money">
                {move || format!("$ {}", format_money(value.get()))}
            </div>
        </TableCell>
    }
}
