use leptos::prelude::*;

use crate::shared::date_utils::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer data-zone="footer" class="status-bar">
            <span>{format!("© GProvisión | {}", year)}</span>
        </footer>
    }
}
