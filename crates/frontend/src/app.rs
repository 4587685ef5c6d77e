use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session profile, restored from local storage and written back on change.
    provide_context(SessionStore::load());

    view! {
        <AppRoutes />
    }
}
