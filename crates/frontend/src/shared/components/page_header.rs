use leptos::prelude::*;
use leptos_router::components::A;

/// Title row of a page, with optional back link and action buttons
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: Signal<String>,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Path of the parent page
    #[prop(optional)]
    back: Option<&'static str>,

    /// Action buttons (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {back.map(|href| view! { <A href=href attr:class="page__back">"← Volver"</A> })}
                <div class="page-header__text">
                    <h1 class="page__title">{move || title.get()}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
