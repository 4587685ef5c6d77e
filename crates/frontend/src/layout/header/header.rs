use contracts::system::access::{principal_routes, LOGIN_PATH};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    // Close the mobile menu on navigation
    Effect::new(move |_| {
        location.pathname.track();
        menu_open.set(false);
    });

    let links = move || {
        session.usuario().with(|u| {
            u.as_ref()
                .map(|u| principal_routes(&u.role_name()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    let nombre = move || session.usuario().with(|u| u.as_ref().map(|u| u.nombre.clone()).unwrap_or_default());

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__title">"GProvisión"</A>
                <nav
                    class=move || if menu_open.get() { "header__nav header__nav--open" } else { "header__nav" }
                    aria-label="Navegación principal"
                >
                    <For
                        each=links
                        key=|route| route.path
                        children=move |route| {
                            let is_current = move || location.pathname.get() == route.path;
                            view! {
                                <A
                                    href=route.path
                                    attr:class=move || if is_current() { "header__link header__link--active" } else { "header__link" }
                                >
                                    {route.alias}
                                </A>
                            }
                        }
                    />
                </nav>
            </div>
            <div class="header__actions">
                <span class="header__user">{nombre}</span>
                <button class="button button--ghost" on:click=on_logout aria-label="Cerrar sesión">
                    "Cerrar sesión"
                </button>
                <button
                    class="button button--ghost header__menu-toggle"
                    aria-label="Menú de navegación"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>
        </header>
    }
}
