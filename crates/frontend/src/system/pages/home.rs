use contracts::system::access::{default_route, principal_routes, LOGIN_PATH};
use contracts::system::users::RoleName;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::auth::context::use_session;

/// Shortcut card on a landing page
struct Shortcut {
    href: &'static str,
    title: &'static str,
    description: &'static str,
}

const ADMIN_SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        href: "/opticas",
        title: "Ópticas",
        description: "Alta, edición y vínculos con delegaciones y sindicatos",
    },
    Shortcut {
        href: "/armazones",
        title: "Armazones",
        description: "Inventario de armazones y control de stock",
    },
    Shortcut {
        href: "/usuarios",
        title: "Usuarios",
        description: "Cuentas, roles y reinicio de claves",
    },
    Shortcut {
        href: "/sindicatos",
        title: "Sindicatos",
        description: "Sindicatos y sus ópticas asociadas",
    },
    Shortcut {
        href: "/delegaciones",
        title: "Delegaciones",
        description: "Delegaciones por provincia y localidad",
    },
    Shortcut {
        href: "/admin/complementos",
        title: "Complementos",
        description: "Tipos de lente, laboratorios y estados",
    },
];

fn shortcut_grid(shortcuts: &'static [Shortcut]) -> impl IntoView {
    view! {
        <div class="home__grid">
            {shortcuts.iter().map(|s| view! {
                <A href=s.href attr:class="home__card">
                    <h2 class="home__card-title">{s.title}</h2>
                    <p class="home__card-text">{s.description}</p>
                </A>
            }).collect_view()}
        </div>
    }
}

/// Cards built from the role's principal routes, skipping the landing itself
fn role_grid(role: RoleName) -> impl IntoView {
    let landing = default_route(&role);
    view! {
        <div class="home__grid">
            {principal_routes(&role)
                .filter(|r| r.path != landing)
                .map(|r| view! {
                    <A href=r.path attr:class="home__card">
                        <h2 class="home__card-title">{r.alias}</h2>
                    </A>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Welcome(title: &'static str) -> impl IntoView {
    let session = use_session();
    let nombre = move || session.usuario().with(|u| u.as_ref().map(|u| u.nombre.clone()).unwrap_or_default());

    view! {
        <div class="home__welcome">
            <h1 class="page__title">{title}</h1>
            <p class="home__greeting">{move || format!("Hola, {}", nombre())}</p>
        </div>
    }
}

#[component]
pub fn AdminHome() -> impl IntoView {
    view! {
        <PageFrame page_id="admin--home" category=PageCategory::Home>
            <Welcome title="Administradores" />
            {shortcut_grid(ADMIN_SHORTCUTS)}
        </PageFrame>
    }
}

#[component]
pub fn BossHome() -> impl IntoView {
    view! {
        <PageFrame page_id="boss--home" category=PageCategory::Home>
            <Welcome title="Jefes" />
            {role_grid(RoleName::Boss)}
        </PageFrame>
    }
}

#[component]
pub fn OwnersHome() -> impl IntoView {
    view! {
        <PageFrame page_id="owners--home" category=PageCategory::Home>
            <Welcome title="Gerentes" />
            {role_grid(RoleName::Owner)}
        </PageFrame>
    }
}

/// `/`: the role's landing page, or the login when there is no session
#[component]
pub fn RootRedirect() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let target = match session.usuario().get_untracked() {
            Some(u) => match default_route(&u.role_name()) {
                "/" => LOGIN_PATH,
                route => route,
            },
            None => LOGIN_PATH,
        };
        navigate(
            target,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! { <div class="page page--redirect"></div> }
}

#[component]
pub fn NotFound() -> impl IntoView {
    let session = use_session();
    let back = move || {
        session
            .usuario()
            .with(|u| u.as_ref().map(|u| default_route(&u.role_name())))
            .unwrap_or(LOGIN_PATH)
            .to_string()
    };

    view! {
        <PageFrame page_id="not_found--home" category=PageCategory::Home>
            <div class="not-found">
                <h1 class="page__title">"Página no encontrada"</h1>
                <p>"La dirección solicitada no existe."</p>
                <A href=back attr:class="button button--default">"Volver al inicio"</A>
            </div>
        </PageFrame>
    }
}
