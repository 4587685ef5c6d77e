use contracts::system::access::{decide, GuardDecision, LOGIN_PATH};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use super::context::use_session;
use crate::layout::Shell;

/// Guarded layout: renders `children` inside the shell only when the
/// session's role may visit the current path, otherwise redirects.
#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        session.usuario().with(|u| decide(u.as_ref(), &path))
    });

    Effect::new(move |_| {
        let replace = NavigateOptions {
            replace: true,
            ..Default::default()
        };
        match decision.get() {
            GuardDecision::RedirectLogin => navigate(LOGIN_PATH, replace),
            GuardDecision::Redirect(to) => {
                log::debug!("Path not allowed for role, redirecting to {}", to);
                navigate(to, replace)
            }
            GuardDecision::Render => {}
        }
    });

    let children = StoredValue::new(children);

    view! {
        <Show when=move || decision.get() == GuardDecision::Render>
            <Shell>{children.with_value(|c| c())}</Shell>
        </Show>
    }
}
