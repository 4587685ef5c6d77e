use contracts::shared::validation::FieldErrors;
use contracts::system::access::default_route;
use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::components::ui::{Button, ButtonStyle, Input};
use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (user, set_user) = signal(String::new());
    let (clave, set_clave) = signal(String::new());
    let (show_clave, set_show_clave) = signal(false);
    let field_errors = RwSignal::new(FieldErrors::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let navigate = use_navigate();

    // Already logged in: go straight to the role's landing page
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if let Some(u) = session.usuario().get_untracked() {
                navigate(default_route(&u.role_name()), Default::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let request = LoginRequest {
            user: user.get_untracked(),
            clave: clave.get_untracked(),
        };
        if let Err(errors) = request.validate() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::new());
        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::verify(&request).await {
                Ok(usuario) => {
                    let landing = session.access(usuario);
                    navigate(landing, Default::default());
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    set_error_message.set(Some(format!("Error de autenticación: {}", e)));
                    field_errors.update(|f| f.add("clave", "Usuario o contraseña incorrectos"));
                }
            }
            set_is_loading.set(false);
        });
    };

    let field_error = move |field: &'static str| {
        Signal::derive(move || field_errors.with(|f| f.get(field).map(str::to_string)))
    };

    view! {
        <div class="login-container" role="main" aria-label="Inicio de sesión">
            <div class="login-box">
                <h1>"Iniciar sesión"</h1>
                <p>"Ingresa tus credenciales para acceder al sistema"</p>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit novalidate>
                    <Input
                        id="user"
                        label="Usuario"
                        value=user
                        on_input=Callback::new(move |v| set_user.set(v))
                        error=field_error("user")
                        autocomplete="username"
                        disabled=Signal::derive(move || is_loading.get())
                    />
                    <Input
                        id="clave"
                        label="Clave"
                        value=clave
                        input_type=Signal::derive(move || if show_clave.get() { "text".to_string() } else { "password".to_string() })
                        on_input=Callback::new(move |v| set_clave.set(v))
                        error=field_error("clave")
                        autocomplete="current-password"
                        disabled=Signal::derive(move || is_loading.get())
                    />
                    <button
                        type="button"
                        class="button button--ghost"
                        on:click=move |_| set_show_clave.update(|v| *v = !*v)
                    >
                        {move || if show_clave.get() { "Ocultar clave" } else { "Mostrar clave" }}
                    </button>

                    <Button style=ButtonStyle::Check button_type="submit" disabled=Signal::derive(move || is_loading.get())>
                        {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
