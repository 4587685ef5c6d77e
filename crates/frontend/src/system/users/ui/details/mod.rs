//! Create / edit dialog of a user.
//!
//! Editing never touches the password; it is reset from the list instead.

use contracts::shared::validation::FieldErrors;
use contracts::system::users::{Rol, Usuario, UsuarioForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, ButtonStyle, Input, Select};
use crate::shared::icons::icon;
use crate::shared::notice::{confirm, NoticeHandle};
use crate::system::users::api;

#[component]
pub fn UsuarioDialog(
    /// `None` creates a new user
    editing: Option<Usuario>,
    /// Every loaded user, used for the unique-login check
    usuarios: Vec<Usuario>,
    #[prop(into)]
    roles: Signal<Vec<Rol>>,
    notice: NoticeHandle,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let is_edit = editing.is_some();
    let edit_id = editing.as_ref().map(|u| u.id);
    let form = RwSignal::new(editing.as_ref().map(UsuarioForm::from_usuario).unwrap_or_default());
    let errors = RwSignal::new(FieldErrors::new());
    let saving = RwSignal::new(false);

    // The edited user may keep its own login
    let others: StoredValue<Vec<Usuario>> = StoredValue::new(
        usuarios
            .into_iter()
            .filter(|u| Some(u.id) != edit_id)
            .collect(),
    );

    let role_options = Signal::derive(move || {
        roles
            .get()
            .into_iter()
            .map(|r| (r.id.to_string(), r.nombre))
            .collect::<Vec<_>>()
    });

    let field = move |name: &'static str| Signal::derive(move || errors.with(|e| e.get(name).map(str::to_string)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();

        match edit_id {
            Some(id) => {
                let dto = match others.with_value(|o| current.validate_edit(id, o)) {
                    Ok(dto) => dto,
                    Err(e) => {
                        errors.set(e);
                        return;
                    }
                };
                if !confirm("¿Estás seguro de modificar este usuario?") {
                    return;
                }
                errors.set(FieldErrors::new());
                saving.set(true);
                spawn_local(async move {
                    match api::update_usuario(&dto).await {
                        Ok(()) => {
                            notice.success("Usuario actualizado correctamente");
                            on_saved.run(());
                        }
                        Err(e) => notice.error(format!("Error al actualizar el usuario: {}", e)),
                    }
                    let _ = saving.try_set(false);
                });
            }
            None => {
                let dto = match others.with_value(|o| current.validate_new(o)) {
                    Ok(dto) => dto,
                    Err(e) => {
                        errors.set(e);
                        return;
                    }
                };
                errors.set(FieldErrors::new());
                saving.set(true);
                spawn_local(async move {
                    match api::create_usuario(&dto).await {
                        Ok(()) => {
                            notice.success("Usuario agregado exitosamente");
                            on_saved.run(());
                        }
                        Err(e) => notice.error(format!("Error al agregar el usuario: {}", e)),
                    }
                    let _ = saving.try_set(false);
                });
            }
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{if is_edit { "Editar Usuario" } else { "Nuevo Usuario" }}</h3>
                    <Button style=ButtonStyle::Cancel title="Cerrar" on_click=Callback::new(move |_| on_close.run(()))>
                        {icon("x")}
                    </Button>
                </div>

                <form class="form" on:submit=on_submit novalidate>
                    <Input
                        id="nombre"
                        label="Nombre"
                        placeholder="Ingrese el nombre del usuario"
                        value=Signal::derive(move || form.with(|f| f.nombre.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.nombre = v))
                        error=field("nombre")
                        required=true
                    />
                    <Input
                        id="usuario"
                        label="Usuario"
                        placeholder="Ingrese el alias del usuario"
                        value=Signal::derive(move || form.with(|f| f.usuario.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.usuario = v))
                        error=field("usuario")
                        autocomplete="off"
                        required=true
                    />
                    <Show when=move || !is_edit>
                        <Input
                            id="clave"
                            label="Clave"
                            input_type="password"
                            placeholder="Ingrese la clave del usuario"
                            value=Signal::derive(move || form.with(|f| f.clave.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.clave = v))
                            error=field("clave")
                            autocomplete="new-password"
                            required=true
                        />
                    </Show>
                    <Select
                        id="rolId"
                        label="Rol"
                        placeholder="Seleccione un rol"
                        value=Signal::derive(move || form.with(|f| f.rol_id.clone()))
                        on_change=Callback::new(move |v| form.update(|f| f.rol_id = v))
                        options=role_options
                        error=field("rolId")
                        required=true
                    />

                    <div class="modal-footer">
                        <Button style=ButtonStyle::Cancel outline=true on_click=Callback::new(move |_| on_close.run(()))>
                            "Cancelar"
                        </Button>
                        <Button
                            style=ButtonStyle::Add
                            button_type="submit"
                            disabled=Signal::derive(move || saving.get())
                        >
                            {icon("save")}
                            {move || if saving.get() { " Guardando..." } else { " Guardar" }}
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}
