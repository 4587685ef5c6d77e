use contracts::system::users::{Rol, Usuario};
use leptos::prelude::*;

use crate::shared::list_utils::ListState;

/// Everything the users page keeps between renders
#[derive(Clone, Copy)]
pub struct UsuariosPageState {
    pub list: ListState<Usuario>,
    pub roles: RwSignal<Vec<Rol>>,
    /// Row with a request in flight
    pub busy_id: RwSignal<Option<i64>>,
    pub show_create: RwSignal<bool>,
    pub editing: RwSignal<Option<Usuario>>,
}

pub fn create_state() -> UsuariosPageState {
    UsuariosPageState {
        list: ListState::new(Some("nombre")),
        roles: RwSignal::new(Vec::new()),
        busy_id: RwSignal::new(None),
        show_create: RwSignal::new(false),
        editing: RwSignal::new(None),
    }
}
