use super::model;
use contracts::domain::a002_sindicato::{validate_nombre, Sindicato, SindicatoUpdateDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::set_activo;
use crate::shared::notice::{confirm, NoticeHandle};

#[derive(Clone, Copy)]
pub struct SindicatoDetailsViewModel {
    pub sindicato: RwSignal<Option<Sindicato>>,
    pub nombre: RwSignal<String>,
    pub activo: RwSignal<bool>,
    pub nombre_error: RwSignal<Option<String>>,
    pub editing: RwSignal<bool>,
    pub busy: RwSignal<bool>,
    /// Set once the record was hard-deleted
    pub removed: RwSignal<bool>,
    pub notice: NoticeHandle,
}

impl SindicatoDetailsViewModel {
    pub fn new() -> Self {
        Self {
            sindicato: RwSignal::new(None),
            nombre: RwSignal::new(String::new()),
            activo: RwSignal::new(true),
            nombre_error: RwSignal::new(None),
            editing: RwSignal::new(false),
            busy: RwSignal::new(false),
            removed: RwSignal::new(false),
            notice: NoticeHandle::new(),
        }
    }

    pub fn load(&self, id: i64) {
        let vm = *self;
        spawn_local(async move {
            match model::fetch(id).await {
                Ok(s) => {
                    let _ = vm.nombre.try_set(s.nombre.clone());
                    let _ = vm.activo.try_set(s.activo);
                    let _ = vm.sindicato.try_set(Some(s));
                }
                Err(e) => vm.notice.error(format!("Error al cargar el sindicato: {}", e)),
            }
        });
    }

    pub fn start_edit(&self) {
        if let Some(s) = self.sindicato.get_untracked() {
            self.nombre.set(s.nombre);
            self.activo.set(s.activo);
        }
        self.nombre_error.set(None);
        self.editing.set(true);
    }

    pub fn save_command(&self) {
        let Some(id) = self.sindicato.with_untracked(|s| s.as_ref().map(|s| s.id)) else {
            return;
        };
        let nombre = match validate_nombre(&self.nombre.get_untracked()) {
            Ok(nombre) => nombre,
            Err(message) => {
                self.nombre_error.set(Some(message));
                return;
            }
        };
        let dto = SindicatoUpdateDto {
            id_sindicato: id,
            nombre,
            activo: self.activo.get_untracked(),
        };
        let vm = *self;
        vm.busy.set(true);
        spawn_local(async move {
            match model::update(&dto).await {
                Ok(()) => {
                    vm.notice.success("Sindicato actualizado");
                    let _ = vm.editing.try_set(false);
                    vm.load(id);
                }
                Err(e) => vm.notice.error(format!("Error al actualizar el sindicato: {}", e)),
            }
            let _ = vm.busy.try_set(false);
        });
    }

    pub fn toggle_activo_command(&self) {
        let Some((id, target)) = self.sindicato.with_untracked(|s| s.as_ref().map(|s| (s.id, !s.activo))) else {
            return;
        };
        let vm = *self;
        vm.busy.set(true);
        spawn_local(async move {
            match set_activo::<Sindicato>(id, target).await {
                Ok(change) => {
                    vm.notice.success(format!("Sindicato {} correctamente", change.done_label()));
                    vm.load(id);
                }
                Err(e) => vm.notice.error(format!("Error al actualizar el estado: {}", e)),
            }
            let _ = vm.busy.try_set(false);
        });
    }

    pub fn remove_command(&self) {
        let Some((id, nombre)) = self.sindicato.with_untracked(|s| s.as_ref().map(|s| (s.id, s.nombre.clone()))) else {
            return;
        };
        if !confirm(&format!("¿Eliminar definitivamente el sindicato {}?", nombre)) {
            return;
        }
        let vm = *self;
        vm.busy.set(true);
        spawn_local(async move {
            match model::remove(id).await {
                Ok(()) => {
                    log::info!("sindicato {} removed", id);
                    let _ = vm.removed.try_set(true);
                }
                Err(e) => vm.notice.error(format!("Error al eliminar el sindicato: {}", e)),
            }
            let _ = vm.busy.try_set(false);
        });
    }
}
