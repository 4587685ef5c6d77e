use contracts::domain::a002_sindicato::Sindicato;
use contracts::domain::a003_delegacion::Delegacion;
use contracts::domain::a004_optica::{
    validate_optica_nombre, Optica, OpticaLink, OpticaLinkAction, OpticaUpdateDto,
};
use contracts::domain::common::{only_activos, Entity};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_optica::api;
use crate::shared::api_utils::set_activo;
use crate::shared::notice::{confirm, NoticeHandle};

#[derive(Clone, Copy)]
pub struct OpticaDetailsViewModel {
    pub optica: RwSignal<Option<Optica>>,
    /// Every óptica, for the duplicate-name check
    pub opticas: RwSignal<Vec<Optica>>,
    pub sindicatos: RwSignal<Vec<Sindicato>>,
    pub delegaciones: RwSignal<Vec<Delegacion>>,
    pub nombre: RwSignal<String>,
    pub activo: RwSignal<bool>,
    pub nombre_error: RwSignal<Option<String>>,
    pub editing: RwSignal<bool>,
    pub sindicato_choice: RwSignal<String>,
    pub delegacion_choice: RwSignal<String>,
    pub busy: RwSignal<bool>,
    pub notice: NoticeHandle,
}

impl OpticaDetailsViewModel {
    pub fn new() -> Self {
        Self {
            optica: RwSignal::new(None),
            opticas: RwSignal::new(Vec::new()),
            sindicatos: RwSignal::new(Vec::new()),
            delegaciones: RwSignal::new(Vec::new()),
            nombre: RwSignal::new(String::new()),
            activo: RwSignal::new(true),
            nombre_error: RwSignal::new(None),
            editing: RwSignal::new(false),
            sindicato_choice: RwSignal::new(String::new()),
            delegacion_choice: RwSignal::new(String::new()),
            busy: RwSignal::new(false),
            notice: NoticeHandle::new(),
        }
    }

    pub fn load(&self, id: i64) {
        let vm = *self;
        spawn_local(async move {
            match api::fetch_optica(id).await {
                Ok(o) => {
                    let _ = vm.nombre.try_set(o.nombre.clone());
                    let _ = vm.activo.try_set(o.activo);
                    let _ = vm.optica.try_set(Some(o));
                }
                Err(e) => vm.notice.error(format!("Error al cargar la óptica: {}", e)),
            }
        });
    }

    /// Reference lists for the add selectors and the name check
    pub fn load_references(&self) {
        let vm = *self;
        spawn_local(async move {
            match api::fetch_relations().await {
                Ok(rel) => {
                    let _ = vm.opticas.try_set(rel.opticas);
                    let _ = vm.sindicatos.try_set(only_activos(rel.sindicatos));
                    let _ = vm.delegaciones.try_set(only_activos(rel.delegaciones));
                }
                Err(e) => vm.notice.warning(format!("No se pudieron cargar sindicatos y delegaciones: {}", e)),
            }
        });
    }

    pub fn current_id(&self) -> Option<i64> {
        self.optica.with_untracked(|o| o.as_ref().map(|o| o.id))
    }

    /// Select options for relations the óptica does not have yet
    pub fn sindicato_options(&self) -> Vec<(String, String)> {
        let optica = self.optica.get();
        self.sindicatos.with(|all| {
            all.iter()
                .filter(|s| optica.as_ref().map_or(true, |o| !o.has_sindicato(s.id)))
                .map(|s| (s.id.to_string(), s.caption()))
                .collect()
        })
    }

    pub fn delegacion_options(&self) -> Vec<(String, String)> {
        let optica = self.optica.get();
        self.delegaciones.with(|all| {
            all.iter()
                .filter(|d| optica.as_ref().map_or(true, |o| !o.has_delegacion(d.id)))
                .map(|d| (d.id.to_string(), d.caption()))
                .collect()
        })
    }

    pub fn save_command(&self) {
        let Some(id) = self.current_id() else {
            return;
        };
        let nombre = self.nombre.get_untracked();
        let checked = self.opticas.with_untracked(|all| {
            let others: Vec<Optica> = all.iter().filter(|o| o.id != id).cloned().collect();
            validate_optica_nombre(&nombre, &others)
        });
        let nombre = match checked {
            Ok(nombre) => nombre,
            Err(message) => {
                self.nombre_error.set(Some(message));
                return;
            }
        };
        self.nombre_error.set(None);
        let dto = OpticaUpdateDto {
            id,
            nombre,
            activo: self.activo.get_untracked(),
        };
        let vm = *self;
        vm.busy.set(true);
        spawn_local(async move {
            match api::update_optica(&dto).await {
                Ok(()) => {
                    vm.notice.success("Óptica actualizada correctamente");
                    let _ = vm.editing.try_set(false);
                    vm.load(id);
                    vm.load_references();
                }
                Err(e) => vm.notice.error(format!("Error al actualizar la óptica: {}", e)),
            }
            let _ = vm.busy.try_set(false);
        });
    }

    pub fn toggle_activo_command(&self) {
        let Some((id, activo)) = self.optica.with_untracked(|o| o.as_ref().map(|o| (o.id, o.activo))) else {
            return;
        };
        let vm = *self;
        vm.busy.set(true);
        spawn_local(async move {
            match set_activo::<Optica>(id, !activo).await {
                Ok(change) => {
                    vm.notice.success(format!("Óptica {} correctamente", change.done_label()));
                    vm.load(id);
                }
                Err(e) => vm.notice.error(format!("Error al actualizar el estado de la óptica: {}", e)),
            }
            let _ = vm.busy.try_set(false);
        });
    }

    /// Add or remove one relation; `related_id` falls back to the select value
    pub fn link_command(&self, action: OpticaLinkAction, related_id: Option<i64>) {
        let Some(optica) = self.optica.get_untracked() else {
            return;
        };
        let related_id = related_id.unwrap_or_else(|| {
            let choice = match action {
                OpticaLinkAction::AddSindicato | OpticaLinkAction::RemoveSindicato => self.sindicato_choice,
                OpticaLinkAction::AddDelegacion | OpticaLinkAction::RemoveDelegacion => self.delegacion_choice,
            };
            choice.get_untracked().parse().unwrap_or(0)
        });
        let link = match OpticaLink::new(action, &optica, related_id) {
            Ok(link) => link,
            Err(message) => {
                self.notice.error(message);
                return;
            }
        };
        let removing = matches!(action, OpticaLinkAction::RemoveSindicato | OpticaLinkAction::RemoveDelegacion);
        if removing && !confirm("¿Estás seguro de quitar esta relación?") {
            return;
        }
        let vm = *self;
        vm.busy.set(true);
        spawn_local(async move {
            match api::apply_link(&link).await {
                Ok(()) => {
                    vm.notice.success(link.action.success_message());
                    let _ = vm.sindicato_choice.try_set(String::new());
                    let _ = vm.delegacion_choice.try_set(String::new());
                    vm.load(link.optica_id);
                }
                Err(e) => vm.notice.error(format!("Error al actualizar la óptica: {}", e)),
            }
            let _ = vm.busy.try_set(false);
        });
    }
}
