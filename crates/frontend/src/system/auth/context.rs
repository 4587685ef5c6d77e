use contracts::system::access::default_route;
use contracts::system::users::Usuario;
use leptos::prelude::*;

use super::storage;

/// Logged-in profile, provided at the app root.
///
/// Loaded from local storage once when created; every later change is
/// written back (or removed on logout) by an effect owned by the store.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    usuario: RwSignal<Option<Usuario>>,
}

impl SessionStore {
    pub fn load() -> Self {
        let store = Self {
            usuario: RwSignal::new(storage::load_usuario()),
        };
        Effect::new(move |_| match store.usuario.get() {
            Some(usuario) => storage::save_usuario(&usuario),
            None => storage::clear_usuario(),
        });
        store
    }

    pub fn usuario(&self) -> Signal<Option<Usuario>> {
        self.usuario.into()
    }

    /// Start a session; returns where the role lands first
    pub fn access(&self, usuario: Usuario) -> &'static str {
        let landing = default_route(&usuario.role_name());
        self.usuario.set(Some(usuario));
        landing
    }

    pub fn logout(&self) {
        log::info!("Session closed");
        self.usuario.set(None);
    }
}

/// Hook to access the session store
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("SessionStore not provided at the app root")
}
