use contracts::system::users::Usuario;
use web_sys::window;

use crate::shared::config::config;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn session_key() -> &'static str {
    &config().session.storage_key
}

/// Stored profile. Unreadable JSON is dropped and treated as logged out.
pub fn load_usuario() -> Option<Usuario> {
    let raw = get_local_storage()?.get_item(session_key()).ok()??;
    match serde_json::from_str::<Usuario>(&raw) {
        Ok(usuario) => Some(usuario),
        Err(e) => {
            log::warn!("Discarding stored session: {}", e);
            clear_usuario();
            None
        }
    }
}

pub fn save_usuario(usuario: &Usuario) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(usuario) {
        Ok(json) => {
            let _ = storage.set_item(session_key(), &json);
        }
        Err(e) => log::error!("Failed to serialize session: {}", e),
    }
}

pub fn clear_usuario() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(session_key());
    }
}
