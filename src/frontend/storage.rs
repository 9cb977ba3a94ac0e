use examdesk::session::{SessionError, SessionResult, TokenStore};
use gloo_storage::{LocalStorage, Storage};
use leptos::logging;

/// Session storage backed by the browser's localStorage.
///
/// Values are read and written as raw strings so entries left by other
/// clients on the same origin are understood.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> SessionResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| SessionError::Storage {
                message: format!("{:?}", e),
            })
    }

    fn remove(&mut self, key: &str) {
        if let Err(e) = LocalStorage::raw().remove_item(key) {
            logging::warn!("Failed to remove '{}' from local storage: {:?}", key, e);
        }
    }
}
