mod memory_storage;

#[cfg(target_arch = "wasm32")]
mod browser_storage;

use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
pub use browser_storage::BrowserStorage;
pub use memory_storage::MemoryStorage;

use crate::LocalStateResult;

/// Key-value store that outlives the component reading from it.
///
/// Implementations take `&self`: browser storage is a shared handle and
/// in-memory stores use interior mutability, so one store can back any
/// number of bindings.
pub trait StorageProvider {
    fn get_item(&self, key: &str) -> LocalStateResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> LocalStateResult<()>;
}

impl<S: StorageProvider + ?Sized> StorageProvider for Rc<S> {
    fn get_item(&self, key: &str) -> LocalStateResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> LocalStateResult<()> {
        (**self).set_item(key, value)
    }
}

/// Browser `localStorage`, or `None` when not running in a browser.
pub fn local_storage() -> Option<Rc<dyn StorageProvider>> {
    if cfg!(feature = "ssr") {
        return None;
    }
    browser_local_storage()
}

/// Browser `sessionStorage`, or `None` when not running in a browser.
pub fn session_storage() -> Option<Rc<dyn StorageProvider>> {
    if cfg!(feature = "ssr") {
        return None;
    }
    browser_session_storage()
}

#[cfg(target_arch = "wasm32")]
fn browser_local_storage() -> Option<Rc<dyn StorageProvider>> {
    BrowserStorage::local()
        .ok()
        .map(|storage| Rc::new(storage) as Rc<dyn StorageProvider>)
}

#[cfg(target_arch = "wasm32")]
fn browser_session_storage() -> Option<Rc<dyn StorageProvider>> {
    BrowserStorage::session()
        .ok()
        .map(|storage| Rc::new(storage) as Rc<dyn StorageProvider>)
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_local_storage() -> Option<Rc<dyn StorageProvider>> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_session_storage() -> Option<Rc<dyn StorageProvider>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_no_browser_storage_outside_wasm() {
        assert!(local_storage().is_none());
        assert!(session_storage().is_none());
    }

    #[test]
    fn test_rc_forwards_to_inner_store() {
        let store = Rc::new(MemoryStorage::new());
        let shared: Rc<dyn StorageProvider> = store.clone();
        shared.set_item("theme", "\"dark\"").unwrap();
        assert_eq!(
            store.get_item("theme").unwrap(),
            Some("\"dark\"".to_string())
        );
    }
}
