use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

use super::StorageProvider;
use crate::{LocalStateError, LocalStateResult};

#[derive(Clone, Debug)]
pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    pub fn local() -> LocalStateResult<Self> {
        let window = window().ok_or(LocalStateError::StoreUnavailable)?;
        let storage = window
            .local_storage()?
            .ok_or(LocalStateError::StoreUnavailable)?;
        Ok(Self { storage })
    }

    pub fn session() -> LocalStateResult<Self> {
        let window = window().ok_or(LocalStateError::StoreUnavailable)?;
        let storage = window
            .session_storage()?
            .ok_or(LocalStateError::StoreUnavailable)?;
        Ok(Self { storage })
    }
}

impl StorageProvider for BrowserStorage {
    fn get_item(&self, key: &str) -> LocalStateResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| LocalStateError::Read(js_error_message(e)))
    }

    fn set_item(&self, key: &str, value: &str) -> LocalStateResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| LocalStateError::Write(js_error_message(e)))
    }
}

fn js_error_message(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
