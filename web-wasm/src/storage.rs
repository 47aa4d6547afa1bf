//! localStorage-backed session store
//!
//! Values are stored as raw strings, not JSON, so keys written by earlier
//! versions of the page stay readable.

use gloo::storage::{LocalStorage, Storage};
use perfect_cv_common::{Error, Result, SessionStore};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

fn storage_error(e: JsValue) -> Error {
    Error::Storage(format!("{:?}", e))
}

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw().set_item(key, value).map_err(storage_error)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        LocalStorage::raw().remove_item(key).map_err(storage_error)
    }
}
