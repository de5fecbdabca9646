use folio_core::{KeyValueStore, SafeStorage, StorageError};
use wasm_bindgen::JsValue;
use web_sys as web;

/// `window.localStorage` behind the core storage trait.
pub struct LocalStorage {
    storage: web::Storage,
}

impl LocalStorage {
    /// Accessing `localStorage` itself throws in some sandboxed and private
    /// contexts; that degrades to an unavailable store.
    pub fn open(window: &web::Window) -> SafeStorage<LocalStorage> {
        match window.local_storage() {
            Ok(Some(storage)) => SafeStorage::new(LocalStorage { storage }),
            Ok(None) => {
                log::info!("[storage] localStorage missing, preferences will not persist");
                SafeStorage::unavailable()
            }
            Err(e) => {
                log::info!("[storage] localStorage blocked: {:?}", e);
                SafeStorage::unavailable()
            }
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(js_err)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(js_err)
    }
}

fn js_err(e: JsValue) -> StorageError {
    StorageError::Rejected(format!("{:?}", e))
}
