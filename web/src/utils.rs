use thoughts_core::PersistenceError;
use wasm_bindgen::JsValue;

/// Types persisted in local storage under a fixed key.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

fn js_error(context: &str, err: JsValue) -> PersistenceError {
    PersistenceError::new(format!("{}: {:?}", context, err))
}

/// The browser's local storage, which may be disabled or missing entirely.
pub(crate) fn local_storage() -> Result<web_sys::Storage, PersistenceError> {
    gloo::utils::window()
        .local_storage()
        .map_err(|err| js_error("local storage is not accessible", err))?
        .ok_or_else(|| PersistenceError::new("local storage is not available"))
}

/// Raw string access, so that stored values stay plain text instead of JSON.
pub(crate) trait LocalRaw: StorageKey {
    fn local_load_raw() -> Result<Option<String>, PersistenceError> {
        local_storage()?
            .get_item(Self::KEY)
            .map_err(|err| js_error("failed to read local storage", err))
    }

    fn local_save_raw(value: &str) -> Result<(), PersistenceError> {
        local_storage()?
            .set_item(Self::KEY, value)
            .map_err(|err| js_error("failed to write local storage", err))
    }
}

impl<T: StorageKey> LocalRaw for T {}

/// Current calendar year according to the browser clock.
pub(crate) fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
