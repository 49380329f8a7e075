use std::ops::Deref;
use std::rc::Rc;

use thoughts_core::{PersistenceError, Theme, ThemeStorage, ThemeStore};
use yew::prelude::*;

use crate::utils::*;

impl StorageKey for Theme {
    const KEY: &'static str = Theme::STORAGE_KEY;
}

/// Persists the theme name as plain text in the browser's local storage.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct LocalThemeStorage;

impl ThemeStorage for LocalThemeStorage {
    fn load(&self) -> Result<Option<String>, PersistenceError> {
        Theme::local_load_raw()
    }

    fn save(&self, value: &str) -> Result<(), PersistenceError> {
        Theme::local_save_raw(value)
    }
}

/// Theme store handed down the component tree.
#[derive(Clone, Debug)]
pub(crate) struct ThemeContext(Rc<ThemeStore<LocalThemeStorage>>);

impl ThemeContext {
    pub(crate) fn initialize() -> Self {
        Self(Rc::new(ThemeStore::initialize(LocalThemeStorage)))
    }
}

impl PartialEq for ThemeContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ThemeContext {
    type Target = ThemeStore<LocalThemeStorage>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Current theme, kept up to date for as long as the component is mounted.
#[hook]
pub(crate) fn use_theme() -> (Theme, ThemeContext) {
    let store = use_context::<ThemeContext>().expect("ThemeContext must be provided");
    let theme = use_state_eq(|| store.current_theme());

    {
        let store = store.clone();
        let theme = theme.clone();
        use_effect_with((), move |_| {
            // the theme may have changed between first render and subscribing
            theme.set(store.current_theme());
            let subscription = store.subscribe(move |new_theme| theme.set(new_theme));
            move || drop(subscription)
        });
    }

    (*theme, store)
}

/// Reflects `theme` on the document: root attribute, body class and the
/// browser's `theme-color`.
pub(crate) fn apply_to_document(theme: Theme) {
    use gloo::utils::{body, document, document_element};

    let scheme = theme.as_str();
    log::debug!("theme-scheme: {}", scheme);

    if let Err(err) = document_element().set_attribute(Theme::ATTR_NAME, scheme) {
        log::error!("failed to set theme: {:?}", err);
    }
    body().set_class_name(scheme);

    let meta = match document().query_selector("meta[name=\"theme-color\"]") {
        Ok(Some(meta)) => meta,
        Ok(None) => match create_theme_color_meta() {
            Ok(meta) => meta,
            Err(err) => {
                log::error!("failed to create theme-color meta: {:?}", err);
                return;
            }
        },
        Err(err) => {
            log::error!("query must be correct: {:?}", err);
            return;
        }
    };
    if let Err(err) = meta.set_attribute("content", theme.meta_color()) {
        log::error!("failed to set theme-color: {:?}", err);
    }
}

fn create_theme_color_meta() -> Result<web_sys::Element, wasm_bindgen::JsValue> {
    use gloo::utils::document;

    let meta = document().create_element("meta")?;
    meta.set_attribute("name", "theme-color")?;
    if let Some(head) = document().head() {
        head.append_child(&meta)?;
    }
    Ok(meta)
}
