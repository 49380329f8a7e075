use thoughts_core::normalize_slug;

/// Which template a location path renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    Post(String),
}

impl Route {
    pub(crate) fn from_path(path: &str) -> Self {
        let path = path.trim();
        let path = path.strip_suffix("/index.html").unwrap_or(path);
        match path.trim_matches('/') {
            "" => Route::Home,
            slug => Route::Post(normalize_slug(slug)),
        }
    }

    /// Like [`Route::from_path`] for a percent-encoded path such as
    /// `location.pathname`. Slugs in the content document are not encoded.
    pub(crate) fn from_encoded_path(path: &str) -> Self {
        match js_sys::decode_uri_component(path) {
            Ok(decoded) => Self::from_path(&String::from(decoded)),
            Err(err) => {
                log::warn!("could not decode path {:?}: {:?}", path, err);
                Self::from_path(path)
            }
        }
    }

    pub(crate) fn current() -> Self {
        let path = gloo::utils::window()
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string());
        Self::from_encoded_path(&path)
    }
}
