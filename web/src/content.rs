use gloo::utils::document;
use thoughts_core::ContentCatalog;

/// Reads the content document the site generator embedded into the page.
/// A missing or broken document leaves the blog empty rather than failing.
pub(crate) fn load_embedded(element_id: &str) -> ContentCatalog {
    let Some(element) = document().get_element_by_id(element_id) else {
        log::warn!("no id=\"{}\" element, rendering without posts", element_id);
        return ContentCatalog::default();
    };
    let json = element.text_content().unwrap_or_default();
    let catalog = ContentCatalog::from_json(&json).unwrap_or_else(|err| {
        log::error!("{}", err);
        ContentCatalog::default()
    });
    if catalog.is_empty() {
        log::info!("content document has no posts");
    }
    catalog
}
