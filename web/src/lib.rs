use std::rc::Rc;

use clap::Parser;
use thoughts_core::SiteConfig;
use wasm_bindgen::prelude::*;

mod app;
mod content;
mod layout;
mod pages;
mod route;
mod theme;
mod utils;

const SITE_CONFIG: &str = include_str!("../site.toml");

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    // heading anchors share the hash, so anything that is not a flag is ignored
    let args = Args::try_parse_from(location_hash.split(['#', '&'])).unwrap_or_default();
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            web_sys::console::error_1(&err.to_string().into());
        }
    }

    let config = SiteConfig::from_toml_or_default(SITE_CONFIG);
    let catalog = content::load_embedded(&config.content_id);
    let theme = theme::ThemeContext::initialize();
    theme::apply_to_document(theme.current_theme());
    let route = route::Route::current();
    log::debug!("route: {:?}", route);

    let Some(root) = document().get_element_by_id(&config.root_id) else {
        log::error!("Could not find id=\"{}\" element", config.root_id);
        return;
    };

    let props = app::AppProps {
        config: Rc::new(config),
        catalog: Rc::new(catalog),
        theme,
        route,
    };

    log::debug!("App started");
    yew::Renderer::<app::App>::with_root_and_props(root, props).render();
}
