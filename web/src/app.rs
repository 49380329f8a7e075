use std::rc::Rc;

use thoughts_core::{ContentCatalog, HomePage, PostPage, SiteConfig};
use yew::prelude::*;

use crate::layout::Layout;
use crate::pages::{HomeView, NotFoundView, PostView};
use crate::route::Route;
use crate::theme::ThemeContext;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct AppProps {
    pub config: Rc<SiteConfig>,
    pub catalog: Rc<ContentCatalog>,
    pub theme: ThemeContext,
    pub route: Route,
}

#[function_component]
pub(crate) fn App(props: &AppProps) -> Html {
    let content = match &props.route {
        Route::Home => {
            let page = Rc::new(HomePage::load(&*props.catalog));
            html! { <HomeView {page}/> }
        }
        Route::Post(slug) => match PostPage::load(&*props.catalog, slug) {
            Ok(page) => html! { <PostView page={Rc::new(page)}/> },
            Err(err) => {
                log::warn!("{}", err);
                html! { <NotFoundView slug={slug.clone()}/> }
            }
        },
    };

    html! {
        <ContextProvider<ThemeContext> context={props.theme.clone()}>
            <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
                <Layout>{content}</Layout>
            </ContextProvider<Rc<SiteConfig>>>
        </ContextProvider<ThemeContext>>
    }
}
