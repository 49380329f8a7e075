use std::rc::Rc;

use thoughts_core::{SiteConfig, Theme};
use yew::prelude::*;

use crate::theme::{apply_to_document, use_theme};
use crate::utils::current_year;

#[derive(Properties, PartialEq)]
pub(crate) struct LayoutProps {
    #[prop_or_default]
    pub children: Html,
}

/// Page shell shared by every template.
#[function_component]
pub(crate) fn Layout(props: &LayoutProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let (theme, _) = use_theme();

    use_effect_with(theme, |theme| apply_to_document(*theme));

    html! {
        <>
            <Header title={config.title.clone()}/>
            <div class="container">
                <main>{props.children.clone()}</main>
                <footer>
                    {format!("© {} · Built with ", current_year())}
                    <a href={config.footer.built_with_url.clone()}>{config.footer.built_with.clone()}</a>
                </footer>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    title: AttrValue,
}

#[function_component]
fn Header(props: &HeaderProps) -> Html {
    html! {
        <header>
            <a class="site-title" href="/">{props.title.clone()}</a>
            <ThemeToggle/>
        </header>
    }
}

#[function_component]
pub(crate) fn ThemeToggle() -> Html {
    let (theme, store) = use_theme();

    let onclick = Callback::from(move |_: MouseEvent| {
        // the store already logged the failure, the switch itself went through
        if store.toggle().is_err() {
            log::warn!("theme will not be remembered next visit");
        }
    });

    let (icon, label) = match theme {
        Theme::Light => ("\u{2600}", "Switch to dark theme"),
        Theme::Dark => ("\u{263E}", "Switch to light theme"),
    };

    html! {
        <button class={classes!("theme-toggle", theme.as_str())} title={label} aria-label={label} {onclick}>
            {icon}
        </button>
    }
}
