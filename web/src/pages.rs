use std::rc::Rc;

use thoughts_core::{HomePage, PostPage, PostSummary, SiteConfig, TrustedHtml, document_title};
use yew::prelude::*;

/// The only place trusted markup enters the DOM.
fn trusted_markup(html: &TrustedHtml) -> Html {
    Html::from_html_unchecked(AttrValue::from(html.as_str().to_string()))
}

#[hook]
fn use_document_title(page: String) {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    use_effect_with(page, move |page| {
        gloo::utils::document().set_title(&document_title(page, &config.title));
    });
}

#[derive(Properties, PartialEq)]
pub(crate) struct HomeProps {
    pub page: Rc<HomePage>,
}

#[function_component]
pub(crate) fn HomeView(props: &HomeProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    use_document_title(HomePage::TITLE.to_string());

    html! {
        <div class="home">
            <h1>{config.heading().to_string()}</h1>
            <h4>{props.page.count_label()}</h4>
            { for props.page.posts.iter().map(|post| html! { <PostSummaryView key={post.id.clone()} post={post.clone()}/> }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PostSummaryProps {
    post: PostSummary,
}

#[function_component]
fn PostSummaryView(props: &PostSummaryProps) -> Html {
    let post = &props.post;
    html! {
        <article>
            <a class="post-link" href={post.href()}>
                <h2 class="post-title">{post.title.clone()}</h2>
            </a>
            <h3 class="post-date">{post.display_date()}</h3>
            <p class="post-excerpt">{post.excerpt.clone()}</p>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PostProps {
    pub page: Rc<PostPage>,
}

#[function_component]
pub(crate) fn PostView(props: &PostProps) -> Html {
    let post = &props.page.post;
    use_document_title(post.title.clone());

    html! {
        <div class="post">
            <h1>{post.title.clone()}</h1>
            <h4>{post.display_date()}</h4>
            if props.page.has_table_of_contents() {
                <TableOfContents html={post.table_of_contents.clone()}/>
            }
            <div class="post-body">{trusted_markup(&post.html)}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TableOfContentsProps {
    pub html: TrustedHtml,
}

#[function_component]
pub(crate) fn TableOfContents(props: &TableOfContentsProps) -> Html {
    html! {
        <div class="table-of-contents">{trusted_markup(&props.html)}</div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct NotFoundProps {
    pub slug: AttrValue,
}

#[function_component]
pub(crate) fn NotFoundView(props: &NotFoundProps) -> Html {
    use_document_title("Not found".to_string());

    html! {
        <div class="not-found">
            <h1>{"Not found"}</h1>
            <p>{format!("There is no post at {}.", props.slug)}</p>
            <a href="/">{"Back to all posts"}</a>
        </div>
    }
}
