use crate::content::{Post, PostProvider, PostSummary};
use crate::error::Result;

/// Everything the home listing shows.
#[derive(Clone, Debug, PartialEq)]
pub struct HomePage {
    pub total_count: usize,
    pub posts: Vec<PostSummary>,
}

impl HomePage {
    pub const TITLE: &'static str = "Home";

    /// Posts are kept in provider order; sorting is the content source's job.
    pub fn load(provider: &impl PostProvider) -> Self {
        Self {
            total_count: provider.total_count(),
            posts: provider.list_posts(),
        }
    }

    pub fn count_label(&self) -> String {
        match self.total_count {
            1 => "1 Post".to_string(),
            n => format!("{} Posts", n),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PostPage {
    pub post: Post,
}

impl PostPage {
    pub fn load(provider: &impl PostProvider, slug: &str) -> Result<Self> {
        let post = provider.post_by_slug(slug)?;
        Ok(Self { post })
    }

    pub fn title(&self) -> &str {
        &self.post.title
    }

    pub fn has_table_of_contents(&self) -> bool {
        !self.post.table_of_contents.is_empty()
    }
}

/// `"<page> | <site>"`, or just the site title when there is no page title.
pub fn document_title(page: &str, site: &str) -> String {
    if page.is_empty() {
        site.to_string()
    } else {
        format!("{} | {}", page, site)
    }
}
