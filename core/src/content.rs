//! Post data as handed over by the external content pipeline.

use core::fmt;
use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};

/// Display format for post dates, e.g. "March 04, 2023".
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// HTML produced by the trusted, pre-sanitized compilation step.
///
/// Views inject this markup into the page verbatim, so it must never wrap
/// user-provided or otherwise unsanitized text. Deserializing a
/// [`ContentDocument`] is the other way to obtain one: the document is
/// treated as coming from the same trusted pipeline.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn from_trusted_source(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrustedHtml({} bytes)", self.0.len())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub excerpt: String,
}

impl PostSummary {
    pub fn display_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Site-absolute link to the post, whatever form the slug was stored in.
    pub fn href(&self) -> String {
        normalize_slug(&self.slug)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub excerpt: String,
    pub html: TrustedHtml,
    #[serde(default)]
    pub table_of_contents: TrustedHtml,
}

impl Post {
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id.clone(),
            slug: self.slug.clone(),
            title: self.title.clone(),
            date: self.date,
            excerpt: self.excerpt.clone(),
        }
    }

    pub fn display_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// The serialized form of all posts, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(default)]
    pub total_count: Option<usize>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Read access to the posts of the blog.
pub trait PostProvider {
    /// Summaries in the order the content source delivers them.
    fn list_posts(&self) -> Vec<PostSummary>;

    fn total_count(&self) -> usize;

    fn post_by_slug(&self, slug: &str) -> Result<Post>;
}

/// Brings `slug` into the `/name/` form used as lookup key.
pub fn normalize_slug(slug: &str) -> String {
    let trimmed = slug.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

/// [`PostProvider`] over a fully loaded [`ContentDocument`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentCatalog {
    posts: Vec<Post>,
    by_slug: HashMap<String, usize>,
    total_count: usize,
}

impl ContentCatalog {
    pub fn from_json(json: &str) -> Result<Self> {
        let document: ContentDocument =
            serde_json::from_str(json).map_err(|err| ContentError::Malformed(err.to_string()))?;
        Self::from_document(document)
    }

    pub fn from_document(document: ContentDocument) -> Result<Self> {
        let mut by_slug = HashMap::with_capacity(document.posts.len());
        for (index, post) in document.posts.iter().enumerate() {
            let slug = normalize_slug(&post.slug);
            if by_slug.insert(slug.clone(), index).is_some() {
                return Err(ContentError::DuplicateSlug(slug));
            }
        }
        let total_count = document.total_count.unwrap_or(document.posts.len());
        log::debug!("loaded {} posts", document.posts.len());
        Ok(Self {
            posts: document.posts,
            by_slug,
            total_count,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl PostProvider for ContentCatalog {
    fn list_posts(&self) -> Vec<PostSummary> {
        self.posts.iter().map(Post::summary).collect()
    }

    fn total_count(&self) -> usize {
        self.total_count
    }

    fn post_by_slug(&self, slug: &str) -> Result<Post> {
        let key = normalize_slug(slug);
        self.by_slug
            .get(&key)
            .map(|&index| self.posts[index].clone())
            .ok_or(ContentError::NotFound(key))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn post(slug: &str, title: &str, date: (i32, u32, u32)) -> Post {
        Post {
            id: format!("id-{}", title),
            slug: slug.to_string(),
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            excerpt: format!("About {}", title),
            html: TrustedHtml::from_trusted_source(format!("<p>{}</p>", title)),
            table_of_contents: TrustedHtml::default(),
        }
    }

    pub(crate) fn catalog(posts: Vec<Post>) -> ContentCatalog {
        ContentCatalog::from_document(ContentDocument {
            total_count: None,
            posts,
        })
        .unwrap()
    }

    #[test]
    fn slugs_normalize_to_slash_delimited_form() {
        assert_eq!(normalize_slug("hello-world"), "/hello-world/");
        assert_eq!(normalize_slug("/hello-world"), "/hello-world/");
        assert_eq!(normalize_slug("/hello-world/"), "/hello-world/");
        assert_eq!(normalize_slug("/2023/notes/"), "/2023/notes/");
        assert_eq!(normalize_slug(""), "/");
    }

    #[test]
    fn lookup_by_slug_ignores_surrounding_slashes() {
        let catalog = catalog(vec![post("/first/", "First", (2023, 1, 2))]);

        assert_eq!(catalog.post_by_slug("first").unwrap().title, "First");
        assert_eq!(catalog.post_by_slug("/first").unwrap().title, "First");
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let catalog = catalog(vec![post("/first/", "First", (2023, 1, 2))]);

        assert_eq!(
            catalog.post_by_slug("/missing/"),
            Err(ContentError::NotFound("/missing/".to_string()))
        );
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let document = ContentDocument {
            total_count: None,
            posts: vec![
                post("/same/", "One", (2023, 1, 2)),
                post("same", "Two", (2023, 1, 1)),
            ],
        };

        assert_eq!(
            ContentCatalog::from_document(document),
            Err(ContentError::DuplicateSlug("/same/".to_string()))
        );
    }

    #[test]
    fn parses_pipeline_json() {
        let json = r##"{
            "totalCount": 2,
            "posts": [
                {
                    "id": "b",
                    "slug": "/second/",
                    "title": "Second",
                    "date": "2023-03-04",
                    "excerpt": "More",
                    "html": "<h2 id=\"intro\">Intro</h2>",
                    "tableOfContents": "<ul><li><a href=\"#intro\">Intro</a></li></ul>"
                },
                {
                    "id": "a",
                    "slug": "/first/",
                    "title": "First",
                    "date": "2022-12-31",
                    "html": "<p>hi</p>"
                }
            ]
        }"##;

        let catalog = ContentCatalog::from_json(json).unwrap();

        assert_eq!(catalog.total_count(), 2);
        let second = catalog.post_by_slug("/second/").unwrap();
        assert_eq!(second.display_date(), "March 04, 2023");
        assert!(second.table_of_contents.as_str().contains("#intro"));
        let first = catalog.post_by_slug("/first/").unwrap();
        assert!(first.excerpt.is_empty());
        assert!(first.table_of_contents.is_empty());
    }

    #[test]
    fn summary_links_are_site_absolute() {
        let summary = post("hello-world", "Hello", (2023, 1, 2)).summary();

        assert_eq!(summary.slug, "hello-world");
        assert_eq!(summary.href(), "/hello-world/");
    }

    #[test]
    fn empty_document_gives_empty_catalog() {
        let empty = ContentCatalog::from_json("{}").unwrap();

        assert!(empty.is_empty());
        assert_eq!(empty.total_count(), 0);
        assert!(!catalog(vec![post("/a/", "A", (2023, 1, 2))]).is_empty());
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = ContentCatalog::from_json("{\"posts\": [{\"id\": 1}]}");

        assert!(matches!(result, Err(ContentError::Malformed(_))));
    }

    #[test]
    fn trusted_html_debug_does_not_dump_markup() {
        let html = TrustedHtml::from_trusted_source("<p>secret body</p>");

        assert_eq!(format!("{:?}", html), "TrustedHtml(18 bytes)");
    }
}
