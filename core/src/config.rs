use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    /// Heading of the home listing, falls back to the title.
    pub heading: Option<String>,
    pub root_id: String,
    pub content_id: String,
    pub footer: FooterConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub built_with: String,
    pub built_with_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Title".to_string(),
            heading: None,
            root_id: "app".to_string(),
            content_id: "content".to_string(),
            footer: FooterConfig::default(),
        }
    }
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            built_with: "Yew".to_string(),
            built_with_url: "https://yew.rs".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|err| ConfigError::Malformed(err.to_string()))
    }

    /// Parses `text`, logging and falling back to defaults when it is broken.
    pub fn from_toml_or_default(text: &str) -> Self {
        Self::from_toml(text).unwrap_or_else(|err| {
            log::error!("{}", err);
            Self::default()
        })
    }

    pub fn heading(&self) -> &str {
        self.heading.as_deref().unwrap_or(&self.title)
    }
}
