//! Platform-independent parts of the blog: theme state, post data and the
//! page models the web front-end renders.

pub use config::*;
pub use content::*;
pub use error::*;
pub use page::*;
pub use store::*;
pub use theme::*;

mod config;
mod content;
mod error;
mod page;
mod store;
mod theme;
