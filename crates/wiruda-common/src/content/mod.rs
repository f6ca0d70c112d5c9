//! Content helpers - rich-text sanitizing, plain-text excerpts, search patterns,
//! and storage object references

mod sanitize;
mod storage_url;
mod text;

pub use sanitize::sanitize_html;
pub use storage_url::StorageObject;
pub use text::{escape_like, excerpt, strip_tags, truncate_chars, EXCERPT_LENGTH};
