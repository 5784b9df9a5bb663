//! Content module - post model, metadata blocks and discovery on disk

mod error;
mod frontmatter;
pub mod loader;
pub mod naming;
mod post;

pub use error::ContentError;
pub use frontmatter::PostMetadata;
pub use loader::ContentLoader;
pub use post::Post;
