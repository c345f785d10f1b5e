//! Content module - posts, front-matter, and the content store

mod error;
pub mod frontmatter;
mod post;
mod store;

pub use error::ContentError;
pub use frontmatter::{FrontMatter, FrontMatterError};
pub use post::{Post, PostMeta};
pub use store::ContentStore;
