//! Create new posts

use anyhow::{bail, Context, Result};
use chrono::Local;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::content::frontmatter::split_tags;
use crate::content::FrontMatter;
use crate::Folio;

/// Create a new unpublished post, returning the path written
pub fn create_post(
    folio: &Folio,
    title: &str,
    slug: Option<&str>,
    tags: Option<&str>,
) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => s.to_string(),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        bail!("Cannot derive a post id from title '{}'; pass --slug", title);
    }

    fs::create_dir_all(&folio.content_dir)
        .with_context(|| format!("Failed to create {:?}", folio.content_dir))?;

    let path = folio.content_dir.join(folio.config.post_file_name(&slug));
    if path.exists() {
        bail!("Post already exists: {:?}", path);
    }

    let fm = FrontMatter {
        title: title.to_string(),
        date: Local::now().format("%Y-%m-%d").to_string(),
        description: String::new(),
        publish: false,
        tags: split_tags(tags.unwrap_or_default()),
        extra: HashMap::new(),
    };

    let content = fm.to_document(&format!("\n# {}\n", title))?;
    fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;

    tracing::info!("Created: {:?}", path);
    Ok(path)
}
