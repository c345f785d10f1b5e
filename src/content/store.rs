//! Content store - reads posts from the content directory

use indexmap::IndexMap;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, Post, PostMeta};
use crate::config::Mode;

/// A content file and the id derived from its name
#[derive(Debug, Clone)]
struct SourceFile {
    id: String,
    path: PathBuf,
}

/// Read-only view over a directory of Markdown posts.
///
/// Nothing is cached: every call re-reads the directory, so a file written
/// just before a call is always seen by it.
#[derive(Debug, Clone)]
pub struct ContentStore {
    dir: PathBuf,
    mode: Mode,
}

impl ContentStore {
    /// Create a store over `dir`; `mode` decides whether drafts are visible
    pub fn new<P: Into<PathBuf>>(dir: P, mode: Mode) -> Self {
        Self {
            dir: dir.into(),
            mode,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Metadata of every visible post, in file name order
    pub fn all_metadata(&self) -> Result<Vec<PostMeta>, ContentError> {
        let mut metas = Vec::new();
        for source in self.sources()? {
            let post = load_post(&source)?;
            if self.is_visible(&post.meta) {
                metas.push(post.meta);
            }
        }
        Ok(metas)
    }

    /// Ids of every visible post, in file name order
    pub fn all_ids(&self) -> Result<Vec<String>, ContentError> {
        Ok(self
            .all_metadata()?
            .into_iter()
            .map(|meta| meta.id)
            .collect())
    }

    /// Fetch a full post by id.
    ///
    /// Returns `Ok(None)` when no file has this id, or when the post is
    /// unpublished and the store runs in production mode.
    pub fn post(&self, id: &str) -> Result<Option<Post>, ContentError> {
        let Some(source) = self.sources()?.into_iter().find(|s| s.id == id) else {
            tracing::debug!("No post with id '{}' in {:?}", id, self.dir);
            return Ok(None);
        };

        let post = load_post(&source)?;
        if self.is_visible(&post.meta) {
            Ok(Some(post))
        } else {
            Ok(None)
        }
    }

    /// Tag name to number of visible posts carrying it, in first-seen order
    pub fn tags(&self) -> Result<IndexMap<String, usize>, ContentError> {
        let mut tags = IndexMap::new();
        for meta in self.all_metadata()? {
            for tag in meta.tags {
                *tags.entry(tag).or_insert(0) += 1;
            }
        }
        Ok(tags)
    }

    /// Visible posts carrying `tag`
    pub fn posts_tagged(&self, tag: &str) -> Result<Vec<PostMeta>, ContentError> {
        Ok(self
            .all_metadata()?
            .into_iter()
            .filter(|meta| meta.has_tag(tag))
            .collect())
    }

    fn is_visible(&self, meta: &PostMeta) -> bool {
        if meta.publish || !self.mode.is_production() {
            return true;
        }
        tracing::debug!("Hiding unpublished post '{}'", meta.id);
        false
    }

    /// Enumerate content files directly inside the directory
    fn sources(&self) -> Result<Vec<SourceFile>, ContentError> {
        let metadata = fs::metadata(&self.dir).map_err(|source| ContentError::Io {
            path: self.dir.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(ContentError::Io {
                path: self.dir.clone(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
            });
        }

        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        let mut sources = Vec::new();

        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().map_or_else(|| self.dir.clone(), Path::to_path_buf);
                ContentError::Io {
                    path,
                    source: e.into(),
                }
            })?;

            let path = entry.path();
            if !entry.file_type().is_file() || is_hidden(path) || !is_markdown_file(path) {
                tracing::debug!("Skipping {:?}", path);
                continue;
            }

            let Some(id) = post_id(path) else {
                tracing::warn!("Skipping {:?}: file name is not valid UTF-8", path);
                continue;
            };

            if let Some(first) = seen.insert(id.clone(), path.to_path_buf()) {
                return Err(ContentError::DuplicateId {
                    id,
                    first,
                    second: path.to_path_buf(),
                });
            }
            sources.push(SourceFile {
                id,
                path: path.to_path_buf(),
            });
        }

        tracing::debug!("Found {} content files in {:?}", sources.len(), self.dir);
        Ok(sources)
    }
}

/// Load a single post from a file
fn load_post(source: &SourceFile) -> Result<Post, ContentError> {
    let raw = fs::read_to_string(&source.path).map_err(|e| ContentError::Io {
        path: source.path.clone(),
        source: e,
    })?;
    let (fm, body) = FrontMatter::parse(&raw).map_err(|e| ContentError::FrontMatter {
        path: source.path.clone(),
        source: e,
    })?;

    Ok(Post::new(PostMeta::new(source.id.as_str(), fm), body))
}

/// Post id: the file name without its extension
fn post_id(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
