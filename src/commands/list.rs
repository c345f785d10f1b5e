//! List site content

use anyhow::Result;
use std::fmt::Write;

use crate::content::PostMeta;
use crate::Folio;

/// Options for `folio list`
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// Emit JSON instead of text
    pub json: bool,
    /// Sort posts newest first instead of by file name
    pub by_date: bool,
}

/// List site content by type
pub fn run(folio: &Folio, content_type: &str, options: ListOptions) -> Result<()> {
    print!("{}", render(folio, content_type, options)?);
    Ok(())
}

/// Render the listing as it would be printed
pub fn render(folio: &Folio, content_type: &str, options: ListOptions) -> Result<String> {
    let store = folio.store();
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            let mut posts = store.all_metadata()?;
            if options.by_date {
                sort_newest_first(&mut posts);
            }
            if options.json {
                out = serde_json::to_string_pretty(&posts)?;
                out.push('\n');
            } else {
                writeln!(out, "Posts ({}):", posts.len())?;
                for post in posts {
                    let draft = if post.publish { "" } else { " (draft)" };
                    writeln!(
                        out,
                        "  {} - {} [{}]{}",
                        post.date, post.title, post.id, draft
                    )?;
                }
            }
        }
        "id" | "ids" => {
            let ids = store.all_ids()?;
            if options.json {
                out = serde_json::to_string_pretty(&ids)?;
                out.push('\n');
            } else {
                for id in ids {
                    writeln!(out, "{}", id)?;
                }
            }
        }
        "tag" | "tags" => {
            let tags = store.tags()?;
            if options.json {
                out = serde_json::to_string_pretty(&tags)?;
                out.push('\n');
            } else {
                writeln!(out, "Tags ({}):", tags.len())?;
                let mut tags: Vec<_> = tags.into_iter().collect();
                tags.sort_by(|a, b| b.1.cmp(&a.1));
                for (tag, count) in tags {
                    writeln!(out, "  {} ({})", tag, count)?;
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, id, tag",
                content_type
            );
        }
    }

    Ok(out)
}

/// Newest first; posts with unparseable dates go last, keeping their order
fn sort_newest_first(posts: &mut [PostMeta]) {
    posts.sort_by_key(|p| std::cmp::Reverse(p.parsed_date()));
}
