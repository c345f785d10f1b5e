//! Show a single post

use anyhow::{bail, Result};
use std::fmt::Write;

use crate::Folio;

/// Print one post by id
pub fn run(folio: &Folio, id: &str, json: bool) -> Result<()> {
    print!("{}", render(folio, id, json)?);
    Ok(())
}

/// Render a post as it would be printed; errors when the post is not visible
pub fn render(folio: &Folio, id: &str, json: bool) -> Result<String> {
    let Some(post) = folio.store().post(id)? else {
        bail!("Post not found: {}", id);
    };

    if json {
        let mut out = serde_json::to_string_pretty(&post)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    writeln!(out, "{}", post.meta.title)?;
    writeln!(out, "date: {}", post.meta.date)?;
    writeln!(out, "tags: {}", post.meta.tags.join(", "))?;
    if !post.meta.publish {
        writeln!(out, "status: draft")?;
    }
    writeln!(out, "{}", post.meta.description)?;
    writeln!(out)?;
    out.push_str(&post.content);
    Ok(out)
}
