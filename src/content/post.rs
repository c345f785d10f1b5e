//! Post models

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::HashMap;

use super::FrontMatter;

/// Listing entry for a post: its id plus parsed front-matter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostMeta {
    /// File name without extension
    pub id: String,

    pub title: String,

    /// Date as written in the front-matter
    pub date: String,

    pub description: String,

    /// Whether the post is visible in production
    pub publish: bool,

    /// Post tags, in front-matter order
    pub tags: Vec<String>,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl PostMeta {
    pub fn new(id: impl Into<String>, fm: FrontMatter) -> Self {
        Self {
            id: id.into(),
            title: fm.title,
            date: fm.date,
            description: fm.description,
            publish: fm.publish,
            tags: fm.tags,
            extra: fm.extra,
        }
    }

    /// Parse the date string as a calendar date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date_string(&self.date)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A full post: metadata plus the Markdown body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    #[serde(flatten)]
    pub meta: PostMeta,

    /// Raw markdown body, front-matter stripped
    pub content: String,
}

impl Post {
    pub fn new(meta: PostMeta, content: impl Into<String>) -> Self {
        Self {
            meta,
            content: content.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.meta.id
    }
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 with offset
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}
