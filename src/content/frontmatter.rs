//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use thiserror::Error;

/// Marker line that opens and closes the front-matter block
pub const DELIMITER: &str = "---";

/// Errors from splitting or deserializing a front-matter block
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("file does not start with a '---' line")]
    Missing,

    #[error("no closing '---' line")]
    Unclosed,

    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Split a raw `tags` value on commas, keeping order and whitespace
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Deserialize the `tags` field, which is a single comma-separated string
fn comma_separated<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct CommaSeparated;

    impl<'de> Visitor<'de> for CommaSeparated {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a comma-separated string of tags")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(split_tags(value))
        }
    }

    deserializer.deserialize_any(CommaSeparated)
}

fn join_commas<S>(tags: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&tags.join(","))
}

/// Front-matter of a post.
///
/// Every field except `extra` is required; a file missing one of them, or
/// carrying a `tags` value that is not a string, fails to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub date: String,
    pub description: String,
    pub publish: bool,
    #[serde(deserialize_with = "comma_separated", serialize_with = "join_commas")]
    pub tags: Vec<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, body)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let (block, body) = split(content)?;
        let fm = serde_yaml::from_str::<FrontMatter>(block)?;
        Ok((fm, body))
    }

    /// Serialize back into a complete document with the given body
    pub fn to_document(&self, body: &str) -> Result<String, FrontMatterError> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n{body}"))
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Split a document into its raw front-matter block and its body.
///
/// The block is every line between the opening delimiter (which must be the
/// first line) and the next delimiter line, line endings included. The body
/// is everything after the closing delimiter line, untouched.
pub fn split(content: &str) -> Result<(&str, &str), FrontMatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let first = lines.next().ok_or(FrontMatterError::Missing)?;
    if !is_delimiter(first) {
        return Err(FrontMatterError::Missing);
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if is_delimiter(line) {
            return Ok((&content[start..offset], &content[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unclosed)
}
