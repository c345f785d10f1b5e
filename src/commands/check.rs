//! Validate every content file

use anyhow::{Context, Result};

use crate::config::Mode;
use crate::Folio;

/// Summary of a successful check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub posts: usize,
    pub drafts: usize,
    /// Ids whose date could not be parsed as a calendar date
    pub bad_dates: Vec<String>,
}

/// Parse every post regardless of mode, failing on the first malformed file
pub fn check(folio: &Folio) -> Result<CheckReport> {
    let store = folio.clone().with_mode(Mode::Development).store();
    let metas = store
        .all_metadata()
        .with_context(|| format!("Content check failed in {:?}", store.dir()))?;

    let mut report = CheckReport {
        posts: metas.len(),
        ..Default::default()
    };
    for meta in metas {
        if !meta.publish {
            report.drafts += 1;
        }
        if meta.parsed_date().is_none() {
            tracing::warn!("Post '{}' has an unparseable date: {:?}", meta.id, meta.date);
            report.bad_dates.push(meta.id);
        }
    }

    Ok(report)
}

/// Run the check and print a summary
pub fn run(folio: &Folio) -> Result<()> {
    let report = check(folio)?;
    println!(
        "Checked {} posts ({} drafts, {} with unparseable dates)",
        report.posts,
        report.drafts,
        report.bad_dates.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentError;
    use std::fs;

    fn write_post(dir: &std::path::Path, name: &str, date: &str, publish: bool) {
        fs::write(
            dir.join(name),
            format!(
                "---\ntitle: T\ndate: {}\ndescription: D\npublish: {}\ntags: x\n---\n",
                date, publish
            ),
        )
        .unwrap();
    }

    #[test]
    fn test_check_counts_drafts_and_dates() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir(&posts).unwrap();
        write_post(&posts, "one.md", "2024-01-01", true);
        write_post(&posts, "two.md", "someday", false);

        let folio = Folio::new(dir.path()).unwrap().with_mode(Mode::Production);
        let report = check(&folio).unwrap();
        assert_eq!(
            report,
            CheckReport {
                posts: 2,
                drafts: 1,
                bad_dates: vec!["two".to_string()],
            }
        );
    }

    #[test]
    fn test_check_reports_offending_file() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir(&posts).unwrap();
        write_post(&posts, "fine.md", "2024-01-01", true);
        fs::write(posts.join("oops.md"), "no front-matter here\n").unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let err = check(&folio).unwrap_err();
        let content_err = err.downcast_ref::<ContentError>().unwrap();
        assert_eq!(content_err.path(), posts.join("oops.md"));
    }
}
