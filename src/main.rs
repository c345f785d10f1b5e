//! CLI entry point for folio

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::commands::{self, list::ListOptions};
use folio::config::Mode;
use folio::Folio;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Markdown content store for a personal blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Environment mode (production hides unpublished posts)
    #[arg(short, long, global = true)]
    mode: Option<Mode>,

    /// Shorthand for --mode production
    #[arg(long, global = true, conflicts_with = "mode")]
    production: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new unpublished post
    New {
        /// Title of the new post
        title: String,

        /// Post id (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,

        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// List posts, ids or tags
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, id, tag)
        #[arg(default_value = "post")]
        r#type: String,

        /// Output JSON
        #[arg(long)]
        json: bool,

        /// Sort posts newest first
        #[arg(long)]
        by_date: bool,
    },

    /// Show a single post
    Show {
        /// Post id (file name without extension)
        id: String,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate front-matter of every post
    Check,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let folio = Folio::new(&base_dir)?;

    // Flag, then FOLIO_ENV, then _config.yml
    let mode = if cli.production {
        Some(Mode::Production)
    } else {
        cli.mode.or_else(Mode::from_env)
    };
    let folio = match mode {
        Some(mode) => folio.with_mode(mode),
        None => folio,
    };
    tracing::debug!("Using {:?} in {} mode", folio.content_dir, folio.mode);

    match cli.command {
        Commands::New { title, slug, tags } => {
            let path = commands::new::create_post(
                &folio,
                &title,
                slug.as_deref(),
                tags.as_deref(),
            )?;
            println!("Created {}", path.display());
        }

        Commands::List {
            r#type,
            json,
            by_date,
        } => {
            commands::list::run(&folio, &r#type, ListOptions { json, by_date })?;
        }

        Commands::Show { id, json } => {
            commands::show::run(&folio, &id, json)?;
        }

        Commands::Check => {
            commands::check::run(&folio)?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
