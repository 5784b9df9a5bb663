//! CLI entry point for mdx-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mdx_blog::commands::new::NewPost;
use mdx_blog::{Locale, Site};

#[derive(Parser)]
#[command(name = "mdx-blog")]
#[command(version)]
#[command(about = "Locale-aware content reader and post scaffolder for MDX blogs", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new blog site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        #[arg(short, long)]
        title: String,

        /// Short description
        #[arg(long)]
        description: Option<String>,

        /// Category label
        #[arg(long)]
        category: Option<String>,

        /// Cover image URL
        #[arg(long)]
        cover_image: Option<String>,

        /// Write into an alternate locale
        #[arg(short, long)]
        locale: Option<Locale>,
    },

    /// List posts visible in a locale
    #[command(alias = "ls")]
    List {
        /// Locale to list (defaults to the site default)
        #[arg(short, long)]
        locale: Option<Locale>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Show {
        /// Post slug
        slug: String,

        /// Locale to resolve in (defaults to the site default)
        #[arg(short, long)]
        locale: Option<Locale>,
    },

    /// Display version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging, once, before anything else runs
    let filter = if cli.debug {
        "mdx_blog=debug,info"
    } else {
        "mdx_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(mdx_blog::commands::exit_status(&e))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog site in {:?}", target_dir);
            mdx_blog::commands::init::init_site(&target_dir, chrono::Local::now().date_naive())?;
            println!("Initialized blog site in {:?}", target_dir);
        }

        Commands::New {
            title,
            description,
            category,
            cover_image,
            locale,
        } => {
            let site = Site::new(&base_dir)?;
            let request = NewPost {
                title,
                description,
                category,
                cover_image,
                locale,
            };
            mdx_blog::commands::new::run(&site, &request)?;
        }

        Commands::List { locale, json } => {
            let site = Site::new(&base_dir)?;
            mdx_blog::commands::list::run(&site, locale, json)?;
        }

        Commands::Show { slug, locale } => {
            let site = Site::new(&base_dir)?;
            mdx_blog::commands::show::run(&site, locale, &slug)?;
        }

        Commands::Version => {
            println!("mdx-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
