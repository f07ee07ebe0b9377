//! Mixtape - build compilation folders from a music library
use clap::{ArgGroup, Parser, Subcommand};
use mixtape_cli::{
    commands::{self, BuildArgs, TrackSource},
    config::Settings,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mixtape")]
#[command(about = "Build compilation folders from a music library", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./mixtape.toml if present)
    #[arg(short, long, global = true, env = "MIXTAPE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index a music folder into the catalogue
    Index {
        /// Folder to index (defaults to library.music_folder)
        folder: Option<PathBuf>,
    },
    /// Build a compilation
    #[command(group(ArgGroup::new("tracks").required(true).args(["tracklist", "saved"])))]
    Build {
        /// Compilation name, used as the folder name
        #[arg(short, long)]
        name: Option<String>,
        /// Folder the compilation folder is created in
        #[arg(short, long)]
        dest: Option<PathBuf>,
        /// Text file with one "Artist - Title" per line
        #[arg(short, long)]
        tracklist: Option<PathBuf>,
        /// Rebuild a saved compilation
        #[arg(short, long)]
        saved: Option<String>,
        /// Ask which file to use when several match
        #[arg(short, long)]
        interactive: bool,
        /// Save the compilation definition after building
        #[arg(long)]
        save: bool,
    },
    /// List saved compilations
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mixtape=info,mixtape_builder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Index { folder } => {
            commands::index(&settings, folder).await?;
        }
        Commands::Build {
            name,
            dest,
            tracklist,
            saved,
            interactive,
            save,
        } => {
            let source = match (tracklist, saved) {
                (Some(path), _) => TrackSource::Tracklist(path),
                (None, Some(name)) => TrackSource::Saved(name),
                (None, None) => anyhow::bail!("Either --tracklist or --saved is required"),
            };
            let args = BuildArgs {
                name,
                dest,
                source,
                interactive,
                save,
            };
            commands::build(&settings, &args).await?;
        }
        Commands::List => {
            commands::list(&settings)?;
        }
    }

    Ok(())
}
