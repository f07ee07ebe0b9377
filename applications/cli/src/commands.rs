//! Subcommand implementations

use crate::config::Settings;
use crate::{progress, prompt};
use anyhow::Context;
use mixtape_builder::{read_tracklist_file, ChoiceFn, CompilationBuilder};
use mixtape_core::{BuildResult, CompilationDefinition, CompilationRequest, IndexStats, TrackMatch};
use mixtape_metadata::LibraryIndexer;
use mixtape_storage::{compilations, SqliteCatalogue};
use std::path::PathBuf;
use std::sync::Arc;

/// Where the tracks of a build come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackSource {
    /// A text file with one `Artist - Title` per line
    Tracklist(PathBuf),
    /// A definition saved by an earlier `--save`
    Saved(String),
}

#[derive(Debug, Clone)]
pub struct BuildArgs {
    pub name: Option<String>,
    pub dest: Option<PathBuf>,
    pub source: TrackSource,
    pub interactive: bool,
    pub save: bool,
}

/// Index a music folder into the catalogue
pub async fn index(settings: &Settings, folder: Option<PathBuf>) -> anyhow::Result<IndexStats> {
    let folder = folder
        .or_else(|| settings.library.music_folder.clone())
        .context("No folder given and library.music_folder is not configured")?;

    let url = &settings.catalogue.database_url;
    let catalogue = Arc::new(
        SqliteCatalogue::open_for_indexing(url)
            .await
            .with_context(|| format!("Could not open catalogue {url}"))?,
    );

    let indexer = LibraryIndexer::with_config(Arc::clone(&catalogue), settings.index_config());
    let outcome = indexer.index(&folder).await;
    drop(indexer);

    if let Ok(catalogue) = Arc::try_unwrap(catalogue) {
        catalogue.close().await;
    }

    let stats = outcome.with_context(|| format!("Indexing {} failed", folder.display()))?;

    println!("{}", stats.summary_text());
    for (path, error) in &stats.errors {
        println!("  ! {}: {}", path.display(), error);
    }

    Ok(stats)
}

/// Work out the build request from the arguments and saved definitions
pub fn resolve_request(
    args: &BuildArgs,
    definitions: &[CompilationDefinition],
) -> anyhow::Result<CompilationRequest> {
    match &args.source {
        TrackSource::Tracklist(path) => {
            let name = args.name.clone().context("--name is required with --tracklist")?;
            let dest = args.dest.clone().context("--dest is required with --tracklist")?;

            let parsed = read_tracklist_file(path)
                .with_context(|| format!("Could not read tracklist {}", path.display()))?;
            for rejected in &parsed.rejected {
                println!("Ignoring line {}: {}", rejected.line, rejected.content);
            }

            Ok(CompilationRequest::new(dest, name, parsed.tracks))
        }
        TrackSource::Saved(saved) => {
            let definition = compilations::find(definitions, saved)
                .with_context(|| format!("No saved compilation named '{saved}'"))?;

            let mut request = definition.to_request();
            if let Some(name) = &args.name {
                request.name.clone_from(name);
            }
            if let Some(dest) = &args.dest {
                request.dest_base.clone_from(dest);
            }
            Ok(request)
        }
    }
}

/// Build a compilation
pub async fn build(settings: &Settings, args: &BuildArgs) -> anyhow::Result<BuildResult> {
    let definitions_path = &settings.build.compilations_file;
    let mut definitions = compilations::load(definitions_path)
        .with_context(|| format!("Could not load {}", definitions_path.display()))?;

    let request = resolve_request(args, &definitions)?;
    tracing::info!(
        "Building '{}' ({} tracks) in {}",
        request.name,
        request.tracks.len(),
        request.destination().display()
    );

    let url = &settings.catalogue.database_url;
    let catalogue = SqliteCatalogue::open_read_only(url)
        .await
        .with_context(|| format!("Could not open catalogue {url}"))?;

    let result = run_build(&catalogue, settings, &request, args.interactive).await;
    catalogue.close().await;

    if let Some(reason) = &result.setup_error {
        anyhow::bail!("Build aborted: {reason}");
    }
    print_result(&result);

    if args.save {
        compilations::upsert(
            &mut definitions,
            CompilationDefinition {
                name: request.name.clone(),
                dest_base: request.dest_base.clone(),
                tracklist: request.tracks.clone(),
                selected_paths: Some(result.selected_paths.clone()),
            },
        );
        compilations::save(definitions_path, &definitions)
            .with_context(|| format!("Could not save {}", definitions_path.display()))?;
        println!("Saved '{}' to {}", request.name, definitions_path.display());
    }

    Ok(result)
}

async fn run_build(
    catalogue: &SqliteCatalogue,
    settings: &Settings,
    request: &CompilationRequest,
    interactive: bool,
) -> BuildResult {
    let config = settings.build_config();
    let builder = CompilationBuilder::from_config(catalogue, &config);
    let on_demand = config.fallback_scanner();
    let bar = progress::create_progress_bar();

    let mut on_progress = |current: usize, total: usize, message: &str| {
        progress::update(&bar, current, total, message);
    };
    let mut ask = |artist: &str, title: &str, candidates: &[TrackMatch]| -> Option<PathBuf> {
        bar.suspend(|| prompt::choose_from_stdin(artist, title, candidates, &on_demand))
    };
    let choice: Option<&mut ChoiceFn<'_>> = if interactive { Some(&mut ask) } else { None };

    let result = builder.build(request, Some(&mut on_progress), choice).await;
    bar.finish_and_clear();
    result
}

fn print_result(result: &BuildResult) {
    println!("{}", result.summary_text());

    if !result.not_found.is_empty() {
        println!("Not found:");
        for entry in &result.not_found {
            println!("  - {entry}");
        }
    }

    if !result.not_copied.is_empty() {
        println!("Not copied:");
        for entry in &result.not_copied {
            println!("  - {entry}");
        }
    }
}

/// Print saved compilations
pub fn list(settings: &Settings) -> anyhow::Result<Vec<CompilationDefinition>> {
    let path = &settings.build.compilations_file;
    let definitions =
        compilations::load(path).with_context(|| format!("Could not load {}", path.display()))?;

    if definitions.is_empty() {
        println!("No saved compilations in {}", path.display());
    }
    for definition in &definitions {
        println!(
            "{}  ({} tracks) -> {}",
            definition.name,
            definition.tracklist.len(),
            definition.dest_base.join(&definition.name).display()
        );
    }

    Ok(definitions)
}
