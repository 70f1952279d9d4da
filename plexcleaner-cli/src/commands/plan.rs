use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use plexcleaner_core::Library;

use crate::cli_types::GlobalArgs;
use crate::error::CliError;
use crate::space::ensure_space;

/// Options of the `plan` command.
pub(crate) struct PlanOptions {
    pub export: Option<PathBuf>,
    pub update: bool,
    pub jacket: String,
    pub interrupt: bool,
}

pub(crate) fn run_plan(global: &GlobalArgs, options: &PlanOptions) -> Result<(), CliError> {
    let library = super::load_library(global)?;
    check_library(&library, options.interrupt)?;

    let target = match &options.export {
        Some(export) => {
            if !export.is_dir() {
                return Err(CliError::other(format!(
                    "Export target {} is not a directory",
                    export.display()
                )));
            }
            let export = export.canonicalize()?;
            log::info!("Will consolidate library in: '{}'", export.display());
            ensure_space(&export, library.effective_size())?;
            Some(export.to_string_lossy().into_owned())
        }
        None => None,
    };
    let target = target.as_deref();

    if options.update {
        log::info!("Will update media file location in Plex Database");
    }
    log::info!("");

    let mut moves = 0usize;
    for movie in &library {
        log::info!(
            "Processing: {}",
            movie
                .canonical_title()
                .if_supports_color(Stdout, |t| t.bold()),
        );

        if movie.needs_update(target) {
            moves += 1;
            log::info!(
                "  {} {} {}",
                movie.original_file(),
                "\u{2192}".if_supports_color(Stdout, |t| t.dimmed()),
                movie
                    .correct_absolute_file(target)
                    .if_supports_color(Stdout, |t| t.green()),
            );
        } else {
            log::debug!("  Already in place: {}", movie.original_file());
        }

        if !movie.exists() {
            log::warn!(
                "  {} file not found, nothing to move",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            );
        }

        if let (Some(source), Some(dest)) = (
            movie.metadata_jacket(&global.plex_home),
            movie.target_jacket_file(target, &options.jacket),
        ) {
            log::debug!("  Jacket: {} \u{2192} {}", source.display(), dest);
        }
    }

    log::info!("");
    log::info!(
        "{} of {} movies need to be renamed or moved",
        moves.if_supports_color(Stdout, |t| t.bold()),
        library.len(),
    );
    if options.update && moves > 0 {
        log::info!("{} Plex database locations would be updated", moves);
    }
    Ok(())
}

/// Abort conditions that do not depend on the export target.
pub(crate) fn check_library(library: &Library, interrupt: bool) -> Result<(), CliError> {
    if library.is_empty() {
        return Err(CliError::EmptyLibrary);
    }
    if interrupt && library.has_missing_file() {
        return Err(CliError::MissingFile(library.stats().missing));
    }
    Ok(())
}
