use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use plexcleaner_core::util::format_bytes_approx;

use crate::cli_types::GlobalArgs;
use crate::error::CliError;

pub(crate) fn run_stats(global: &GlobalArgs) -> Result<(), CliError> {
    let library = super::load_library(global)?;
    let stats = library.stats();

    log::info!("");
    log::info!("{}", "Library".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Movies:         {:>8}", stats.retained);
    log::info!("  Unmatched:      {:>8}", stats.unmatched);
    log::info!("  Missing files:  {:>8}", stats.missing);
    log::info!("  Duplicates:     {:>8}", stats.duplicates);
    log::info!("  Rejected rows:  {:>8}", stats.rejected);
    log::info!("  Need update:    {:>8}", library.needs_update_count(None));
    log::info!(
        "  Effective size: {:>8}",
        format_bytes_approx(library.effective_size())
    );
    log::info!("  Locations:      {:>8}", library.roots().len());
    for root in library.roots() {
        log::info!("    {}", root.if_supports_color(Stdout, |t| t.cyan()));
    }

    if library.is_empty() {
        return Err(CliError::EmptyLibrary);
    }
    Ok(())
}
