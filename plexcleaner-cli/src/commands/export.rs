use std::io::Write;
use std::path::Path;

use crate::cli_types::GlobalArgs;
use crate::error::CliError;

/// Print each retained movie as a JSON line on stdout.
pub(crate) fn run_export(global: &GlobalArgs, target: Option<&Path>) -> Result<(), CliError> {
    let library = super::load_library(global)?;
    if library.is_empty() {
        return Err(CliError::EmptyLibrary);
    }

    let target = target
        .map(super::absolute_root)
        .transpose()?
        .map(|t| t.to_string_lossy().into_owned());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for movie in &library {
        writeln!(out, "{}", movie.to_json(target.as_deref())?)?;
    }
    out.flush()?;
    Ok(())
}
