//! Free space lookup for the export target.

use std::path::Path;

use sysinfo::Disks;

use crate::error::CliError;

/// Available bytes on the disk holding `path` (longest matching mount point).
///
/// `path` must exist; relative paths are resolved against the working directory.
pub(crate) fn available_space(path: &Path) -> Option<u64> {
    let path = path.canonicalize().ok()?;
    let disks = Disks::new_with_refreshed_list();
    disks
        .list()
        .iter()
        .filter(|disk| path.starts_with(disk.mount_point()))
        .max_by_key(|disk| disk.mount_point().as_os_str().len())
        .map(|disk| disk.available_space())
}

/// Fail unless `needed` bytes fit on the disk holding `target`.
pub(crate) fn ensure_space(target: &Path, needed: u64) -> Result<(), CliError> {
    let available = available_space(target).ok_or_else(|| {
        CliError::other(format!(
            "Cannot determine free space for {}",
            target.display()
        ))
    })?;
    check_space(needed, available)
}

pub(crate) fn check_space(needed: u64, available: u64) -> Result<(), CliError> {
    log::debug!("Export needs {} bytes, {} available", needed, available);
    if needed > available {
        return Err(CliError::InsufficientSpace { needed, available });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_space() {
        assert!(check_space(10, 10).is_ok());
        assert!(check_space(0, 0).is_ok());
        assert!(matches!(
            check_space(11, 10),
            Err(CliError::InsufficientSpace {
                needed: 11,
                available: 10
            })
        ));
    }

    #[test]
    fn test_relative_path_finds_same_disk_as_absolute() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            available_space(Path::new(".")).is_some(),
            available_space(&cwd).is_some()
        );
    }

    #[test]
    fn test_missing_path_has_no_space() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(available_space(&dir.path().join("absent")), None);
    }
}
