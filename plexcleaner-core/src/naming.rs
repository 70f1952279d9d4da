//! Canonical directory and file naming for a [`MediaItem`].
//!
//! Layout: `[{studio} - ]{title}[ ({year})]/` holding
//! `[{studio} - ][{year} - ][{cast} - ]{title}{ext}`.

use std::path::Path;

use crate::media::MediaItem;

const SEPARATOR: &str = " - ";

fn join(base: &str, rest: &str) -> String {
    Path::new(base).join(rest).to_string_lossy().into_owned()
}

impl MediaItem {
    /// Directory the movie should live in.
    pub fn correct_directory_name(&self) -> String {
        let directory = match &self.year {
            Some(year) => format!("{} ({})", self.canonical_title, year),
            None => self.canonical_title.clone(),
        };
        match self.studio() {
            Some(studio) => format!("{studio}{SEPARATOR}{directory}"),
            None => directory,
        }
    }

    /// File name the movie should have, extension included.
    pub fn correct_filename(&self) -> String {
        let cast = self
            .cast()
            .filter(|names| !names.is_empty())
            .map(|names| names.join(SEPARATOR));

        let segments: Vec<&str> = [self.studio(), self.year(), cast.as_deref()]
            .into_iter()
            .flatten()
            .chain(std::iter::once(self.canonical_title.as_str()))
            .collect();

        format!("{}{}", segments.join(SEPARATOR), self.file_extension)
    }

    fn directory_is_correct(&self) -> bool {
        let current = Path::new(&self.file_directory)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("");
        self.correct_directory_name() == current
    }

    /// Path relative to the directory holding the movie folder.
    pub fn correct_relative_path(&self) -> String {
        if self.directory_is_correct() {
            self.correct_filename()
        } else {
            join(&self.correct_directory_name(), &self.correct_filename())
        }
    }

    /// Target file, rooted at `root_override` or the current directory.
    pub fn correct_absolute_file(&self, root_override: Option<&str>) -> String {
        let base = root_override.unwrap_or(&self.file_directory);
        join(base, &self.correct_relative_path())
    }

    /// Target movie directory, rooted at `root_override` or the current directory.
    pub fn correct_absolute_directory(&self, root_override: Option<&str>) -> String {
        match root_override {
            Some(root) => join(root, &self.correct_directory_name()),
            None if self.directory_is_correct() => self.file_directory.clone(),
            None => join(&self.file_directory, &self.correct_directory_name()),
        }
    }

    /// True when the file is not already where it should be.
    pub fn needs_update(&self, root_override: Option<&str>) -> bool {
        self.correct_absolute_file(root_override) != self.original_file
    }

    /// Where the poster named `jacket_name` belongs; `None` when unmatched.
    pub fn target_jacket_file(&self, root_override: Option<&str>, jacket_name: &str) -> Option<String> {
        self.is_matched()
            .then(|| join(&self.correct_absolute_directory(root_override), jacket_name))
    }
}

#[cfg(test)]
#[path = "tests/naming_tests.rs"]
mod tests;
