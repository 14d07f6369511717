use std::path::{Path, PathBuf};

/// Extensions offered as a file-picker filter. Advisory only: nothing rejects
/// a file with a different extension.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = [".pdf", ".docx", ".doc"];

/// A resume the user picked, either by dropping it or through the browse dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Display name is the final path component; falls back to the whole path.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(name, path)
    }

    pub fn has_accepted_extension(&self) -> bool {
        let lower = self.name.to_ascii_lowercase();
        ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
    }
}

/// First file wins; the rest of a multi-file gesture is discarded.
pub(crate) fn first_file(files: Vec<SelectedFile>) -> Option<SelectedFile> {
    files.into_iter().next()
}
