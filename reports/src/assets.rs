//! Diagram asset loading.
//!
//! The system boundary section shows one image read from disk. A missing
//! image is a recoverable condition: the section renders a notice in its
//! place and everything else still renders.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data::DIAGRAM_FILE;

/// Failure to load the diagram asset.
///
/// The `Display` text is the notice shown to readers.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file does not exist
    #[error("Error: '{name}' not found in the directory.")]
    NotFound {
        /// File name as configured
        name: String,
        /// Directory that was searched
        dir: PathBuf,
    },
    /// The file exists but could not be read
    #[error("Error: '{name}' could not be read: {source}")]
    Io {
        /// File name as configured
        name: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// A loaded diagram, ready to be referenced from the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagram {
    /// File name of the image
    pub file_name: String,
    /// `src` attribute value for the `<img>` tag
    pub src: String,
    /// Size of the image in bytes
    pub size: usize,
}

/// Where the diagram lives on disk and how the page refers to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetStore {
    /// Directory holding the diagram
    pub dir: PathBuf,
    /// Diagram file name
    pub diagram: String,
    /// Prefix prepended to the file name in `<img src>` (e.g. `/assets/`)
    pub url_prefix: String,
}

impl Default for AssetStore {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            diagram: DIAGRAM_FILE.into(),
            url_prefix: String::new(),
        }
    }
}

impl AssetStore {
    /// Store rooted at `dir` with the default diagram name.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    /// Use a different diagram file name.
    pub fn with_diagram(mut self, name: impl Into<String>) -> Self {
        self.diagram = name.into();
        self
    }

    /// Set the URL prefix used in `<img src>`.
    pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefix = prefix.into();
        self
    }

    /// Full path of the diagram on disk.
    pub fn diagram_path(&self) -> PathBuf {
        self.dir.join(&self.diagram)
    }

    /// Read the diagram bytes. The file is closed before this returns.
    pub fn read_diagram(&self) -> Result<Vec<u8>, AssetError> {
        read_asset(&self.dir, &self.diagram)
    }

    /// Load the diagram for display.
    pub fn load_diagram(&self) -> Result<Diagram, AssetError> {
        let bytes = self.read_diagram()?;
        Ok(Diagram {
            file_name: self.diagram.clone(),
            src: format!("{}{}", self.url_prefix, self.diagram),
            size: bytes.len(),
        })
    }
}

fn read_asset(dir: &Path, name: &str) -> Result<Vec<u8>, AssetError> {
    let path = dir.join(name);
    fs::read(&path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => AssetError::NotFound {
            name: name.to_string(),
            dir: dir.to_path_buf(),
        },
        _ => AssetError::Io {
            name: name.to_string(),
            source,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_diagram_reports_file_name() {
        let temp = TempDir::new().expect("temp dir");
        let store = AssetStore::new(temp.path());
        let err = store.load_diagram().unwrap_err();
        assert!(matches!(err, AssetError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            "Error: 'picture1.png' not found in the directory."
        );
    }

    #[test]
    fn loads_existing_diagram() {
        let temp = TempDir::new().expect("temp dir");
        fs::write(temp.path().join("picture1.png"), b"\x89PNG\r\n").expect("write");
        let store = AssetStore::new(temp.path()).with_url_prefix("/assets/");
        let diagram = store.load_diagram().expect("diagram");
        assert_eq!(diagram.file_name, "picture1.png");
        assert_eq!(diagram.src, "/assets/picture1.png");
        assert_eq!(diagram.size, 6);
    }

    #[test]
    fn custom_diagram_name() {
        let temp = TempDir::new().expect("temp dir");
        fs::write(temp.path().join("boundary.svg"), b"<svg/>").expect("write");
        let store = AssetStore::new(temp.path()).with_diagram("boundary.svg");
        assert_eq!(store.read_diagram().expect("bytes"), b"<svg/>".to_vec());
        assert_eq!(store.diagram_path(), temp.path().join("boundary.svg"));
    }

    #[test]
    fn directory_in_place_of_file_is_io_error() {
        let temp = TempDir::new().expect("temp dir");
        fs::create_dir(temp.path().join("picture1.png")).expect("mkdir");
        let err = AssetStore::new(temp.path()).load_diagram().unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
        assert!(err.to_string().contains("picture1.png"));
    }
}
