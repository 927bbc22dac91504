//! Writing a paragraph to a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::Paragraph;

/// Error writing a paragraph to a file.
///
/// The two variants distinguish a destination that could not be created
/// from a write that failed partway. There is no cleanup on partial
/// failure; whatever was flushed stays on disk.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("unable to create {}: {source}", path.display())]
    Create { path: PathBuf, source: io::Error },
    #[error("unable to write to {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl Paragraph {
    /// Writes the paragraph to `path`, each line followed by a newline.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), WriteError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| WriteError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        for line in self.iter() {
            writeln!(writer, "{line}").map_err(|source| WriteError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        writer.flush().map_err(|source| WriteError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_line_per_line_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        Paragraph::from_lines(["a", "", "c"]).write_to_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\n\nc\n");
    }

    #[test]
    fn empty_paragraph_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        Paragraph::new().write_to_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn uncreatable_destination_is_a_create_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.txt");
        let err = Paragraph::from_text("x").write_to_file(&path).unwrap_err();
        assert!(matches!(err, WriteError::Create { .. }));
        assert!(err.to_string().contains("unable to create"));
    }
}
