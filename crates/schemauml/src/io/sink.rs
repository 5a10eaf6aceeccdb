//! Output sink for rendered markup

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::{Result, SchemaUmlError};

/// Output path used when none is given
pub const DEFAULT_OUT_FILE: &str = "plantuml.txt";

/// Writes rendered markup to a file, or to stdout when the path is `-`
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_stdout(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    /// Write the whole content in one attempt
    pub fn write(&self, content: &str) -> Result<()> {
        if self.is_stdout() {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| SchemaUmlError::write_error("<stdout>", e))?;
            debug!(bytes = content.len(), "Wrote markup to stdout");
            return Ok(());
        }

        std::fs::write(&self.path, content)
            .map_err(|e| SchemaUmlError::write_error(&self.path, e))?;
        info!(path = %self.path.display(), bytes = content.len(), "Wrote markup");
        Ok(())
    }
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new(DEFAULT_OUT_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let sink = FileSink::default();
        assert_eq!(sink.path(), Path::new("plantuml.txt"));
        assert!(!sink.is_stdout());
        assert!(FileSink::new("-").is_stdout());
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        FileSink::new(&path).write("@startuml\n@enduml\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "@startuml\n@enduml\n");
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old content that is longer").unwrap();
        FileSink::new(&path).write("new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_failure_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        let err = FileSink::new(&path).write("x").unwrap_err();
        assert!(matches!(err, SchemaUmlError::WriteError { .. }));
    }
}
