//! File output behind an injectable capability.
//!
//! The pipeline never creates directories or files: it only overwrites
//! destinations that already exist. Keeping the filesystem behind a trait
//! lets tests simulate existing and missing files without real I/O.

use std::fs;
use std::io;
use std::path::Path;

pub trait FileSink {
    fn exists(&self, path: &str) -> bool;
    fn write(&mut self, path: &str, content: &str) -> io::Result<()>;
}

/// Writes straight to the local filesystem.
#[derive(Debug, Default)]
pub struct DiskSink;

impl FileSink for DiskSink {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn write(&mut self, path: &str, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exists_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Localizable.strings");
        let path_str = path.to_str().unwrap();

        let mut sink = DiskSink;
        assert!(!sink.exists(path_str));

        fs::write(&path, "old").unwrap();
        assert!(sink.exists(path_str));

        sink.write(path_str, "\"greeting\" = \"Hi\";\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "\"greeting\" = \"Hi\";\n");
    }
}
