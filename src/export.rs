// src/export.rs
use crate::error::TranslitError;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the space-joined output words to `path` as plain text, atomically:
/// the content lands in a temp file in the destination directory and is
/// renamed into place, so readers never observe a partial export.
pub fn export_plain_text(words: &[String], path: &Path) -> Result<(), TranslitError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let temp_file = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer.write_all(words.join(" ").as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| TranslitError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_space_joined_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let words = vec!["otāṛ".to_string(), "es".to_string(), "olo".to_string()];
        export_plain_text(&words, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "otāṛ es olo\n");
    }

    #[test]
    fn overwrites_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        export_plain_text(&["first".to_string()], &path).unwrap();
        export_plain_text(&["second".to_string()], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.txt");
        export_plain_text(&[], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "\n");
    }
}
