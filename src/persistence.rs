// File: src/persistence.rs
use crate::core::special_words::SpecialWords;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encode error: {0}")]
    Encode(bincode::Error),

    #[error("decode error: {0}")]
    Decode(bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not replace store file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// `.json` stores are pretty-printed so they can be edited by hand.
fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Writes the table atomically: a temp file in the same directory is filled
/// and then renamed over `path`.
pub fn save_special_words(words: &SpecialWords, path: &Path) -> Result<(), StoreError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        if is_json(path) {
            serde_json::to_writer_pretty(&mut writer, words)?;
        } else {
            bincode::serialize_into(&mut writer, words).map_err(StoreError::Encode)?;
        }
        writer.flush()?;
    }

    temp_file.persist(path)?;
    tracing::debug!(path = %path.display(), entries = words.len(), "special words saved");
    Ok(())
}

pub fn load_special_words(path: &Path) -> Result<SpecialWords, StoreError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let stored: SpecialWords = if is_json(path) {
        serde_json::from_reader(reader)?
    } else {
        bincode::deserialize_from(reader).map_err(StoreError::Decode)?
    };
    // Hand-edited files may carry mixed-case keys.
    let words: SpecialWords = stored.iter().map(|(w, s)| (w.to_string(), s.to_string())).collect();
    tracing::debug!(path = %path.display(), entries = words.len(), "special words loaded");
    Ok(words)
}
