use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crawl_logging::{crawl_debug, crawl_info};
use tempfile::NamedTempFile;
use thiserror::Error;
use visa_qa_core::{StateError, StateStore};

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("state file {path:?} is unreadable: {source}")]
    CorruptState {
        path: PathBuf,
        #[source]
        source: StateError,
    },
    #[error("failed to serialize state: {0}")]
    Serialize(#[source] StateError),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Writes whole files through a temp file in the target directory and a
/// rename, so readers never observe a half-written state or export.
#[derive(Debug, Default, Clone, Copy)]
pub struct AtomicFileWriter;

impl AtomicFileWriter {
    pub fn write(&self, target: &Path, content: &str) -> Result<PathBuf, PersistError> {
        let dir = parent_dir(target);
        ensure_output_dir(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // persist replaces an existing target in one rename.
        tmp.persist(target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target.to_path_buf())
    }
}

fn parent_dir(target: &Path) -> PathBuf {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Load the state file; a missing file is an empty store.
///
/// An unparsable file is an error rather than an empty store, so a corrupt
/// state is never silently replaced by the next save.
pub fn load_state(path: &Path) -> Result<StateStore, PersistError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            crawl_info!("No state file at {:?}; starting empty", path);
            return Ok(StateStore::new());
        }
        Err(err) => return Err(err.into()),
    };

    let store = StateStore::from_json(&text).map_err(|source| PersistError::CorruptState {
        path: path.to_path_buf(),
        source,
    })?;
    crawl_debug!("Loaded {} records from {:?}", store.len(), path);
    Ok(store)
}

/// Write the whole store as pretty-printed UTF-8 JSON.
pub fn save_state(path: &Path, store: &StateStore) -> Result<PathBuf, PersistError> {
    let json = store.to_json_pretty().map_err(PersistError::Serialize)?;
    let written = AtomicFileWriter.write(path, &json)?;
    crawl_info!("Saved {} records to {:?}", store.len(), written);
    Ok(written)
}
