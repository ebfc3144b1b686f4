use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::BoardConfig;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "plank.toml";

/// Resolve the config path: explicit path if given, else ./plank.toml when
/// it exists, else None (callers fall back to the sample board).
pub fn discover_config(explicit: Option<&str>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(PathBuf::from(path)),
        None => {
            let default = PathBuf::from(CONFIG_FILE);
            default.exists().then_some(default)
        }
    }
}

/// Read the board config, returning both the parsed config and the raw
/// toml_edit document for round-trip-safe editing.
pub fn read_config(path: &Path) -> Result<(BoardConfig, toml_edit::DocumentMut), ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: BoardConfig = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let doc: toml_edit::DocumentMut = text.parse().unwrap_or_default();
    Ok((config, doc))
}

/// Set the theme preference in the config document
pub fn set_theme(doc: &mut toml_edit::DocumentMut, theme: &str) {
    if !doc.contains_key("ui") {
        doc["ui"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    doc["ui"]["theme"] = toml_edit::value(theme);
}

/// Persist the theme preference, preserving the file's formatting.
///
/// Writes through a temp file in the config's directory so a crash cannot
/// leave a half-written config. Failures are swallowed: a missing or
/// read-only config must never block the in-memory theme toggle.
pub fn persist_theme(path: &Path, doc: &mut toml_edit::DocumentMut, theme: &str) {
    use std::io::Write;

    set_theme(doc, theme);
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let Ok(mut tmp) = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new("."))) else {
        return;
    };
    if tmp.write_all(doc.to_string().as_bytes()).is_err() {
        return;
    }
    let _ = tmp.persist(path);
}
