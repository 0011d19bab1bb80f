//! Locale files in the interchange layout shared with the other languages:
//!
//! ```json
//! { "<templateId>": { "name": "...", "description": "..." } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::{LocalizationTable, RawEntries, TableError};
use crate::services::encoding;

#[derive(Debug, Error)]
pub enum LocaleFileError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid locale json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Table(#[from] TableError),
}

pub fn parse(text: &str) -> Result<LocalizationTable, LocaleFileError> {
    // typed TableError here, where LocalizationTable's own Deserialize
    // would flatten it into a serde message
    let raw: RawEntries = serde_json::from_str(text)?;
    Ok(LocalizationTable::try_from(raw)?)
}

pub fn to_json(table: &LocalizationTable) -> Result<String, LocaleFileError> {
    Ok(serde_json::to_string_pretty(table)?)
}

pub fn load(path: &Path) -> Result<LocalizationTable, LocaleFileError> {
    let bytes = fs::read(path).map_err(|source| LocaleFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = encoding::decode(&bytes);
    tracing::debug!(path = %path.display(), encoding = %decoded.encoding, "loading locale file");

    let table = parse(&decoded.text)?;
    tracing::info!(path = %path.display(), entries = table.len(), "locale file loaded");
    Ok(table)
}

pub fn save(path: &Path, table: &LocalizationTable) -> Result<(), LocaleFileError> {
    let json = to_json(table)?;
    write_atomic(path, json.as_bytes())?;
    tracing::info!(path = %path.display(), entries = table.len(), "locale file saved");
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), LocaleFileError> {
    let io_err = |source| LocaleFileError::Io {
        path: path.to_path_buf(),
        source,
    };
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    fs::write(&tmp, bytes).map_err(io_err)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(e));
    }

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "locale.json".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::french;

    #[test]
    fn round_trip_through_text() {
        let json = to_json(french()).unwrap();
        let back = parse(&json).unwrap();
        assert_eq!(&back, french());
    }

    #[test]
    fn repeated_key_is_rejected() {
        let text = r#"{
            "tech": { "name": "Tech", "description": "A." },
            "tech": { "name": "Tech 2", "description": "B." }
        }"#;
        match parse(text) {
            Err(LocaleFileError::Table(TableError::DuplicateKey(id))) => assert_eq!(id, "tech"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn wrong_shape_is_json_error() {
        assert!(matches!(parse(r#"["tech"]"#), Err(LocaleFileError::Json(_))));
        assert!(matches!(
            parse(r#"{ "tech": { "name": "Tech" } }"#),
            Err(LocaleFileError::Json(_))
        ));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let text = r#"{ "tech": { "name": "Tech", "description": "A.", "tips": ["x"] } }"#;
        assert_eq!(parse(text).unwrap().lookup("tech").unwrap().name, "Tech");
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locales").join("fr.json");

        save(&path, french()).unwrap();
        assert!(!tmp_path(&path).exists());

        let loaded = load(&path).unwrap();
        assert_eq!(&loaded, french());
    }

    #[test]
    fn loads_windows_1252_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fr.json");
        let text = r#"{ "civil-engineer": { "name": "Ingénieur Civil", "description": "Mise en page technique présentant les projets, certifications et compétences en ingénierie." } }"#;
        let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(text);
        fs::write(&path, &bytes).unwrap();

        let table = load(&path).unwrap();
        assert_eq!(table.lookup("civil-engineer").unwrap().name, "Ingénieur Civil");
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fr.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), b"x").unwrap();

        let err = save(&path, french()).unwrap_err();
        assert!(matches!(err, LocaleFileError::Io { .. }));
        assert!(!tmp_path(&path).exists());
        assert!(path.join("keep.txt").exists());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LocaleFileError::Io { .. }));
    }
}
