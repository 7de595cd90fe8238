//! Input validation and loading shared by the subcommands.

use std::io::Write;

use camino::Utf8Path;
use dietwise_core::{DietCatalog, DietRecord};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ARG_CATALOG, CliError};

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match dietwise_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read and decode a JSON document.
pub(crate) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let contents =
        dietwise_fs::read_utf8_to_string(path).map_err(|source| CliError::ReadSource {
            field,
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseSource {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Load a catalog file and reject duplicate or empty ids.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<DietCatalog, CliError> {
    let records: Vec<DietRecord> = load_json(path, ARG_CATALOG)?;
    let catalog = DietCatalog::new(records).map_err(|source| CliError::InvalidCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} diets from {path}", catalog.len());
    Ok(catalog)
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
