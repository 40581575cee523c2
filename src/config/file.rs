use crate::utils::error::{Result, SortError};
use serde::Deserialize;
use std::io::ErrorKind;

#[derive(Debug, Deserialize)]
struct CredentialFile {
    api_key: Option<String>,
}

/// Read the API key from a TOML credential file. A missing file is not an
/// error; an unreadable or malformed one is.
pub fn load_credential_file(path: &str) -> Result<Option<String>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(SortError::config(format!(
                "Failed to read credential file {}: {}",
                path, e
            )))
        }
    };

    let file: CredentialFile = toml::from_str(&contents).map_err(|e| {
        SortError::config(format!("Invalid credential file {}: {}", path, e))
    })?;

    Ok(file.api_key.filter(|s| !s.is_empty()))
}
