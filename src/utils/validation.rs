use crate::utils::error::{DocError, Result};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl Into<String>, reason: impl Into<String>) -> DocError {
    DocError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.into(),
        reason: reason.into(),
    }
}

/// A host the client appends endpoint paths to: http(s), with a host, no query or fragment.
pub fn validate_base_url(field: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| invalid(field, value, format!("not a URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            value,
            format!("scheme must be http or https, got {}", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(invalid(field, value, "missing host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(field, value, "base URL cannot carry a query or fragment"));
    }

    Ok(url)
}

/// The badge cache must be a directory, or not exist yet.
pub fn validate_badge_dir(field: &str, dir: &Path) -> Result<()> {
    let shown = dir.to_string_lossy();
    if dir.as_os_str().is_empty() {
        return Err(invalid(field, shown, "directory cannot be empty"));
    }
    if dir.exists() && !dir.is_dir() {
        return Err(invalid(field, shown, "exists and is not a directory"));
    }
    Ok(())
}

/// Badge names come from the service and become file names under the cache directory.
pub fn validate_badge_name(name: &str) -> Result<()> {
    let unsafe_name = name.is_empty()
        || name == "."
        || name.contains("..")
        || name.contains(['/', '\\', '\0']);

    if unsafe_name {
        return Err(DocError::InvalidBadgeName {
            name: name.to_string(),
        });
    }
    Ok(())
}
