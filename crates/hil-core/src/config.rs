//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services.
//! Nothing in this crate reads environment variables while rendering; binaries read them and
//! hand the raw values to the helpers below.

use crate::constants::{DEFAULT_DATA_FILE, DEFAULT_PATTERN_SIZE_LIMIT};
use crate::{LookupError, LookupResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_file: PathBuf,
    pattern_size_limit: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidInput` if `pattern_size_limit` is zero.
    pub fn new(data_file: PathBuf, pattern_size_limit: usize) -> LookupResult<Self> {
        if pattern_size_limit == 0 {
            return Err(LookupError::InvalidInput(
                "pattern_size_limit must be greater than zero".into(),
            ));
        }

        Ok(Self {
            data_file,
            pattern_size_limit,
        })
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn pattern_size_limit(&self) -> usize {
        self.pattern_size_limit
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            pattern_size_limit: DEFAULT_PATTERN_SIZE_LIMIT,
        }
    }
}

/// Resolve the catalogue file location.
///
/// An explicit override (the `--data` flag) wins over the environment value, which wins over
/// [`DEFAULT_DATA_FILE`]. Blank values are treated as absent.
pub fn resolve_data_file(override_path: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = override_path.filter(|p| !p.as_os_str().is_empty()) {
        return path;
    }

    env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

/// Parse the reference pattern size limit from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_PATTERN_SIZE_LIMIT`].
///
/// # Errors
///
/// Returns `LookupError::InvalidInput` if the value is not a positive integer.
pub fn pattern_size_limit_from_env_value(value: Option<String>) -> LookupResult<usize> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(value) = value else {
        return Ok(DEFAULT_PATTERN_SIZE_LIMIT);
    };

    match value.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(LookupError::InvalidInput(format!(
            "HIL_PATTERN_SIZE_LIMIT must be a positive integer, got {value:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_env() {
        let path = resolve_data_file(
            Some(PathBuf::from("/tmp/override.json")),
            Some("/tmp/env.json".into()),
        );
        assert_eq!(path, PathBuf::from("/tmp/override.json"));
    }

    #[test]
    fn env_used_when_no_override() {
        let path = resolve_data_file(None, Some("  /tmp/env.yaml ".into()));
        assert_eq!(path, PathBuf::from("/tmp/env.yaml"));
    }

    #[test]
    fn default_when_nothing_set() {
        assert_eq!(
            resolve_data_file(None, Some("   ".into())),
            PathBuf::from(DEFAULT_DATA_FILE)
        );
        assert_eq!(resolve_data_file(None, None), PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn pattern_limit_defaults_and_parses() {
        assert_eq!(
            pattern_size_limit_from_env_value(None).unwrap(),
            DEFAULT_PATTERN_SIZE_LIMIT
        );
        assert_eq!(
            pattern_size_limit_from_env_value(Some(" 4096 ".into())).unwrap(),
            4096
        );
    }

    #[test]
    fn pattern_limit_rejects_garbage() {
        assert!(pattern_size_limit_from_env_value(Some("0".into())).is_err());
        assert!(pattern_size_limit_from_env_value(Some("-5".into())).is_err());
        assert!(pattern_size_limit_from_env_value(Some("lots".into())).is_err());
    }

    #[test]
    fn config_rejects_zero_limit() {
        assert!(CoreConfig::new(PathBuf::from("db.json"), 0).is_err());
        let config = CoreConfig::new(PathBuf::from("db.json"), 1024).unwrap();
        assert_eq!(config.pattern_size_limit(), 1024);
        assert_eq!(config.data_file(), Path::new("db.json"));
    }
}
