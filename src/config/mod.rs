#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;

use crate::core::ConfigProvider;
use std::path::{Path, PathBuf};

pub const STUDENTS_FILE_ENV: &str = "STUDENTS_FILE";

/// Picks the data file: a non-empty explicit option wins, then a non-empty
/// environment value, otherwise nothing.
pub fn resolve_path(explicit: Option<&str>, env_value: Option<&str>) -> Option<PathBuf> {
    explicit
        .filter(|value| !value.is_empty())
        .or_else(|| env_value.filter(|value| !value.is_empty()))
        .map(PathBuf::from)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub data_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn new(data_file: Option<PathBuf>) -> Self {
        Self { data_file }
    }

    pub fn from_sources(explicit: Option<&str>, env_value: Option<&str>) -> Self {
        Self::new(resolve_path(explicit, env_value))
    }

    /// Reads `STUDENTS_FILE` once; call this only from the binary entry point.
    pub fn from_env(explicit: Option<&str>) -> Self {
        let env_value = std::env::var(STUDENTS_FILE_ENV).ok();
        Self::from_sources(explicit, env_value.as_deref())
    }
}

impl ConfigProvider for AppConfig {
    fn data_file(&self) -> Option<&Path> {
        self.data_file.as_deref()
    }
}
