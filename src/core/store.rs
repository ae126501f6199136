use crate::core::{Roster, Storage};
use crate::utils::error::{Result, RosterError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What a load attempt actually found.
///
/// Callers that only want a roster use [`LoadOutcome::into_roster`], which
/// maps both `Absent` and `Failed` to an empty roster.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Roster),
    Absent { path: Option<PathBuf> },
    Failed { path: PathBuf, message: String },
}

impl LoadOutcome {
    pub fn notice(&self) -> Option<String> {
        match self {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::Absent { path } => Some(format!(
                "File {} does not exist.",
                path.as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<none>".to_string())
            )),
            LoadOutcome::Failed { path, message } => Some(format!(
                "An error occurred while loading data from file {}: {}",
                path.display(),
                message
            )),
        }
    }

    pub fn into_roster(self) -> Roster {
        match self {
            LoadOutcome::Loaded(roster) => roster,
            LoadOutcome::Absent { .. } | LoadOutcome::Failed { .. } => Roster::new(),
        }
    }
}

pub struct RosterStore<S: Storage> {
    storage: S,
}

impl<S: Storage> RosterStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self, path: Option<&Path>) -> LoadOutcome {
        let Some(path) = path else {
            return LoadOutcome::Absent { path: None };
        };

        if !self.storage.exists(path) {
            tracing::debug!("Data file {} not found", path.display());
            return LoadOutcome::Absent {
                path: Some(path.to_path_buf()),
            };
        }

        let parsed = self
            .storage
            .read_file(path)
            .and_then(|text| serde_json::from_str::<Roster>(&text).map_err(RosterError::from));

        match parsed {
            Ok(roster) => {
                tracing::debug!("Loaded {} students from {}", roster.len(), path.display());
                LoadOutcome::Loaded(roster)
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", path.display(), e);
                LoadOutcome::Failed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        }
    }

    /// Loads the roster, writing any notice to `out`. Never fails on a bad
    /// or missing file; only a failing console write is reported.
    pub fn load_or_empty<W: Write>(&self, path: Option<&Path>, out: &mut W) -> Result<Roster> {
        let outcome = self.load(path);
        if let Some(notice) = outcome.notice() {
            writeln!(out, "{}", notice)?;
        }
        Ok(outcome.into_roster())
    }

    pub fn save(&self, path: Option<&Path>, roster: &Roster) -> Result<()> {
        let path = path.ok_or(RosterError::MissingDataFile)?;
        let data = to_json(roster)?;

        tracing::debug!(
            "Writing {} students ({} bytes) to {}",
            roster.len(),
            data.len(),
            path.display()
        );
        self.storage.write_file(path, &data)
    }
}

/// Serializes with 4-space indentation; non-ASCII is kept as-is.
pub fn to_json(roster: &Roster) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    roster.serialize(&mut serializer)?;
    Ok(buf)
}
