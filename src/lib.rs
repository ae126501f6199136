pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};

pub use crate::app::commands::{run_add, run_display};
pub use crate::config::{resolve_path, storage::LocalStorage, AppConfig, STUDENTS_FILE_ENV};
pub use crate::core::store::{LoadOutcome, RosterStore};
pub use crate::domain::model::{Roster, Student};
pub use crate::utils::error::{Result, RosterError};
