pub mod report;
pub mod roster;
pub mod store;

pub use crate::domain::model::{Roster, Student};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
