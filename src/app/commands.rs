use crate::core::report;
use crate::core::roster;
use crate::core::store::RosterStore;
use crate::core::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::io::Write;

/// Loads the roster, appends one student and writes the whole file back.
/// Notices from loading go to `out`.
pub fn run_add<C, S, W>(
    config: &C,
    store: &RosterStore<S>,
    full_name: &str,
    group_number: &str,
    grades_text: &str,
    out: &mut W,
) -> Result<()>
where
    C: ConfigProvider,
    S: Storage,
    W: Write,
{
    let path = config.data_file();
    let mut students = store.load_or_empty(path, out)?;

    roster::add_student(&mut students, full_name, group_number, grades_text)?;
    store.save(path, &students)?;

    tracing::info!("Added {} to group {}", full_name, group_number);
    Ok(())
}

/// Loads the roster and prints the filtered table. Never writes the file.
pub fn run_display<C, S, W>(config: &C, store: &RosterStore<S>, out: &mut W) -> Result<()>
where
    C: ConfigProvider,
    S: Storage,
    W: Write,
{
    let students = store.load_or_empty(config.data_file(), out)?;
    report::render(&students, out)
}
