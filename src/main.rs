use anyhow::Context;
use clap::Parser;
use student_roster::utils::logger;
use student_roster::{
    run_add, run_display, AppConfig, CliConfig, Command, LocalStorage, RosterStore,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    let config = AppConfig::from_env(cli.command.filename());
    tracing::debug!("Resolved config: {:?}", config);

    let store = RosterStore::new(LocalStorage::new());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Add {
            name,
            group,
            grades,
            ..
        } => run_add(&config, &store, name, group, grades, &mut out).with_context(|| {
            format!("failed to add student '{}' to {}", name, describe(&config))
        })?,
        Command::Display { .. } => run_display(&config, &store, &mut out)
            .with_context(|| format!("failed to display students from {}", describe(&config)))?,
    }

    Ok(())
}

fn describe(config: &AppConfig) -> String {
    config
        .data_file
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<no data file>".to_string())
}
