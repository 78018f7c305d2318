mod cli;
mod config;
mod db;
mod error;
mod report;

use std::process::ExitCode;

use cli::ParseOutcome;

fn main() -> anyhow::Result<ExitCode> {
    let cli = match cli::parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(ParseOutcome::Usage) => {
            println!("{}", cli::USAGE);
            return Ok(ExitCode::from(2));
        }
        Err(ParseOutcome::Info(e)) => e.exit(),
    };

    // Set up tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if !cli.rest.is_empty() {
        tracing::debug!("Ignoring operands {:?}", cli.rest);
    }

    let db_path = config::db_path(cli.db)?;
    let db = db::Database::new(db_path);
    let registry = report::Registry::builtin()?;

    cli::report::run(&db, &registry, cli.file)?;

    Ok(ExitCode::SUCCESS)
}
