//! Shared plumbing for the maintenance binaries in `src/bin/`.

use crate::config::{init_logging, Config};
use crate::database::MongoDB;
use crate::services::collection_service::{self, CollectionPolicy, RemovalReport};
use crate::store::CatalogStore;
use crate::utils::AppError;
use clap::Parser;
use std::io::{BufRead, Write};

#[derive(Parser, Debug)]
#[command(name = "remove_unused_categories")]
#[command(about = "Analyze collections; drop unused category collections with --remove")]
pub struct RemoveUnusedArgs {
    #[arg(short, long, help = "Drop the collections listed under Remove")]
    pub remove: bool,
}

#[derive(Parser, Debug)]
#[command(name = "cleanup_collections")]
#[command(about = "Drop unused collections (asks for confirmation)")]
pub struct CleanupArgs {
    #[arg(short, long, help = "Skip the confirmation prompt")]
    pub yes: bool,
}

/// Loads `.env`, starts logging and opens the database connection.
pub async fn connect() -> Result<MongoDB, AppError> {
    dotenv::dotenv().ok();
    init_logging();

    let config = Config::from_env()?;
    log::info!("🔌 Connecting to MongoDB...");
    MongoDB::new(&config.database_url).await
}

/// Exits with 0 on success, 1 after logging the error otherwise.
pub fn finish(result: Result<(), AppError>) -> ! {
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            log::error!("❌ {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1)
        }
    }
}

/// Asks on stdout and reads one answer; only "yes" confirms.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<bool, AppError> {
    write!(output, "{} Type 'yes' to continue: ", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

/// Prints the collection analysis; drops the `Remove` entries only when
/// `args.remove` is set. Returns `None` when nothing was dropped.
pub async fn remove_unused_categories<W: Write>(
    store: &dyn CatalogStore,
    args: &RemoveUnusedArgs,
    output: &mut W,
) -> Result<Option<RemovalReport>, AppError> {
    let plan = collection_service::analyze(store, &CollectionPolicy::default()).await?;
    write!(output, "{}", plan)?;

    if !args.remove {
        if plan.has_removals() {
            writeln!(output, "\nAnalysis only. Run again with --remove (-r) to drop the collections above.")?;
        }
        return Ok(None);
    }

    let report = collection_service::remove(store, &plan).await?;
    write!(output, "\n{}", report)?;
    Ok(Some(report))
}

/// Prints the collection analysis and drops the `Remove` entries once
/// confirmed (or straight away with `args.yes`).
pub async fn cleanup_collections<R: BufRead, W: Write>(
    store: &dyn CatalogStore,
    args: &CleanupArgs,
    input: &mut R,
    output: &mut W,
) -> Result<Option<RemovalReport>, AppError> {
    let plan = collection_service::analyze(store, &CollectionPolicy::default()).await?;
    write!(output, "{}", plan)?;

    if !plan.has_removals() {
        writeln!(output, "\nNothing to clean up")?;
        return Ok(None);
    }

    if !args.yes {
        let confirmed = confirm(
            input,
            output,
            "\nThe collections under Remove will be dropped permanently.",
        )?;
        if !confirmed {
            writeln!(output, "Aborted, nothing dropped")?;
            return Ok(None);
        }
    }

    let report = collection_service::remove(store, &plan).await?;
    write!(output, "{}", report)?;
    Ok(Some(report))
}
