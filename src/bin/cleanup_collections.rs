//! Drops the legacy category collections after an explicit confirmation.

use clap::Parser;
use shoestore_backend::cli::{self, CleanupArgs};
use shoestore_backend::utils::AppError;

async fn run(args: CleanupArgs) -> Result<(), AppError> {
    let db = cli::connect().await?;
    let stdin = std::io::stdin();
    cli::cleanup_collections(&db, &args, &mut stdin.lock(), &mut std::io::stdout()).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = CleanupArgs::parse();
    cli::finish(run(args).await)
}
