//! Analyzes the collections of the database; with `--remove` drops the
//! legacy category collections.

use clap::Parser;
use shoestore_backend::cli::{self, RemoveUnusedArgs};
use shoestore_backend::utils::AppError;

async fn run(args: RemoveUnusedArgs) -> Result<(), AppError> {
    let db = cli::connect().await?;
    cli::remove_unused_categories(&db, &args, &mut std::io::stdout()).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = RemoveUnusedArgs::parse();
    cli::finish(run(args).await)
}
