//! Moves chappals listed as "Sandals"/"sandals" in womensshoes to "Chappals".

use clap::Parser;
use shoestore_backend::cli;
use shoestore_backend::services::subcategory_service::{self, SubCategoryRule};
use shoestore_backend::utils::AppError;

#[derive(Parser)]
#[command(name = "fix_chappals")]
#[command(about = "Set subCategory=\"Chappals\" on chappals filed under sandals")]
struct Args {
    #[arg(long, help = "Only list the products that would change")]
    dry_run: bool,
}

async fn run(args: Args) -> Result<(), AppError> {
    let db = cli::connect().await?;
    let rule = SubCategoryRule::chappals();

    println!("🔎 {}", rule);
    let candidates = subcategory_service::inspect(&db, &rule).await?;
    println!("Found {} matching product(s):", candidates.len());
    for product in &candidates {
        println!("  - {} (subCategory=\"{}\")", product.title, product.sub_category);
    }

    if args.dry_run {
        println!("\nDry run: no changes made");
        return Ok(());
    }

    let report = subcategory_service::apply(&db, &rule).await?;
    println!("\n✅ Update complete: {}", report);

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    cli::finish(run(args).await)
}
