//! Prints the subCategory usage of a product collection and the products
//! the chappal correction would touch. Read-only.

use clap::Parser;
use shoestore_backend::cli;
use shoestore_backend::models::ProductCollection;
use shoestore_backend::services::subcategory_service::{self, SubCategoryRule};
use shoestore_backend::utils::AppError;

#[derive(Parser)]
#[command(name = "inspect_subcategories")]
#[command(about = "Report subCategory values and chappal candidates (read-only)")]
struct Args {
    #[arg(short, long, default_value = "womensshoes", help = "Product collection to inspect")]
    collection: String,
}

async fn run(args: Args) -> Result<(), AppError> {
    let collection: ProductCollection = args.collection.parse()?;
    let db = cli::connect().await?;

    println!("📊 subCategory values in {}:", collection);
    for usage in subcategory_service::distribution(&db, collection).await? {
        let marker = if usage.canonical { "" } else { "  ⚠️  not in vocabulary" };
        println!("  {:<20} {:>6}{}", format!("\"{}\"", usage.value), usage.count, marker);
    }

    let rule = SubCategoryRule::chappals();
    if rule.collection == collection.collection_name() {
        let candidates = subcategory_service::inspect(&db, &rule).await?;
        println!("\n🔎 {}", rule);
        println!("Found {} product(s):", candidates.len());
        for product in &candidates {
            let id = product.id.map(|id| id.to_hex()).unwrap_or_default();
            println!("  - {} | {} | subCategory=\"{}\"", id, product.title, product.sub_category);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    cli::finish(run(args).await)
}
