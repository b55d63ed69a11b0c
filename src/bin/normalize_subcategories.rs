//! Rewrites case/spacing variants of vocabulary terms ("sneakers" -> "Sneakers").

use clap::Parser;
use shoestore_backend::cli;
use shoestore_backend::models::ProductCollection;
use shoestore_backend::services::subcategory_service;
use shoestore_backend::utils::AppError;

#[derive(Parser)]
#[command(name = "normalize_subcategories")]
#[command(about = "Normalize subCategory spellings to the collection vocabulary")]
struct Args {
    #[arg(short, long, help = "Only this collection (default: all product collections)")]
    collection: Option<String>,

    #[arg(long, help = "Only print the corrections that would run")]
    dry_run: bool,
}

async fn run(args: Args) -> Result<(), AppError> {
    let collections = match &args.collection {
        Some(name) => vec![name.parse::<ProductCollection>()?],
        None => ProductCollection::ALL.to_vec(),
    };
    let db = cli::connect().await?;

    for collection in collections {
        println!("📂 {}", collection);

        if args.dry_run {
            let usage = subcategory_service::distribution(&db, collection).await?;
            let rules = subcategory_service::vocabulary_rules(collection, &usage);
            if rules.is_empty() {
                println!("  nothing to normalize");
            }
            for rule in rules {
                println!("  would run: {}", rule);
            }
            continue;
        }

        let report = subcategory_service::normalize_vocabulary(&db, collection).await?;
        println!("  {}", report);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    cli::finish(run(args).await)
}
