//! Ensures the admin account exists with the configured credentials.

use shoestore_backend::cli;
use shoestore_backend::services::admin_service::{ensure_admin_user, AdminCredentials, AdminOutcome};
use shoestore_backend::utils::AppError;

async fn run() -> Result<(), AppError> {
    let db = cli::connect().await?;
    let creds = AdminCredentials::from_env();

    match ensure_admin_user(&db, &creds).await? {
        AdminOutcome::Created => println!("✅ Admin user created: {}", creds.email),
        AdminOutcome::Reset => println!("✅ Admin user already existed, credentials reset: {}", creds.email),
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    cli::finish(run().await)
}
