use crate::models::{normalize_email, AuthProvider, CredentialReset, User};
use crate::store::CatalogStore;
use crate::utils::AppError;
use bcrypt::DEFAULT_COST;
use mongodb::bson::DateTime as BsonDateTime;
use std::env;

const DEFAULT_ADMIN_EMAIL: &str = "admin@shoestore.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_ADMIN_NAME: &str = "Admin";

#[derive(Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
    pub name: String,
    pub hash_cost: u32,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"********")
            .field("name", &self.name)
            .field("hash_cost", &self.hash_cost)
            .finish()
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
            name: DEFAULT_ADMIN_NAME.to_string(),
            hash_cost: DEFAULT_COST,
        }
    }
}

impl AdminCredentials {
    /// Reads `ADMIN_EMAIL`, `ADMIN_PASSWORD`, `ADMIN_NAME`; missing values fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let password = match env::var("ADMIN_PASSWORD") {
            Ok(p) if !p.is_empty() => p,
            _ => {
                log::warn!("⚠️  ADMIN_PASSWORD not set, using the built-in default admin password");
                defaults.password
            }
        };

        Self {
            email: normalize_email(&env::var("ADMIN_EMAIL").unwrap_or(defaults.email)),
            password,
            name: env::var("ADMIN_NAME").unwrap_or(defaults.name),
            hash_cost: defaults.hash_cost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminOutcome {
    Created,
    Reset,
}

/// Makes sure the admin account exists with the configured credentials.
///
/// Creates it when absent. When present, password, name, `isAdmin` and
/// `provider` are overwritten every time, whatever they were changed to.
pub async fn ensure_admin_user(store: &dyn CatalogStore, creds: &AdminCredentials) -> Result<AdminOutcome, AppError> {
    let email = normalize_email(&creds.email);
    let password_hash = bcrypt::hash(&creds.password, creds.hash_cost)?;

    if store.find_user_by_email(&email).await?.is_none() {
        let now = BsonDateTime::now();
        let admin = User {
            id: None,
            email: email.clone(),
            password: password_hash,
            name: creds.name.clone(),
            is_admin: true,
            provider: AuthProvider::Local,
            created_at: Some(now),
            updated_at: Some(now),
        };
        store.insert_user(&admin).await?;
        log::info!("👤 Admin user created: {}", email);
        return Ok(AdminOutcome::Created);
    }

    let reset = CredentialReset {
        password_hash,
        name: creds.name.clone(),
        is_admin: true,
        provider: AuthProvider::Local,
    };

    if !store.reset_user_credentials(&email, &reset).await? {
        // Deleted between the lookup and the update
        return Err(AppError::NotFound(format!("user {}", email)));
    }

    log::info!("👤 Admin user credentials reset: {}", email);
    Ok(AdminOutcome::Reset)
}
