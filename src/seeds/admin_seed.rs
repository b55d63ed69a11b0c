use crate::services::admin_service::{ensure_admin_user, AdminCredentials, AdminOutcome};
use crate::store::CatalogStore;

/// Garante o usuário admin no startup.
/// Erros são logados e engolidos: o serviço sobe mesmo assim.
pub async fn bootstrap_admin(store: &dyn CatalogStore, creds: &AdminCredentials) -> Option<AdminOutcome> {
    match ensure_admin_user(store, creds).await {
        Ok(outcome) => {
            log::info!("👤 Admin bootstrap: {:?} ({})", outcome, creds.email);
            Some(outcome)
        }
        Err(e) => {
            log::error!("❌ Admin bootstrap failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CredentialReset, Product, User};
    use crate::store::{MemoryStore, ProductQuery, SubCategoryCount};
    use crate::utils::AppError;
    use async_trait::async_trait;

    /// Store whose every call fails, as with an unreachable server
    struct UnreachableStore;

    #[async_trait]
    impl CatalogStore for UnreachableStore {
        async fn collection_names(&self) -> Result<Vec<String>, AppError> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn count_documents(&self, _: &str) -> Result<u64, AppError> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn drop_collection(&self, _: &str) -> Result<(), AppError> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn find_products(&self, _: &str, _: &ProductQuery) -> Result<Vec<Product>, AppError> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn update_sub_category(&self, _: &str, _: &ProductQuery, _: &str) -> Result<u64, AppError> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn sub_category_counts(&self, _: &str) -> Result<Vec<SubCategoryCount>, AppError> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn find_user_by_email(&self, _: &str) -> Result<Option<User>, AppError> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn insert_user(&self, _: &User) -> Result<(), AppError> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
        async fn reset_user_credentials(&self, _: &str, _: &CredentialReset) -> Result<bool, AppError> {
            Err(AppError::DatabaseError("connection refused".into()))
        }
    }

    fn fast_credentials() -> AdminCredentials {
        AdminCredentials { hash_cost: 4, ..AdminCredentials::default() }
    }

    #[tokio::test]
    async fn test_bootstrap_swallows_store_errors() {
        let outcome = bootstrap_admin(&UnreachableStore, &fast_credentials()).await;
        assert_eq!(outcome, None);
    }

    #[tokio::test]
    async fn test_bootstrap_creates_then_resets() {
        let store = MemoryStore::new();
        let creds = fast_credentials();

        assert_eq!(bootstrap_admin(&store, &creds).await, Some(AdminOutcome::Created));
        assert_eq!(bootstrap_admin(&store, &creds).await, Some(AdminOutcome::Reset));
        assert_eq!(store.users().unwrap().len(), 1);
    }
}
