use super::{group_counts, CatalogStore, ProductQuery, SubCategoryCount, USERS_COLLECTION};
use crate::models::{CredentialReset, Product, User};
use crate::utils::AppError;
use async_trait::async_trait;
use mongodb::bson::{self, doc, oid::ObjectId, DateTime as BsonDateTime, Document};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// In-memory document store.
///
/// Documents are kept as BSON so products and users go through the same
/// serde mapping as with MongoDB. Every `drop_collection` call is recorded,
/// whether or not the collection existed.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<BTreeMap<String, Vec<Document>>>,
    drop_calls: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn collections(&self) -> MutexGuard<'_, BTreeMap<String, Vec<Document>>> {
        self.collections.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn create_collection(&self, name: &str) {
        self.collections().entry(name.to_string()).or_default();
    }

    /// Inserts a raw document, assigning an `_id` when missing.
    pub fn insert_document(&self, collection: &str, mut document: Document) -> ObjectId {
        let id = match document.get_object_id("_id") {
            Ok(id) => id,
            Err(_) => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
        };
        self.collections()
            .entry(collection.to_string())
            .or_default()
            .push(document);
        id
    }

    pub fn insert_product(&self, collection: &str, product: &Product) -> Result<ObjectId, AppError> {
        let document = bson::to_document(product)?;
        Ok(self.insert_document(collection, document))
    }

    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections().get(collection).cloned().unwrap_or_default()
    }

    pub fn products(&self, collection: &str) -> Result<Vec<Product>, AppError> {
        self.documents(collection)
            .into_iter()
            .map(|d| bson::from_document(d).map_err(AppError::from))
            .collect()
    }

    pub fn users(&self) -> Result<Vec<User>, AppError> {
        self.documents(USERS_COLLECTION)
            .into_iter()
            .map(|d| bson::from_document(d).map_err(AppError::from))
            .collect()
    }

    pub fn drop_calls(&self) -> Vec<String> {
        self.drop_calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

fn same_email(document: &Document, email: &str) -> bool {
    document
        .get_str("email")
        .map(|e| e.to_lowercase() == email.to_lowercase())
        .unwrap_or(false)
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        // BTreeMap keys are already sorted
        Ok(self
            .collections()
            .keys()
            .filter(|name| !name.starts_with("system."))
            .cloned()
            .collect())
    }

    async fn count_documents(&self, collection: &str) -> Result<u64, AppError> {
        Ok(self.collections().get(collection).map_or(0, |docs| docs.len() as u64))
    }

    async fn drop_collection(&self, collection: &str) -> Result<(), AppError> {
        self.drop_calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(collection.to_string());
        self.collections().remove(collection);
        Ok(())
    }

    async fn find_products(&self, collection: &str, query: &ProductQuery) -> Result<Vec<Product>, AppError> {
        let mut matched = Vec::new();
        for product in self.products(collection)? {
            if query.matches(&product)? {
                matched.push(product);
            }
        }
        Ok(matched)
    }

    async fn update_sub_category(
        &self,
        collection: &str,
        query: &ProductQuery,
        value: &str,
    ) -> Result<u64, AppError> {
        let mut collections = self.collections();
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };

        let mut modified = 0;
        for document in documents.iter_mut() {
            let product: Product = bson::from_document(document.clone())?;
            if query.matches(&product)? && product.sub_category != value {
                document.insert("subCategory", value);
                modified += 1;
            }
        }

        Ok(modified)
    }

    async fn sub_category_counts(&self, collection: &str) -> Result<Vec<SubCategoryCount>, AppError> {
        let products = self.products(collection)?;
        Ok(group_counts(products.into_iter().map(|p| (p.sub_category, 1))))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let found = self
            .documents(USERS_COLLECTION)
            .into_iter()
            .find(|d| same_email(d, email));

        match found {
            Some(document) => Ok(Some(bson::from_document(document)?)),
            None => Ok(None),
        }
    }

    async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        if self.find_user_by_email(&user.email).await?.is_some() {
            return Err(AppError::DatabaseError(format!(
                "E11000 duplicate key error collection: users index: email_1 dup key: {}",
                user.email
            )));
        }
        let document = bson::to_document(user)?;
        self.insert_document(USERS_COLLECTION, document);
        Ok(())
    }

    async fn reset_user_credentials(&self, email: &str, reset: &CredentialReset) -> Result<bool, AppError> {
        let mut collections = self.collections();
        let Some(users) = collections.get_mut(USERS_COLLECTION) else {
            return Ok(false);
        };

        let Some(document) = users
            .iter_mut()
            .find(|d| same_email(d, email))
        else {
            return Ok(false);
        };

        let fields = doc! {
            "password": reset.password_hash.as_str(),
            "name": reset.name.as_str(),
            "isAdmin": reset.is_admin,
            "provider": reset.provider.as_str(),
            "updatedAt": BsonDateTime::now(),
        };
        for (key, value) in fields {
            document.insert(key, value);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuthProvider;

    #[tokio::test]
    async fn test_drop_removes_collection_and_records_call() {
        let store = MemoryStore::new();
        store.insert_document("electronics", doc! { "title": "TV" });
        store.create_collection("orders");

        store.drop_collection("electronics").await.unwrap();

        assert_eq!(store.collection_names().await.unwrap(), vec!["orders".to_string()]);
        assert_eq!(store.drop_calls(), vec!["electronics".to_string()]);
    }

    #[tokio::test]
    async fn test_system_collections_are_hidden() {
        let store = MemoryStore::new();
        store.create_collection("system.views");
        store.create_collection("carts");

        assert_eq!(store.collection_names().await.unwrap(), vec!["carts".to_string()]);
    }

    #[tokio::test]
    async fn test_update_counts_only_changed_documents() {
        let store = MemoryStore::new();
        store.insert_product("womensshoes", &Product::new("A", "", "Women's Shoes", "Sandals")).unwrap();
        store.insert_product("womensshoes", &Product::new("B", "", "Women's Shoes", "sandals")).unwrap();
        store.insert_product("womensshoes", &Product::new("C", "", "Women's Shoes", "Heels")).unwrap();

        let query = ProductQuery::new().sub_category_in(["Sandals"]);
        let modified = store.update_sub_category("womensshoes", &query, "Sandals").await.unwrap();

        assert_eq!(modified, 1);
        let counts = store.sub_category_counts("womensshoes").await.unwrap();
        assert_eq!(counts[0], SubCategoryCount { value: "Sandals".into(), count: 2 });
        assert_eq!(counts[1], SubCategoryCount { value: "Heels".into(), count: 1 });
    }

    #[tokio::test]
    async fn test_users_are_unique_by_email() {
        let store = MemoryStore::new();
        let user = User {
            id: None,
            email: "a@example.com".into(),
            password: "x".into(),
            name: "A".into(),
            is_admin: false,
            provider: AuthProvider::Google,
            created_at: None,
            updated_at: None,
        };

        store.insert_user(&user).await.unwrap();
        assert!(store.insert_user(&user).await.is_err());
        assert_eq!(store.users().unwrap().len(), 1);
    }
}
