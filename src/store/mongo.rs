use super::{group_counts, CatalogStore, ProductQuery, SubCategoryCount, USERS_COLLECTION};
use crate::database::MongoDB;
use crate::models::{CredentialReset, Product, User};
use crate::utils::AppError;
use async_trait::async_trait;
use futures::stream::StreamExt;
use mongodb::bson::{doc, Bson, DateTime as BsonDateTime, Document};

/// Exact email match, ignoring case
fn email_filter(email: &str) -> Document {
    let exact = format!("^{}$", regex::escape(email));
    doc! { "email": { "$regex": exact, "$options": "i" } }
}

#[async_trait]
impl CatalogStore for MongoDB {
    async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        let mut names: Vec<String> = self
            .database()
            .list_collection_names()
            .await?
            .into_iter()
            .filter(|name| !name.starts_with("system."))
            .collect();
        names.sort();
        Ok(names)
    }

    async fn count_documents(&self, collection: &str) -> Result<u64, AppError> {
        let count = self
            .collection::<Document>(collection)
            .count_documents(doc! {})
            .await?;
        Ok(count)
    }

    async fn drop_collection(&self, collection: &str) -> Result<(), AppError> {
        self.collection::<Document>(collection).drop().await?;
        Ok(())
    }

    async fn find_products(&self, collection: &str, query: &ProductQuery) -> Result<Vec<Product>, AppError> {
        let mut cursor = self
            .collection::<Product>(collection)
            .find(query.to_document())
            .await?;

        let mut products = Vec::new();
        while let Some(result) = cursor.next().await {
            products.push(result?);
        }

        Ok(products)
    }

    async fn update_sub_category(
        &self,
        collection: &str,
        query: &ProductQuery,
        value: &str,
    ) -> Result<u64, AppError> {
        let result = self
            .collection::<Document>(collection)
            .update_many(query.to_document(), doc! { "$set": { "subCategory": value } })
            .await?;

        Ok(result.modified_count)
    }

    async fn sub_category_counts(&self, collection: &str) -> Result<Vec<SubCategoryCount>, AppError> {
        let pipeline = vec![
            doc! { "$group": { "_id": "$subCategory", "count": { "$sum": 1 } } },
        ];

        let mut cursor = self.collection::<Document>(collection).aggregate(pipeline).await?;

        let mut rows = Vec::new();
        while let Some(result) = cursor.next().await {
            let row = result?;
            let value = match row.get("_id") {
                Some(Bson::String(s)) => s.clone(),
                Some(Bson::Null) | None => String::new(),
                Some(other) => other.to_string(),
            };
            let count = match row.get("count") {
                Some(Bson::Int32(n)) => *n as u64,
                Some(Bson::Int64(n)) => *n as u64,
                _ => 0,
            };
            rows.push((value, count));
        }

        // null, missing and "" are separate $group keys but one value here
        Ok(group_counts(rows))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = self
            .collection::<User>(USERS_COLLECTION)
            .find_one(email_filter(email))
            .await?;
        Ok(user)
    }

    async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        self.collection::<User>(USERS_COLLECTION).insert_one(user).await?;
        Ok(())
    }

    async fn reset_user_credentials(&self, email: &str, reset: &CredentialReset) -> Result<bool, AppError> {
        let result = self
            .collection::<Document>(USERS_COLLECTION)
            .update_one(
                email_filter(email),
                doc! {
                    "$set": {
                        "password": reset.password_hash.as_str(),
                        "name": reset.name.as_str(),
                        "isAdmin": reset.is_admin,
                        "provider": reset.provider.as_str(),
                        "updatedAt": BsonDateTime::now(),
                    }
                },
            )
            .await?;

        Ok(result.matched_count > 0)
    }
}
