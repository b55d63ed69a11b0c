//! Persistence boundary used by the maintenance routines and the HTTP API.
//!
//! `MongoDB` (see `mongo.rs`) is the production implementation; `MemoryStore`
//! keeps documents in memory and records destructive calls.

pub mod memory;
pub mod mongo;
pub mod query;

pub use memory::MemoryStore;
pub use query::ProductQuery;

use crate::models::{CredentialReset, Product, User};
use crate::utils::AppError;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;

pub const USERS_COLLECTION: &str = "users";

/// One row of the `subCategory` aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct SubCategoryCount {
    #[serde(rename = "subCategory")]
    pub value: String,
    pub count: u64,
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Collection names, `system.*` excluded, sorted.
    async fn collection_names(&self) -> Result<Vec<String>, AppError>;

    async fn count_documents(&self, collection: &str) -> Result<u64, AppError>;

    async fn drop_collection(&self, collection: &str) -> Result<(), AppError>;

    async fn find_products(&self, collection: &str, query: &ProductQuery) -> Result<Vec<Product>, AppError>;

    /// `$set: { subCategory: value }` on every product matching `query`.
    /// Returns the number of documents actually modified.
    async fn update_sub_category(
        &self,
        collection: &str,
        query: &ProductQuery,
        value: &str,
    ) -> Result<u64, AppError>;

    /// Documents grouped by `subCategory`, count descending then value ascending.
    async fn sub_category_counts(&self, collection: &str) -> Result<Vec<SubCategoryCount>, AppError>;

    /// Email comparison ignores case.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn insert_user(&self, user: &User) -> Result<(), AppError>;

    /// Matches the email ignoring case. Returns false when no user has it.
    async fn reset_user_credentials(&self, email: &str, reset: &CredentialReset) -> Result<bool, AppError>;
}

/// Sums the counts of equal values, then sorts by count descending and
/// value ascending.
pub(crate) fn group_counts<I>(rows: I) -> Vec<SubCategoryCount>
where
    I: IntoIterator<Item = (String, u64)>,
{
    let mut groups: HashMap<String, u64> = HashMap::new();
    for (value, count) in rows {
        *groups.entry(value).or_insert(0) += count;
    }

    let mut counts: Vec<SubCategoryCount> = groups
        .into_iter()
        .map(|(value, count)| SubCategoryCount { value, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_counts_merges_equal_values() {
        // null, missing and "" come back from $group as separate rows
        let rows = vec![
            ("".to_string(), 2),
            ("Heels".to_string(), 3),
            ("".to_string(), 1),
            ("Flats".to_string(), 3),
        ];

        let counts = group_counts(rows);

        assert_eq!(
            counts,
            vec![
                SubCategoryCount { value: "".into(), count: 3 },
                SubCategoryCount { value: "Flats".into(), count: 3 },
                SubCategoryCount { value: "Heels".into(), count: 3 },
            ]
        );
    }
}
