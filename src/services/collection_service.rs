use crate::models::ProductCollection;
use crate::store::{CatalogStore, USERS_COLLECTION};
use crate::utils::AppError;
use std::fmt;

/// Operational collections kept alongside the product collections
pub const OPERATIONAL_COLLECTIONS: [&str; 4] = [USERS_COLLECTION, "orders", "carts", "wishlists"];

/// Category collections left over from the general-store catalog
pub const LEGACY_CATEGORY_COLLECTIONS: [&str; 7] = [
    "mensclothings",
    "womensclothings",
    "kidsclothings",
    "electronics",
    "homekitchens",
    "beautyproducts",
    "categories",
];

/// Spellings of `shoes_accessories` seen in older data. Never dropped.
pub const ACCESSORIES_ALIASES: [&str; 4] = [
    "shoesaccessories",
    "shoes-accessories",
    "shoeaccessories",
    "shoe_accessories",
];

#[derive(Debug, Clone)]
pub struct CollectionPolicy {
    pub keep: Vec<String>,
    pub remove: Vec<String>,
}

impl Default for CollectionPolicy {
    fn default() -> Self {
        let keep = ProductCollection::ALL
            .iter()
            .map(|c| c.collection_name())
            .chain(OPERATIONAL_COLLECTIONS)
            .map(String::from)
            .collect();

        Self {
            keep,
            remove: LEGACY_CATEGORY_COLLECTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionStatus {
    Keep,
    Remove,
    /// Looks like a misspelling of the named collection
    SuspectedAlias(&'static str),
    Unknown,
}

impl CollectionPolicy {
    pub fn classify(&self, name: &str) -> CollectionStatus {
        if self.keep.iter().any(|k| k == name) {
            CollectionStatus::Keep
        } else if self.remove.iter().any(|r| r == name) {
            CollectionStatus::Remove
        } else if ACCESSORIES_ALIASES.contains(&name) {
            CollectionStatus::SuspectedAlias(ProductCollection::ShoesAccessories.collection_name())
        } else {
            CollectionStatus::Unknown
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionEntry {
    pub name: String,
    pub status: CollectionStatus,
    pub documents: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupPlan {
    pub entries: Vec<CollectionEntry>,
}

impl CleanupPlan {
    pub fn with_status<'a>(&'a self, status: &'a CollectionStatus) -> impl Iterator<Item = &'a CollectionEntry> + 'a {
        self.entries.iter().filter(move |e| &e.status == status)
    }

    pub fn to_remove(&self) -> impl Iterator<Item = &CollectionEntry> {
        self.entries.iter().filter(|e| e.status == CollectionStatus::Remove)
    }

    pub fn has_removals(&self) -> bool {
        self.to_remove().next().is_some()
    }
}

impl fmt::Display for CleanupPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Collections found: {}", self.entries.len())?;

        let sections = [
            (CollectionStatus::Keep, "Keep"),
            (CollectionStatus::Remove, "Remove"),
        ];
        for (status, label) in sections {
            writeln!(f, "\n{}:", label)?;
            let mut any = false;
            for entry in self.with_status(&status) {
                writeln!(f, "  - {} ({} documents)", entry.name, entry.documents)?;
                any = true;
            }
            if !any {
                writeln!(f, "  (none)")?;
            }
        }

        let others: Vec<&CollectionEntry> = self
            .entries
            .iter()
            .filter(|e| matches!(e.status, CollectionStatus::Unknown | CollectionStatus::SuspectedAlias(_)))
            .collect();
        if !others.is_empty() {
            writeln!(f, "\nUnknown (left untouched):")?;
            for entry in others {
                match &entry.status {
                    CollectionStatus::SuspectedAlias(canonical) => writeln!(
                        f,
                        "  - {} ({} documents) - possible alias of {}",
                        entry.name, entry.documents, canonical
                    )?,
                    _ => writeln!(f, "  - {} ({} documents)", entry.name, entry.documents)?,
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalReport {
    /// (collection, documents it held)
    pub dropped: Vec<(String, u64)>,
}

impl fmt::Display for RemovalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dropped.is_empty() {
            return writeln!(f, "No collections removed");
        }
        let documents: u64 = self.dropped.iter().map(|(_, n)| n).sum();
        writeln!(f, "Removed {} collection(s), {} document(s):", self.dropped.len(), documents)?;
        for (name, count) in &self.dropped {
            writeln!(f, "  - {} ({} documents)", name, count)?;
        }
        Ok(())
    }
}

/// Classifies every collection and counts its documents. Never drops anything.
pub async fn analyze(store: &dyn CatalogStore, policy: &CollectionPolicy) -> Result<CleanupPlan, AppError> {
    let mut entries = Vec::new();

    for name in store.collection_names().await? {
        let documents = store.count_documents(&name).await?;
        let status = policy.classify(&name);
        entries.push(CollectionEntry { name, status, documents });
    }

    Ok(CleanupPlan { entries })
}

/// Drops every `Remove` entry of the plan. Irreversible.
pub async fn remove(store: &dyn CatalogStore, plan: &CleanupPlan) -> Result<RemovalReport, AppError> {
    let mut report = RemovalReport::default();

    for entry in plan.to_remove() {
        log::warn!("🗑️  Dropping collection {} ({} documents)", entry.name, entry.documents);
        store.drop_collection(&entry.name).await?;
        report.dropped.push((entry.name.clone(), entry.documents));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use mongodb::bson::doc;

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        for _ in 0..3 {
            store.insert_document("womensshoes", doc! { "title": "Heel", "subCategory": "Heels" });
        }
        store.insert_document("users", doc! { "email": "a@example.com" });
        store.create_collection("orders");
        for _ in 0..2 {
            store.insert_document("electronics", doc! { "title": "Phone" });
        }
        store.insert_document("categories", doc! { "name": "Clothing" });
        store.insert_document("shoesaccessories", doc! { "title": "Laces" });
        store.insert_document("newsletter", doc! { "email": "b@example.com" });
        store
    }

    #[test]
    fn test_classify_default_policy() {
        let policy = CollectionPolicy::default();

        assert_eq!(policy.classify("shoes_accessories"), CollectionStatus::Keep);
        assert_eq!(policy.classify("wishlists"), CollectionStatus::Keep);
        assert_eq!(policy.classify("electronics"), CollectionStatus::Remove);
        assert_eq!(
            policy.classify("shoes-accessories"),
            CollectionStatus::SuspectedAlias("shoes_accessories")
        );
        assert_eq!(policy.classify("newsletter"), CollectionStatus::Unknown);
    }

    #[tokio::test]
    async fn test_analyze_never_drops() {
        let store = seeded_store();

        let plan = analyze(&store, &CollectionPolicy::default()).await.unwrap();

        assert!(store.drop_calls().is_empty());
        assert_eq!(plan.entries.len(), 7);
        let removals: Vec<_> = plan.to_remove().map(|e| (e.name.as_str(), e.documents)).collect();
        assert_eq!(removals, vec![("categories", 1), ("electronics", 2)]);
    }

    #[tokio::test]
    async fn test_remove_drops_only_remove_list() {
        let store = seeded_store();
        let policy = CollectionPolicy::default();
        let plan = analyze(&store, &policy).await.unwrap();

        let report = remove(&store, &plan).await.unwrap();

        assert_eq!(
            report.dropped,
            vec![("categories".to_string(), 1), ("electronics".to_string(), 2)]
        );
        let names = store.collection_names().await.unwrap();
        assert!(!names.contains(&"electronics".to_string()));
        assert!(!names.contains(&"categories".to_string()));

        // Everything else keeps its documents
        assert_eq!(store.count_documents("womensshoes").await.unwrap(), 3);
        assert_eq!(store.count_documents("users").await.unwrap(), 1);
        assert_eq!(store.count_documents("shoesaccessories").await.unwrap(), 1);
        assert_eq!(store.count_documents("newsletter").await.unwrap(), 1);
        assert!(names.contains(&"orders".to_string()));
    }

    #[tokio::test]
    async fn test_plan_report_lists_unknown_collections() {
        let store = seeded_store();
        let plan = analyze(&store, &CollectionPolicy::default()).await.unwrap();

        let text = plan.to_string();

        assert!(text.starts_with("Collections found: 7\n"));
        assert!(text.contains("  - electronics (2 documents)"));
        assert!(text.contains("  - newsletter (1 documents)"));
        assert!(text.contains("  - shoesaccessories (1 documents) - possible alias of shoes_accessories"));
    }

    #[test]
    fn test_empty_removal_report() {
        assert_eq!(RemovalReport::default().to_string(), "No collections removed\n");
    }
}
