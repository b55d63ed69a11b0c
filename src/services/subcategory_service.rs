use crate::models::{Product, ProductCollection};
use crate::store::{CatalogStore, ProductQuery};
use crate::utils::AppError;
use serde::Serialize;
use std::fmt;

/// A `subCategory` correction: products of `collection` whose title or
/// description matches `text_pattern` and whose `subCategory` is one of
/// `from` (ignoring case) get `subCategory = to`.
#[derive(Debug, Clone)]
pub struct SubCategoryRule {
    pub collection: String,
    pub text_pattern: Option<String>,
    pub from: Vec<String>,
    pub to: String,
}

impl SubCategoryRule {
    /// Chappals were listed as sandals in the women's catalog.
    pub fn chappals() -> Self {
        Self {
            collection: ProductCollection::WomensShoes.collection_name().to_string(),
            text_pattern: Some("chappal".to_string()),
            from: vec!["Sandals".to_string(), "sandals".to_string()],
            to: "Chappals".to_string(),
        }
    }

    pub fn query(&self) -> ProductQuery {
        let mut query = ProductQuery::new().sub_category_in(self.from.iter().cloned());
        if let Some(pattern) = &self.text_pattern {
            query = query.text(pattern);
        }
        query
    }
}

impl fmt::Display for SubCategoryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: subCategory in {:?}", self.collection, self.from)?;
        if let Some(pattern) = &self.text_pattern {
            write!(f, " and title/description ~ /{}/i", pattern)?;
        }
        write!(f, " -> \"{}\"", self.to)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    /// Products that needed the change when the snapshot was taken
    pub matched: u64,
    pub modified: u64,
}

impl fmt::Display for ApplyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matched {} product(s), modified {}", self.matched, self.modified)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct SubCategoryUsage {
    #[serde(rename = "subCategory")]
    pub value: String,
    pub count: u64,
    pub canonical: bool,
}

/// Products currently matched by the rule. Read-only.
pub async fn inspect(store: &dyn CatalogStore, rule: &SubCategoryRule) -> Result<Vec<Product>, AppError> {
    store.find_products(&rule.collection, &rule.query()).await
}

/// Applies the rule.
///
/// The identifiers of the products to change are captured first, and the
/// update is scoped to that set (with the rule filter re-checked), so
/// documents that start matching between the two calls are left alone.
pub async fn apply(store: &dyn CatalogStore, rule: &SubCategoryRule) -> Result<ApplyReport, AppError> {
    let candidates = inspect(store, rule).await?;

    let ids: Vec<_> = candidates
        .iter()
        .filter(|p| p.sub_category != rule.to)
        .filter_map(|p| p.id)
        .collect();

    if ids.is_empty() {
        log::info!("ℹ️  {}: nothing to update", rule.collection);
        return Ok(ApplyReport::default());
    }

    let matched = ids.len() as u64;
    let scoped = rule.query().restricted_to(ids);
    let modified = store.update_sub_category(&rule.collection, &scoped, &rule.to).await?;

    log::info!("✅ {}: set subCategory=\"{}\" on {} of {} product(s)", rule.collection, rule.to, modified, matched);

    Ok(ApplyReport { matched, modified })
}

/// Rules rewriting case/spacing variants of each vocabulary term to the term itself.
pub fn vocabulary_rules(collection: ProductCollection, usage: &[SubCategoryUsage]) -> Vec<SubCategoryRule> {
    collection
        .vocabulary()
        .iter()
        .filter_map(|term| {
            let variants: Vec<String> = usage
                .iter()
                .filter(|u| !u.canonical && collection.canonical_term(&u.value) == Some(*term))
                .map(|u| u.value.clone())
                .collect();

            if variants.is_empty() {
                None
            } else {
                Some(SubCategoryRule {
                    collection: collection.collection_name().to_string(),
                    text_pattern: None,
                    from: variants,
                    to: term.to_string(),
                })
            }
        })
        .collect()
}

/// Rewrites every non-canonical spelling of a vocabulary term.
/// Values with no vocabulary counterpart are left for manual review.
pub async fn normalize_vocabulary(
    store: &dyn CatalogStore,
    collection: ProductCollection,
) -> Result<ApplyReport, AppError> {
    let usage = distribution(store, collection).await?;
    let mut total = ApplyReport::default();

    for rule in vocabulary_rules(collection, &usage) {
        log::info!("🔧 {}", rule);
        let report = apply(store, &rule).await?;
        total.matched += report.matched;
        total.modified += report.modified;
    }

    let unknown: Vec<&str> = usage
        .iter()
        .filter(|u| collection.canonical_term(&u.value).is_none())
        .map(|u| u.value.as_str())
        .collect();
    if !unknown.is_empty() {
        log::warn!("⚠️  {}: values outside the vocabulary left untouched: {:?}", collection, unknown);
    }

    Ok(total)
}

/// `subCategory` counts for a collection, each flagged as canonical or not.
pub async fn distribution(
    store: &dyn CatalogStore,
    collection: ProductCollection,
) -> Result<Vec<SubCategoryUsage>, AppError> {
    let counts = store.sub_category_counts(collection.collection_name()).await?;

    Ok(counts
        .into_iter()
        .map(|c| SubCategoryUsage {
            canonical: collection.is_canonical(&c.value),
            value: c.value,
            count: c.count,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use mongodb::bson::{doc, Bson};

    const WOMEN: &str = "womensshoes";

    fn seed_women(store: &MemoryStore) {
        let items = [
            ("Kolhapuri Chappal", "Handcrafted leather", "Sandals"),
            ("Ethnic Flat", "Everyday chappal with soft sole", "sandals"),
            ("Beach Chappal", "Waterproof", "Flats"),
            ("Strappy Sandal", "Summer wear", "Sandals"),
            ("Block Heel", "Party wear", "Heels"),
        ];
        for (title, description, sub) in items {
            store
                .insert_product(WOMEN, &Product::new(title, description, "Women's Shoes", sub))
                .unwrap();
        }
    }

    fn sub_category_of(store: &MemoryStore, title: &str) -> String {
        store
            .products(WOMEN)
            .unwrap()
            .into_iter()
            .find(|p| p.title == title)
            .unwrap()
            .sub_category
    }

    #[tokio::test]
    async fn test_inspect_does_not_modify() {
        let store = MemoryStore::new();
        seed_women(&store);
        let before = store.documents(WOMEN);

        let matched = inspect(&store, &SubCategoryRule::chappals()).await.unwrap();

        let titles: Vec<_> = matched.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Kolhapuri Chappal", "Ethnic Flat"]);
        assert_eq!(store.documents(WOMEN), before);
    }

    #[tokio::test]
    async fn test_chappal_rule_sets_exact_value() {
        let store = MemoryStore::new();
        seed_women(&store);

        let report = apply(&store, &SubCategoryRule::chappals()).await.unwrap();

        assert_eq!(report, ApplyReport { matched: 2, modified: 2 });
        assert_eq!(sub_category_of(&store, "Kolhapuri Chappal"), "Chappals");
        assert_eq!(sub_category_of(&store, "Ethnic Flat"), "Chappals");
        // Not a sandal, or no chappal mention: untouched
        assert_eq!(sub_category_of(&store, "Beach Chappal"), "Flats");
        assert_eq!(sub_category_of(&store, "Strappy Sandal"), "Sandals");
        assert_eq!(sub_category_of(&store, "Block Heel"), "Heels");
    }

    #[tokio::test]
    async fn test_chappal_rule_is_idempotent() {
        let store = MemoryStore::new();
        seed_women(&store);

        apply(&store, &SubCategoryRule::chappals()).await.unwrap();
        let after_first = store.documents(WOMEN);

        let second = apply(&store, &SubCategoryRule::chappals()).await.unwrap();

        assert_eq!(second, ApplyReport { matched: 0, modified: 0 });
        assert_eq!(store.documents(WOMEN), after_first);
    }

    #[tokio::test]
    async fn test_apply_on_missing_collection_is_a_no_op() {
        let store = MemoryStore::new();
        let report = apply(&store, &SubCategoryRule::chappals()).await.unwrap();
        assert_eq!(report, ApplyReport::default());
    }

    #[tokio::test]
    async fn test_distribution_flags_non_canonical_values() {
        let store = MemoryStore::new();
        seed_women(&store);

        let usage = distribution(&store, ProductCollection::WomensShoes).await.unwrap();

        assert_eq!(
            usage,
            vec![
                SubCategoryUsage { value: "Sandals".into(), count: 2, canonical: true },
                SubCategoryUsage { value: "Flats".into(), count: 1, canonical: true },
                SubCategoryUsage { value: "Heels".into(), count: 1, canonical: true },
                SubCategoryUsage { value: "sandals".into(), count: 1, canonical: false },
            ]
        );
    }

    #[tokio::test]
    async fn test_normalize_vocabulary_rewrites_variants_only() {
        let store = MemoryStore::new();
        let items = [
            ("Runner", "sneakers"),
            ("Court", "SNEAKERS"),
            ("Classic", "Sneakers"),
            ("Mystery", "misc"),
        ];
        for (title, sub) in items {
            store
                .insert_product("mensshoes", &Product::new(title, "", "Men's Shoes", sub))
                .unwrap();
        }

        let report = normalize_vocabulary(&store, ProductCollection::MensShoes).await.unwrap();

        assert_eq!(report, ApplyReport { matched: 2, modified: 2 });
        let values: Vec<String> = store
            .products("mensshoes")
            .unwrap()
            .into_iter()
            .map(|p| p.sub_category)
            .collect();
        assert_eq!(values, vec!["Sneakers", "Sneakers", "Sneakers", "misc"]);
    }

    #[tokio::test]
    async fn test_apply_handles_null_fields() {
        let store = MemoryStore::new();
        store.insert_document(
            WOMEN,
            doc! { "title": "Kolhapuri Chappal", "description": Bson::Null, "subCategory": "Sandals" },
        );
        store.insert_document(WOMEN, doc! { "title": "Legacy", "subCategory": Bson::Null });

        let report = apply(&store, &SubCategoryRule::chappals()).await.unwrap();

        assert_eq!(report, ApplyReport { matched: 1, modified: 1 });
        assert_eq!(sub_category_of(&store, "Kolhapuri Chappal"), "Chappals");
        assert_eq!(sub_category_of(&store, "Legacy"), "");
    }

    #[tokio::test]
    async fn test_distribution_counts_null_as_empty() {
        let store = MemoryStore::new();
        store.insert_document(WOMEN, doc! { "title": "Legacy", "subCategory": Bson::Null });
        store.insert_document(WOMEN, doc! { "title": "Untagged" });
        store.insert_document(WOMEN, doc! { "title": "Blank", "subCategory": "" });
        store.insert_document(WOMEN, doc! { "title": "Pump", "subCategory": "Heels" });

        let usage = distribution(&store, ProductCollection::WomensShoes).await.unwrap();

        assert_eq!(
            usage,
            vec![
                SubCategoryUsage { value: "".into(), count: 3, canonical: false },
                SubCategoryUsage { value: "Heels".into(), count: 1, canonical: true },
            ]
        );
    }

    #[test]
    fn test_rule_display() {
        let text = SubCategoryRule::chappals().to_string();
        assert_eq!(
            text,
            "womensshoes: subCategory in [\"Sandals\", \"sandals\"] and title/description ~ /chappal/i -> \"Chappals\""
        );
    }
}
