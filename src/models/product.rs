use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};

/// `null` and a missing key both decode to `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Produto do catálogo (um documento em `mensshoes`, `womensshoes`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,

    /// Should hold one term of the collection vocabulary, see `ProductCollection::vocabulary`
    #[serde(rename = "subCategory", default, deserialize_with = "null_as_default")]
    pub sub_category: String,

    #[serde(rename = "inStock", default, deserialize_with = "null_as_default")]
    pub in_stock: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Product {
    pub fn new(title: &str, description: &str, category: &str, sub_category: &str) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            in_stock: true,
            price: None,
        }
    }
}

/// Response de produto (id como string hex)
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ProductResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "subCategory")]
    pub sub_category: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        ProductResponse {
            id: p.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: p.title,
            description: p.description,
            category: p.category,
            sub_category: p.sub_category,
            in_stock: p.in_stock,
            price: p.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc, Bson};

    #[test]
    fn test_product_uses_storefront_field_names() {
        let product = Product::new("Kolhapuri Chappal", "Handmade leather", "Women's Shoes", "Chappals");
        let document = bson::to_document(&product).unwrap();

        assert_eq!(document.get_str("subCategory").unwrap(), "Chappals");
        assert!(document.get_bool("inStock").unwrap());
        assert!(!document.contains_key("_id"));
    }

    #[test]
    fn test_product_tolerates_missing_fields() {
        let product: Product = bson::from_document(doc! { "title": "Plain sandal" }).unwrap();

        assert_eq!(product.title, "Plain sandal");
        assert_eq!(product.sub_category, "");
        assert!(!product.in_stock);
    }

    #[test]
    fn test_product_treats_null_fields_as_empty() {
        let document = doc! {
            "title": "Kolhapuri Chappal",
            "description": Bson::Null,
            "category": Bson::Null,
            "subCategory": Bson::Null,
            "inStock": Bson::Null,
            "price": Bson::Null,
        };

        let product: Product = bson::from_document(document).unwrap();

        assert_eq!(product.title, "Kolhapuri Chappal");
        assert_eq!(product.description, "");
        assert_eq!(product.category, "");
        assert_eq!(product.sub_category, "");
        assert!(!product.in_stock);
        assert_eq!(product.price, None);
    }
}
