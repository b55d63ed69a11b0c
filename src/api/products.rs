use crate::models::{ProductCollection, ProductResponse};
use crate::services::subcategory_service;
use crate::store::{CatalogStore, ProductQuery};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// Exact subCategory, case-insensitive
    #[serde(rename = "subCategory")]
    pub sub_category: Option<String>,
}

fn unknown_collection(name: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "success": false,
        "error": format!("Unknown product collection '{}'", name)
    }))
}

/// GET /api/v1/products/{collection} - lista produtos (somente leitura)
#[utoipa::path(
    get,
    path = "/api/v1/products/{collection}",
    tag = "Products",
    params(
        ("collection" = String, Path, description = "mensshoes | womensshoes | kidsshoes | shoes_accessories"),
        ProductListQuery
    ),
    responses(
        (status = 200, description = "Products of the collection", body = [ProductResponse]),
        (status = 404, description = "Unknown collection")
    )
)]
pub async fn list_products(
    store: web::Data<dyn CatalogStore>,
    path: web::Path<String>,
    query: web::Query<ProductListQuery>,
) -> HttpResponse {
    let name = path.into_inner();
    let Ok(collection) = name.parse::<ProductCollection>() else {
        return unknown_collection(&name);
    };

    let mut filter = ProductQuery::new();
    if let Some(sub) = query.sub_category.as_deref().filter(|s| !s.trim().is_empty()) {
        filter = filter.sub_category_in([sub.trim()]);
    }

    match store.find_products(collection.collection_name(), &filter).await {
        Ok(products) => {
            let products: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "category": collection.category_name(),
                "total": products.len(),
                "products": products
            }))
        }
        Err(e) => {
            log::error!("❌ Failed to list {}: {}", collection, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to fetch products: {}", e)
            }))
        }
    }
}

/// GET /api/v1/products/{collection}/subcategories - contagem por subCategory
#[utoipa::path(
    get,
    path = "/api/v1/products/{collection}/subcategories",
    tag = "Products",
    params(("collection" = String, Path, description = "Product collection name")),
    responses(
        (status = 200, description = "subCategory usage", body = [crate::services::SubCategoryUsage]),
        (status = 404, description = "Unknown collection")
    )
)]
pub async fn get_sub_categories(store: web::Data<dyn CatalogStore>, path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();
    let Ok(collection) = name.parse::<ProductCollection>() else {
        return unknown_collection(&name);
    };

    match subcategory_service::distribution(store.get_ref(), collection).await {
        Ok(usage) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "vocabulary": collection.vocabulary(),
            "subCategories": usage
        })),
        Err(e) => {
            log::error!("❌ Failed to aggregate {}: {}", collection, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": format!("Failed to aggregate subCategories: {}", e)
            }))
        }
    }
}
