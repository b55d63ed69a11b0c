use crate::pages::{find_page, render_policy, PolicyPage};
use actix_web::{http::header::ContentType, web, HttpResponse};

fn not_found(slug: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "success": false,
        "error": format!("Policy page '{}' not found", slug)
    }))
}

/// GET /policies/{slug} - página renderizada (HTML)
#[utoipa::path(
    get,
    path = "/policies/{slug}",
    tag = "Policies",
    params(("slug" = String, Path, description = "shipping | terms")),
    responses(
        (status = 200, description = "Rendered policy page (HTML)"),
        (status = 404, description = "Unknown policy page")
    )
)]
pub async fn render_page(path: web::Path<String>) -> HttpResponse {
    let slug = path.into_inner();
    let Some(page) = find_page(&slug) else {
        return not_found(&slug);
    };

    match render_policy(&page, chrono::Utc::now().date_naive()) {
        Ok(html) => HttpResponse::Ok().content_type(ContentType::html()).body(html),
        Err(e) => {
            log::error!("❌ Failed to render policy page {}: {}", slug, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Failed to render page"
            }))
        }
    }
}

/// GET /api/v1/policies/{slug} - dados da página para o frontend
#[utoipa::path(
    get,
    path = "/api/v1/policies/{slug}",
    tag = "Policies",
    params(("slug" = String, Path, description = "shipping | terms")),
    responses(
        (status = 200, description = "Policy page sections", body = PolicyPage),
        (status = 404, description = "Unknown policy page")
    )
)]
pub async fn get_page(path: web::Path<String>) -> HttpResponse {
    let slug = path.into_inner();
    match find_page(&slug) {
        Some(page) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "page": page
        })),
        None => not_found(&slug),
    }
}
