use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use shoestore_backend::{
    api, config::{init_logging, Config}, database, middleware, seeds,
    services::admin_service::AdminCredentials, store::CatalogStore,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    init_logging();

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    log::info!("🚀 Starting Shoe Store backend...");

    let db = database::MongoDB::new(&config.database_url)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string()))?;

    log::info!("✅ MongoDB connected successfully");

    // 👤 Admin bootstrap (falha não impede o startup)
    seeds::admin_seed::bootstrap_admin(&db, &AdminCredentials::from_env()).await;

    let store: Arc<dyn CatalogStore> = Arc::new(db);
    let store_data = web::Data::from(store);

    let bind_addr = format!("{}:{}", config.host, config.port);
    log::info!("🌐 Server starting on {}", bind_addr);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_addr);

    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .route("/health", web::get().to(api::health::health_check))
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Policy pages (HTML)
            .route("/policies/{slug}", web::get().to(api::policies::render_page))
            .service(
                web::scope("/api/v1/policies")
                    .route("/{slug}", web::get().to(api::policies::get_page))
            )
            // Catalog (READ ONLY)
            .service(
                web::scope("/api/v1/products")
                    .route("/{collection}", web::get().to(api::products::list_products))
                    .route("/{collection}/subcategories", web::get().to(api::products::get_sub_categories))
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
