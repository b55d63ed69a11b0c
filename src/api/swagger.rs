use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shoe Store API",
        version = "1.0.0",
        description = "Backend API for the shoe and accessories storefront.\n\n**Features:**\n- Read-only product catalog per collection\n- subCategory usage per collection\n- Shipping Policy and Terms of Service pages (HTML and JSON)\n- Health monitoring and metrics",
        contact(
            name = "Shoe Store Team",
            email = "support@shoestore.com"
        )
    ),
    paths(
        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,

        // Products
        crate::api::products::list_products,
        crate::api::products::get_sub_categories,

        // Policies
        crate::api::policies::render_page,
        crate::api::policies::get_page,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::ProductResponse,
            crate::services::SubCategoryUsage,
            crate::pages::PolicyPage,
            crate::pages::PolicySection,
        )
    ),
    tags(
        (name = "Health", description = "Health check and request metrics."),
        (name = "Products", description = "Read-only product listing for the four product collections."),
        (name = "Policies", description = "Static policy pages rendered from fixed section lists."),
    )
)]
pub struct ApiDoc;
