mod api;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    log::info!("🚀 Starting Localprint Service...");
    log::info!("📊 Database: {}", database_url);

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        // Body decode failures (type mismatch, missing field, unknown enum
        // variant) are schema violations: 422
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            let detail = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::UnprocessableEntity().json(serde_json::json!({
                    "success": false,
                    "error": detail
                })),
            )
            .into()
        });

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .app_data(json_config)
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            // Root & health check
            .route("/", web::get().to(api::health::root))
            .route("/health", web::get().to(api::health::health_check))
            // Providers: printer listings with city search
            .service(
                web::scope("/api/providers")
                    .route("", web::post().to(api::providers::create_provider))
                    .route("", web::get().to(api::providers::list_providers))
            )
            // Reviews: ratings + provider aggregate
            .service(
                web::scope("/api/reviews")
                    .route("", web::post().to(api::reviews::create_review))
                    .route("", web::get().to(api::reviews::list_reviews))
            )
            // Print requests: contact a provider
            .service(
                web::scope("/api/print-requests")
                    .route("", web::post().to(api::print_requests::create_print_request))
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
