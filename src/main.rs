mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{
    middleware::{from_fn, Logger},
    web, App, HttpResponse, HttpServer,
};
use dotenv::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;
use crate::database::UserStore;
use crate::utils::ErrorResponse;

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Not found"))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env()?;

    log::info!("🚀 Starting User Service...");

    // Único store do processo: criado aqui e compartilhado por todos os workers
    let store = web::Data::new(UserStore::new());

    log::info!("🌐 Server starting on {}", config.bind_addr());
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", config.bind_addr());
    log::info!("📄 OpenAPI spec at: http://{}/api-docs/openapi.json", config.bind_addr());

    let cors_origins = config.cors_origins.clone();
    let openapi = api::swagger::ApiDoc::openapi();

    HttpServer::new(move || {
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .expose_headers(vec![actix_web::http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .app_data(store.clone())
            .wrap(cors)
            .wrap(from_fn(middleware::security_headers))
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Metrics
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Users CRUD
            .configure(api::users::configure)
            .default_service(web::route().to(not_found))
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
