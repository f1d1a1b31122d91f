// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_web::middleware::Logger;
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;
use crate::generators::PasswordGenerator;

/// Shared, read-only state handed to every worker.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub generator: PasswordGenerator,
    pub config: Config,
}

impl ApiState {
    pub fn new(generator: PasswordGenerator, config: Config) -> Self {
        Self { generator, config }
    }
}

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,

        // System endpoints
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisRequest,
            crate::api::types::PasswordAnalysisResponse,
            crate::api::types::HealthResponse,
            crate::models::PasswordGenerationOptions
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength endpoints"),
        (name = "System", description = "Service status")
    ),
    info(
        title = "vaul-passgen API",
        version = "0.1.0",
        description = "Password generator and strength meter",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(generator: PasswordGenerator, config: Config) -> std::io::Result<()> {
    let address = config.web_address.clone();
    let port = config.web_port;
    log::info!(
        "Starting vaul-passgen API on {}:{} (rng: {}, shuffle: {})",
        address, port, generator.rng_source(), generator.shuffle_mode()
    );

    let state = web::Data::new(ApiState::new(generator, config));

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                "Content-Type",
                "Accept",
                "X-Requested-With",
                "X-CSRFToken",
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            // Request bodies hold passwords, so only method and path are logged
            .wrap(Logger::new("%r %s %Dms"))
            .app_data(state.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_generator_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/generator/password"));
        assert!(paths.iter().any(|p| p.as_str() == "/generator/strength"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
