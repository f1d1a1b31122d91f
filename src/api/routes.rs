// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Generator routes
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/strength", web::post().to(handlers::generator::analyze_password))
    );

    // System routes
    cfg.route("/health", web::get().to(handlers::system::health));
}
