// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::{debug, info, warn};

use crate::api::ApiState;
use crate::api::types::{
    PasswordGenerationRequest, PasswordGenerationResponse,
    PasswordAnalysisRequest, PasswordAnalysisResponse,
};
use crate::generators::strength;

/// Generate a secure password
///
/// Generates a password based on the provided options. Unset fields take the
/// server's configured defaults; when every character class is disabled the
/// generator falls back to lowercase letters and digits.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid options", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<ApiState>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let options = generation_req
        .into_inner()
        .into_options(&state.config.default_options());

    if let Err(e) = options.validate(state.config.max_password_length) {
        warn!("Rejected generation request: {}", e);
        return HttpResponse::BadRequest().json(PasswordGenerationResponse {
            success: false,
            password: None,
            strength: None,
            label: None,
            error: Some(e.to_string()),
        });
    }

    debug!("Generating password ({})", options.summary());
    let password = state.generator.generate_password(&options);
    let score = strength::score(&password);
    info!("Generated password of length {} with strength {}", options.length, score);

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        password: Some(password),
        strength: Some(score),
        label: Some(strength::label(score).to_string()),
        error: None,
    })
}

/// Analyze password strength
///
/// Scores a password from 0 to 5 and lists what would raise the score.
#[utoipa::path(
    post,
    path = "/generator/strength",
    tag = "Generator",
    request_body = PasswordAnalysisRequest,
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password(
    analysis_req: web::Json<PasswordAnalysisRequest>,
) -> impl Responder {
    let password = analysis_req.into_inner().password;
    let score = strength::score(&password);

    HttpResponse::Ok().json(PasswordAnalysisResponse {
        success: true,
        strength: score,
        label: strength::label(score).to_string(),
        feedback: strength::feedback(&password),
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use actix_web::http::StatusCode;
    use crate::core::config::Config;
    use crate::generators::PasswordGenerator;

    fn state() -> web::Data<ApiState> {
        web::Data::new(ApiState::new(PasswordGenerator::new(), Config::default()))
    }

    #[actix_web::test]
    async fn generate_with_defaults() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .route("/generator/password", web::post().to(generate_password)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;

        assert!(resp.success);
        let password = resp.password.unwrap_or_default();
        assert_eq!(password.chars().count(), 16);
        assert_eq!(resp.strength, Some(5));
        assert_eq!(resp.label.as_deref(), Some("Muy fuerte"));
    }

    #[actix_web::test]
    async fn seeded_server_hands_out_different_passwords() {
        let generator = PasswordGenerator::new().with_rng_source(crate::models::RngSource::Seeded(11));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ApiState::new(generator, Config::default())))
                .route("/generator/password", web::post().to(generate_password)),
        )
        .await;

        let mut passwords = Vec::new();
        for _ in 0..3 {
            let req = test::TestRequest::post()
                .uri("/generator/password")
                .set_json(serde_json::json!({}))
                .to_request();
            let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;
            passwords.push(resp.password.unwrap_or_default());
        }

        assert_ne!(passwords[0], passwords[1]);
        assert_ne!(passwords[1], passwords[2]);
    }

    #[actix_web::test]
    async fn generate_rejects_zero_length() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .route("/generator/password", web::post().to(generate_password)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(serde_json::json!({ "length": 0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: PasswordGenerationResponse = test::read_body_json(resp).await;
        assert!(!body.success);
        assert!(body.password.is_none());
        assert!(body.error.is_some());
    }

    #[actix_web::test]
    async fn generate_rejects_oversized_length() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .route("/generator/password", web::post().to(generate_password)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(serde_json::json!({ "length": 10_000 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn generate_all_disabled_falls_back() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .route("/generator/password", web::post().to(generate_password)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(serde_json::json!({
                "length": 10,
                "include_uppercase": false,
                "include_lowercase": false,
                "include_numbers": false,
                "include_symbols": false
            }))
            .to_request();
        let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;

        assert!(resp.success);
        let password = resp.password.unwrap_or_default();
        assert_eq!(password.len(), 10);
        assert!(password.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[actix_web::test]
    async fn analyze_scores_and_labels() {
        let app = test::init_service(
            App::new().route("/generator/strength", web::post().to(analyze_password)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generator/strength")
            .set_json(serde_json::json!({ "password": "Abcdefghijkl1!" }))
            .to_request();
        let resp: PasswordAnalysisResponse = test::call_and_read_body_json(&app, req).await;

        assert!(resp.success);
        assert_eq!(resp.strength, 5);
        assert_eq!(resp.label, "Muy fuerte");
    }

    #[actix_web::test]
    async fn analyze_empty_password() {
        let app = test::init_service(
            App::new().route("/generator/strength", web::post().to(analyze_password)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generator/strength")
            .set_json(serde_json::json!({ "password": "" }))
            .to_request();
        let resp: PasswordAnalysisResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.strength, 0);
        assert_eq!(resp.label, "Muy débil");
        assert!(!resp.feedback.is_empty());
    }
}
