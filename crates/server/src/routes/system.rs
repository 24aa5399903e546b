use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::HealthResponse;

/// Liveness and generator availability
#[get("/health")]
pub async fn health(
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        generator: state.generator_enabled(),
        version: env!("CARGO_PKG_VERSION"),
        model: state
            .generator_enabled()
            .then(|| state.config.llm_model.clone()),
        started_at: state.started_at,
    }))
}

#[cfg(test)]
mod tests {
    use crate::routes;
    use crate::state::AppState;
    use actix_web::{test, web, App};
    use moment_common::AppConfig;
    use moment_llm::TextGenerator;
    use serde_json::Value;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_health_reports_rule_based_mode() {
        let state = web::Data::new(Arc::new(AppState::new(AppConfig::default(), None)));
        let app = test::init_service(App::new().app_data(state).configure(routes::configure)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["generator"], false);
        assert!(body["model"].is_null());
        assert!(body["started_at"].is_string());
    }

    struct EchoGenerator;

    #[async_trait::async_trait]
    impl TextGenerator for EchoGenerator {
        async fn try_generate(&self, prompt: &str) -> Option<String> {
            Some(prompt.to_string())
        }
    }

    #[actix_web::test]
    async fn test_health_reports_configured_model() {
        let mut config = AppConfig::default();
        config.llm_model = "gemma2:2b".to_string();
        let generator: Arc<dyn TextGenerator> = Arc::new(EchoGenerator);
        let state = web::Data::new(Arc::new(AppState::new(config, Some(generator))));
        let app = test::init_service(App::new().app_data(state).configure(routes::configure)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["generator"], true);
        assert_eq!(body["model"], "gemma2:2b");
    }
}
