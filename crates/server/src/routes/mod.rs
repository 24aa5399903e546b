pub mod ai;
pub mod system;

use actix_web::web;

/// Bodies above this size are not read; the AI handlers answer them as if the body were empty
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Register every route; the AI endpoints are served under both `/ai` and `/api/ai`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .service(system::health)
        .service(web::scope("/ai").configure(ai::configure))
        .service(web::scope("/api/ai").configure(ai::configure));
}
