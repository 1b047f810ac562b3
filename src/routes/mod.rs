pub mod ai;
pub mod health;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/ai")
            .service(ai::suggest_priority)
            .service(ai::analyze_workload)
            .service(ai::predict_timeline),
    );
}
