pub mod advisory;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/chat", post(advisory::handle_chat))
        .route("/risk-analysis", post(advisory::handle_risk_analysis))
        .route("/compliance-check", post(advisory::handle_compliance_check))
        .route("/due-diligence", post(advisory::handle_due_diligence))
        .with_state(state)
}
