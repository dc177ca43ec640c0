// Health check endpoint handler implementation

use axum::{extract::State, Json};

use crate::handlers::AppState;
use crate::services::health::{HealthChecker, HealthReport};

/// Handler for GET /health - Reports the service as up and whether the database answers
pub async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    let health_checker = HealthChecker::new(&state);
    Json(health_checker.check().await)
}
