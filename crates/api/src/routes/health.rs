//! Liveness and schema readiness, mounted at the root (not under `/api/v1`).

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`. Always served with 200 so probes can read it.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `"ok"` when the store is reachable and the schema is complete,
    /// otherwise `"degraded"`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Tables the movie and people queries need but the store lacks.
    /// Empty when the store is unreachable, since nothing could be checked.
    pub missing_tables: Vec<&'static str>,
}

impl HealthReport {
    fn new(db_healthy: bool, missing_tables: Vec<&'static str>) -> Self {
        let status = if db_healthy && missing_tables.is_empty() {
            "ok"
        } else {
            "degraded"
        };
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            missing_tables,
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let report = match flickfinder_db::missing_tables(&state.pool).await {
        Ok(missing) => {
            if !missing.is_empty() {
                tracing::warn!(?missing, "Schema is missing tables");
            }
            HealthReport::new(true, missing)
        }
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            HealthReport::new(false, Vec::new())
        }
    };
    Json(report)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
