// Health check service implementation

use serde::Serialize;

use crate::state::AppContext;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    /// Whether notes and categories are backed by a reachable database
    pub database: bool,
}

pub struct HealthChecker<'a> {
    state: &'a AppContext,
}

impl<'a> HealthChecker<'a> {
    pub fn new(state: &'a AppContext) -> Self {
        Self { state }
    }

    /// In-memory resources are always up; the database is pinged when configured
    pub async fn check(&self) -> HealthReport {
        let database = match self.state.database() {
            Some(repositories) => match repositories.ping().await {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!("Health check: database unreachable: {}", err);
                    false
                }
            },
            None => false,
        };

        HealthReport {
            status: "ok",
            database,
        }
    }
}
