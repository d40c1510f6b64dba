use std::sync::Arc;

use crate::config::AppConfig;
use crate::observability::AppMetrics;
use crate::services::session::SessionService;

/// Application state containing all shared services
#[derive(Clone)]
pub struct AppState {
    /// Session service for dialogue session management
    pub session_service: Arc<dyn SessionService>,
    /// Application metrics
    pub metrics: Arc<AppMetrics>,
    /// Loaded configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("session_service", &"Arc<dyn SessionService>")
            .field("metrics", &self.metrics)
            .field("config", &self.config)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        session_service: Box<dyn SessionService>,
        metrics: Arc<AppMetrics>,
        config: AppConfig,
    ) -> Self {
        Self {
            session_service: Arc::from(session_service),
            metrics,
            config: Arc::new(config),
        }
    }

    /// Create development application state with a seeded engine
    pub fn development() -> Self {
        use crate::services::session::create_session_service;

        let config = AppConfig::development();
        let session_service = create_session_service(config.engine.clone());
        Self::new(session_service, Arc::new(AppMetrics::default()), config)
    }
}
