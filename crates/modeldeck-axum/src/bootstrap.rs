//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here;
//! handlers only ever see the port traits.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use modeldeck_core::{DownloadSimulator, HubClientPort, OllamaClientPort, SettingsRepository};
use modeldeck_hub::{DefaultHubClient, HubClientConfig};
use modeldeck_ollama::OllamaClient;
use modeldeck_store::JsonSettingsStore;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path of the flat settings file.
    pub settings_file: PathBuf,
    /// Override for the Hub API base URL (tests, mirrors).
    pub hub_base_url: Option<String>,
    /// Optional path to static assets for SPA serving.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default paths.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            port: 8000,
            settings_file: PathBuf::from("settings.json"),
            hub_base_url: None,
            static_dir: None,
            cors: CorsConfig::default(),
        }
    }

    /// Set the static directory for SPA serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// This struct holds all initialized services for the web server.
pub struct AppContext {
    /// Hub client for model discovery.
    pub hub: Arc<dyn HubClientPort>,
    /// Client for caller-supplied Ollama servers.
    pub ollama: Arc<dyn OllamaClientPort>,
    /// Settings persistence.
    pub settings: Arc<dyn SettingsRepository>,
    /// Download simulation service.
    pub downloads: DownloadSimulator,
}

/// Bootstrap the application context with all services.
#[must_use]
pub fn bootstrap(config: &ServerConfig) -> AppContext {
    tracing::info!(
        settings_file = %config.settings_file.display(),
        hub_base_url = config.hub_base_url.as_deref().unwrap_or("(default)"),
        "bootstrapping modeldeck services"
    );

    let mut hub_config = HubClientConfig::new();
    if let Some(ref base_url) = config.hub_base_url {
        hub_config = hub_config.with_base_url(base_url);
    }

    let hub: Arc<dyn HubClientPort> = Arc::new(DefaultHubClient::new(&hub_config));
    let ollama: Arc<dyn OllamaClientPort> = Arc::new(OllamaClient::new());
    let settings: Arc<dyn SettingsRepository> =
        Arc::new(JsonSettingsStore::new(&config.settings_file));
    let downloads = DownloadSimulator::new(settings.clone());

    AppContext {
        hub,
        ollama,
        settings,
        downloads,
    }
}

/// Start the web server on the configured port.
///
/// If `config.static_dir` is set, serves static assets with SPA fallback.
/// Otherwise, serves only the API endpoints.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config);

    // Choose router based on whether static serving is configured
    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.cors)
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    if config.static_dir.is_some() {
        info!("modeldeck server (with UI) listening on http://{}", addr);
    } else {
        info!("modeldeck server (API only) listening on http://{}", addr);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
