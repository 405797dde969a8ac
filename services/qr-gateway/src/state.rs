use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::{Arc, OnceLock};

// ---------------------------------------------------------------------------
// AppState — built once at startup, handed to every handler via axum State.
// No module-level globals beyond the process-wide metrics recorder, which
// the metrics crate requires to be installed exactly once.
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

static RECORDER: OnceLock<PrometheusHandle> = OnceLock::new();

fn prometheus_handle() -> PrometheusHandle {
    RECORDER
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("install prometheus recorder")
        })
        .clone()
}

pub struct AppState {
    pub cfg: Config,
    pub metrics: PrometheusHandle,
}

impl AppState {
    pub fn new(cfg: Config) -> Arc<Self> {
        Arc::new(Self {
            metrics: prometheus_handle(),
            cfg,
        })
    }
}
