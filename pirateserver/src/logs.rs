//! Initialisation du système de logs
//!
//! Installs a `tracing_subscriber` registry with a reloadable level filter
//! taken from `host.logger.min_level`, followed by a console `fmt` layer when
//! `host.logger.enable_console` is set. The level can then be read and
//! changed at runtime through `GET`/`POST /log_setup`.

use anyhow::{Result, anyhow};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use pirateconfig::Config;
use serde::{Deserialize, Serialize};
use tracing::{Level, info};
use tracing_subscriber::{
    Registry, filter::LevelFilter, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Options de logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingOptions {
    pub min_level: LevelFilter,
    /// Activer la sortie console
    pub enable_console: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            min_level: LevelFilter::INFO,
            enable_console: true,
        }
    }
}

impl LoggingOptions {
    /// Options read from the `host.logger` section
    ///
    /// An unknown level name falls back to `TRACE` so nothing gets lost.
    pub fn from_config(config: &Config) -> Self {
        let min_level = match config.get_log_min_level() {
            Ok(l) => match string_to_level(&l) {
                Some(lev) => LevelFilter::from_level(lev),
                None => LevelFilter::TRACE,
            },
            Err(_) => LevelFilter::TRACE,
        };

        let enable_console = config.get_log_enable_console().unwrap_or(true);

        Self {
            min_level,
            enable_console,
        }
    }
}

/// Handle on the installed level filter
#[derive(Clone)]
pub struct LogHandle {
    reload_handle: reload::Handle<LevelFilter, Registry>,
}

impl LogHandle {
    /// Change le niveau de log à chaud
    pub fn set_max_level(&self, level: Level) -> Result<()> {
        self.reload_handle
            .reload(LevelFilter::from_level(level))
            .map_err(|e| anyhow!("Failed to reload log level filter: {}", e))
    }

    pub fn max_level(&self) -> Option<LevelFilter> {
        self.reload_handle.clone_current()
    }
}

const AVAILABLE_LEVELS: [&str; 5] = ["ERROR", "WARN", "INFO", "DEBUG", "TRACE"];

/// Request body pour POST /log_setup
#[derive(Debug, Deserialize)]
pub struct LogSetupRequest {
    pub level: String,
}

/// Réponse de /log_setup
#[derive(Debug, Serialize)]
pub struct LogSetupResponse {
    pub current_level: String,
    pub available_levels: Vec<String>,
}

impl LogSetupResponse {
    fn new(handle: &LogHandle) -> Self {
        let current_level = handle
            .max_level()
            .map(|l| l.to_string().to_uppercase())
            .unwrap_or_else(|| "UNKNOWN".to_string());
        Self {
            current_level,
            available_levels: AVAILABLE_LEVELS.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Router exposing the runtime log level
pub fn create_log_router(handle: LogHandle) -> Router {
    Router::new()
        .route("/log_setup", get(log_setup_get).post(log_setup_post))
        .with_state(handle)
}

/// GET /log_setup
async fn log_setup_get(State(handle): State<LogHandle>) -> Json<LogSetupResponse> {
    Json(LogSetupResponse::new(&handle))
}

/// POST /log_setup
async fn log_setup_post(
    State(handle): State<LogHandle>,
    Json(payload): Json<LogSetupRequest>,
) -> Response {
    let Some(level) = string_to_level(&payload.level) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "Invalid log level. Must be one of: ERROR, WARN, INFO, DEBUG, TRACE"
            })),
        )
            .into_response();
    };

    if let Err(e) = handle.set_max_level(level) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response();
    }
    info!("Log level changed to: {}", level);

    (StatusCode::OK, Json(LogSetupResponse::new(&handle))).into_response()
}

/// Installe le subscriber global
///
/// Fails if a global subscriber is already set.
pub fn init_logging(options: LoggingOptions) -> Result<LogHandle> {
    let (filter, reload_handle) = reload::Layer::new(options.min_level);
    let subscriber = Registry::default().with(filter);

    let installed = if options.enable_console {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(true),
            )
            .try_init()
    } else {
        subscriber.try_init()
    };
    installed.map_err(|e| anyhow!("Cannot install log subscriber: {}", e))?;

    Ok(LogHandle { reload_handle })
}

/// Parse a level name, case-insensitively
pub fn string_to_level(s: &str) -> Option<Level> {
    match s.trim().to_uppercase().as_str() {
        "ERROR" => Some(Level::ERROR),
        "WARN" | "WARNING" => Some(Level::WARN),
        "INFO" => Some(Level::INFO),
        "DEBUG" => Some(Level::DEBUG),
        "TRACE" => Some(Level::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_to_level() {
        assert_eq!(string_to_level("info"), Some(Level::INFO));
        assert_eq!(string_to_level(" Warning "), Some(Level::WARN));
        assert_eq!(string_to_level("TRACE"), Some(Level::TRACE));
        assert_eq!(string_to_level("verbose"), None);
    }

    #[test]
    fn test_options_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_config(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(LoggingOptions::from_config(&config), LoggingOptions::default());

        config.set_log_min_level("debug".to_string()).unwrap();
        config.set_log_enable_console(false).unwrap();
        let options = LoggingOptions::from_config(&config);
        assert_eq!(options.min_level, LevelFilter::DEBUG);
        assert!(!options.enable_console);

        config.set_log_min_level("loud".to_string()).unwrap();
        assert_eq!(
            LoggingOptions::from_config(&config).min_level,
            LevelFilter::TRACE
        );
    }

    async fn call(router: Router, request: axum::http::Request<axum::body::Body>) -> (StatusCode, serde_json::Value) {
        use tower::ServiceExt;

        let res = router.oneshot(request).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_level(level: &str) -> axum::http::Request<axum::body::Body> {
        axum::http::Request::builder()
            .method("POST")
            .uri("/log_setup")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(format!(r#"{{"level": "{}"}}"#, level)))
            .unwrap()
    }

    #[tokio::test]
    async fn test_log_setup_routes() {
        // Subscriber kept alive but not installed: the handle reloads its filter
        let (filter, reload_handle) = reload::Layer::new(LevelFilter::INFO);
        let _subscriber = Registry::default().with(filter);
        let router = create_log_router(LogHandle { reload_handle });

        let get = axum::http::Request::builder()
            .uri("/log_setup")
            .body(axum::body::Body::empty())
            .unwrap();
        let (status, body) = call(router.clone(), get).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current_level"], "INFO");
        assert_eq!(body["available_levels"].as_array().unwrap().len(), 5);

        let (status, body) = call(router.clone(), post_level("debug")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current_level"], "DEBUG");

        let (status, body) = call(router, post_level("loud")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid log level"));
    }

    #[test]
    fn test_init_logging_once() {
        let options = LoggingOptions {
            min_level: LevelFilter::WARN,
            enable_console: false,
        };
        // Une seule installation par processus
        if let Ok(handle) = init_logging(options) {
            assert_eq!(handle.max_level(), Some(LevelFilter::WARN));
            handle.set_max_level(Level::DEBUG).unwrap();
            assert_eq!(handle.max_level(), Some(LevelFilter::DEBUG));
            assert!(init_logging(options).is_err());
        }
    }
}
