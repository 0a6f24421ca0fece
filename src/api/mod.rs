//! Petrodash REST API
//!
//! HTTP API layer for Petrodash, built with Axum.
//!
//! # Endpoints
//!
//! ## Forms
//! - `GET /api/v1/forms` - List form schemas
//! - `GET /api/v1/forms/:form` - Get one schema
//! - `POST /api/v1/forms/:form` - Validate and submit a form
//! - `POST /api/v1/forms/historical/upload` - Acknowledge a bulk-upload file
//!
//! ## Dashboard
//! - `GET /api/v1/dashboard/overview` - Daily KPIs
//! - `GET /api/v1/dashboard/fields` - Production by field
//! - `GET /api/v1/dashboard/stations` - Production by station
//! - `GET /api/v1/dashboard/history` - Synthetic daily history
//! - `GET /api/v1/dashboard/wells` - Wells by category
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use petrodash::api::{serve, AppState};
//! use petrodash::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let api = config.api.clone();
//!     serve(AppState::new(config), &api).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Form routes
        .route("/forms", get(routes::forms::list_forms))
        .route(
            "/forms/:form",
            get(routes::forms::get_form).post(routes::forms::submit_form),
        )
        .route(
            "/forms/historical/upload",
            post(routes::forms::upload_historical),
        )
        // Dashboard routes
        .route("/dashboard/overview", get(routes::dashboard::overview))
        .route("/dashboard/fields", get(routes::dashboard::fields))
        .route("/dashboard/stations", get(routes::dashboard::stations))
        .route("/dashboard/history", get(routes::dashboard::history))
        .route("/dashboard/wells", get(routes::dashboard::wells));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.api.cors_origins);
    let timeout = Duration::from_secs(state.config.api.request_timeout_secs);
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Allow the configured origins, or any origin when none are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(allowed)
    }
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Petrodash API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Petrodash API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::forms::{CollectingSink, Record};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, Arc<CollectingSink>) {
        let mut config = Config::default();
        config.dashboard.history_seed = Some(42);
        let sink = Arc::new(CollectingSink::new());
        let state = AppState::with_sink(config, sink.clone());
        (build_router(state), sink)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _sink) = create_test_app();
        let response = get(app, "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _sink) = create_test_app();
        let response = get(app, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _sink) = create_test_app();
        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["forms"], 5);
    }

    #[tokio::test]
    async fn test_list_forms() {
        let (app, _sink) = create_test_app();
        let response = get(app, "/api/v1/forms").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body.as_array().unwrap().len(), 5);
        assert_eq!(body[3]["kind"], "well");
    }

    #[tokio::test]
    async fn test_unknown_form() {
        let (app, _sink) = create_test_app();
        let response = get(app, "/api/v1/forms/pozos").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "FORM_NOT_FOUND");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_submit_production() {
        let (app, sink) = create_test_app();
        let response = post_json(
            app,
            "/api/v1/forms/production",
            r#"{"date": "2024-05-10", "crude_production": 12450, "injection": 8200,
                "mechanical_pumping": 0, "electric_pumping": 0, "gas_pumping": 0,
                "diluent_received": 320, "diluent_consumed": 285,
                "api_gravity": 18.5, "water_and_sediments": 2.8}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["record"]["form"], "production");
        assert_eq!(body["notification"]["title"], "Datos guardados");

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert!(matches!(records[0], Record::Production(_)));
    }

    #[tokio::test]
    async fn test_submit_invalid_returns_field_errors() {
        let (app, sink) = create_test_app();
        let response = post_json(
            app,
            "/api/v1/forms/historical",
            r#"{"start_date": "2024-02-01", "end_date": "2024-01-01",
                "daily_production": 100, "daily_injection": 0,
                "daily_pumping": 0, "diluent_consumption": 0}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json_body(response).await;
        assert_eq!(body["status"], "invalid");
        assert_eq!(
            body["errors"]["end_date"],
            "La fecha de fin debe ser posterior a la fecha de inicio"
        );
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_upload() {
        let (app, _sink) = create_test_app();
        let response = post_json(
            app.clone(),
            "/api/v1/forms/historical/upload",
            r#"{"file_name": "historico.xlsx"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["notification"]["title"], "Archivo cargado");
        assert_eq!(body["expected_columns"].as_array().unwrap().len(), 5);

        let response = post_json(
            app,
            "/api/v1/forms/historical/upload",
            r#"{"file_name": "historico.pdf"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_overview() {
        let (app, _sink) = create_test_app();
        let response = get(app, "/api/v1/dashboard/overview?date=2024-05-10").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["date"], "2024-05-10");
        assert_eq!(body["diluent"]["balance"], 35.0);
    }

    #[tokio::test]
    async fn test_fields_filter() {
        let (app, _sink) = create_test_app();
        let response = get(app.clone(), "/api/v1/dashboard/fields?field=Norte&shift=noche").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["rows"].as_array().unwrap().len(), 2);

        let response = get(app, "/api/v1/dashboard/stations?shift=madrugada").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_history_is_pinned_by_config_seed() {
        let (app, _sink) = create_test_app();
        let uri = "/api/v1/dashboard/history?date=2024-05-31&days=7";

        let first = json_body(get(app.clone(), uri).await).await;
        let second = json_body(get(app, uri).await).await;

        assert_eq!(first["points"].as_array().unwrap().len(), 8);
        assert_eq!(first["seed"], 42);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_history_bad_range() {
        let (app, _sink) = create_test_app();
        let response = get(
            app.clone(),
            "/api/v1/dashboard/history?from=2024-06-01&to=2024-05-01",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = get(app, "/api/v1/dashboard/history?from=2024-06-01").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_history_range_limits() {
        let (app, _sink) = create_test_app();
        let response = get(
            app.clone(),
            "/api/v1/dashboard/history?date=-262143-01-05&days=365",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "INVALID_SELECTION");

        let response = get(
            app.clone(),
            "/api/v1/dashboard/history?from=0001-01-01&to=9999-12-31",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = get(
            app,
            "/api/v1/dashboard/history?from=2024-01-01&to=2024-12-31&seed=1",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["points"].as_array().unwrap().len(), 366);
    }

    #[tokio::test]
    async fn test_wells() {
        let (app, _sink) = create_test_app();
        let response = get(app, "/api/v1/dashboard/wells").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["summary"]["total_wells"], 204);
        assert_eq!(body["categories"].as_array().unwrap().len(), 5);
    }
}
