mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::auth::{routes as auth_routes, SessionService};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::i18n::routes as i18n_routes;
use crate::features::reports::{routes as reports_routes, ReportService};
use crate::features::tracking::routes as tracking_routes;
use crate::features::triage::routes as triage_routes;
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "Configuration loaded: tokio_worker_threads={}, seed_demo_data={}, pid={}",
        worker_threads,
        config.demo.seed_reports,
        std::process::id()
    );

    let app = build_app(&config);

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;
    socket.set_tcp_keepalive(
        &socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60)),
    )?;
    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped; in-memory reports and sessions discarded");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

/// Simple health check endpoint (no auth required)
async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

/// Wire services, routes and HTTP layers into the application router
fn build_app(config: &Config) -> Router {
    let session_service = Arc::new(SessionService::new());

    let report_service = Arc::new(if config.demo.seed_reports {
        ReportService::with_demo_data()
    } else {
        ReportService::new()
    });

    let dashboard_service = Arc::new(DashboardService::new(Arc::clone(&report_service)));
    tracing::info!("Services initialized");

    // Build swagger router with dynamic config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Protected routes (require a session); admin handlers also check the role
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes(Arc::clone(&session_service)))
        .merge(i18n_routes::protected_routes(Arc::clone(&session_service)))
        .merge(reports_routes::protected_routes(Arc::clone(&report_service)))
        .merge(reports_routes::admin_routes(Arc::clone(&report_service)))
        .merge(dashboard_routes::routes(dashboard_service))
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(&session_service),
            middleware::auth_middleware,
        ));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::public_routes(session_service))
        .merge(triage_routes::routes())
        .merge(i18n_routes::public_routes())
        .merge(reports_routes::public_routes(Arc::clone(&report_service)))
        .merge(tracking_routes::routes(report_service, &config.demo))
        .route("/health", axum::routing::get(health_check));

    Router::new()
        .merge(swagger)
        .merge(protected_routes)
        .merge(public_routes)
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                // Propagate X-Request-Id to response headers
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::cors_layer(
                    config.app.cors_allowed_origins.clone(),
                )),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AppConfig, DemoConfig, SwaggerConfig};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn test_config() -> Config {
        Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_allowed_origins: vec!["*".to_string()],
            },
            swagger: SwaggerConfig {
                username: None,
                password: None,
                title: "ResQ API".to_string(),
                version: "test".to_string(),
                description: "test".to_string(),
            },
            demo: DemoConfig::default(),
        }
    }

    async fn login(server: &TestServer, email: &str, role: &str) -> String {
        let body: Value = server
            .post("/api/auth/login")
            .json(&json!({ "email": email, "password": "secret", "role": role }))
            .await
            .json();
        body["data"]["access_token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health_and_request_id() {
        let server = TestServer::new(build_app(&test_config())).unwrap();

        let response = server.get("/health").await;

        response.assert_status_ok();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_report_lifecycle_through_sessions() {
        let server = TestServer::new(build_app(&test_config())).unwrap();

        let citizen = login(&server, "kavya@example.com", "citizen").await;
        let submitted: Value = server
            .post("/api/reports")
            .authorization_bearer(&citizen)
            .json(&json!({
                "description": "Gas leak and small fire in the apartment kitchen",
                "location": "Besant Nagar",
                "victims": 0
            }))
            .await
            .json();
        assert_eq!(submitted["data"]["reporter_name"], "kavya");
        let id = submitted["data"]["id"].as_str().unwrap().to_string();

        // Citizens cannot move reports along
        server
            .patch(&format!("/api/admin/reports/{}/status", id))
            .authorization_bearer(&citizen)
            .json(&json!({ "status": "dispatched" }))
            .expect_failure()
            .await
            .assert_status_forbidden();

        let admin = login(&server, "ops@resq.example", "admin").await;
        server
            .patch(&format!("/api/admin/reports/{}/status", id))
            .authorization_bearer(&admin)
            .json(&json!({ "status": "dispatched" }))
            .await
            .assert_status_ok();

        let detail: Value = server.get(&format!("/api/reports/{}", id)).await.json();
        assert_eq!(detail["data"]["status"], "dispatched");
        assert_eq!(detail["data"]["timeline"][2]["current"], true);

        let summary: Value = server
            .get("/api/admin/dashboard/summary")
            .authorization_bearer(&admin)
            .await
            .json();
        assert_eq!(summary["data"]["total_reports"], 6);

        server
            .post("/api/auth/logout")
            .authorization_bearer(&citizen)
            .await
            .assert_status_ok();
        server
            .get("/api/reports")
            .authorization_bearer(&citizen)
            .expect_failure()
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_protected_routes_need_a_token() {
        let server = TestServer::new(build_app(&test_config())).unwrap();

        server
            .get("/api/auth/me")
            .expect_failure()
            .await
            .assert_status_unauthorized();
        server
            .get("/api/auth/me")
            .authorization_bearer("not-a-session")
            .expect_failure()
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let server = TestServer::new(build_app(&test_config())).unwrap();

        let doc: Value = server.get("/api-docs/openapi.json").await.json();
        assert_eq!(doc["info"]["version"], "test");
    }
}
