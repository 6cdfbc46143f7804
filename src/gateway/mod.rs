pub mod error;
pub mod handlers;
pub mod openapi;
pub mod pages;
pub mod state;

use axum::{
    Router,
    routing::{MethodRouter, get, post},
};
use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::{SessionSecret, SharedPassword};
use crate::config::AppConfig;
use crate::signs::LocalFs;
use state::AppState;

/// Every route the gateway serves: path plus its method/handler binding.
pub fn route_table() -> Vec<(&'static str, MethodRouter<Arc<AppState>>)> {
    vec![
        ("/api/health", get(handlers::health_check)),
        ("/api/signs.json", get(handlers::list_signs)),
        ("/api/signs/{name}/scene.json", get(handlers::get_scene)),
        ("/api/signs/{name}/assets/{asset}", get(handlers::get_asset)),
        ("/api/signs/{name}/pgms.json", get(handlers::list_programs)),
        ("/api/signs/{name}/pgms/{pgm}", get(handlers::get_program)),
        ("/login", get(handlers::login_form).post(handlers::login)),
        ("/logout", post(handlers::logout)),
    ]
}

/// Build the application router from [`route_table`].
pub fn build_router(state: Arc<AppState>) -> Router {
    route_table()
        .into_iter()
        .fold(Router::new(), |router, (path, method_router)| {
            router.route(path, method_router)
        })
        .with_state(state)
        // Stateless, added after with_state
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Shared state from configuration: session secret, password, signs root.
pub fn state_from_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let secret = match config.auth.session_secret.as_deref() {
        Some(value) => {
            let secret = SessionSecret::from_config(value)
                .context("Invalid auth.session_secret")?;
            if secret.len() < 16 {
                tracing::warn!(
                    "Session secret is only {} bytes, use at least 32",
                    secret.len()
                );
            }
            secret
        }
        None => {
            tracing::warn!("No session secret configured, sessions end on restart");
            SessionSecret::random()
        }
    };

    let password = SharedPassword::new(config.auth.password_hash.clone())?;
    if !password.is_configured() {
        tracing::warn!("No password hash configured, login is disabled");
    }

    let root = &config.signs.root;
    if !root.is_dir() {
        tracing::warn!("Signs root {} is not a directory", root.display());
    }

    Ok(AppState::new(
        Arc::new(LocalFs),
        root.clone(),
        &secret,
        password,
    ))
}

/// Start HTTP Gateway server
pub async fn run_server(config: &AppConfig, port: u16) -> anyhow::Result<()> {
    let state = Arc::new(state_from_config(config)?);
    let app = build_router(state);

    let addr = format!("{}:{}", config.gateway.host, port);
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to bind to {}: {} (port {} may already be in use)",
            addr,
            e,
            port
        )
    })?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);
    tracing::info!("Signs root: {}", config.signs.root.display());

    axum::serve(listener, app).await?;
    Ok(())
}
