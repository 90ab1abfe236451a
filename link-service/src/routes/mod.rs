use axum::{
    extract::Request,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServiceConfig;
use crate::handlers::{
    capture_handlers::{add_capture, apply_sync, clear_captures, get_sync_request, list_captures},
    health,
    offline_handlers::parse_payload,
    share_handlers::{
        accept_organiser_link, accept_participant_link, issue_organiser_link,
        issue_participant_link,
    },
    AppState,
};
use eventlink_shared::auth::auth_middleware;
use eventlink_shared::store::{memory::MemoryCaptureStore, CaptureStore};

/// Creates a router with the default in-memory capture store
pub fn create_router(config: &ServiceConfig) -> Router {
    tracing::info!("Creating router with in-memory capture store");
    create_router_with_store(Arc::new(MemoryCaptureStore::new()), config)
}

/// Creates a router with a given store implementation
pub fn create_router_with_store<S>(store: Arc<S>, config: &ServiceConfig) -> Router
where
    S: CaptureStore + 'static,
{
    let prefix = config.route_prefix.as_str();
    tracing::info!("Setting up API routes with prefix: {:?}", prefix);

    let state = Arc::new(AppState {
        store,
        link_host: config.link_host.clone(),
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl axum::response::IntoResponse {
        tracing::info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    // Issuing links requires an authenticated organiser or promoter
    let issue_routes = Router::new()
        .route("/share/organiser", post(issue_organiser_link::<S>))
        .route("/share/participant", post(issue_participant_link::<S>))
        .layer(middleware::from_fn(auth_middleware));

    // Link acceptance and offline capture are device-based and unauthenticated
    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/share/organiser/accept", post(accept_organiser_link))
        .route("/share/participant/accept", post(accept_participant_link))
        .route("/offline/parse", post(parse_payload))
        .route(
            "/devices/:device_id/captures",
            post(add_capture::<S>)
                .get(list_captures::<S>)
                .delete(clear_captures::<S>),
        )
        .route(
            "/devices/:device_id/sync",
            get(get_sync_request::<S>).post(apply_sync::<S>),
        );

    let api_routes = issue_routes.merge(public_routes).with_state(state);

    let router = if prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(prefix, api_routes)
    };

    tracing::info!("Router configured with all routes and middleware");

    router
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
        // Add a fallback handler for 404s
        .fallback(|req: Request| async move {
            tracing::warn!("No route matched for: {} {}", req.method(), req.uri());
            (
                axum::http::StatusCode::NOT_FOUND,
                "The requested resource was not found".to_string(),
            )
        })
}
