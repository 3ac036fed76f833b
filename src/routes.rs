use axum::{
    extract::{DefaultBodyLimit, State},
    http::{HeaderValue, StatusCode},
    middleware,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config;
use crate::database::models::{Category, Product, Supplier, Task};
use crate::database::{DatabaseManager, Entity};
use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;
use crate::state::{AppState, Store};

pub fn app(state: AppState) -> Router {
    let settings = config::config();

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_public_routes())
        // Protected API
        .merge(protected_routes(state.clone()))
        .with_state(state)
        // Global middleware
        .layer(DefaultBodyLimit::max(settings.api.max_request_size_bytes))
        .layer(cors_layer(&settings.security.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn auth_public_routes() -> Router<AppState> {
    use axum::routing::post;

    Router::new()
        .route("/api/auth/setup", get(public::setup_get))
        .route("/api/auth/signin", post(public::signin_post))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use axum::routing::patch;

    Router::new()
        .route("/api/auth/session", get(protected::session_get))
        .route("/api/auth/user", patch(protected::user_patch))
        .merge(entity_routes::<Category>("categories"))
        .merge(entity_routes::<Product>("products"))
        .merge(entity_routes::<Supplier>("suppliers"))
        .merge(entity_routes::<Task>("tasks"))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

fn entity_routes<E>(collection: &str) -> Router<AppState>
where
    E: Entity,
    Store<E>: axum::extract::FromRef<AppState>,
{
    use protected::entity;

    Router::new()
        .route(
            &format!("/api/{}", collection),
            get(entity::list::<E>).post(entity::create::<E>),
        )
        .route(
            &format!("/api/{}/:id", collection),
            get(entity::show::<E>)
                .put(entity::update::<E>)
                .delete(entity::delete::<E>),
        )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Business Admin API",
            "version": version,
            "endpoints": {
                "setup": "/api/auth/setup (public)",
                "signin": "/api/auth/signin (public)",
                "session": "/api/auth/session, /api/auth/user (protected)",
                "categories": "/api/categories[/:id] (protected)",
                "products": "/api/products[/:id] (protected)",
                "suppliers": "/api/suppliers[/:id] (protected)",
                "tasks": "/api/tasks[/:id] (protected)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    let Some(pool) = state.pool.as_ref() else {
        return (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "in-memory"
                }
            })),
        );
    };

    match DatabaseManager::ping(pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
