use super::{handlers, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// 組出完整路由：請求日誌 -> panic 攔截 -> handler
pub fn build_router(state: AppState) -> Router {
    let api = Router::new().route("/calculate", post(handlers::calculate));

    Router::new()
        .route("/", get(handlers::welcome))
        .nest("/api", api)
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
