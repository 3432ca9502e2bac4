use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use common::games::tictactoe::GameView;
use common::{log, log_warn};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::game_session::GameSession;

#[derive(Clone)]
pub struct WebServerState {
    pub session: GameSession,
}

pub fn build_router(state: WebServerState, static_files_path: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/state", get(get_state))
        .route("/move/{index}", post(place_mark))
        .route("/restart", post(restart));

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(static_files_path))
        .layer(cors)
        .with_state(state)
}

pub async fn run_web_server(
    session: GameSession,
    addr: SocketAddr,
    static_files_path: PathBuf,
) -> std::io::Result<()> {
    let app = build_router(WebServerState { session }, static_files_path.clone());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log!(
        "Web server listening on http://{} (page from {})",
        listener.local_addr()?,
        static_files_path.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log_warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    log!("Shutdown signal received");
}

async fn get_state(State(state): State<WebServerState>) -> Json<GameView> {
    Json(state.session.view().await)
}

async fn place_mark(
    State(state): State<WebServerState>,
    Path(index): Path<usize>,
) -> Json<GameView> {
    Json(state.session.place_mark(index).await)
}

async fn restart(State(state): State<WebServerState>) -> Json<GameView> {
    Json(state.session.restart().await)
}
