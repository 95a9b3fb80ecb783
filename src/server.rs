use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::api::{MutualsRequest, MutualsResponse, SuggestRequest, SuggestResponse};
use follow_suggest::config::EngineConfig;
use follow_suggest::reputation::HttpReputationProbe;
use follow_suggest::scoring::RankingEngine;
use follow_suggest::mutual_followers;

#[derive(Clone)]
struct AppState {
    engine: Arc<RankingEngine>,
}

pub async fn serve(args: crate::ServeArgs, config: EngineConfig) -> Result<(), String> {
    let mut engine = RankingEngine::new(config.clone());
    if config.reputation.enabled {
        let probe = HttpReputationProbe::from_config(&config.reputation)?;
        engine = engine.with_probe(Arc::new(probe));
        tracing::info!(endpoint = %config.reputation.endpoint, "reputation probe enabled");
    }

    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/suggest", post(suggest_handler))
        .route("/api/mutuals", post(mutuals_handler))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    tracing::info!(%addr, "listening");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn suggest_handler(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, (StatusCode, String)> {
    let (viewer, snapshot, limit) = request
        .into_parts()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    let suggestions = state.engine.rank(&viewer, &snapshot, limit).await;
    Ok(Json(SuggestResponse {
        viewer,
        suggestions,
    }))
}

async fn mutuals_handler(
    Json(request): Json<MutualsRequest>,
) -> Result<Json<MutualsResponse>, (StatusCode, String)> {
    let (a, b, edges) = request
        .into_parts()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    Ok(Json(MutualsResponse {
        mutual_followers: mutual_followers(&a, &b, &edges),
    }))
}
