//! Single binary web server: the tracker API over a file-backed store, plus
//! the view's static files from STATIC_DIR.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, POKER_STORE_PATH (store file), STATIC_DIR.

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use poker_series_tracker::{
    FileStore, PokerTracker, Series, SeriesInput, SeriesSummary, Standing, StatSubmission,
    TrackerError,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// The one tracker instance, shared by all requests.
type AppState = Data<RwLock<PokerTracker<FileStore>>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct SeriesListResponse<'a> {
    series: &'a [Series],
    current: Option<&'a str>,
}

#[derive(Serialize)]
struct LeaderboardResponse<'a> {
    series: Option<&'a Series>,
    standings: Vec<Standing>,
    summary: SeriesSummary,
}

/// Player form as submitted: numbers arrive as raw text and fall back to 0.
#[derive(Deserialize)]
struct SubmitPlayerBody {
    name: String,
    #[serde(default)]
    points: String,
    #[serde(default)]
    games: String,
    #[serde(default)]
    bounty: String,
    #[serde(default, alias = "editingId")]
    editing_id: Option<String>,
}

/// Path segment: series id (e.g. /api/series/{id})
#[derive(Deserialize)]
struct SeriesPath {
    id: String,
}

/// Path segment: player id in the current series (e.g. /api/players/{id})
#[derive(Deserialize)]
struct PlayerPath {
    id: String,
}

/// Validation errors are the caller's fault; storage errors are ours.
fn error_response(e: TrackerError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TrackerError::InvalidInput(_) => HttpResponse::BadRequest().json(body),
        TrackerError::SeriesNotFound(_) => HttpResponse::NotFound().json(body),
        TrackerError::NoSeriesSelected => HttpResponse::Conflict().json(body),
        TrackerError::Storage(_) => HttpResponse::InternalServerError().json(body),
    }
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "poker-series-tracker",
    })
}

/// All series in order, plus the current series id.
#[get("/api/series")]
async fn api_list_series(state: AppState) -> HttpResponse {
    let Ok(t) = state.read() else {
        return lock_error();
    };
    HttpResponse::Ok().json(SeriesListResponse {
        series: t.list_series(),
        current: t.current_series().map(|s| s.id.as_str()),
    })
}

/// Create a series; it becomes current.
#[post("/api/series")]
async fn api_create_series(state: AppState, body: Json<SeriesInput>) -> HttpResponse {
    let Ok(mut t) = state.write() else {
        return lock_error();
    };
    match t.create_series(&body) {
        Ok(series) => HttpResponse::Ok().json(series),
        Err(e) => error_response(e),
    }
}

/// Rename a series, toggle its bounty flag, or change its image.
#[put("/api/series/{id}")]
async fn api_update_series(
    state: AppState,
    path: Path<SeriesPath>,
    body: Json<SeriesInput>,
) -> HttpResponse {
    let Ok(mut t) = state.write() else {
        return lock_error();
    };
    match t.update_series(&path.id, &body) {
        Ok(series) => HttpResponse::Ok().json(series),
        Err(e) => error_response(e),
    }
}

/// Switch the current series (404 if unknown).
#[post("/api/series/{id}/select")]
async fn api_select_series(state: AppState, path: Path<SeriesPath>) -> HttpResponse {
    let Ok(mut t) = state.write() else {
        return lock_error();
    };
    if !t.select_series(&path.id) {
        return error_response(TrackerError::SeriesNotFound(path.id.clone()));
    }
    HttpResponse::Ok().json(t.current_series())
}

/// Players of the current series in stored order.
#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    let Ok(t) = state.read() else {
        return lock_error();
    };
    HttpResponse::Ok().json(t.list_players())
}

/// Add a player or add stats to an existing one.
#[post("/api/players")]
async fn api_submit_player(state: AppState, body: Json<SubmitPlayerBody>) -> HttpResponse {
    let Ok(mut t) = state.write() else {
        return lock_error();
    };
    let submission = StatSubmission::parse(body.name.clone(), &body.points, &body.games, &body.bounty);
    match t.submit_player(&submission, body.editing_id.as_deref()) {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => error_response(e),
    }
}

/// Delete a player from the current series (no-op if unknown).
#[delete("/api/players/{id}")]
async fn api_delete_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let Ok(mut t) = state.write() else {
        return lock_error();
    };
    match t.delete_player(&path.id) {
        Ok(removed) => HttpResponse::Ok().json(serde_json::json!({ "removed": removed })),
        Err(e) => error_response(e),
    }
}

/// Ranked standings and totals for the current series.
#[get("/api/leaderboard")]
async fn api_leaderboard(state: AppState) -> HttpResponse {
    let Ok(t) = state.read() else {
        return lock_error();
    };
    HttpResponse::Ok().json(LeaderboardResponse {
        series: t.current_series(),
        standings: t.standings(),
        summary: t.summary(),
    })
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = env_or("HOST", "0.0.0.0");
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let store_path = env_or("POKER_STORE_PATH", "poker_store.json");
    let static_dir = env_or("STATIC_DIR", "static");

    let mut tracker = PokerTracker::new(FileStore::open(store_path));
    match tracker.init() {
        Ok(outcome) => log::info!("Store {} ready: {:?}", tracker.store().path().display(), outcome),
        Err(e) => log::error!("Startup migration could not be saved: {}", e),
    }
    if let Some(series) = tracker.current_series() {
        log::info!("Current series: '{}' ({})", series.name, series.id);
    }

    log::info!("Starting server at http://{}:{}", host, port);
    let state = Data::new(RwLock::new(tracker));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_list_series)
            .service(api_create_series)
            .service(api_update_series)
            .service(api_select_series)
            .service(api_list_players)
            .service(api_submit_player)
            .service(api_delete_player)
            .service(api_leaderboard)
            .service(Files::new("/", static_dir.as_str()).index_file("index.html"))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
