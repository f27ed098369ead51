//! JSON web server for the Swiss engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, LOG_FILTER (or RUST_LOG).

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use swiss_pairing::config::Config;
use swiss_pairing::{Competitor, MatchupId, TournamentError, TournamentId, TournamentService};

type AppState = Data<TournamentService>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CompetitorBody {
    name: String,
    rating: f64,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    competitors: Vec<CompetitorBody>,
    #[serde(default = "default_number_of_winners")]
    number_of_winners: u32,
}

fn default_number_of_winners() -> u32 {
    1
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: matchup id and outcome tag (e.g. /api/matchups/{id}/draw)
#[derive(Deserialize)]
struct MatchupResultPath {
    id: MatchupId,
    outcome: String,
}

/// 404 for unknown ids, 409 for state conflicts, 400 for everything else.
fn error_response(e: TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    if e.is_not_found() {
        HttpResponse::NotFound().json(body)
    } else if e.is_conflict() {
        log::warn!("rejected: {}", e);
        HttpResponse::Conflict().json(body)
    } else {
        HttpResponse::BadRequest().json(body)
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-pairing",
    })
}

/// Create a tournament from a roster. Rounds are started separately.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    let roster = body
        .competitors
        .into_iter()
        .map(|c| Competitor::new(c.name.trim(), c.rating))
        .collect();
    match state.create_tournament(roster, body.number_of_winners) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(e),
    }
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.tournament(path.id) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(e),
    }
}

#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.standings(path.id) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => error_response(e),
    }
}

/// Start the next round (409 while the current one is still being played).
#[post("/api/tournaments/{id}/rounds")]
async fn api_start_next_round(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.start_next_round(path.id) {
        Ok(round) => HttpResponse::Ok().json(round),
        Err(e) => error_response(e),
    }
}

/// Record a result: outcome is `first`, `second` or `draw`.
#[put("/api/matchups/{id}/{outcome}")]
async fn api_record_result(state: AppState, path: Path<MatchupResultPath>) -> HttpResponse {
    match state.record_result(path.id, &path.outcome) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => error_response(e),
    }
}

/// Final ratings and Buchholz factors, keyed by rank id.
#[post("/api/tournaments/{id}/finalize")]
async fn api_finalize(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.finalize(path.id) {
        Ok(results) => HttpResponse::Ok().json(results),
        Err(e) => error_response(e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::from_env();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.log_filter.as_str()));

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state: AppState = Data::new(TournamentService::in_memory());

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_standings)
            .service(api_start_next_round)
            .service(api_record_result)
            .service(api_finalize)
    })
    .bind(bind)?
    .run()
    .await
}
