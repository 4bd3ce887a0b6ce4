//! Stateless bracket API: POST a roster, get the generated match list back as JSON.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080).

use actix_web::{
    get, post,
    web::{self, Json},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use elimination_bracket::{
    generate_bracket, render_bracket, sequential_ids, uuid_ids, BracketMatch, BracketSummary,
    GeneratorOptions, ValidationError,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBracketBody {
    #[serde(flatten)]
    options: GeneratorOptions,
    /// Sequential ids (`{prefix}1`, `{prefix}2`, ...) instead of random UUIDs.
    #[serde(default)]
    id_prefix: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBracketResponse {
    event_id: String,
    generated_at: DateTime<Utc>,
    summary: BracketSummary,
    matches: Vec<BracketMatch>,
}

fn generate(body: &GenerateBracketBody) -> Result<Vec<BracketMatch>, ValidationError> {
    match &body.id_prefix {
        Some(prefix) => generate_bracket(&body.options, sequential_ids(prefix.as_str())),
        None => generate_bracket(&body.options, uuid_ids()),
    }
}

fn validation_error(e: ValidationError) -> HttpResponse {
    log::warn!("rejected bracket request: {}", e);
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "bracket-generator",
    })
}

/// Generate a bracket and return it with a summary.
#[post("/api/brackets")]
async fn api_generate_bracket(body: Json<GenerateBracketBody>) -> HttpResponse {
    match generate(&body) {
        Ok(matches) => {
            let summary = BracketSummary::new(body.options.participants.len(), &matches);
            HttpResponse::Ok().json(GenerateBracketResponse {
                event_id: body.options.event_id.clone(),
                generated_at: Utc::now(),
                summary,
                matches,
            })
        }
        Err(e) => validation_error(e),
    }
}

/// Same input as `/api/brackets`, rendered as plain text.
#[post("/api/brackets/text")]
async fn api_generate_bracket_text(body: Json<GenerateBracketBody>) -> HttpResponse {
    match generate(&body) {
        Ok(matches) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(render_bracket(&matches)),
        Err(e) => validation_error(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(|| {
        App::new()
            .app_data(web::JsonConfig::default().limit(1 << 20))
            .service(api_health)
            .service(api_generate_bracket)
            .service(api_generate_bracket_text)
    })
    .bind(bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};

    #[actix_web::test]
    async fn health_reports_ok() {
        let app = test::init_service(App::new().service(api_health)).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["ok"], true);
    }

    #[actix_web::test]
    async fn generates_eight_player_bracket() {
        let app = test::init_service(App::new().service(api_generate_bracket)).await;
        let participants: Vec<_> = (1..=8)
            .map(|i| serde_json::json!({ "registrationId": format!("p{i}"), "seed": i }))
            .collect();
        let req = test::TestRequest::post()
            .uri("/api/brackets")
            .set_json(serde_json::json!({
                "eventId": "event-1",
                "participants": participants,
                "idPrefix": "m",
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["summary"]["winnersMatches"], 7);
        assert_eq!(body["summary"]["losersMatches"], 5);
        assert_eq!(body["matches"][0]["id"], "m1");
        assert_eq!(body["matches"][0]["registration1Id"], "p1");
        assert_eq!(body["matches"][0]["registration2Id"], "p8");
        assert_eq!(body["matches"][0]["winnerTo"], "m5");
        assert_eq!(body["matches"][0]["winnerToSlot"], 1);
        assert_eq!(body["matches"][0]["bracketType"], "winners");
    }

    #[actix_web::test]
    async fn invalid_options_are_bad_request() {
        let app = test::init_service(App::new().service(api_generate_bracket)).await;
        let req = test::TestRequest::post()
            .uri("/api/brackets")
            .set_json(serde_json::json!({
                "eventId": "event-1",
                "participants": [{ "registrationId": "p1", "seed": 1 }],
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "At least 2 participants required");
    }
}
