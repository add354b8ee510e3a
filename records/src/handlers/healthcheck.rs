use actix_web::{get, HttpResponse};
use chrono::Utc;
use serde_json::json;

#[get("/api/healthcheck")]
pub async fn healthcheck() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now(),
    }))
}
