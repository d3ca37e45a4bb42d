use actix_web::{HttpResponse, Responder};
use tracing;

pub async fn health_check() -> impl Responder {
    tracing::debug!("Service is healthy!");
    HttpResponse::Ok()
}
