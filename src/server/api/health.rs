//! Liveness probe.
use actix_web::{HttpResponse, Responder};

/// Always `200 ok`. Does not touch the upstream.
#[expect(
    clippy::unused_async,
    reason = "Unused asyncs are the norm in Actix route definition files"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}
