//! API endpoint rendering the specification at a given ref.
//!
//! # Example
//! ```http
//! GET /api/refs?ref=go1.22.0
//! ```
//! fetches `doc/go_spec.html` at `go1.22.0` from the upstream repository and
//! responds with the page, or with an error status if any step fails.
use actix_web::http::header::{ContentType, CACHE_CONTROL};
use actix_web::{web, HttpRequest, HttpResponse};

use crate::server::headers::HTTP_X_SPEC_REF;
use crate::spec::{render::render, SpecError};
use request::RefsQuery;

use super::state::App as AppState;

/// Module that maps the HTTP query string to structs.
pub mod request;

/// Render the specification at the ref given in the `ref` query parameter.
///
/// # Errors
/// Any [`SpecError`]; the error is logged and turned into a response by Actix.
#[tracing::instrument(name = "Serving specification", skip(req, data))]
pub async fn refs(
    req: HttpRequest,
    data: web::Data<AppState>,
) -> Result<HttpResponse, SpecError> {
    let query = RefsQuery::parse(req.query_string());
    respond(&query, &data).await.inspect_err(|err| {
        if err.is_client_error() {
            tracing::debug!("Rejected request: {err}");
        } else {
            tracing::error!("Unable to render specification: {err}");
        }
    })
}

/// Fetch, render and wrap the page in a response.
async fn respond(query: &RefsQuery, data: &AppState) -> Result<HttpResponse, SpecError> {
    let reference = query.first().ok_or(SpecError::MissingRef)?;
    let content = data.upstream.fetch(reference).await?;
    let page = render(&content, data.page.theme)?;
    Ok(HttpResponse::Ok()
        .insert_header(ContentType::html())
        .insert_header((CACHE_CONTROL, data.page.cache_control.as_str()))
        .insert_header((HTTP_X_SPEC_REF, reference))
        .body(page))
}
