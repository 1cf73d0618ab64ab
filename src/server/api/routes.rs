//! A central place to register App routes.
use actix_files::Files;
use actix_service::ServiceFactory;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    web, App, Error,
};

use super::state::App as AppState;
use super::{health::health, refs::refs};

/// Central place to register all the App routing.
///
/// API routes are registered first; static assets, when configured, are
/// registered last so they only catch what nothing else matched.
#[tracing::instrument(skip(app, state))]
pub fn register_app<
    U: MessageBody,
    V: ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<U>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
>(
    mut app: App<V>,
    state: &AppState,
) -> App<V> {
    app = app
        .app_data(web::Data::new(state.clone()))
        .service(web::resource("/api/refs").route(web::get().to(refs)))
        .service(web::resource("/_health").route(web::get().to(health)));

    if let Some(static_dir) = state.static_dir.as_ref() {
        tracing::debug!("Serving static assets from '{}'", static_dir.display());
        app = app.service(Files::new("/", static_dir).index_file("index.html"));
    }
    app
}
