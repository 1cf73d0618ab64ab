//! Serve rendered specification pages.
#![allow(clippy::module_name_repetitions)]
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpServer};

use std::io;

use actix_http::body::MessageBody;
use actix_service::ServiceFactory;
use tracing_actix_web::TracingLogger;

use super::api::routes;
use super::api::state::App as AppState;
use super::tracing::SpecviewRootSpanBuilder;

/// Serve the specification previewer on `bind`:`port`.
///
/// # Errors
/// Errors if the listener can't be bound.
#[actix_web::main]
pub async fn serve(state: AppState, bind: String, port: u16) -> io::Result<()> {
    let message = "Running Specview on";
    tracing::info!(
        theme = ?state.page.theme,
        cache_control = %state.page.cache_control,
        "{message} http://{bind}:{port}."
    );

    HttpServer::new(move || init_app(&state))
        .bind((bind.as_str(), port))?
        .run()
        .await
}

/// Initialize the application and all possible routing at start-up time.
///
/// # Arguments
/// * `state` - The application state
pub fn init_app(
    state: &AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
> {
    let app = App::new().wrap(TracingLogger::<SpecviewRootSpanBuilder>::new());
    routes::register_app(app, state)
}
