//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::AppSettings;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use hirewatch_backend::Trace;
#[cfg(debug_assertions)]
use hirewatch_backend::doc::ApiDoc;
use hirewatch_backend::domain::companies::CompanyService;
use hirewatch_backend::inbound::http::companies::{
    create_company, destroy_company, list_companies, partial_update_company, retrieve_company,
    update_company,
};
use hirewatch_backend::inbound::http::health::{HealthState, live, ready};
use hirewatch_backend::inbound::http::state::HttpState;
use hirewatch_backend::outbound::persistence::DieselCompanyRepository;
use mockable::DefaultClock;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

/// Build the HTTP handler state based on configuration.
///
/// Uses the database-backed company service when a pool is available,
/// otherwise falls back to the fixture ports for tests.
fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            let service = Arc::new(CompanyService::new(
                Arc::new(DieselCompanyRepository::new(pool.clone())),
                Arc::new(DefaultClock),
            ));
            HttpState::new(service.clone(), service)
        }
        None => HttpState::default(),
    };
    web::Data::new(state.with_page_size(config.page_size))
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let companies = web::scope("/companies")
        .service(list_companies)
        .service(create_company)
        .service(retrieve_company)
        .service(update_company)
        .service(partial_update_company)
        .service(destroy_company);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(companies)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] containing binding, database, and pagination settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
