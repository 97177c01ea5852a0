//! Binary entry point: config, logging, and the HTTP listener.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_subscriber::EnvFilter;

use backend::api::{AppPorts, AppState};
use backend::api::health::Readiness;
use backend::middleware::BearerAuth;
use backend::outbound::{BcryptHasher, JwtTokens};
use backend::server::{ServerConfig, configure_api, json_config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;
    let tokens = Arc::new(JwtTokens::new(&config.jwt_secret));
    let state = web::Data::new(AppState::new(AppPorts::in_memory(
        tokens.clone(),
        Arc::new(BcryptHasher::default()),
        config.token_ttl_secs,
    )));
    let readiness = web::Data::new(Readiness::default());

    tracing::info!(bind_addr = %config.bind_addr, "starting server");
    let server = HttpServer::new({
        let state = state.clone();
        let readiness = readiness.clone();
        let tokens = tokens.clone();
        move || {
            App::new()
                .wrap(BearerAuth::new(tokens.clone()))
                .app_data(state.clone())
                .app_data(readiness.clone())
                .app_data(json_config())
                .configure(configure_api)
        }
    })
    .bind(&config.bind_addr)?
    .run();

    readiness.mark_ready();
    server.await
}
