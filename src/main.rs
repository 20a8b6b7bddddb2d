//! Main entry point for the turtle adventure server.
//!
//! Serves the browser client and runs one game per WebSocket connection.

use actix_web::{web, App, HttpServer};
use log::info;

use crate::config::server::{BIND_ADDRESS, BIND_PORT};
use crate::config::session::SessionConfig;

pub mod config;
mod server;
mod game;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(SessionConfig::default()));

    info!("[Server] Listening on http://{}:{}", BIND_ADDRESS, BIND_PORT);

    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((BIND_ADDRESS, BIND_PORT))?
    .run()
    .await
}
