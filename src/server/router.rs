//! HTTP and WebSocket routing configuration.
//!
//! `/` serves the browser client, `/ws/play` opens a play session.

use actix_web::{web, HttpResponse};
use crate::server::game_session::session::ws_play;

const INDEX_HTML: &str = include_str!("../../static/index.html");

async fn index() -> HttpResponse {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(INDEX_HTML)
}

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(index))
    )
    .service(
        web::resource("/ws/play")
            .to(ws_play)
    );
}
