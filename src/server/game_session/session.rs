/// WebSocket play session.
///
/// One actor per connection. It owns the game, pumps it on a fixed interval and
/// forwards the draw commands recorded since the previous pump as a `Frame`.
/// The browser only reports clicks and its canvas size.
use std::time::Duration;

use actix::prelude::*;
use actix_web::{http::StatusCode, web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, info, trace, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use uuid::Uuid;

use super::messages::{ClientAction, ServerMessage};
use crate::config::server::PUMP_INTERVAL_MS;
use crate::config::session::{SessionConfig, SessionParams};
use crate::game::canvas::RecordingCanvas;
use crate::game::game_loop::Game;
use crate::game::scheduler::MonotonicClock;
use crate::game::types::Bounds;
use crate::server::state::AppState;
use crate::server::ws_error::{http_error_response, ws_error_message};

pub struct PlaySession {
    pub session_id: Uuid,
    config: SessionConfig,
    game: Game<MonotonicClock>,
    canvas: RecordingCanvas,
    pump_handle: Option<SpawnHandle>,
    game_over_sent: bool,
}

impl PlaySession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            game: Game::new(&config, MonotonicClock::new(), StdRng::from_os_rng()),
            canvas: RecordingCanvas::new(config.bounds()),
            config,
            pump_handle: None,
            game_over_sent: false,
        }
    }

    /// Serialize and send a message. On failure the connection is closed and
    /// false is returned.
    fn send(&self, ctx: &mut ws::WebsocketContext<Self>, message: &ServerMessage) -> bool {
        match serde_json::to_string(message) {
            Ok(text) => {
                ctx.text(text);
                true
            }
            Err(e) => {
                warn!("[PlaySession] {} failed to serialize message: {}", self.session_id, e);
                ctx.text(ws_error_message("INTERNAL_ERROR", "Internal server error", None));
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
                false
            }
        }
    }

    /// Run the due game tasks and stream what changed.
    fn pump(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        let report = self.game.pump(&mut self.canvas);
        if report.spawned > 0 {
            debug!("[PlaySession] {} now has {} enemies", self.session_id, self.game.enemy_count());
        }

        let commands = self.canvas.take_commands();
        if !commands.is_empty() {
            trace!("[PlaySession] {} frame with {} commands", self.session_id, commands.len());
            if !self.send(ctx, &ServerMessage::frame(self.game.tick_count(), commands)) {
                return;
            }
        }

        if let Some(outcome) = self.game.outcome() {
            if !self.game_over_sent {
                self.game_over_sent = true;
                info!("[PlaySession] {} finished: {:?} after {} ticks", self.session_id, outcome, self.game.tick_count());
                if !self.send(ctx, &ServerMessage::game_over(outcome)) {
                    return;
                }
            }
        }

        if self.game.is_finished() {
            if let Some(handle) = self.pump_handle.take() {
                ctx.cancel_future(handle);
                debug!("[PlaySession] {} stopped pumping: nothing left to run", self.session_id);
            }
        }
    }

    /// Remove every element of the game and wrap the resulting commands in a
    /// last frame for the client.
    fn closing_frame(&mut self) -> Option<ServerMessage> {
        self.game.end_session(&mut self.canvas);
        let commands = self.canvas.take_commands();
        if commands.is_empty() {
            return None;
        }
        Some(ServerMessage::frame(self.game.tick_count(), commands))
    }

    fn handle_action(&mut self, action: ClientAction, ctx: &mut ws::WebsocketContext<Self>) {
        match action {
            ClientAction::Click { x, y } => {
                if !self.game.click(x, y) {
                    debug!("[PlaySession] {} click ignored: game over", self.session_id);
                }
            }
            ClientAction::Resize { width, height } => {
                if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
                    self.canvas.set_bounds(Bounds::new(width, height));
                } else {
                    warn!("[PlaySession] {} rejected resize to {}x{}", self.session_id, width, height);
                    ctx.text(ws_error_message(
                        "INVALID_ACTION",
                        "Canvas size must be positive",
                        Some(json!({ "width": width, "height": height })),
                    ));
                }
            }
            ClientAction::Ping => {}
        }
    }
}

impl Actor for PlaySession {
    type Context = ws::WebsocketContext<Self>;

    /// Greets the client, runs the first tick and starts the pump timer.
    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            "[PlaySession] {} started (level {}, {}x{})",
            self.session_id, self.config.level, self.config.screen_width, self.config.screen_height
        );
        let welcome = ServerMessage::Welcome {
            session_id: self.session_id,
            level: self.config.level,
            width: self.config.screen_width,
            height: self.config.screen_height,
        };
        if !self.send(ctx, &welcome) {
            return;
        }
        self.pump(ctx);
        self.pump_handle = Some(ctx.run_interval(Duration::from_millis(PUMP_INTERVAL_MS), |act, ctx| {
            act.pump(ctx);
        }));
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!("[PlaySession] {} closed after {} ticks", self.session_id, self.game.tick_count());
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for PlaySession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => match serde_json::from_str::<ClientAction>(&text) {
                Ok(action) => self.handle_action(action, ctx),
                Err(e) => {
                    warn!("[PlaySession] {} invalid client message: {}", self.session_id, e);
                    ctx.text(ws_error_message(
                        "INVALID_ACTION",
                        "Invalid client message",
                        Some(json!(e.to_string())),
                    ));
                }
            },
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                if let Some(frame) = self.closing_frame() {
                    self.send(ctx, &frame);
                }
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[PlaySession] {} protocol error: {}", self.session_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

/// WebSocket endpoint for a play session.
///
/// Query parameters: `level`, `width`, `height`, all optional. Missing values
/// fall back to the server defaults; invalid ones are rejected with a 400.
pub async fn ws_play(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let params = match web::Query::<SessionParams>::from_query(req.query_string()) {
        Ok(query) => query.into_inner(),
        Err(e) => {
            warn!("[PlaySession] Rejected query {:?}: {}", req.query_string(), e);
            return Ok(http_error_response(
                "INVALID_QUERY",
                "level, width and height must be numbers",
                Some(json!(e.to_string())),
                StatusCode::BAD_REQUEST,
            ));
        }
    };

    let config = match params.resolve(&data.defaults) {
        Ok(config) => config,
        Err(e) => {
            warn!("[PlaySession] Rejected session settings: {}", e);
            return Ok(http_error_response(e.code(), &e.to_string(), None, StatusCode::BAD_REQUEST));
        }
    };

    ws::start(PlaySession::new(config), &req, stream)
}
