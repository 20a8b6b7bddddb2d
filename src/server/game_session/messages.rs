use serde::{Serialize, Deserialize};
use serde_json::Value;
use uuid::Uuid;

use crate::game::canvas::DrawCommand;
use crate::game::types::Outcome;

/// Message client -> serveur
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", content = "data")]
pub enum ClientAction {
    /// Pointer click in canvas coordinates.
    Click { x: f64, y: f64 },
    /// The browser canvas changed size.
    Resize { width: f64, height: f64 },
    Ping,
}

// Message serveur -> client
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "action", content = "data")]
pub enum ServerMessage {
    Welcome {
        session_id: Uuid,
        level: i32,
        width: u32,
        height: u32,
    },
    /// Draw commands produced since the previous frame.
    Frame {
        tick: u64,
        commands: Vec<DrawCommand>,
    },
    GameOver {
        outcome: Outcome,
    },
    Error {
        code: String,
        message: String,
        context: Option<Value>,
    },
}

impl ServerMessage {
    pub fn frame(tick: u64, commands: Vec<DrawCommand>) -> Self {
        Self::Frame { tick, commands }
    }

    pub fn game_over(outcome: Outcome) -> Self {
        Self::GameOver { outcome }
    }

    pub fn error(code: &str, message: &str, context: Option<Value>) -> Self {
        Self::Error {
            code: code.to_string(),
            message: message.to_string(),
            context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Position;

    #[test]
    fn test_parse_click() {
        let action: ClientAction = serde_json::from_str(r#"{"action":"Click","data":{"x":120,"y":48.5}}"#).unwrap();
        assert_eq!(action, ClientAction::Click { x: 120.0, y: 48.5 });
    }

    #[test]
    fn test_parse_ping_without_data() {
        let action: ClientAction = serde_json::from_str(r#"{"action":"Ping"}"#).unwrap();
        assert_eq!(action, ClientAction::Ping);
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        assert!(serde_json::from_str::<ClientAction>(r#"{"action":"Teleport","data":{}}"#).is_err());
        assert!(serde_json::from_str::<ClientAction>(r#"{"action":"Click","data":{"x":"left"}}"#).is_err());
    }

    #[test]
    fn test_frame_envelope() {
        let message = ServerMessage::frame(4, vec![
            DrawCommand::Remove { id: 3 },
            DrawCommand::Draw {
                id: 5,
                shape: crate::game::canvas::Shape::Oval {
                    center: Position::new(1.0, 2.0),
                    size: 15.0,
                    fill: crate::game::types::Color::Blue,
                },
            },
        ]);
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["action"], "Frame");
        assert_eq!(json["data"]["tick"], 4);
        assert_eq!(json["data"]["commands"][0]["op"], "Remove");
        assert_eq!(json["data"]["commands"][1]["shape"]["fill"], "blue");
    }

    #[test]
    fn test_game_over_envelope() {
        let json = serde_json::to_value(ServerMessage::game_over(Outcome::Lost)).unwrap();
        assert_eq!(json, serde_json::json!({"action": "GameOver", "data": {"outcome": "Lost"}}));
    }
}
