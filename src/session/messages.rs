use serde::{Deserialize, Serialize};

use crate::models::{GameCommand, GameState, GameSummary};

/// Messages sent from the player to the game
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    UpdateGuess { text: String },
    SubmitGuess,
    Skip,
    PlayAgain,
    Quit,
}

impl ClientMessage {
    /// Engine command for this message, or `None` for `Quit`
    pub fn command(self) -> Option<GameCommand> {
        match self {
            ClientMessage::UpdateGuess { text } => Some(GameCommand::UpdateGuess(text)),
            ClientMessage::SubmitGuess => Some(GameCommand::Submit),
            ClientMessage::Skip => Some(GameCommand::Skip),
            ClientMessage::PlayAgain => Some(GameCommand::Reset),
            ClientMessage::Quit => None,
        }
    }
}

/// Messages sent from the game to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    GameState {
        round_limit: usize,
        #[serde(flatten)]
        state: GameState,
    },
    GuessRejected {
        guess: String,
    },
    GameOver {
        #[serde(flatten)]
        summary: GameSummary,
    },
    Error {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_client_messages() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"update_guess","text":"apple"}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::UpdateGuess {
                text: "apple".to_string()
            }
        );

        let msg: ClientMessage = serde_json::from_str(r#"{"type":"submit_guess"}"#).unwrap();
        assert_eq!(msg.command(), Some(GameCommand::Submit));

        let msg: ClientMessage = serde_json::from_str(r#"{"type":"play_again"}"#).unwrap();
        assert_eq!(msg.command(), Some(GameCommand::Reset));

        let msg: ClientMessage = serde_json::from_str(r#"{"type":"quit"}"#).unwrap();
        assert_eq!(msg.command(), None);
    }

    #[test]
    fn test_unknown_message_is_rejected() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"cheat"}"#).is_err());
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"update_guess"}"#).is_err());
    }

    #[test]
    fn test_game_state_message_is_flat() {
        let msg = ServerMessage::GameState {
            round_limit: 10,
            state: GameState::new_game("ppeal".to_string()),
        };
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["type"], "game_state");
        assert_eq!(json["round_limit"], 10);
        assert_eq!(json["scrambled_word"], "ppeal");
        assert_eq!(json["word_index"], 1);
        assert_eq!(json["score"], 0);
    }
}
