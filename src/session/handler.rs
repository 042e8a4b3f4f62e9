use anyhow::{Context, Result};
use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    game::WordGameEngine,
    models::{GameCommand, GamePhase},
    session::messages::{ClientMessage, ServerMessage},
};

/// Play one session over a line-oriented JSON stream.
///
/// Each input line is a [`ClientMessage`]; every handled message is answered
/// with the new snapshot. Runs until `quit` or end of input.
pub async fn run_session<G, R, W>(
    engine: &mut WordGameEngine<G>,
    reader: R,
    writer: &mut W,
) -> Result<()>
where
    G: Rng,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    tracing::info!("Player connected to session {}", engine.session_id());

    send(writer, &state_message(engine)).await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<ClientMessage>(line) {
            Ok(client_msg) => match handle_client_message(client_msg, engine) {
                Some(replies) => {
                    for reply in &replies {
                        send(writer, reply).await?;
                    }
                }
                None => {
                    tracing::info!("Player quit session {}", engine.session_id());
                    return Ok(());
                }
            },
            Err(e) => {
                tracing::error!("Failed to parse message: {}", e);
                let error_msg = ServerMessage::Error {
                    message: format!("Invalid message format: {}", e),
                };
                send(writer, &error_msg).await?;
            }
        }
    }

    tracing::info!("Input closed for session {}", engine.session_id());
    Ok(())
}

/// Apply one client message; `None` ends the session
fn handle_client_message<G: Rng>(
    msg: ClientMessage,
    engine: &mut WordGameEngine<G>,
) -> Option<Vec<ServerMessage>> {
    let command = msg.command()?;
    let was_over = engine.state().phase() == GamePhase::GameOver;
    let pending_guess = engine.state().user_guess.clone();
    let is_submit = command == GameCommand::Submit;

    let mut replies = Vec::new();
    match engine.apply(command) {
        Ok(state) => {
            if is_submit && !was_over && state.guess_was_wrong {
                replies.push(ServerMessage::GuessRejected {
                    guess: pending_guess,
                });
            }
            replies.push(state_message(engine));
            if !was_over && state.phase() == GamePhase::GameOver {
                if let Some(summary) = engine.summary() {
                    replies.push(ServerMessage::GameOver { summary });
                }
            }
        }
        Err(e) => {
            tracing::error!("Error handling message: {}", e);
            replies.push(ServerMessage::Error {
                message: e.to_string(),
            });
            replies.push(state_message(engine));
        }
    }

    Some(replies)
}

fn state_message<G: Rng>(engine: &WordGameEngine<G>) -> ServerMessage {
    ServerMessage::GameState {
        round_limit: engine.rules().round_limit,
        state: engine.state().clone(),
    }
}

async fn send<W: AsyncWrite + Unpin>(writer: &mut W, msg: &ServerMessage) -> Result<()> {
    let mut json = serde_json::to_string(msg).context("Failed to serialize message")?;
    json.push('\n');
    writer
        .write_all(json.as_bytes())
        .await
        .context("Failed to write message")?;
    writer.flush().await.context("Failed to flush output")?;
    Ok(())
}
