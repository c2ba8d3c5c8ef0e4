//! Terminal game loop.

use super::gemini_client;
use std::io::Write;
use tides_core::TIDES_GAME_DESCRIPTION;
use tides_interface::CompletionDriver;
use tides_narrative::{
    LoopKeeper, PlayerCommand, SessionController, Settlement, TidesConfig, Transcript,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

const DIVIDER: &str = "============================================================";
const GOODBYE: &str = "The tide recedes, and the echoes grow quiet. Goodbye.";
const QUIT: &str = "You set your tools down and let the tide carry the memories away.";
const STUCK_HINT: &str = "(If you feel stuck, describe what you want to do or type '/restart'.)";
const NEW_LOOP: &str = "--- The current loop fractures. A NEW LOOP begins... ---";

/// Play in the terminal until the player quits or input ends.
pub async fn play(config: TidesConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let client = gemini_client(&config)?;
    client.check_ready()?;
    let controller = SessionController::from_config(client, &config);

    println!("{}", DIVIDER);
    println!("Tides of Remembrance - Text Adventure");
    println!("{}", TIDES_GAME_DESCRIPTION);
    println!("Type your actions, or '/quit' to exit, '/restart' for a new loop.\n");

    let mut keeper = LoopKeeper::new();
    let session_id = uuid::Uuid::new_v4().to_string();
    debug!(session_id = %session_id, "Starting terminal session");
    let mut transcript = Transcript::new().with_session_id(session_id);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if let Some(prompt) = keeper.opening() {
            if !take_turn(&controller, &mut transcript, prompt).await {
                keeper.reopen();
                println!("(Press Enter to try waking again, or type '/quit'.)");
            }
        }

        println!("{}", DIVIDER);
        print!("Your action> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!("\n{}\n", GOODBYE);
            break;
        };

        match PlayerCommand::parse(&line) {
            PlayerCommand::Quit => {
                println!("\n{}\n", QUIT);
                break;
            }
            PlayerCommand::Restart => {
                println!("\n{}\n", NEW_LOOP);
                transcript.reset();
                keeper.restart();
            }
            // Any other input retries a loop whose opening failed.
            _ if !keeper.is_started() => continue,
            PlayerCommand::Blank => println!("{}", STUCK_HINT),
            PlayerCommand::Action(action) => {
                take_turn(&controller, &mut transcript, &action).await;
            }
        }
    }

    Ok(())
}

/// Run one turn and print its outcome. Returns whether the turn was confirmed.
async fn take_turn<D: CompletionDriver>(
    controller: &SessionController<D>,
    transcript: &mut Transcript,
    input: &str,
) -> bool {
    let pending = transcript.begin(input);
    let result = controller.take_turn(pending.request()).await;

    match pending.settle(result) {
        Settlement::Confirmed { reply, .. } => {
            println!("\n{}\n", reply.trim_end());
            true
        }
        Settlement::RolledBack { error, .. } => {
            debug!(error = %error, "Turn rolled back");
            println!("\nThe echoes fall silent: {}", error.public_message());
            println!("Nothing was lost. Try that again.\n");
            false
        }
    }
}
