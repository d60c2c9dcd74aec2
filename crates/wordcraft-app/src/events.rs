use std::io::Write;

use crate::state::AppState;

pub mod create_card;
pub mod show_cards;
pub mod text_input;

use create_card::handle_card_creation;
use show_cards::handle_show_cards;
use text_input::handle_text_input;

/// One user action from the command line
#[derive(Debug, Clone)]
pub enum AppEvent {
    Search { word: String, add: bool },
    ShowCards,
}

pub async fn handle_events<W: Write>(
    state: &mut AppState,
    event: AppEvent,
    out: &mut W,
) -> anyhow::Result<()> {
    tracing::debug!("Handling {:?}", event);
    match event {
        AppEvent::Search { word, add } => {
            let found = handle_text_input(state, &word, out).await?;

            if add {
                match found {
                    Some(result) => {
                        handle_card_creation(state, word.trim(), &result, out)?;
                    }
                    None => tracing::debug!("Nothing to save for '{}'", word),
                }
            }
        }
        AppEvent::ShowCards => {
            handle_show_cards(state, out)?;
        }
    }

    Ok(())
}
