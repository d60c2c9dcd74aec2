use std::io::Write;

use wordcraft_core::{AddOutcome, add_flashcard};

use super::text_input::DisplayResult;
use crate::state::AppState;

pub fn handle_card_creation<W: Write>(
    state: &mut AppState,
    word: &str,
    result: &DisplayResult,
    out: &mut W,
) -> anyhow::Result<AddOutcome> {
    let outcome = add_flashcard(
        &mut state.store,
        word,
        &result.definition,
        &result.forms.singular,
        &result.forms.plural,
    )?;

    match outcome {
        AddOutcome::Added => {
            writeln!(out, "Kata {word} berhasil ditambahkan ke Flashcards!")?;
        }
        AddOutcome::AlreadyExists => {
            writeln!(out, "Kata {word} sudah ada di Flashcards.")?;
        }
    }

    Ok(outcome)
}
