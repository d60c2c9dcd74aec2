use std::io::Write;

use wordcraft_cards::{CardTemplate, group_by_label, render_groups};

use crate::state::AppState;

pub fn handle_show_cards<W: Write>(state: &AppState, out: &mut W) -> anyhow::Result<()> {
    let cards = state.store.flashcards();

    if cards.is_empty() {
        writeln!(out, "Belum ada kata dalam Flashcards.")?;
        return Ok(());
    }

    let groups = group_by_label(cards);
    tracing::debug!("{} flashcards in {} groups", cards.len(), groups.len());

    writeln!(out, "{}", render_groups(&groups, &CardTemplate::default()))?;
    Ok(())
}
