use std::io::Write;

use wordcraft_lang_english::WordForms;
use wordcraft_types::{Definition, MAX_SYNONYMS};

use crate::state::AppState;

/// The definition shown for a search, with the forms that go on a flashcard
#[derive(Debug, Clone)]
pub struct DisplayResult {
    pub definition: Definition,
    pub forms: WordForms,
}

pub async fn handle_text_input<W: Write>(
    state: &mut AppState,
    word: &str,
    out: &mut W,
) -> anyhow::Result<Option<DisplayResult>> {
    let word = word.trim();
    if word.is_empty() {
        anyhow::bail!("Masukkan kata Bahasa Inggris");
    }

    let lookup = state.resolver.resolve(word, &mut state.store).await?;
    tracing::debug!("Lookup for '{}' fresh: {}", word, lookup.is_fresh());

    let Some(item) = lookup.primary() else {
        writeln!(out, "Definisi tidak ditemukan. Coba ketik kata lain.")?;
        return Ok(None);
    };

    let forms = state.inflector.singular_plural(word, item.pos());

    writeln!(out, "Kelas Kata (POS): {}", item.part_of_speech)?;
    writeln!(out, "Singular (EN): {}", forms.singular)?;
    writeln!(out, "Plural (EN): {}", forms.plural)?;
    if item.synonyms.is_empty() {
        writeln!(out, "Sinonim: (tidak tersedia)")?;
    } else {
        let synonyms: Vec<&str> = item
            .synonyms
            .iter()
            .take(MAX_SYNONYMS)
            .map(String::as_str)
            .collect();
        writeln!(out, "Sinonim: {}", synonyms.join(", "))?;
    }

    writeln!(out, "{}: {}", item.part_of_speech, item.definition)?;
    if item.has_example() {
        writeln!(out, "Contoh (EN): {}", item.example_en)?;
        writeln!(out, "Contoh (ID): {}", item.example_id)?;
    }

    Ok(Some(DisplayResult {
        definition: item.clone(),
        forms,
    }))
}
