mod template;

pub use template::CardTemplate;

use wordcraft_types::Flashcard;

/// Cards sharing one part-of-speech label
#[derive(Debug)]
pub struct CardGroup<'a> {
    pub label: &'a str,
    pub cards: Vec<&'a Flashcard>,
}

/// Group cards by their localized label, groups appear in first-seen order
pub fn group_by_label(cards: &[Flashcard]) -> Vec<CardGroup<'_>> {
    let mut groups: Vec<CardGroup<'_>> = Vec::new();

    for card in cards {
        match groups
            .iter()
            .position(|group| group.label == card.part_of_speech)
        {
            Some(idx) => groups[idx].cards.push(card),
            None => groups.push(CardGroup {
                label: &card.part_of_speech,
                cards: vec![card],
            }),
        }
    }

    groups
}

/// Render every group with a `label (n kata)` heading
pub fn render_groups(groups: &[CardGroup<'_>], template: &CardTemplate) -> String {
    let mut out = Vec::new();

    for group in groups {
        out.push(format!("▶ {} ({} kata)", group.label, group.cards.len()));
        for card in &group.cards {
            out.push(template.render(card));
            out.push("---".to_string());
        }
    }

    out.join("\n")
}
