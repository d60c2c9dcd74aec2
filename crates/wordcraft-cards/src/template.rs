use serde::{Deserialize, Serialize};
use wordcraft_types::Flashcard;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardTemplate {
    pub header_template: String,
    pub body_template: String,
    /// Appended to the body only when the card has an example sentence
    pub example_template: String,
    /// Appended to the body only when the card has synonyms
    pub synonyms_template: String,
}

impl CardTemplate {
    /// Default plain-text layout for browsing saved cards
    pub fn default_text() -> Self {
        Self {
            header_template: "### {word}".to_string(),
            body_template: "- Kelas Kata: {pos}\n- Singular: {singular} | Plural: {plural}\n- Definisi: {definition}"
                .to_string(),
            example_template: "\n- EN: {example_en}\n- ID: {example_id}".to_string(),
            synonyms_template: "\n- Sinonim: {synonyms}".to_string(),
        }
    }

    /// Create custom template
    pub fn new(header: String, body: String, example: String, synonyms: String) -> Self {
        Self {
            header_template: header,
            body_template: body,
            example_template: example,
            synonyms_template: synonyms,
        }
    }

    pub fn format_header(&self, card: &Flashcard) -> String {
        fill(&self.header_template, card)
    }

    pub fn format_body(&self, card: &Flashcard) -> String {
        let mut body = fill(&self.body_template, card);

        if card.has_example() {
            body.push_str(&fill(&self.example_template, card));
        }
        if !card.synonyms.is_empty() {
            body.push_str(&fill(&self.synonyms_template, card));
        }

        body
    }

    pub fn render(&self, card: &Flashcard) -> String {
        format!("{}\n{}", self.format_header(card), self.format_body(card))
    }
}

impl Default for CardTemplate {
    fn default() -> Self {
        Self::default_text()
    }
}

fn fill(template: &str, card: &Flashcard) -> String {
    template
        .replace("{word}", &card.word)
        .replace("{pos}", &card.part_of_speech)
        .replace("{singular}", &card.singular)
        .replace("{plural}", &card.plural)
        .replace("{definition}", &card.definition)
        .replace("{example_en}", &card.example_en)
        .replace("{example_id}", &card.example_id)
        .replace("{synonyms}", &card.synonyms.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(example: bool, synonyms: &[&str]) -> Flashcard {
        Flashcard {
            word: "cat".to_string(),
            part_of_speech: "Kata Benda".to_string(),
            definition: "kucing".to_string(),
            example_en: if example { "The cat sleeps".to_string() } else { String::new() },
            example_id: if example { "Kucing itu tidur".to_string() } else { String::new() },
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            singular: "cat".to_string(),
            plural: "cats".to_string(),
        }
    }

    #[test]
    fn renders_all_sections() {
        let text = CardTemplate::default().render(&card(true, &["feline", "kitty"]));

        assert_eq!(
            text,
            "### cat\n- Kelas Kata: Kata Benda\n- Singular: cat | Plural: cats\n- Definisi: kucing\n- EN: The cat sleeps\n- ID: Kucing itu tidur\n- Sinonim: feline, kitty"
        );
    }

    #[test]
    fn omits_missing_example_and_synonyms() {
        let body = CardTemplate::default().format_body(&card(false, &[]));

        assert!(!body.contains("EN:"));
        assert!(!body.contains("Sinonim"));
        assert!(body.ends_with("- Definisi: kucing"));
    }

    #[test]
    fn custom_template() {
        let template = CardTemplate::new(
            "{word} ({pos})".to_string(),
            "{definition}".to_string(),
            String::new(),
            String::new(),
        );
        assert_eq!(template.render(&card(true, &["feline"])), "cat (Kata Benda)\nkucing");
    }
}
