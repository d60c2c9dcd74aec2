use wordcraft_types::PartOfSpeech;

/// Singular -> plural pairs that no suffix rule covers
const IRREGULAR: &[(&str, &str)] = &[
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("person", "people"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("ox", "oxen"),
    ("die", "dice"),
    ("cactus", "cacti"),
    ("focus", "foci"),
    ("fungus", "fungi"),
    ("nucleus", "nuclei"),
    ("radius", "radii"),
    ("stimulus", "stimuli"),
    ("analysis", "analyses"),
    ("crisis", "crises"),
    ("thesis", "theses"),
    ("phenomenon", "phenomena"),
    ("criterion", "criteria"),
    ("datum", "data"),
];

/// Same form in singular and plural
const UNINFLECTED: &[&str] = &[
    "sheep", "fish", "deer", "moose", "series", "species", "aircraft", "salmon", "trout",
    "bison", "swine", "news", "information", "equipment", "rice", "money", "advice",
];

/// Words ending in -s that are not plural nouns
const NOT_PLURAL: &[&str] = &[
    "is", "was", "has", "does", "this", "its", "his", "yes", "us", "always", "perhaps",
    "across", "less", "thus", "plus", "gas", "bias", "chaos", "lens", "atlas", "canvas",
];

/// -f/-fe singulars that take -ves
const VES: &[(&str, &str)] = &[
    ("knife", "knives"),
    ("wife", "wives"),
    ("life", "lives"),
    ("leaf", "leaves"),
    ("loaf", "loaves"),
    ("wolf", "wolves"),
    ("half", "halves"),
    ("calf", "calves"),
    ("shelf", "shelves"),
    ("self", "selves"),
    ("thief", "thieves"),
    ("elf", "elves"),
    ("sheaf", "sheaves"),
];

/// -o singulars that take -es
const OES: &[&str] = &["potato", "tomato", "hero", "echo", "veto", "torpedo", "embargo"];

/// -man words that are not compounds of "man"
const NOT_MAN_COMPOUND: &[&str] = &["human", "german", "roman", "shaman", "talisman", "caiman"];

const SIBILANT_ES: &[&str] = &["ches", "shes", "sses", "xes", "zes"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordForms {
    pub singular: String,
    pub plural: String,
}

/// Rule-based English noun inflection
pub struct EnglishInflector;

impl EnglishInflector {
    pub fn new() -> Self {
        Self
    }

    /// Singular and plural display forms for a looked-up word.
    ///
    /// If a singular can be derived the word is taken as the plural, otherwise
    /// the word is the singular and its plural is derived. Words that are not
    /// nouns go through the same heuristic, so the result can be meaningless
    /// for them, and invariant nouns come back with identical forms.
    pub fn singular_plural(&self, word: &str, pos: PartOfSpeech) -> WordForms {
        let word = word.trim().to_lowercase();

        if pos != PartOfSpeech::Noun {
            tracing::trace!("Applying noun inflection to {} '{}'", pos.as_str(), word);
        }

        match self.singular_noun(&word) {
            Some(singular) => WordForms {
                singular,
                plural: word,
            },
            None => WordForms {
                plural: self.plural(&word),
                singular: word,
            },
        }
    }

    /// Singular form of a plural noun, `None` when the word already looks singular
    pub fn singular_noun(&self, word: &str) -> Option<String> {
        let word = word.trim().to_lowercase();

        if word.is_empty() || NOT_PLURAL.contains(&word.as_str()) {
            return None;
        }

        if UNINFLECTED.contains(&word.as_str()) {
            return Some(word);
        }

        if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == word) {
            return Some(singular.to_string());
        }

        if IRREGULAR.iter().any(|(singular, _)| *singular == word) {
            return None;
        }

        if let Some(stem) = word.strip_suffix("men") {
            let singular = format!("{stem}man");
            if !stem.is_empty() && !NOT_MAN_COMPOUND.contains(&singular.as_str()) {
                return Some(singular);
            }
        }

        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return None;
        }

        if let Some((singular, _)) = VES.iter().find(|(_, plural)| *plural == word) {
            return Some(singular.to_string());
        }

        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ies") {
                return Some(format!("{stem}y"));
            }
        }

        if SIBILANT_ES.iter().any(|suffix| word.ends_with(suffix)) {
            return Some(word[..word.len() - 2].to_string());
        }

        if let Some(stem) = word.strip_suffix("es") {
            if OES.contains(&stem) {
                return Some(stem.to_string());
            }
        }

        word.strip_suffix('s').map(str::to_string)
    }

    /// Plural form, treating `word` as a singular noun
    pub fn plural(&self, word: &str) -> String {
        let word = word.trim().to_lowercase();

        if word.is_empty() || UNINFLECTED.contains(&word.as_str()) {
            return word;
        }

        if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
            return plural.to_string();
        }

        if let Some((_, plural)) = VES.iter().find(|(singular, _)| *singular == word) {
            return plural.to_string();
        }

        if let Some(stem) = word.strip_suffix("man") {
            if !stem.is_empty() && !NOT_MAN_COMPOUND.contains(&word.as_str()) {
                return format!("{stem}men");
            }
        }

        if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| word.ends_with(suffix)) {
            return format!("{word}es");
        }

        if let Some(stem) = word.strip_suffix('y') {
            if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
                return format!("{stem}ies");
            }
        }

        if OES.contains(&word.as_str()) {
            return format!("{word}es");
        }

        format!("{word}s")
    }
}

impl Default for EnglishInflector {
    fn default() -> Self {
        Self::new()
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
