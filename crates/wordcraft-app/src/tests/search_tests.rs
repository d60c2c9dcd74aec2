use wordcraft_core::Store;

use super::fakes::{FakeDictionary, cats, handsome, test_state};
use crate::events::{AppEvent, handle_events};

async fn run(state: &mut crate::state::AppState, word: &str, add: bool) -> String {
    let mut out = Vec::new();
    handle_events(
        state,
        AppEvent::Search {
            word: word.to_string(),
            add,
        },
        &mut out,
    )
    .await
    .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn search_prints_primary_definition() {
    let dir = tempfile::tempdir().unwrap();
    let dictionary = FakeDictionary::new(&[("handsome", handsome())]);
    let mut state = test_state(&dir, dictionary.clone());

    let output = run(&mut state, "Handsome", false).await;

    assert!(output.contains("Kelas Kata (POS): Kata Sifat"));
    assert!(output.contains("Singular (EN): handsome"));
    assert!(output.contains("Plural (EN): handsomes"));
    assert!(output.contains("Sinonim: attractive, good-looking, comely, dishy, fair\n"));
    assert!(output.contains("Kata Sifat: ID:good-looking"));
    assert!(output.contains("Contoh (EN): a handsome man"));
    assert!(output.contains("Contoh (ID): ID:a handsome man"));
    assert!(state.store.cached("handsome").is_some());
    assert!(state.store.flashcards().is_empty());
}

#[tokio::test]
async fn repeated_search_uses_cache() {
    let dir = tempfile::tempdir().unwrap();
    let dictionary = FakeDictionary::new(&[("handsome", handsome())]);
    let mut state = test_state(&dir, dictionary.clone());

    let first = run(&mut state, "handsome", false).await;
    let second = run(&mut state, "HANDSOME", false).await;

    assert_eq!(first, second);
    assert_eq!(dictionary.calls(), 1);
}

#[tokio::test]
async fn unknown_word_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = test_state(&dir, FakeDictionary::new(&[]));

    let output = run(&mut state, "qwzx", true).await;

    assert_eq!(output, "Definisi tidak ditemukan. Coba ketik kata lain.\n");
    assert!(state.store.flashcards().is_empty());
}

#[tokio::test]
async fn add_saves_card_once() {
    let dir = tempfile::tempdir().unwrap();
    let dictionary = FakeDictionary::new(&[("cats", cats())]);
    let mut state = test_state(&dir, dictionary);

    let first = run(&mut state, "Cats", true).await;
    let second = run(&mut state, "cats", true).await;

    assert!(first.contains("Kata Cats berhasil ditambahkan ke Flashcards!"));
    assert!(second.contains("Kata cats sudah ada di Flashcards."));

    let reloaded = Store::load(dir.path().join("data_store.json")).unwrap();
    let cards = reloaded.flashcards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].word, "Cats");
    assert_eq!(cards[0].part_of_speech, "Kata Benda");
    assert_eq!(cards[0].singular, "cat");
    assert_eq!(cards[0].plural, "cats");
    assert_eq!(cards[0].definition, "ID:small domesticated felines");
}

#[tokio::test]
async fn blank_word_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = test_state(&dir, FakeDictionary::new(&[]));

    let mut out = Vec::new();
    let result = handle_events(
        &mut state,
        AppEvent::Search {
            word: "   ".to_string(),
            add: false,
        },
        &mut out,
    )
    .await;

    assert!(result.is_err());
    assert!(out.is_empty());
}
