mod common;

use guess_who_cards::*;

#[tokio::test]
async fn test_load_deck_sorted_with_labels() {
    let dir = tempfile::tempdir().unwrap();
    common::write_png(dir.path(), "zoe_park.png", 20, 30, [200, 40, 40]);
    common::write_png(dir.path(), "anna-smith.png", 30, 20, [40, 200, 40]);
    common::write_png(dir.path(), "bob.PNG", 10, 10, [40, 40, 200]);
    std::fs::write(dir.path().join("notes.txt"), "not an image").unwrap();

    let deck = load_deck(dir.path(), &CardOptions::default()).await.unwrap();
    let labels: Vec<&str> = deck.cards().iter().map(|card| card.label.as_str()).collect();
    assert_eq!(labels, ["Anna Smith", "Bob", "Zoe Park"]);
    assert_eq!(deck.get(0).unwrap().dimensions(), (30, 20));
}

#[tokio::test]
async fn test_load_deck_skips_undecodable_images() {
    let dir = tempfile::tempdir().unwrap();
    common::write_png(dir.path(), "good.png", 16, 16, [128, 128, 128]);
    std::fs::write(dir.path().join("broken.png"), b"definitely not a png").unwrap();

    let deck = load_deck(dir.path(), &CardOptions::default()).await.unwrap();
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.get(0).unwrap().label, "Good");
}

#[tokio::test]
async fn test_load_deck_truncates_to_max_cards() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..6 {
        common::write_png(dir.path(), &format!("card_{i}.png"), 8, 8, [10, 20, 30]);
    }

    let mut options = CardOptions::default();
    options.game.max_cards = 4;
    let deck = load_deck(dir.path(), &options).await.unwrap();
    assert_eq!(deck.len(), 4);
    assert_eq!(deck.get(3).unwrap().label, "Card 3");
}

#[tokio::test]
async fn test_load_deck_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_deck(dir.path(), &CardOptions::default()).await;
    assert!(matches!(result, Err(CardError::NoImages(_))));
}

#[tokio::test]
async fn test_load_deck_only_broken_images() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.jpg"), b"garbage").unwrap();

    let result = load_deck(dir.path(), &CardOptions::default()).await;
    assert!(matches!(result, Err(CardError::NoImages(_))));
}

#[test]
fn test_decode_card_reports_path() {
    let path = std::path::Path::new("faces/broken.png");
    let result = decode_card(path, b"nope", &CardOptions::default());
    match result {
        Err(CardError::InvalidImage { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected InvalidImage, got {:?}", other.map(|card| card.label)),
    }
}
