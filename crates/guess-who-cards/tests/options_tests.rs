use guess_who_cards::*;

#[test]
fn test_default_options_are_valid() {
    let options = CardOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.grid().slots_per_page(), 25);
    assert_eq!(options.game.max_cards, 24);
    assert_eq!(options.name_label.font, "Helvetica-Bold");
}

#[test]
fn test_partial_yaml_keeps_other_defaults() {
    let yaml = "
game:
  sets: 1
card:
  columns: 4
  rows: 4
name_label:
  font: BodoniModa-Bold
  color: [0.2, 0.2, 0.2]
";
    let options = CardOptions::from_yaml(yaml).unwrap();
    let defaults = CardOptions::default();

    assert_eq!(options.game.sets, 1);
    assert_eq!(options.game.max_cards, defaults.game.max_cards);
    assert_eq!(options.card.columns, 4);
    assert_eq!(options.card.width, defaults.card.width);
    assert_eq!(options.name_label.font, "BodoniModa-Bold");
    assert_eq!(options.name_label.color, RgbColor::new(0.2, 0.2, 0.2));
    assert_eq!(options.card_back, defaults.card_back);
}

#[test]
fn test_empty_yaml_is_default() {
    assert_eq!(CardOptions::from_yaml("").unwrap(), CardOptions::default());
}

#[test]
fn test_malformed_yaml_is_error() {
    let result = CardOptions::from_yaml("game: [unclosed");
    assert!(matches!(result, Err(CardError::Yaml(_))));
}

#[tokio::test]
async fn test_save_and_load_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");

    let mut options = CardOptions::default();
    options.game.sets = 3;
    options.duplex.back_offset_x = 0.02;
    options.save(&path).await.unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.trim_start().starts_with('{'));

    let loaded = CardOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}

#[tokio::test]
async fn test_save_and_load_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guess_who_config.yaml");

    CardOptions::default().save(&path).await.unwrap();
    let loaded = CardOptions::load(&path).await.unwrap();
    assert_eq!(loaded, CardOptions::default());
}

#[tokio::test]
async fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = CardOptions::load(dir.path().join("missing.yaml")).await;
    assert!(matches!(result, Err(CardError::Io(_))));
}

#[test]
fn test_validation_errors() {
    let cases: Vec<(&str, fn(&mut CardOptions))> = vec![
        ("zero columns", |o| o.card.columns = 0),
        ("grid too wide", |o| o.card.columns = 6),
        ("zero sets", |o| o.game.sets = 0),
        ("zero max cards", |o| o.game.max_cards = 0),
        ("label eats card", |o| o.name_label.height = 2.0),
        ("empty font", |o| o.name_label.font = String::new()),
        ("no set colors", |o| o.card_back.set_colors.clear()),
        ("inverted opacity", |o| o.card_back.glyph_opacity = [0.5, 0.1]),
        ("color out of range", |o| o.border.color = RgbColor::new(2.0, 0.0, 0.0)),
        ("nan card width", |o| o.card.width = f32::NAN),
        ("nan glyph size", |o| o.card_back.glyph_size = [f32::NAN, 22.0]),
        ("infinite offset", |o| o.duplex.back_offset_x = f32::INFINITY),
    ];

    for (name, mutate) in cases {
        let mut options = CardOptions::default();
        mutate(&mut options);
        assert!(
            matches!(options.validate(), Err(CardError::Config(_))),
            "{name} should be rejected"
        );
    }
}

#[test]
fn test_set_colors_cycle() {
    let back = CardOptions::default().card_back;
    assert_eq!(back.set_color(0), back.set_colors[0]);
    assert_eq!(back.set_color(1), back.set_colors[1]);
    assert_eq!(back.set_color(2), back.set_colors[0]);
}

#[test]
fn test_yaml_nan_is_rejected() {
    let options = CardOptions::from_yaml("card:\n  padding: .nan\n").unwrap();
    assert!(options.card.padding.is_nan());
    match options.validate() {
        Err(CardError::Config(msg)) => assert!(msg.contains("card.padding"), "{msg}"),
        other => panic!("expected Config error, got {other:?}"),
    }
}
