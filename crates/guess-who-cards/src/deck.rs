//! Deck loading: image discovery, labels, decoding

use crate::enhance::{enhance, flatten};
use crate::options::CardOptions;
use crate::types::*;
use std::path::{Path, PathBuf};

/// List image files in `dir` whose extension is allow-listed, sorted by name
pub async fn collect_images(dir: impl AsRef<Path>, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut images = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if entry.file_type().await?.is_file() && has_allowed_extension(&path, extensions) {
            images.push(path);
        }
    }

    if images.is_empty() {
        return Err(CardError::NoImages(dir.to_owned()));
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}

fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    let ext = format!(".{}", ext.to_lowercase());
    extensions.iter().any(|allowed| allowed.to_lowercase() == ext)
}

/// Card label from a file name: `anna_smith.png` → `Anna Smith`
pub fn derive_label(path: impl AsRef<Path>) -> String {
    let stem = path
        .as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    stem.replace(['_', '-'], " ")
        .split(' ')
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Decode and enhance one image into a card
pub fn decode_card(path: &Path, bytes: &[u8], options: &CardOptions) -> Result<CardSource> {
    let image = image::load_from_memory(bytes).map_err(|e| CardError::InvalidImage {
        path: path.to_owned(),
        reason: e.to_string(),
    })?;

    if image.width() == 0 || image.height() == 0 {
        return Err(CardError::InvalidImage {
            path: path.to_owned(),
            reason: "image has no pixels".to_string(),
        });
    }

    let rgb = flatten(&image, options.card.background_color);
    let rgb = enhance(rgb, &options.image_enhance);
    Ok(CardSource::new(path, derive_label(path), rgb))
}

/// Load every allow-listed image in `dir` as a deck.
///
/// Unreadable or undecodable images are skipped with a warning. The deck is
/// truncated to `game.max_cards`.
pub async fn load_deck(dir: impl AsRef<Path>, options: &CardOptions) -> Result<Deck> {
    let dir = dir.as_ref();
    let paths = collect_images(dir, &options.image_extensions).await?;
    log::info!("Found {} images in {:?}", paths.len(), dir);

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        match tokio::fs::read(&path).await {
            Ok(bytes) => files.push((path, bytes)),
            Err(e) => log::warn!("Skipping {:?}: {}", path, e),
        }
    }

    // Decoding and enhancement are CPU-bound
    let options_owned = options.clone();
    let cards = tokio::task::spawn_blocking(move || {
        files
            .iter()
            .filter_map(|(path, bytes)| match decode_card(path, bytes, &options_owned) {
                Ok(card) => Some(card),
                Err(e) => {
                    log::warn!("Skipping card: {}", e);
                    None
                }
            })
            .collect::<Vec<_>>()
    })
    .await?;

    if cards.is_empty() {
        return Err(CardError::NoImages(dir.to_owned()));
    }

    let mut deck = Deck::new(cards);
    let max_cards = options.game.max_cards;
    if deck.len() > max_cards {
        log::info!("Using the first {} of {} cards", max_cards, deck.len());
        deck.truncate(max_cards);
    } else if deck.len() < max_cards {
        log::info!("Only {} cards found, configuration expects {}", deck.len(), max_cards);
    }

    Ok(deck)
}
