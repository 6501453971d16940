//! Page sequencing
//!
//! Renders a sheet plan once per set, in duplex print order: front page p,
//! back page p, front page p+1, ...

use crate::constants::in_to_pt;
use crate::font::FontHandle;
use crate::layout::{Grid, GridPosition, PagePlan, SheetPlan, SheetSide, fit_image};
use crate::options::CardOptions;
use crate::pattern::{PatternStyle, generate_pattern};
use crate::types::{CardError, Deck, Result};
use rand::Rng;

use super::{CardStyle, PageCommands, render_back, render_front};

/// Render every page of every set as draw commands
pub fn render_pages<R: Rng + ?Sized>(
    plan: &SheetPlan,
    deck: &Deck,
    options: &CardOptions,
    font: &FontHandle,
    rng: &mut R,
) -> Result<Vec<PageCommands>> {
    let grid = options.grid();
    let style = CardStyle::from_options(options);
    let pattern = PatternStyle::new(&options.card_back, font);
    let back_offset = (
        in_to_pt(options.duplex.back_offset_x),
        in_to_pt(options.duplex.back_offset_y),
    );

    let mut pages = Vec::with_capacity(plan.page_count() * 2 * options.game.sets);
    for set in 0..options.game.sets {
        log::debug!("Rendering set {}", set + 1);
        for (front, back) in plan.sheets() {
            pages.push(render_front_page(front, set, deck, &grid, font, &style)?);

            let color = options.card_back.set_color(set);
            let mut commands = Vec::new();
            for (pos, _) in occupied_slots(back, &grid) {
                let slot = grid.slot_rect(pos).translated(back_offset.0, back_offset.1);
                let placements = generate_pattern(&style.back_interior(&slot), &pattern, rng);
                commands.extend(render_back(&slot, &placements, font, color, &style));
            }
            pages.push(PageCommands {
                side: SheetSide::Back,
                set,
                index: back.index,
                commands,
            });
        }
    }

    Ok(pages)
}

fn render_front_page(
    front: &PagePlan,
    set: usize,
    deck: &Deck,
    grid: &Grid,
    font: &FontHandle,
    style: &CardStyle,
) -> Result<PageCommands> {
    let mut commands = Vec::new();
    for (pos, card_index) in occupied_slots(front, grid) {
        let card = deck.get(card_index).ok_or_else(|| {
            CardError::Config(format!(
                "Layout refers to card {} but the deck has {}",
                card_index,
                deck.len()
            ))
        })?;

        let slot = grid.slot_rect(pos);
        let area = style.image_area(&slot);
        let (width, height) = card.dimensions();
        let crop = fit_image(width, height, area.width, area.height);
        commands.extend(render_front(&slot, card_index, card, &crop, font, style));
        if set == 0 {
            log::debug!("[front] {}", card.label);
        }
    }

    Ok(PageCommands {
        side: SheetSide::Front,
        set,
        index: front.index,
        commands,
    })
}

/// Grid positions holding a card, with the card index
fn occupied_slots<'a>(
    page: &'a PagePlan,
    grid: &'a Grid,
) -> impl Iterator<Item = (GridPosition, usize)> + 'a {
    page.slots
        .iter()
        .enumerate()
        .filter_map(move |(slot, card)| card.map(|card| (grid.position_of(slot), card)))
}
