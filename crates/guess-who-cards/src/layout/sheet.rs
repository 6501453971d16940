//! Sheet planning: card-to-slot assignment for duplex printing
//!
//! Fronts are filled row-major. Each back page holds the same cards as its
//! front with the columns of every row reversed, so that after the sheet is
//! flipped on its long edge each back lands behind its own front.

use crate::types::{Deck, Result};

use super::{Grid, PagePlan, SheetPlan, SheetSide};

/// Plan the front and back page streams for a deck.
pub fn layout(deck: &Deck, grid: &Grid) -> Result<SheetPlan> {
    plan_pages(deck.len(), grid)
}

/// Plan the front and back page streams for `card_count` cards.
///
/// An empty deck yields zero pages. The last page of a deck that does not
/// fill it has trailing blank slots, mirrored like any other slot.
pub fn plan_pages(card_count: usize, grid: &Grid) -> Result<SheetPlan> {
    grid.validate()?;

    let per_page = grid.slots_per_page();
    let page_count = card_count.div_ceil(per_page);

    let mut fronts = Vec::with_capacity(page_count);
    let mut backs = Vec::with_capacity(page_count);

    for index in 0..page_count {
        let first = index * per_page;
        let slots: Vec<Option<usize>> = (first..first + per_page)
            .map(|card| (card < card_count).then_some(card))
            .collect();

        backs.push(PagePlan {
            side: SheetSide::Back,
            index,
            slots: mirror_rows(&slots, grid.columns),
        });
        fronts.push(PagePlan {
            side: SheetSide::Front,
            index,
            slots,
        });
    }

    Ok(SheetPlan {
        columns: grid.columns,
        rows: grid.rows,
        fronts,
        backs,
    })
}

/// Reverse the column order within each row of a row-major slot list.
pub fn mirror_rows<T: Copy>(slots: &[T], columns: usize) -> Vec<T> {
    slots
        .chunks(columns)
        .flat_map(|row| row.iter().rev().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GridPosition;

    fn grid(columns: usize, rows: usize) -> Grid {
        Grid {
            columns,
            rows,
            page_width: 612.0,
            page_height: 792.0,
            margin_x: 0.0,
            margin_y: 0.0,
            card_width: 612.0 / columns as f32,
            card_height: 792.0 / rows as f32,
            padding: 0.0,
        }
    }

    #[test]
    fn test_empty_deck_has_no_pages() {
        let plan = plan_pages(0, &grid(5, 5)).unwrap();
        assert_eq!(plan.page_count(), 0);
        assert!(plan.backs.is_empty());
    }

    #[test]
    fn test_full_page_has_no_blanks() {
        for (cols, rows) in [(1, 1), (2, 3), (3, 2), (5, 5), (4, 1)] {
            let g = grid(cols, rows);
            let plan = plan_pages(g.slots_per_page(), &g).unwrap();
            assert_eq!(plan.fronts.len(), 1);
            assert_eq!(plan.backs.len(), 1);
            assert_eq!(plan.fronts[0].filled_count(), cols * rows);
            assert_eq!(plan.backs[0].filled_count(), cols * rows);
        }
    }

    #[test]
    fn test_page_count_and_card_total() {
        let g = grid(3, 2);
        for count in 0..40 {
            let plan = plan_pages(count, &g).unwrap();
            assert_eq!(plan.page_count(), count.div_ceil(6));
            assert_eq!(plan.backs.len(), plan.fronts.len());

            let filled: usize = plan.fronts.iter().map(PagePlan::filled_count).sum();
            assert_eq!(filled, count);
        }
    }

    #[test]
    fn test_back_is_row_mirror_of_front() {
        let g = grid(4, 3);
        let plan = plan_pages(17, &g).unwrap();

        for (front, back) in plan.sheets() {
            for row in 0..g.rows {
                for col in 0..g.columns {
                    let pos = GridPosition::new(row, col);
                    assert_eq!(
                        front.card_at(pos, g.columns),
                        back.card_at(pos.mirrored(g.columns), g.columns)
                    );
                }
            }
        }
    }

    #[test]
    fn test_front_is_row_major() {
        let g = grid(5, 5);
        let plan = plan_pages(30, &g).unwrap();
        assert_eq!(plan.fronts[0].card_at(GridPosition::new(0, 4), 5), Some(4));
        assert_eq!(plan.fronts[0].card_at(GridPosition::new(1, 0), 5), Some(5));
        assert_eq!(plan.fronts[1].card_at(GridPosition::new(0, 0), 5), Some(25));
        assert_eq!(plan.fronts[1].card_at(GridPosition::new(1, 0), 5), None);
    }

    #[test]
    fn test_mirror_rows() {
        let slots = [1, 2, 3, 4, 5, 6];
        assert_eq!(mirror_rows(&slots, 3), vec![3, 2, 1, 6, 5, 4]);
        assert_eq!(mirror_rows(&slots, 1), slots.to_vec());
    }
}
