use guess_who_cards::layout::*;
use guess_who_cards::*;

fn five_by_five() -> Grid {
    CardOptions::default().grid()
}

#[test]
fn test_partial_page_front_and_back() {
    let plan = plan_pages(7, &five_by_five()).unwrap();
    assert_eq!(plan.page_count(), 1);

    let front = &plan.fronts[0];
    let back = &plan.backs[0];

    // Row 0 is full and reversed on the back
    for col in 0..5 {
        assert_eq!(front.card_at(GridPosition::new(0, col), 5), Some(col));
        assert_eq!(back.card_at(GridPosition::new(0, col), 5), Some(4 - col));
    }

    // Row 1 holds cards 5 and 6 on the left of the front, right of the back
    assert_eq!(front.card_at(GridPosition::new(1, 0), 5), Some(5));
    assert_eq!(front.card_at(GridPosition::new(1, 1), 5), Some(6));
    assert_eq!(front.card_at(GridPosition::new(1, 2), 5), None);
    assert_eq!(back.card_at(GridPosition::new(1, 4), 5), Some(5));
    assert_eq!(back.card_at(GridPosition::new(1, 3), 5), Some(6));
    assert_eq!(back.card_at(GridPosition::new(1, 0), 5), None);

    assert_eq!(front.filled_count(), 7);
    assert_eq!(back.filled_count(), 7);
}

#[test]
fn test_standard_deck_blank_slot() {
    let plan = plan_pages(24, &five_by_five()).unwrap();
    assert_eq!(plan.page_count(), 1);

    assert_eq!(plan.fronts[0].card_at(GridPosition::new(4, 4), 5), None);
    assert_eq!(plan.fronts[0].card_at(GridPosition::new(4, 3), 5), Some(23));
    assert_eq!(plan.backs[0].card_at(GridPosition::new(4, 0), 5), None);
    assert_eq!(plan.backs[0].card_at(GridPosition::new(4, 1), 5), Some(23));
}

#[test]
fn test_page_count_matches_ceiling() {
    let grid = five_by_five();
    for cards in [0, 1, 24, 25, 26, 49, 50, 51, 100] {
        let plan = plan_pages(cards, &grid).unwrap();
        assert_eq!(plan.page_count(), cards.div_ceil(25), "{cards} cards");
        assert_eq!(plan.fronts.len(), plan.backs.len());

        let placed: usize = plan.fronts.iter().map(PagePlan::filled_count).sum();
        assert_eq!(placed, cards);
    }
}

#[test]
fn test_every_card_backs_its_own_front() {
    let grid = five_by_five();
    let plan = plan_pages(60, &grid).unwrap();

    for (front, back) in plan.sheets() {
        for row in 0..grid.rows {
            for col in 0..grid.columns {
                let pos = GridPosition::new(row, col);
                assert_eq!(
                    front.card_at(pos, grid.columns),
                    back.card_at(pos.mirrored(grid.columns), grid.columns)
                );
            }
        }
    }
}

#[test]
fn test_cards_appear_once_in_each_stream() {
    let plan = plan_pages(37, &five_by_five()).unwrap();

    let mut fronts: Vec<usize> = plan.front_assignments().filter_map(|a| a.card).collect();
    let mut backs: Vec<usize> = plan.back_assignments().filter_map(|a| a.card).collect();
    fronts.sort_unstable();
    backs.sort_unstable();

    let expected: Vec<usize> = (0..37).collect();
    assert_eq!(fronts, expected);
    assert_eq!(backs, expected);
}

#[test]
fn test_slots_stay_on_page() {
    let grid = five_by_five();
    let page = Rect::new(0.0, 0.0, grid.page_width, grid.page_height);
    for index in 0..grid.slots_per_page() {
        let rect = grid.slot_rect(grid.position_of(index));
        assert!(page.contains_rect(&rect), "slot {index} off page");
    }
}

#[test]
fn test_layout_rejects_overflowing_grid() {
    let mut options = CardOptions::default();
    options.card.columns = 6;
    let result = plan_pages(10, &options.grid());
    assert!(matches!(result, Err(CardError::Config(_))));
}
