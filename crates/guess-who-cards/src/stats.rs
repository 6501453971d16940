use crate::layout::SheetPlan;
use crate::options::CardOptions;

/// Summary of a generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckStatistics {
    /// Cards per set
    pub cards: usize,
    /// Number of identical sets
    pub sets: usize,
    /// Physical sheets (front/back pairs) per set
    pub sheets_per_set: usize,
    /// Blank slots on the last sheet of each set
    pub blank_slots: usize,
    /// Total PDF pages (fronts and backs of every set)
    pub output_pages: usize,
}

/// Calculate statistics for a planned deck
pub fn calculate_statistics(plan: &SheetPlan, options: &CardOptions) -> DeckStatistics {
    let cards: usize = plan.fronts.iter().map(|page| page.filled_count()).sum();
    let slots: usize = plan.fronts.iter().map(|page| page.slots.len()).sum();
    let sheets_per_set = plan.page_count();
    let sets = options.game.sets;

    DeckStatistics {
        cards,
        sets,
        sheets_per_set,
        blank_slots: slots - cards,
        output_pages: sheets_per_set * 2 * sets,
    }
}
