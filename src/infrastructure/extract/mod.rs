use crate::domain::{Board, RankedItem};

pub(crate) mod text_pattern;

/// Strategy for digging a board's entries out of acquired page content.
///
/// The shipped implementation works over loosely structured rendered text;
/// a DOM-based strategy can slot in behind this trait without touching the
/// service layer.
pub trait TrendExtractor: Send + Sync {
    fn extract(&self, page_text: &str, board: Board) -> Vec<RankedItem>;
}
