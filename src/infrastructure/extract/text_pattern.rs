use super::TrendExtractor;
use crate::domain::{Board, RankedItem, MAX_ITEMS};
use once_cell::sync::Lazy;
use regex::Regex;

// rank, title (no heat-suffix lead char, no line breaks, non-greedy),
// decimal heat magnitude
static ZHIHU_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+([^万\n]+?)\s+(\d+\.?\d*)\s*万热度").unwrap());
static WEIBO_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+([^万\n]+?)\s+(\d+\.?\d*)\s*万").unwrap());

fn item_regex(board: Board) -> &'static Regex {
    match board {
        Board::Zhihu => &ZHIHU_ITEM_RE,
        Board::Weibo => &WEIBO_ITEM_RE,
    }
}

/// Extraction over rendered page text using positional markers and a
/// per-board item pattern.
pub struct TextPatternExtractor;

impl TrendExtractor for TextPatternExtractor {
    fn extract(&self, page_text: &str, board: Board) -> Vec<RankedItem> {
        let section = extract_section(page_text, board.start_marker(), board.end_marker());
        parse_items(section, board)
    }
}

/// Slice of `text` spanning one board's region.
///
/// The end marker is looked up over the whole text, not just past the
/// start marker; when its first occurrence sits at or before the start
/// position the region is empty. Both regions on the live page appear in
/// marker order, so this only matters for degenerate input.
pub fn extract_section<'a>(text: &'a str, start_marker: &str, end_marker: &str) -> &'a str {
    let Some(start) = text.find(start_marker) else {
        return "";
    };
    let end = text.find(end_marker).unwrap_or(text.len());
    if end <= start {
        return "";
    }
    &text[start..end]
}

/// Runs the board's item pattern over its region and keeps the first
/// `MAX_ITEMS` matches that survive cleaning.
pub fn parse_items(section_text: &str, board: Board) -> Vec<RankedItem> {
    let mut items = Vec::new();

    for caps in item_regex(board).captures_iter(section_text) {
        if items.len() >= MAX_ITEMS {
            break;
        }

        // Group 1 is the printed rank; display order comes from match
        // order, which tracks the on-page order more reliably.
        let title = collapse_whitespace(&caps[2]);
        if title.chars().count() <= board.min_title_chars() {
            continue;
        }
        if board.rejects_numeric_titles() && title.chars().all(char::is_numeric) {
            continue;
        }

        items.push(RankedItem {
            title,
            heat: format!("{} {}", &caps[3], board.heat_suffix()),
            url: String::new(),
        });
    }

    items
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "今日热榜\n知乎\n知乎热榜\n1 示例标题一 3.5万热度\n2 示例标题二 2.1万热度\n微博\n微博热搜\n1 热搜话题甲 120万\n2 12345 6万\n微信\n微信热文\n";

    #[test]
    fn section_spans_start_to_first_end_marker() {
        assert_eq!(extract_section("aa知乎bbb微博cc", "知乎", "微博"), "知乎bbb");
    }

    #[test]
    fn section_runs_to_end_when_end_marker_missing() {
        assert_eq!(extract_section("aa知乎bbb", "知乎", "微博"), "知乎bbb");
    }

    #[test]
    fn section_empty_when_start_marker_missing() {
        assert_eq!(extract_section("aa微博bb", "知乎", "微博"), "");
    }

    #[test]
    fn section_empty_when_end_marker_precedes_start() {
        // The end marker is looked up globally; an occurrence before the
        // start marker collapses the region rather than being skipped.
        assert_eq!(extract_section("微博aa知乎bb", "知乎", "微博"), "");
    }

    #[test]
    fn parses_items_in_page_order_with_formatted_heat() {
        let extractor = TextPatternExtractor;
        let items = extractor.extract(PAGE, Board::Zhihu);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "示例标题一");
        assert_eq!(items[0].heat, "3.5 万热度");
        assert_eq!(items[0].url, "");
        assert_eq!(items[1].title, "示例标题二");
        assert_eq!(items[1].heat, "2.1 万热度");
    }

    #[test]
    fn weibo_rejects_all_digit_titles() {
        let extractor = TextPatternExtractor;
        let items = extractor.extract(PAGE, Board::Weibo);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "热搜话题甲");
        assert_eq!(items[0].heat, "120 万");
    }

    #[test]
    fn output_is_capped_at_max_items() {
        let mut section = String::from("知乎\n");
        for i in 1..=15 {
            section.push_str(&format!("{i} 话题标题第{i}号 {i}.5万热度\n"));
        }

        let items = parse_items(&section, Board::Zhihu);
        assert_eq!(items.len(), MAX_ITEMS);
        assert_eq!(items[0].title, "话题标题第1号");
        assert_eq!(items[9].title, "话题标题第10号");
    }

    #[test]
    fn titles_are_trimmed_and_internal_whitespace_collapsed() {
        let items = parse_items("1 标题  带双空格 3.5万热度", Board::Zhihu);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "标题 带双空格");
        assert!(!items[0].title.contains("  "));
    }

    #[test]
    fn short_titles_are_dropped_per_board_minimum() {
        assert!(parse_items("1 两字 3.5万热度", Board::Zhihu).is_empty());
        assert!(parse_items("1 字 3万", Board::Weibo).is_empty());

        // Two chars clears the Weibo minimum but not the Zhihu one.
        assert_eq!(parse_items("1 两字 3万", Board::Weibo).len(), 1);
    }

    #[test]
    fn no_matches_yield_empty_result() {
        assert!(parse_items("没有任何条目的文本", Board::Zhihu).is_empty());
        assert!(parse_items("", Board::Weibo).is_empty());
    }
}
