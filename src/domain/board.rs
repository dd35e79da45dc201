/// One of the two ranked lists pulled out of the aggregator page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    Zhihu,
    Weibo,
}

impl Board {
    /// Literal substring that opens this board's region of the page text.
    pub fn start_marker(self) -> &'static str {
        match self {
            Board::Zhihu => "知乎",
            Board::Weibo => "微博",
        }
    }

    /// Literal substring that closes the region. Each board ends where the
    /// next block begins; the Weibo region is closed by the WeChat block.
    pub fn end_marker(self) -> &'static str {
        match self {
            Board::Zhihu => "微博",
            Board::Weibo => "微信",
        }
    }

    /// Unit suffix the page appends to a heat magnitude.
    pub fn heat_suffix(self) -> &'static str {
        match self {
            Board::Zhihu => "万热度",
            Board::Weibo => "万",
        }
    }

    /// Cleaned titles at or below this char count are dropped.
    pub fn min_title_chars(self) -> usize {
        match self {
            Board::Zhihu => 2,
            Board::Weibo => 1,
        }
    }

    /// Weibo rows sometimes collapse to a bare vote count; those are dropped.
    pub fn rejects_numeric_titles(self) -> bool {
        matches!(self, Board::Weibo)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Board::Zhihu => "知乎热榜",
            Board::Weibo => "微博热搜",
        }
    }
}
