use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Decorative sparkle string placed either side of the dashboard title.
pub const SPARKLES: &str = "✦ ✧ ✦ ✧";

/// Dashboard header rendering four lines:
///
/// 1. Application title with sparkle decorations.
/// 2. A 60-column `=` separator.
/// 3. Current filter and currency in `[ filter | ₩ KRW ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    /// Display label of the active filter selection (e.g. `"전체"`, `"07월"`).
    pub selection: &'a str,
    /// Theme providing colour styles for each part of the header.
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Construct a new header.
    pub fn new(selection: &'a str, theme: &'a Theme) -> Self {
        Self { selection, theme }
    }

    /// Render the header as a `Vec<Line>` containing exactly four lines.
    ///
    /// The returned lines are:
    ///
    /// 1. `"✦ ✧ ✦ ✧ 2024년 월별 매출 대시보드 ✦ ✧ ✦ ✧"`
    /// 2. `"============================================================"` (60 `=` chars)
    /// 3. `"[ 전체 | ₩ KRW ]"`
    /// 4. `""`
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        vec![
            // Title line.
            Line::from(vec![
                Span::styled(SPARKLES, self.theme.header_sparkle),
                Span::styled(" 2024년 월별 매출 대시보드 ", self.theme.header),
                Span::styled(SPARKLES, self.theme.header_sparkle),
            ]),
            // Separator line.
            Line::from(Span::styled(separator, self.theme.separator)),
            // Filter / currency info line.
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(self.selection, self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled("₩ KRW", self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            // Empty line.
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
