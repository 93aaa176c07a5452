use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

fn grapheme_display_width(g: &str) -> usize {
    UnicodeWidthStr::width(g)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    let sw = display_width(s);
    if sw <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = grapheme_display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Pad a string with trailing spaces to exactly `cells` terminal cells,
/// truncating first if it is too wide.
pub fn pad_to_width(s: &str, cells: usize) -> String {
    let truncated = truncate_to_width(s, cells);
    let w = display_width(&truncated);
    let mut out = truncated;
    out.push_str(&" ".repeat(cells.saturating_sub(w)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("Uri", 10), "Uri");
    }

    #[test]
    fn truncate_long_string_reserves_ellipsis_cell() {
        assert_eq!(truncate_to_width("Appenzell Innerrhoden", 9), "Appenzel…");
    }

    #[test]
    fn truncate_to_one_cell_is_just_ellipsis() {
        assert_eq!(truncate_to_width("Bern", 1), "…");
    }

    #[test]
    fn pad_fills_to_exact_width() {
        let padded = pad_to_width("Zug", 6);
        assert_eq!(padded, "Zug   ");
        assert_eq!(display_width(&padded), 6);
    }
}
