//! Utility helpers shared across the wheel frontend.

use unicode_segmentation::UnicodeSegmentation;

/// Shorten `text` to at most `max_graphemes` user-perceived characters,
/// replacing the tail with an ellipsis.  Splitting on grapheme clusters keeps
/// accented letters and emoji in one piece.
pub fn truncate_graphemes(text: &str, max_graphemes: usize) -> String {
    let trimmed = text.trim();
    if max_graphemes == 0 {
        return String::new();
    }
    if trimmed.graphemes(true).count() <= max_graphemes {
        return trimmed.to_string();
    }
    let mut out: String = trimmed.graphemes(true).take(max_graphemes - 1).collect();
    out.truncate(out.trim_end().len());
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_pass_through() {
        assert_eq!(truncate_graphemes("  Latte ", 18), "Latte");
    }

    #[test]
    fn long_labels_get_an_ellipsis() {
        assert_eq!(truncate_graphemes("Caramel Macchiato Grande", 10), "Caramel M…");
        assert_eq!(truncate_graphemes("Iced Coffee", 5), "Iced…");
    }

    #[test]
    fn grapheme_clusters_are_not_split() {
        // "e" + combining acute accent is one grapheme
        let label = "Cafe\u{301} au lait";
        assert_eq!(truncate_graphemes(label, 5), "Cafe\u{301}…");
    }

    #[test]
    fn zero_budget_is_empty() {
        assert_eq!(truncate_graphemes("Mocha", 0), "");
    }
}
