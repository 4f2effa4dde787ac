use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Creates a centered rectangle within the given area
///
/// # Arguments
/// * `percent_x` - Width as a percentage of the container (0-100)
/// * `percent_y` - Height as a percentage of the container (0-100)
/// * `r` - The container rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    let middle = popup_layout
        .get(1)
        .copied()
        .unwrap_or_else(|| popup_layout.first().copied().unwrap_or(r));

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(middle);

    horizontal
        .get(1)
        .copied()
        .unwrap_or_else(|| horizontal.first().copied().unwrap_or(r))
}

/// Cuts `text` to at most `width` terminal cells, ending with an ellipsis when cut
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for character in text.chars() {
        let char_width = character.width().unwrap_or(0);
        if used + char_width > width.saturating_sub(1) {
            break;
        }
        result.push(character);
        used += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("Ana Lua", 10), "Ana Lua");
        assert_eq!(truncate_to_width("", 0), "");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Noite de Fado", 8), "Noite d…");
        assert_eq!(truncate_to_width("Maré Alta", 5), "Maré…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_characters() {
        // Each ideograph takes two cells
        assert_eq!(truncate_to_width("音楽祭", 5), "音楽…");
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 25);
        assert_eq!(inner.y, 10);
    }
}
