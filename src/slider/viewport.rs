/// Widest viewport (inclusive) that still shows a single item
pub const SINGLE_ITEM_MAX_WIDTH: u32 = 768;
/// Widest viewport (inclusive) that shows two items
pub const DOUBLE_ITEM_MAX_WIDTH: u32 = 1024;

/// Maps a viewport width in pixels to the number of items shown at once.
///
/// Always returns 1, 2 or 3.
#[must_use]
pub fn items_per_view(width_px: u32) -> usize {
    if width_px <= SINGLE_ITEM_MAX_WIDTH {
        1
    } else if width_px <= DOUBLE_ITEM_MAX_WIDTH {
        2
    } else {
        3
    }
}

/// Converts a terminal column count into an approximate pixel width
#[must_use]
pub fn columns_to_px(columns: u16, cell_width_px: u16) -> u32 {
    u32::from(columns) * u32::from(cell_width_px.max(1))
}

/// Classifies a terminal of `columns` width
#[must_use]
pub fn items_per_view_for_columns(columns: u16, cell_width_px: u16) -> usize {
    items_per_view(columns_to_px(columns, cell_width_px))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        assert_eq!(items_per_view(0), 1);
        assert_eq!(items_per_view(375), 1);
        assert_eq!(items_per_view(768), 1);
        assert_eq!(items_per_view(769), 2);
        assert_eq!(items_per_view(1024), 2);
        assert_eq!(items_per_view(1025), 3);
        assert_eq!(items_per_view(2560), 3);
    }

    #[test]
    fn test_terminal_columns() {
        // 96 columns at 8px is exactly the single-item boundary
        assert_eq!(items_per_view_for_columns(96, 8), 1);
        assert_eq!(items_per_view_for_columns(97, 8), 2);
        assert_eq!(items_per_view_for_columns(128, 8), 2);
        assert_eq!(items_per_view_for_columns(129, 8), 3);
    }

    #[test]
    fn test_zero_cell_width_is_treated_as_one() {
        assert_eq!(columns_to_px(800, 0), 800);
        assert_eq!(items_per_view_for_columns(800, 0), 2);
    }
}
