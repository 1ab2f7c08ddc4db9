use quire_types::Rect;

pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized logic to check if a block fits in the remaining space.
///
/// * `cursor_y`: The current Y position relative to the top of the content bounds.
/// * `block_height`: The required height for the block.
/// * `bounds`: The content bounds of the page.
///
/// A block taller than the whole content area never requests a break when the
/// cursor is already at the top, so it is placed and allowed to overflow instead
/// of producing an endless run of empty pages.
pub fn check_block_fit(cursor_y: f32, block_height: f32, bounds: Rect) -> BreakAnalysis {
    let available = (bounds.height - cursor_y).max(0.0);
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    let at_top = cursor_y <= EPSILON;
    BreakAnalysis {
        should_break: !at_top && block_height > available + EPSILON,
        remaining_height: available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(50.0, 100.0, 400.0, 600.0)
    }

    #[test]
    fn test_fits_exactly() {
        let r = check_block_fit(500.0, 100.0, bounds());
        assert!(!r.should_break);
        assert_eq!(r.remaining_height, 100.0);
    }

    #[test]
    fn test_overflow_requests_break() {
        assert!(check_block_fit(500.0, 100.5, bounds()).should_break);
    }

    #[test]
    fn test_oversize_block_at_top_does_not_break() {
        assert!(!check_block_fit(0.0, 5000.0, bounds()).should_break);
        assert!(check_block_fit(1.0, 5000.0, bounds()).should_break);
    }

    #[test]
    fn test_cursor_past_bottom_has_no_remaining_space() {
        let r = check_block_fit(650.0, 1.0, bounds());
        assert_eq!(r.remaining_height, 0.0);
        assert!(r.should_break);
    }
}
