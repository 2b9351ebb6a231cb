use tracing::warn;

/// Vertical write position inside one card column.
///
/// Layout flows top-down, so the position only ever moves down the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    y: f64,
}

impl Cursor {
    pub fn new(y: f64) -> Self {
        Self { y }
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Move to `next`, which a primitive returned. A position above the
    /// current one is logged and ignored.
    pub fn advance_to(&mut self, next: f64) -> f64 {
        if next <= self.y {
            self.y = next;
        } else {
            warn!(from = self.y, to = next, "layout tried to move the cursor up");
        }
        self.y
    }

    /// Move down by `dy` points
    pub fn skip(&mut self, dy: f64) -> f64 {
        self.advance_to(self.y - dy.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_down() {
        let mut cursor = Cursor::new(100.0);
        assert_eq!(cursor.advance_to(82.0), 82.0);
        assert_eq!(cursor.skip(12.0), 70.0);
        assert_eq!(cursor.y(), 70.0);
    }

    #[test]
    fn test_upward_move_is_ignored() {
        let mut cursor = Cursor::new(300.0);
        assert_eq!(cursor.advance_to(320.0), 300.0);
        assert_eq!(cursor.y(), 300.0);
    }

    #[test]
    fn test_negative_skip_is_ignored() {
        let mut cursor = Cursor::new(50.0);
        assert_eq!(cursor.skip(-10.0), 50.0);
    }
}
