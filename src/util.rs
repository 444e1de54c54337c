//! Geometry and color-name helpers shared by layout, rendering, and configuration.

use crate::canvas::Point;
use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned pixel rectangle.
///
/// Containment is half-open: a rectangle covers `x..x + width` and `y..y + height`,
/// so two rectangles sharing an edge never both claim the pixels on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns true if the point lies inside the half-open rectangle.
    pub fn contains(&self, point: Point) -> bool {
        (self.x..self.right()).contains(&point.x) && (self.y..self.bottom()).contains(&point.y)
    }

    /// Returns true if `other` lies entirely within this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_containment_is_half_open() {
        let rect = Rect::new(10, 20, 5, 5).unwrap();
        assert!(rect.contains(Point::new(10, 20)));
        assert!(rect.contains(Point::new(14, 24)));
        assert!(!rect.contains(Point::new(15, 20)));
        assert!(!rect.contains(Point::new(10, 25)));
        assert!(!rect.contains(Point::new(9, 20)));
    }

    #[test]
    fn rect_rejects_empty_dimensions() {
        assert!(Rect::new(0, 0, 0, 10).is_none());
        assert!(Rect::from_min_max(5, 5, 5, 9).is_none());
        assert_eq!(
            Rect::from_min_max(2, 3, 7, 9),
            Some(Rect {
                x: 2,
                y: 3,
                width: 5,
                height: 6
            })
        );
    }

    #[test]
    fn contains_rect_checks_all_edges() {
        let outer = Rect::new(0, 0, 100, 50).unwrap();
        assert!(outer.contains_rect(&Rect::new(0, 0, 100, 50).unwrap()));
        assert!(!outer.contains_rect(&Rect::new(1, 0, 100, 50).unwrap()));
        assert!(!outer.contains_rect(&Rect::new(-1, 0, 10, 10).unwrap()));
    }

    #[test]
    fn name_to_color_is_case_insensitive() {
        assert_eq!(name_to_color("WHITE"), Some(WHITE));
        assert_eq!(name_to_color("Black"), Some(BLACK));
        assert_eq!(name_to_color("teal"), None);
    }
}
