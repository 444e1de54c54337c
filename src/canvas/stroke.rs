//! Pixel points and freehand strokes.

/// A pixel coordinate in surface space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One continuous finger-down-to-finger-up path.
///
/// Points are only ever appended; once the gesture ends the controller stops
/// handing out mutable access, so a closed stroke never changes again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Creates an empty stroke.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point to the end of the path.
    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Points in emission order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_keeps_emission_order() {
        let mut stroke = Stroke::new();
        assert!(stroke.is_empty());

        stroke.push(Point::new(3, 4));
        stroke.push(Point::new(1, 2));
        stroke.push(Point::new(3, 4));

        assert_eq!(stroke.len(), 3);
        assert_eq!(
            stroke.points(),
            &[Point::new(3, 4), Point::new(1, 2), Point::new(3, 4)]
        );
    }
}
