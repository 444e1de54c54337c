//! Screen geometry, the button strip, and hit-testing.
//!
//! The screen is split into two areas:
//! - the canvas region, `x ∈ [0, width − strip_width)`, where strokes are recorded
//! - the button strip, `x ∈ [width − strip_width, width)`, whose top half is the
//!   Send button and bottom half the Reset button
//!
//! Every boundary is half-open, so a pixel on the canvas/strip edge or on the
//! Send/Reset edge belongs to exactly one region (always the button side).

use crate::canvas::Point;
use crate::util::Rect;
use thiserror::Error;

/// Errors raised when the detected screen cannot host the layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("display size {width}x{height} is empty")]
    EmptyDisplay { width: u32, height: u32 },

    #[error("display size {width}x{height} exceeds the supported pixel range")]
    TooLarge { width: u32, height: u32 },

    #[error("button strip width {strip_width} leaves no canvas on a {width}px wide display")]
    StripTooWide { strip_width: u32, width: u32 },

    #[error("display height {height} is too small to split into two buttons")]
    TooShort { height: u32 },
}

/// Screen size fixed at startup from the detected display bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    width: u32,
    height: u32,
}

impl Geometry {
    pub fn new(width: u32, height: u32) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::EmptyDisplay { width, height });
        }
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(GeometryError::TooLarge { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Full-screen rectangle.
    pub fn bounds(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.width as i32,
            height: self.height as i32,
        }
    }

    /// Converts normalized `[0, 1]` fractions of the screen into a pixel coordinate.
    ///
    /// Fractions are scaled and floored, so `1.0` lands one pixel past the last column
    /// and is treated as outside the screen. Non-finite input maps far outside.
    pub fn to_pixel(&self, fx: f64, fy: f64) -> Point {
        Point::new(
            scale_fraction(fx, self.width),
            scale_fraction(fy, self.height),
        )
    }
}

fn scale_fraction(fraction: f64, extent: u32) -> i32 {
    if !fraction.is_finite() {
        return i32::MIN;
    }
    // `as` saturates, which keeps wildly out-of-range input outside every region.
    (fraction * extent as f64).floor() as i32
}

/// The two controls in the button strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    /// Top half: export the canvas, then clear it.
    Send,
    /// Bottom half: clear the canvas.
    Reset,
}

/// A button region plus its transient press feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub id: ButtonId,
    pub region: Rect,
    /// True only while a finger is down inside `region`.
    pub pressed: bool,
}

impl Button {
    fn new(id: ButtonId, region: Rect) -> Self {
        Self {
            id,
            region,
            pressed: false,
        }
    }
}

/// Result of hit-testing a pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Canvas,
    Button(ButtonId),
    /// Off-screen; events here only clear press feedback.
    Outside,
}

/// Fixed placement of the canvas and both buttons for one display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLayout {
    geometry: Geometry,
    strip_width: u32,
}

impl ButtonLayout {
    /// Places a strip of `strip_width` pixels on the right edge of `geometry`.
    pub fn new(geometry: Geometry, strip_width: u32) -> Result<Self, GeometryError> {
        if strip_width == 0 || strip_width >= geometry.width {
            return Err(GeometryError::StripTooWide {
                strip_width,
                width: geometry.width,
            });
        }
        if geometry.height < 2 {
            return Err(GeometryError::TooShort {
                height: geometry.height,
            });
        }
        Ok(Self {
            geometry,
            strip_width,
        })
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn strip_width(&self) -> u32 {
        self.strip_width
    }

    /// First pixel column of the button strip.
    pub fn strip_x(&self) -> i32 {
        (self.geometry.width - self.strip_width) as i32
    }

    /// First pixel row of the Reset button.
    fn split_y(&self) -> i32 {
        (self.geometry.height / 2) as i32
    }

    /// Drawing area left of the strip; also the exported region.
    pub fn canvas_rect(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.strip_x(),
            height: self.geometry.height as i32,
        }
    }

    /// Screen region of a button. Reset absorbs the extra row on odd heights.
    pub fn button_rect(&self, id: ButtonId) -> Rect {
        let height = self.geometry.height as i32;
        let split = self.split_y();
        let (y, h) = match id {
            ButtonId::Send => (0, split),
            ButtonId::Reset => (split, height - split),
        };
        Rect {
            x: self.strip_x(),
            y,
            width: self.strip_width as i32,
            height: h,
        }
    }

    /// Builds a released button for `id`.
    pub fn button(&self, id: ButtonId) -> Button {
        Button::new(id, self.button_rect(id))
    }

    /// Classifies a pixel coordinate.
    pub fn classify(&self, point: Point) -> Region {
        if !self.geometry.bounds().contains(point) {
            return Region::Outside;
        }
        if point.x < self.strip_x() {
            Region::Canvas
        } else if point.y < self.split_y() {
            Region::Button(ButtonId::Send)
        } else {
            Region::Button(ButtonId::Reset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ButtonLayout {
        ButtonLayout::new(Geometry::new(1000, 800).unwrap(), 400).unwrap()
    }

    #[test]
    fn geometry_rejects_empty_display() {
        assert_eq!(
            Geometry::new(0, 600),
            Err(GeometryError::EmptyDisplay {
                width: 0,
                height: 600
            })
        );
    }

    #[test]
    fn strip_must_leave_canvas_space() {
        let geometry = Geometry::new(400, 300).unwrap();
        assert!(matches!(
            ButtonLayout::new(geometry, 400),
            Err(GeometryError::StripTooWide { .. })
        ));
        assert!(matches!(
            ButtonLayout::new(geometry, 0),
            Err(GeometryError::StripTooWide { .. })
        ));
        assert!(ButtonLayout::new(geometry, 399).is_ok());
    }

    #[test]
    fn to_pixel_scales_and_floors() {
        let geometry = Geometry::new(1000, 800).unwrap();
        assert_eq!(geometry.to_pixel(0.1, 0.1), Point::new(100, 80));
        assert_eq!(geometry.to_pixel(0.2, 0.2), Point::new(200, 160));
        assert_eq!(geometry.to_pixel(0.0, 0.0), Point::new(0, 0));
        assert_eq!(geometry.to_pixel(0.9999, 0.9999), Point::new(999, 799));
        assert_eq!(geometry.to_pixel(-0.01, 0.5), Point::new(-10, 400));
    }

    #[test]
    fn non_finite_fractions_land_outside() {
        let layout = layout();
        let point = layout.geometry().to_pixel(f64::NAN, 0.5);
        assert_eq!(layout.classify(point), Region::Outside);
    }

    #[test]
    fn strip_boundary_belongs_to_buttons() {
        let layout = layout();
        assert_eq!(layout.strip_x(), 600);
        assert_eq!(layout.classify(Point::new(599, 0)), Region::Canvas);
        assert_eq!(
            layout.classify(Point::new(600, 0)),
            Region::Button(ButtonId::Send)
        );
        assert_eq!(
            layout.classify(Point::new(999, 399)),
            Region::Button(ButtonId::Send)
        );
        assert_eq!(
            layout.classify(Point::new(600, 400)),
            Region::Button(ButtonId::Reset)
        );
        assert_eq!(
            layout.classify(Point::new(999, 799)),
            Region::Button(ButtonId::Reset)
        );
    }

    #[test]
    fn off_screen_points_are_outside() {
        let layout = layout();
        for point in [
            Point::new(-1, 10),
            Point::new(10, -1),
            Point::new(1000, 10),
            Point::new(700, 800),
        ] {
            assert_eq!(layout.classify(point), Region::Outside, "{point:?}");
        }
    }

    #[test]
    fn button_rects_tile_the_strip() {
        let layout = ButtonLayout::new(Geometry::new(1000, 801).unwrap(), 400).unwrap();
        let send = layout.button_rect(ButtonId::Send);
        let reset = layout.button_rect(ButtonId::Reset);

        assert_eq!(send, Rect::new(600, 0, 400, 400).unwrap());
        assert_eq!(reset, Rect::new(600, 400, 400, 401).unwrap());
        assert_eq!(send.bottom(), reset.y);
        assert_eq!(reset.bottom(), 801);
        assert_eq!(layout.canvas_rect(), Rect::new(0, 0, 600, 801).unwrap());
    }

    #[test]
    fn classify_agrees_with_button_rects() {
        let layout = layout();
        for y in [0, 1, 398, 399, 400, 401, 798, 799] {
            for x in [598, 599, 600, 601, 998, 999] {
                let point = Point::new(x, y);
                let in_canvas = layout.canvas_rect().contains(point);
                let in_send = layout.button_rect(ButtonId::Send).contains(point);
                let in_reset = layout.button_rect(ButtonId::Reset).contains(point);
                assert_eq!(
                    [in_canvas, in_send, in_reset]
                        .iter()
                        .filter(|hit| **hit)
                        .count(),
                    1,
                    "{point:?} must belong to exactly one region"
                );
                let expected = if in_canvas {
                    Region::Canvas
                } else if in_send {
                    Region::Button(ButtonId::Send)
                } else {
                    Region::Button(ButtonId::Reset)
                };
                assert_eq!(layout.classify(point), expected);
            }
        }
    }
}
