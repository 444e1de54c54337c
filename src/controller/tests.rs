use super::*;
use crate::canvas::Point;
use crate::draw::{Color, DisplaySurface, PixelBuffer, RenderError};
use crate::export::{ExportError, ExportFormat, ImageExporter};
use crate::input::{CanvasEvent, InputEvent};
use crate::layout::{ButtonId, ButtonLayout, Geometry};
use crate::util::Rect;
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear(Color),
    Fill(Rect, Color),
    Polyline(Vec<Point>),
    Label(String, Rect),
    Present,
    Capture(Rect),
}

/// Surface double that records every call and hands back blank captures.
struct RecordingSurface {
    geometry: Geometry,
    ops: Vec<Op>,
    fail_capture: bool,
}

impl RecordingSurface {
    fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            ops: Vec::new(),
            fail_capture: false,
        }
    }

    fn polylines(&self) -> Vec<&Vec<Point>> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Polyline(points) => Some(points),
                _ => None,
            })
            .collect()
    }

    fn fill_for(&self, rect: Rect) -> Option<Color> {
        self.ops.iter().rev().find_map(|op| match op {
            Op::Fill(r, color) if *r == rect => Some(*color),
            _ => None,
        })
    }
}

impl DisplaySurface for RecordingSurface {
    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        self.ops.push(Op::Clear(color));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.ops.push(Op::Fill(rect, color));
        Ok(())
    }

    fn draw_polyline(
        &mut self,
        points: &[Point],
        _color: Color,
        _thickness: f64,
    ) -> Result<(), RenderError> {
        self.ops.push(Op::Polyline(points.to_vec()));
        Ok(())
    }

    fn draw_label(&mut self, text: &str, _color: Color, rect: Rect) -> Result<(), RenderError> {
        self.ops.push(Op::Label(text.to_string(), rect));
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.ops.push(Op::Present);
        Ok(())
    }

    fn capture_region(&mut self, rect: Rect) -> Result<PixelBuffer, RenderError> {
        self.ops.push(Op::Capture(rect));
        if self.fail_capture {
            return Err(RenderError::Present("capture unavailable".to_string()));
        }
        let len = rect.width as usize * rect.height as usize * 4;
        let pixels =
            PixelBuffer::from_rgba(rect.width as u32, rect.height as u32, vec![255; len]);
        Ok(pixels.expect("capture buffer"))
    }
}

struct Fixture {
    controller: CanvasController,
    surface: RecordingSurface,
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let geometry = Geometry::new(1000, 800).unwrap();
        let layout = ButtonLayout::new(geometry, 400).unwrap();
        let exporter = ImageExporter::new(dir.path().to_path_buf(), ExportFormat::Png, 90);
        Self {
            controller: CanvasController::new(layout, CanvasStyle::default(), exporter),
            surface: RecordingSurface::new(geometry),
            dir,
        }
    }

    fn feed(&mut self, events: &[InputEvent]) -> LoopControl {
        self.controller
            .handle_events(&mut self.surface, events.iter().copied())
            .unwrap()
    }

    fn exported_files(&self) -> Vec<String> {
        std::fs::read_dir(self.dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }
}

fn down(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerDown { x, y }
}

fn motion(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMove { x, y }
}

fn up(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerUp { x, y }
}

#[test]
fn stroke_scenario_records_two_points() {
    let mut fx = Fixture::new();

    let control = fx.feed(&[down(0.1, 0.1), motion(0.2, 0.2), up(0.2, 0.2)]);

    assert_eq!(control, LoopControl::Continue);
    let strokes = fx.controller.canvas().strokes();
    assert_eq!(strokes.len(), 1);
    assert_eq!(
        strokes[0].points(),
        &[Point::new(100, 80), Point::new(200, 160)]
    );
    assert!(!fx.controller.is_drawing());
    assert!(fx.exported_files().is_empty());
}

#[test]
fn send_release_exports_then_resets() {
    let mut fx = Fixture::new();
    fx.feed(&[down(0.1, 0.1), motion(0.3, 0.3), up(0.3, 0.3)]);
    assert_eq!(fx.controller.canvas().len(), 1);

    fx.feed(&[down(0.9, 0.1), up(0.9, 0.1)]);

    assert!(fx.controller.canvas().is_empty());
    let files = fx.exported_files();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with(".png"));
    assert_eq!(files[0].len(), "YYYY-MM-DD-HH-MM-SS.png".len());
    assert!(
        fx.surface
            .ops
            .contains(&Op::Capture(Rect::new(0, 0, 600, 800).unwrap()))
    );

    let decoded = image::open(fx.dir.path().join(&files[0])).unwrap();
    assert_eq!(decoded.to_rgba8().dimensions(), (600, 800));
}

#[test]
fn send_with_empty_canvas_still_writes_file() {
    let mut fx = Fixture::new();
    fx.feed(&[down(0.9, 0.1), up(0.9, 0.1)]);
    assert_eq!(fx.exported_files().len(), 1);
    assert!(fx.controller.canvas().is_empty());
}

#[test]
fn reset_release_clears_without_export() {
    let mut fx = Fixture::new();
    fx.feed(&[down(0.1, 0.1), motion(0.2, 0.2), up(0.2, 0.2)]);

    fx.feed(&[down(0.9, 0.6), up(0.9, 0.6)]);

    assert!(fx.controller.canvas().is_empty());
    assert!(fx.exported_files().is_empty());
    assert!(
        !fx.surface
            .ops
            .iter()
            .any(|op| matches!(op, Op::Capture(_)))
    );
}

#[test]
fn down_opens_exactly_one_empty_stroke_over_buttons() {
    let mut fx = Fixture::new();
    fx.feed(&[down(0.95, 0.2)]);

    assert_eq!(fx.controller.canvas().len(), 1);
    assert!(fx.controller.canvas().strokes()[0].is_empty());
    assert!(fx.controller.is_pressed(ButtonId::Send));
    assert!(!fx.controller.is_pressed(ButtonId::Reset));
}

#[test]
fn stroke_length_counts_only_canvas_points() {
    let mut fx = Fixture::new();
    fx.feed(&[
        down(0.05, 0.5),
        motion(0.1, 0.5),
        motion(0.7, 0.5),
        motion(0.2, 0.5),
        motion(1.5, 0.5),
        motion(0.3, 0.5),
        up(0.3, 0.5),
    ]);

    let stroke = &fx.controller.canvas().strokes()[0];
    assert_eq!(
        stroke.points(),
        &[
            Point::new(50, 400),
            Point::new(100, 400),
            Point::new(200, 400),
            Point::new(300, 400),
        ]
    );
}

#[test]
fn strip_boundary_pixel_belongs_to_button() {
    let mut fx = Fixture::new();
    let edge = fx.controller.layout().strip_x();
    assert_eq!(edge, 600);

    let action = fx.controller.apply(CanvasEvent::Down(Point::new(edge - 1, 10)));
    assert_eq!(action, None);
    fx.controller.apply(CanvasEvent::Move(Point::new(edge, 10)));

    assert_eq!(fx.controller.canvas().strokes()[0].len(), 1);
    assert!(fx.controller.is_pressed(ButtonId::Send));
}

#[test]
fn press_feedback_follows_finger() {
    let mut fx = Fixture::new();

    fx.controller.apply(CanvasEvent::Down(Point::new(700, 100)));
    assert!(fx.controller.is_pressed(ButtonId::Send));

    fx.controller.apply(CanvasEvent::Move(Point::new(700, 400)));
    assert!(!fx.controller.is_pressed(ButtonId::Send));
    assert!(fx.controller.is_pressed(ButtonId::Reset));

    fx.controller.apply(CanvasEvent::Move(Point::new(1200, 400)));
    assert!(!fx.controller.is_pressed(ButtonId::Send));
    assert!(!fx.controller.is_pressed(ButtonId::Reset));

    fx.controller.apply(CanvasEvent::Move(Point::new(700, 100)));
    assert!(fx.controller.is_pressed(ButtonId::Send));
    fx.controller.apply(CanvasEvent::Move(Point::new(100, 100)));
    assert!(!fx.controller.is_pressed(ButtonId::Send));
}

#[test]
fn release_clears_press_flags_everywhere() {
    let mut fx = Fixture::new();
    fx.controller.apply(CanvasEvent::Down(Point::new(700, 100)));
    assert_eq!(
        fx.controller.apply(CanvasEvent::Up(Point::new(100, 100))),
        None
    );
    assert!(!fx.controller.is_pressed(ButtonId::Send));
    assert!(!fx.controller.is_pressed(ButtonId::Reset));
}

#[test]
fn motion_while_idle_is_ignored() {
    let mut fx = Fixture::new();
    fx.feed(&[motion(0.1, 0.1), motion(0.95, 0.1)]);
    assert!(fx.controller.canvas().is_empty());
    assert!(!fx.controller.is_pressed(ButtonId::Send));
}

#[test]
fn second_down_closes_previous_stroke() {
    let mut fx = Fixture::new();
    fx.feed(&[down(0.1, 0.1), motion(0.2, 0.1), down(0.3, 0.3), motion(0.4, 0.3)]);

    let strokes = fx.controller.canvas().strokes();
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[0].len(), 2);
    assert_eq!(strokes[1].len(), 2);
}

#[test]
fn cancel_keeps_stroke_and_skips_button_action() {
    let mut fx = Fixture::new();
    fx.feed(&[down(0.1, 0.1), motion(0.95, 0.1), InputEvent::PointerCancel]);

    assert_eq!(fx.controller.canvas().len(), 1);
    assert!(!fx.controller.is_drawing());
    assert!(!fx.controller.is_pressed(ButtonId::Send));
    assert!(fx.exported_files().is_empty());
}

#[test]
fn release_outside_screen_does_nothing() {
    let mut fx = Fixture::new();
    fx.feed(&[down(0.1, 0.1), up(-0.2, 0.5), up(f64::NAN, 0.5)]);
    assert_eq!(fx.controller.canvas().len(), 1);
    assert!(fx.exported_files().is_empty());
}

#[test]
fn quit_finishes_batch_before_stopping() {
    let mut fx = Fixture::new();
    let control = fx.feed(&[InputEvent::Quit, down(0.1, 0.1)]);
    assert_eq!(control, LoopControl::Quit);
    assert!(fx.controller.quit_requested());
    assert_eq!(fx.controller.canvas().len(), 1);
}

#[test]
fn empty_batch_is_a_no_op() {
    let mut fx = Fixture::new();
    assert_eq!(fx.feed(&[]), LoopControl::Continue);
    assert!(fx.surface.ops.is_empty());
}

#[test]
fn draw_renders_strokes_then_buttons_then_presents() {
    let mut fx = Fixture::new();
    fx.feed(&[down(0.1, 0.1), motion(0.2, 0.2)]);

    fx.controller.draw(&mut fx.surface).unwrap();

    let style = fx.controller.style().clone();
    let send_rect = fx.controller.layout().button_rect(ButtonId::Send);
    let reset_rect = fx.controller.layout().button_rect(ButtonId::Reset);
    assert_eq!(
        fx.surface.ops,
        vec![
            Op::Clear(style.background),
            Op::Polyline(vec![Point::new(100, 80), Point::new(200, 160)]),
            Op::Fill(send_rect, style.send_color),
            Op::Label("Send".to_string(), send_rect),
            Op::Fill(reset_rect, style.reset_color),
            Op::Label("Reset".to_string(), reset_rect),
            Op::Present,
        ]
    );
}

#[test]
fn draw_is_idempotent() {
    let mut fx = Fixture::new();
    fx.feed(&[down(0.1, 0.1), motion(0.2, 0.2), up(0.2, 0.2)]);

    fx.controller.draw(&mut fx.surface).unwrap();
    let first = std::mem::take(&mut fx.surface.ops);
    fx.controller.draw(&mut fx.surface).unwrap();

    assert_eq!(first, fx.surface.ops);
}

#[test]
fn pressed_button_is_drawn_shaded() {
    let mut fx = Fixture::new();
    fx.controller.apply(CanvasEvent::Down(Point::new(800, 600)));

    fx.controller.draw(&mut fx.surface).unwrap();

    let style = fx.controller.style();
    let reset_rect = fx.controller.layout().button_rect(ButtonId::Reset);
    let send_rect = fx.controller.layout().button_rect(ButtonId::Send);
    assert_eq!(
        fx.surface.fill_for(reset_rect),
        Some(style.reset_color.shaded(style.pressed_shade))
    );
    assert_eq!(fx.surface.fill_for(send_rect), Some(style.send_color));
}

#[test]
fn draw_after_reset_renders_no_strokes() {
    let mut fx = Fixture::new();
    fx.feed(&[down(0.1, 0.1), motion(0.2, 0.2), up(0.2, 0.2)]);
    fx.controller.reset_canvas();

    fx.controller.draw(&mut fx.surface).unwrap();

    assert!(fx.surface.polylines().is_empty());
}

#[test]
fn failed_capture_is_returned_and_canvas_kept() {
    let mut fx = Fixture::new();
    fx.surface.fail_capture = true;
    fx.feed(&[down(0.1, 0.1), up(0.1, 0.1)]);

    let err = fx
        .controller
        .handle_events(&mut fx.surface, [down(0.9, 0.1), up(0.9, 0.1)])
        .unwrap_err();

    assert!(matches!(err, ExportError::Capture(_)));
    assert!(!fx.controller.canvas().is_empty());
    assert!(fx.exported_files().is_empty());
}
