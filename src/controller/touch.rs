use crate::canvas::Point;
use crate::input::CanvasEvent;
use crate::layout::{ButtonId, Region};
use log::{debug, trace};

use super::CanvasController;

impl CanvasController {
    /// Applies one pixel-space event to the strokes and button flags.
    ///
    /// Returns the button whose action the event triggered, if any. The caller
    /// performs the action so export can reach the display surface.
    pub fn apply(&mut self, event: CanvasEvent) -> Option<ButtonId> {
        match event {
            CanvasEvent::Quit => {
                debug!("Quit requested");
                self.quit_requested = true;
                None
            }
            CanvasEvent::Down(point) => {
                self.on_touch_down(point);
                None
            }
            CanvasEvent::Move(point) => {
                self.on_touch_motion(point);
                None
            }
            CanvasEvent::Up(point) => self.on_touch_up(point),
            CanvasEvent::Cancel => {
                self.on_touch_cancel();
                None
            }
        }
    }

    /// Opens a new stroke, then treats the contact point exactly like a move.
    ///
    /// A second down without an up in between closes the previous stroke first.
    pub(super) fn on_touch_down(&mut self, point: Point) {
        if let Some(previous) = self.open_stroke.take() {
            debug!("Touch down while stroke {} open, closing it", previous);
        }
        let index = self.canvas.begin_stroke();
        self.open_stroke = Some(index);
        trace!("Opened stroke {} at ({}, {})", index, point.x, point.y);
        self.on_touch_motion(point);
    }

    /// Extends the open stroke or updates press feedback. Ignored while idle.
    pub(super) fn on_touch_motion(&mut self, point: Point) {
        let Some(index) = self.open_stroke else {
            return;
        };

        match self.layout.classify(point) {
            Region::Canvas => {
                if let Some(stroke) = self.canvas.stroke_mut(index) {
                    stroke.push(point);
                }
                self.set_pressed(None);
            }
            Region::Button(id) => self.set_pressed(Some(id)),
            Region::Outside => self.set_pressed(None),
        }
    }

    /// Closes the open stroke and reports the button under the release point.
    pub(super) fn on_touch_up(&mut self, point: Point) -> Option<ButtonId> {
        if let Some(index) = self.open_stroke.take() {
            trace!("Closed stroke {} at ({}, {})", index, point.x, point.y);
        }
        self.set_pressed(None);

        match self.layout.classify(point) {
            Region::Button(id) => {
                debug!("{:?} released at ({}, {})", id, point.x, point.y);
                Some(id)
            }
            Region::Canvas | Region::Outside => None,
        }
    }

    /// Ends the gesture without triggering any button.
    pub(super) fn on_touch_cancel(&mut self) {
        if let Some(index) = self.open_stroke.take() {
            debug!("Touch cancelled, stroke {} kept as drawn", index);
        }
        self.set_pressed(None);
    }

    fn set_pressed(&mut self, id: Option<ButtonId>) {
        self.send.pressed = id == Some(ButtonId::Send);
        self.reset.pressed = id == Some(ButtonId::Reset);
    }
}
