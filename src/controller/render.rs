use crate::draw::{DisplaySurface, RenderError};
use crate::layout::{Button, ButtonId};

use super::CanvasController;

impl CanvasController {
    /// Draws the full scene without presenting it.
    ///
    /// Strokes are painted first and the button strip last, so a thick stroke
    /// ending near the strip edge never bleeds over the buttons.
    pub fn render_scene<S>(&self, surface: &mut S) -> Result<(), RenderError>
    where
        S: DisplaySurface + ?Sized,
    {
        surface.clear(self.style.background)?;

        for stroke in self.canvas.strokes() {
            if stroke.is_empty() {
                continue;
            }
            surface.draw_polyline(
                stroke.points(),
                self.style.stroke_color,
                self.style.stroke_thickness,
            )?;
        }

        self.render_button(surface, &self.send, &self.style.send_label)?;
        self.render_button(surface, &self.reset, &self.style.reset_label)?;
        Ok(())
    }

    /// Redraws and presents one frame. Safe to call every frame.
    pub fn draw<S>(&self, surface: &mut S) -> Result<(), RenderError>
    where
        S: DisplaySurface + ?Sized,
    {
        self.render_scene(surface)?;
        surface.present()
    }

    fn render_button<S>(
        &self,
        surface: &mut S,
        button: &Button,
        label: &str,
    ) -> Result<(), RenderError>
    where
        S: DisplaySurface + ?Sized,
    {
        let base = match button.id {
            ButtonId::Send => self.style.send_color,
            ButtonId::Reset => self.style.reset_color,
        };
        let fill = if button.pressed {
            base.shaded(self.style.pressed_shade)
        } else {
            base
        };

        surface.fill_rect(button.region, fill)?;
        if !label.is_empty() {
            surface.draw_label(label, self.style.label_color, button.region)?;
        }
        Ok(())
    }
}
