//! Pango-backed text renderer for button labels.

use super::font::FontDescriptor;

/// Lays out short labels with a fixed font.
#[derive(Debug, Clone)]
pub struct LabelRenderer {
    font: FontDescriptor,
    size: f64,
}

impl LabelRenderer {
    pub fn new(font: FontDescriptor, size: f64) -> Self {
        Self { font, size }
    }

    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Builds a centered layout for `text`, wrapping at `wrap_width` pixels.
    pub fn layout(&self, ctx: &cairo::Context, text: &str, wrap_width: i32) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(ctx);
        let font_desc = pango::FontDescription::from_string(&self.font.to_pango_string(self.size));
        layout.set_font_description(Some(&font_desc));
        layout.set_width(wrap_width.max(1).saturating_mul(pango::SCALE));
        layout.set_wrap(pango::WrapMode::WordChar);
        layout.set_alignment(pango::Alignment::Center);
        layout.set_text(text);
        layout
    }
}

impl Default for LabelRenderer {
    fn default() -> Self {
        Self::new(FontDescriptor::default(), 48.0)
    }
}
