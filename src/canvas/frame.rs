//! Ordered stroke container backing the drawing area.

use super::stroke::Stroke;

/// Every stroke drawn since the last reset.
///
/// Insertion order is draw order: the first stroke is the bottom layer. Strokes are
/// addressed by index so the controller can track the open stroke explicitly.
#[derive(Debug, Clone, Default)]
pub struct CanvasState {
    strokes: Vec<Stroke>,
}

impl CanvasState {
    /// Creates an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new empty stroke and returns its index.
    pub fn begin_stroke(&mut self) -> usize {
        self.strokes.push(Stroke::new());
        self.strokes.len() - 1
    }

    /// Mutable access to a stroke by index.
    pub(crate) fn stroke_mut(&mut self, index: usize) -> Option<&mut Stroke> {
        self.strokes.get_mut(index)
    }

    /// Removes all strokes.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Strokes in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
