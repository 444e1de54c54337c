//! Cairo drawing primitives used by the offscreen surface.

use super::color::Color;
use super::label::LabelRenderer;
use crate::canvas::Point;
use crate::util::Rect;

/// Paints the whole target with an opaque background color.
pub fn render_background(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let painted = ctx.paint();
    ctx.restore()?;
    painted
}

/// Fills an axis-aligned rectangle.
pub fn render_rect(ctx: &cairo::Context, rect: Rect, color: Color) -> Result<(), cairo::Error> {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.rectangle(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    );
    ctx.fill()
}

/// Render a freehand stroke as connected line segments through `points`.
///
/// A single-point stroke becomes a dot of diameter `thick`; an empty stroke draws
/// nothing.
pub fn render_polyline(
    ctx: &cairo::Context,
    points: &[Point],
    color: Color,
    thick: f64,
) -> Result<(), cairo::Error> {
    let Some((first, rest)) = points.split_first() else {
        return Ok(());
    };

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);

    if rest.is_empty() {
        ctx.arc(
            first.x as f64,
            first.y as f64,
            thick / 2.0,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        return ctx.fill();
    }

    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(first.x as f64, first.y as f64);
    for point in rest {
        ctx.line_to(point.x as f64, point.y as f64);
    }

    ctx.stroke()
}

/// Renders `text` centered inside `rect`, wrapped to the rectangle width.
pub fn render_label(
    ctx: &cairo::Context,
    labels: &LabelRenderer,
    text: &str,
    color: Color,
    rect: Rect,
) -> Result<(), cairo::Error> {
    if text.is_empty() {
        return Ok(());
    }

    ctx.save()?;
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = labels.layout(ctx, text, rect.width);
    let (_, text_height) = layout.pixel_size();
    let top = rect.y as f64 + (rect.height - text_height) as f64 / 2.0;

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.move_to(rect.x as f64, top);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore()
}
