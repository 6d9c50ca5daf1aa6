//! Quad emitters shared by the stretch and nine-slice generators.
//!
//! All emitters append to a [`MeshBuffer`] and silently skip degenerate
//! boxes (`x0 >= x1` or `y0 >= y1`), so callers never produce
//! negative-area triangles.

use crate::foundation::core::{Edges, Point, Rect, Rgba8};
use crate::mesh::buffer::MeshBuffer;

/// Append one axis-aligned quad (two triangles).
///
/// `uv` maps corner-for-corner onto `pos` and may be flipped on either axis.
pub fn emit_quad(out: &mut MeshBuffer, pos: Rect, uv: Rect, color: Rgba8) {
    if pos.x0 >= pos.x1 || pos.y0 >= pos.y1 {
        return;
    }
    let base = out.vertex_count() as u16;

    out.push_vert(Point::new(pos.x0, pos.y0), color, Point::new(uv.x0, uv.y0));
    out.push_vert(Point::new(pos.x0, pos.y1), color, Point::new(uv.x0, uv.y1));
    out.push_vert(Point::new(pos.x1, pos.y1), color, Point::new(uv.x1, uv.y1));
    out.push_vert(Point::new(pos.x1, pos.y0), color, Point::new(uv.x1, uv.y0));

    out.push_triangle(base, base + 1, base + 2);
    out.push_triangle(base + 2, base + 3, base);
}

/// Append a quad folded at its midline(s) per the mirror flags.
///
/// The source texture content occupies the left (respectively top) half of
/// `pos`; the other half receives a UV-flipped duplicate, sharing the fold
/// vertices so the reflection is seamless. One mirrored axis emits 6
/// vertices / 4 triangles, both axes emit 9 vertices / 8 triangles in an
/// hourglass pattern. The union of the emitted quads is exactly `pos`.
pub fn emit_mirrored_quad(
    out: &mut MeshBuffer,
    pos: Rect,
    uv: Rect,
    color: Rgba8,
    mirror_h: bool,
    mirror_v: bool,
) {
    if pos.x0 >= pos.x1 || pos.y0 >= pos.y1 {
        return;
    }
    let base = out.vertex_count() as u16;

    match (mirror_h, mirror_v) {
        (true, true) => {
            let half_w = pos.width() / 2.0;
            let half_h = pos.height() / 2.0;
            let mid_x = pos.x1 - half_w;
            let mid_y = pos.y0 + half_h;

            // Source quad in the top-left quadrant.
            out.push_vert(Point::new(pos.x0, mid_y), color, Point::new(uv.x0, uv.y0));
            out.push_vert(Point::new(pos.x0, pos.y1), color, Point::new(uv.x0, uv.y1));
            out.push_vert(Point::new(mid_x, pos.y1), color, Point::new(uv.x1, uv.y1));
            out.push_vert(Point::new(mid_x, mid_y), color, Point::new(uv.x1, uv.y0));

            // Right column, u flipped.
            out.push_vert(Point::new(pos.x1, pos.y1), color, Point::new(uv.x0, uv.y1));
            out.push_vert(Point::new(pos.x1, mid_y), color, Point::new(uv.x0, uv.y0));

            // Bottom row, v flipped (corner flips both).
            out.push_vert(Point::new(pos.x0, pos.y0), color, Point::new(uv.x0, uv.y1));
            out.push_vert(Point::new(mid_x, pos.y0), color, Point::new(uv.x1, uv.y1));
            out.push_vert(Point::new(pos.x1, pos.y0), color, Point::new(uv.x0, uv.y1));

            out.push_triangle(base, base + 1, base + 2);
            out.push_triangle(base + 2, base + 3, base);
            out.push_triangle(base + 3, base + 2, base + 5);
            out.push_triangle(base + 5, base + 2, base + 4);
            out.push_triangle(base, base + 3, base + 7);
            out.push_triangle(base, base + 7, base + 6);
            out.push_triangle(base + 3, base + 5, base + 7);
            out.push_triangle(base + 5, base + 8, base + 7);
        }
        (true, false) => {
            let half_w = pos.width() / 2.0;
            let mid_x = pos.x1 - half_w;

            out.push_vert(Point::new(pos.x0, pos.y0), color, Point::new(uv.x0, uv.y0));
            out.push_vert(Point::new(pos.x0, pos.y1), color, Point::new(uv.x0, uv.y1));
            out.push_vert(Point::new(mid_x, pos.y1), color, Point::new(uv.x1, uv.y1));
            out.push_vert(Point::new(mid_x, pos.y0), color, Point::new(uv.x1, uv.y0));

            out.push_vert(Point::new(pos.x1, pos.y1), color, Point::new(uv.x0, uv.y1));
            out.push_vert(Point::new(pos.x1, pos.y0), color, Point::new(uv.x0, uv.y0));

            out.push_triangle(base, base + 1, base + 2);
            out.push_triangle(base + 2, base + 3, base);
            out.push_triangle(base + 3, base + 2, base + 5);
            out.push_triangle(base + 5, base + 2, base + 4);
        }
        (false, true) => {
            let half_h = pos.height() / 2.0;
            let mid_y = pos.y0 + half_h;

            out.push_vert(Point::new(pos.x0, mid_y), color, Point::new(uv.x0, uv.y0));
            out.push_vert(Point::new(pos.x0, pos.y1), color, Point::new(uv.x0, uv.y1));
            out.push_vert(Point::new(pos.x1, pos.y1), color, Point::new(uv.x1, uv.y1));
            out.push_vert(Point::new(pos.x1, mid_y), color, Point::new(uv.x1, uv.y0));

            out.push_vert(Point::new(pos.x0, pos.y0), color, Point::new(uv.x0, uv.y1));
            out.push_vert(Point::new(pos.x1, pos.y0), color, Point::new(uv.x1, uv.y1));

            out.push_triangle(base, base + 1, base + 2);
            out.push_triangle(base + 2, base + 3, base);
            out.push_triangle(base, base + 3, base + 5);
            out.push_triangle(base, base + 5, base + 4);
        }
        (false, false) => {
            out.push_vert(Point::new(pos.x0, pos.y0), color, Point::new(uv.x0, uv.y0));
            out.push_vert(Point::new(pos.x0, pos.y1), color, Point::new(uv.x0, uv.y1));
            out.push_vert(Point::new(pos.x1, pos.y1), color, Point::new(uv.x1, uv.y1));
            out.push_vert(Point::new(pos.x1, pos.y0), color, Point::new(uv.x1, uv.y0));

            out.push_triangle(base, base + 1, base + 2);
            out.push_triangle(base + 2, base + 3, base);
        }
    }
}

/// Append up to four hollow border bands, leaving the interior empty.
///
/// The inner box is `pos` inset on each side by `fraction x extent`. Bottom
/// and top bands span the full width; left and right bands exclude the
/// corners already covered. A side with a zero fraction emits nothing, so
/// all-zero fractions emit no geometry at all.
pub fn emit_hollow_frame(
    out: &mut MeshBuffer,
    pos: Rect,
    fractions: Edges,
    uv: Rect,
    color: Rgba8,
) {
    if pos.x0 >= pos.x1 || pos.y0 >= pos.y1 {
        return;
    }
    let w = pos.width();
    let h = pos.height();
    let uv_w = uv.x1 - uv.x0;
    let uv_h = uv.y1 - uv.y0;

    let inner = Rect::new(
        pos.x0 + w * fractions.left,
        pos.y0 + h * fractions.bottom,
        pos.x1 - w * fractions.right,
        pos.y1 - h * fractions.top,
    );
    let inner_uv = Rect::new(
        uv.x0 + uv_w * fractions.left,
        uv.y0 + uv_h * fractions.bottom,
        uv.x1 - uv_w * fractions.right,
        uv.y1 - uv_h * fractions.top,
    );

    if fractions.bottom > 0.0 {
        emit_quad(
            out,
            Rect::new(pos.x0, pos.y0, pos.x1, inner.y0),
            Rect::new(uv.x0, uv.y0, uv.x1, inner_uv.y0),
            color,
        );
    }
    if fractions.top > 0.0 {
        emit_quad(
            out,
            Rect::new(pos.x0, inner.y1, pos.x1, pos.y1),
            Rect::new(uv.x0, inner_uv.y1, uv.x1, uv.y1),
            color,
        );
    }
    if fractions.left > 0.0 {
        emit_quad(
            out,
            Rect::new(pos.x0, inner.y0, inner.x0, inner.y1),
            Rect::new(uv.x0, inner_uv.y0, inner_uv.x0, inner_uv.y1),
            color,
        );
    }
    if fractions.right > 0.0 {
        emit_quad(
            out,
            Rect::new(inner.x1, inner.y0, pos.x1, inner.y1),
            Rect::new(inner_uv.x1, inner_uv.y0, uv.x1, inner_uv.y1),
            color,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mesh/emit.rs"]
mod tests;
