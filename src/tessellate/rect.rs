//! Rect arithmetic feeding the generators: border scale-down, aspect
//! preservation and the padding-inset drawing rect.

use crate::foundation::core::{Edges, Rect, Vec2};
use crate::layout::model::LayoutRegion;
use crate::sprite::model::Sprite;

/// Shrink nine-slice borders so they never exceed the rect extents.
///
/// Each axis is handled independently: when the combined borders exceed the
/// extent, both sides are scaled by `extent / combined`, preserving their
/// ratio. The combined check keeps the division well-defined.
pub fn adjust_borders(border: Edges, rect: Rect) -> Edges {
    let mut out = border;

    let combined = out.horizontal();
    if rect.width() < combined && combined > 0.0 {
        let ratio = rect.width() / combined;
        out.left *= ratio;
        out.right *= ratio;
    }

    let combined = out.vertical();
    if rect.height() < combined && combined > 0.0 {
        let ratio = rect.height() / combined;
        out.bottom *= ratio;
        out.top *= ratio;
    }

    out
}

/// Shrink one axis of `rect` so it matches `size`'s aspect ratio, anchored
/// at the normalized `pivot` so the pivot point does not move.
///
/// A degenerate `size` (zero area) returns `rect` unchanged.
pub fn preserve_aspect_rect(rect: Rect, size: Vec2, pivot: Vec2) -> Rect {
    if size.x * size.x + size.y * size.y == 0.0 {
        return rect;
    }

    let sprite_ratio = size.x / size.y;
    let rect_ratio = rect.width() / rect.height();

    if sprite_ratio > rect_ratio {
        let old_height = rect.height();
        let height = rect.width() / sprite_ratio;
        let y0 = rect.y0 + (old_height - height) * pivot.y;
        Rect::new(rect.x0, y0, rect.x1, y0 + height)
    } else {
        let old_width = rect.width();
        let width = rect.height() * sprite_ratio;
        let x0 = rect.x0 + (old_width - width) * pivot.x;
        Rect::new(x0, rect.y0, x0 + width, rect.y1)
    }
}

/// Final drawable box: the region rect inset by the sprite's padding
/// fractions, optionally aspect-adjusted first.
///
/// Padding pixels become fractions of the sprite's pixel size; a degenerate
/// sprite size yields no inset. Without a sprite the region rect is returned
/// unchanged (the baseline single-quad path).
pub fn drawing_rect(region: LayoutRegion, sprite: Option<&Sprite>, preserve_aspect: bool) -> Rect {
    let mut r = region.rect;
    let Some(sprite) = sprite else {
        return r;
    };

    let size = sprite.size();
    let pad = sprite.padding;
    let (fx0, fy0, fx1, fy1) = if size.x > 0.0 && size.y > 0.0 {
        (
            pad.left / size.x,
            pad.bottom / size.y,
            (size.x - pad.right) / size.x,
            (size.y - pad.top) / size.y,
        )
    } else {
        (0.0, 0.0, 1.0, 1.0)
    };

    if preserve_aspect {
        r = preserve_aspect_rect(r, size, region.pivot);
    }

    Rect::new(
        r.x0 + r.width() * fx0,
        r.y0 + r.height() * fy0,
        r.x0 + r.width() * fx1,
        r.y0 + r.height() * fy1,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/tessellate/rect.rs"]
mod tests;
