//! Mesh generation: one entry point dispatching over [`FillMode`].
//!
//! Generation is a pure, synchronous transform: identical inputs produce
//! byte-identical buffers. Every failure mode listed in the error design
//! (degenerate rects, missing sprite data, zero borders) recovers locally by
//! emitting nothing, so the result is always a valid, possibly empty, mesh.

use crate::foundation::core::{Point, Rect, Vec2};
use crate::foundation::error::TessellaResult;
use crate::layout::model::{FillMode, LayoutConfig, LayoutRegion};
use crate::mesh::buffer::MeshBuffer;
use crate::mesh::emit::{emit_hollow_frame, emit_mirrored_quad};
use crate::sprite::model::{Sprite, SpriteMesh};
use crate::tessellate::rect::{adjust_borders, drawing_rect, preserve_aspect_rect};

// UV applied when no sprite metadata is available.
const FULL_UV: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

/// Generate the mesh for `config` into a fresh buffer.
pub fn tessellate(
    config: &LayoutConfig,
    region: LayoutRegion,
    sprite: Option<&Sprite>,
) -> TessellaResult<MeshBuffer> {
    let mut out = MeshBuffer::default();
    tessellate_into(config, region, sprite, &mut out)?;
    Ok(out)
}

#[tracing::instrument(skip(config, sprite, out), fields(mode = ?config.mode))]
/// Generate the mesh for `config` into a caller-owned buffer.
///
/// The buffer is cleared before any geometry is written, so it can be reused
/// across calls to avoid reallocation; it carries no state between calls.
pub fn tessellate_into(
    config: &LayoutConfig,
    region: LayoutRegion,
    sprite: Option<&Sprite>,
    out: &mut MeshBuffer,
) -> TessellaResult<()> {
    out.clear();
    config.validate()?;
    if let Some(sprite) = sprite {
        sprite.validate()?;
    }
    if !config.enabled {
        return Ok(());
    }

    match config.mode {
        FillMode::Shape => match sprite.and_then(|s| s.mesh.as_ref().map(|m| (s, m))) {
            Some((sprite, mesh)) => generate_shape(config, region, sprite, mesh, out),
            // No shape available: fall back to the baseline quad.
            None => generate_stretch(config, region, sprite, out, config.preserve_aspect),
        },
        FillMode::Stretch => generate_stretch(config, region, sprite, out, config.preserve_aspect),
        FillMode::NineSlice => match sprite {
            Some(sprite) if sprite.has_border() => {
                generate_nine_slice(config, region, sprite, out);
            }
            // Borderless sprite degrades to stretch, aspect preservation off.
            _ => generate_stretch(config, region, sprite, out, false),
        },
    }
    Ok(())
}

/// The sprite's natural layout size in units, doubled on mirrored axes.
///
/// Mirroring is a layout multiplier: a mirrored sprite occupies twice the
/// linear extent on that axis, so a host sizing a region to the sprite's
/// native footprint must double it.
pub fn native_size(sprite: &Sprite, mirror_horizontal: bool, mirror_vertical: bool) -> Vec2 {
    let w = sprite.rect.width() / sprite.pixels_per_unit;
    let h = sprite.rect.height() / sprite.pixels_per_unit;
    Vec2::new(
        if mirror_horizontal { w * 2.0 } else { w },
        if mirror_vertical { h * 2.0 } else { h },
    )
}

/// Copy the sprite's own triangulation, scaled into the drawing rect.
///
/// The shape bounds map onto the rect (`bounds.min` to the rect origin), so
/// the bounds center lands on the rect center. Mirror, border and fill flags
/// do not apply: the shape supplies its own topology.
fn generate_shape(
    config: &LayoutConfig,
    region: LayoutRegion,
    sprite: &Sprite,
    mesh: &SpriteMesh,
    out: &mut MeshBuffer,
) {
    let mut r = region.rect;
    if config.preserve_aspect {
        r = preserve_aspect_rect(r, sprite.size(), region.pivot);
    }

    let b = mesh.bounds;
    if r.width() <= 0.0 || r.height() <= 0.0 || b.width() <= 0.0 || b.height() <= 0.0 {
        return;
    }
    let sx = r.width() / b.width();
    let sy = r.height() / b.height();

    for (vert, uv) in mesh.vertices.iter().zip(&mesh.uvs) {
        out.push_vert(
            Point::new(r.x0 + (vert.x - b.x0) * sx, r.y0 + (vert.y - b.y0) * sy),
            config.color,
            *uv,
        );
    }
    for tri in &mesh.triangles {
        out.push_triangle(tri[0], tri[1], tri[2]);
    }
}

/// Single-quad fill of the drawing rect, or hollow border bands when the
/// center is not filled.
fn generate_stretch(
    config: &LayoutConfig,
    region: LayoutRegion,
    sprite: Option<&Sprite>,
    out: &mut MeshBuffer,
    preserve_aspect: bool,
) {
    let v = drawing_rect(region, sprite, preserve_aspect);
    let uv = sprite.map_or(FULL_UV, Sprite::outer_uv);

    if config.fill_center {
        emit_mirrored_quad(
            out,
            v,
            uv,
            config.color,
            config.mirror_horizontal,
            config.mirror_vertical,
        );
    } else if config.border_fractions.any_positive() {
        emit_hollow_frame(out, v, config.border_fractions, uv, config.color);
    }
}

/// 3x3 grid with fixed-size caps and a stretching center.
///
/// Mirrored axes derive the far border from the near one, and edge cells on
/// the mirrored side sample the opposite edge's inner UV span reversed so
/// the visible border content stays consistent across the fold.
fn generate_nine_slice(
    config: &LayoutConfig,
    region: LayoutRegion,
    sprite: &Sprite,
    out: &mut MeshBuffer,
) {
    let outer = sprite.outer_uv();
    let inner = sprite.inner_uv();
    let units = 1.0 / sprite.pixels_per_unit;
    let padding = sprite.padding.scaled(units);
    let rect = region.rect;

    let mut border = adjust_borders(sprite.border.scaled(units), rect);
    if config.mirror_horizontal {
        border.right = border.left;
    }
    if config.mirror_vertical {
        border.bottom = border.top;
    }

    let xs = [
        rect.x0 + padding.left,
        rect.x0 + border.left,
        rect.x1 - border.right,
        rect.x1 - padding.right,
    ];
    let ys = [
        rect.y0 + padding.bottom,
        rect.y0 + border.bottom,
        rect.y1 - border.top,
        rect.y1 - padding.top,
    ];
    let us = [outer.x0, inner.x0, inner.x1, outer.x1];
    let vs = [outer.y0, inner.y0, inner.y1, outer.y1];

    for x in 0..3 {
        for y in 0..3 {
            let cell = Rect::new(xs[x], ys[y], xs[x + 1], ys[y + 1]);

            if x == 1 && y == 1 && !config.fill_center {
                if config.border_fractions.any_positive() {
                    emit_hollow_frame(
                        out,
                        cell,
                        config.border_fractions,
                        Rect::new(us[x], vs[y], us[x + 1], vs[y + 1]),
                        config.color,
                    );
                }
                continue;
            }

            let uv = if x == 2 && y == 0 && config.mirror_horizontal && config.mirror_vertical {
                // Double-mirror corner: u from the left column reversed, v
                // from the top row reversed.
                Rect::new(us[1], vs[3], us[0], vs[2])
            } else if x == 2 && config.mirror_horizontal {
                Rect::new(us[1], vs[y], us[0], vs[y + 1])
            } else if y == 0 && config.mirror_vertical {
                Rect::new(us[x], vs[3], us[x + 1], vs[2])
            } else {
                Rect::new(us[x], vs[y], us[x + 1], vs[y + 1])
            };

            emit_mirrored_quad(
                out,
                cell,
                uv,
                config.color,
                config.mirror_horizontal && x == 1,
                config.mirror_vertical && y == 1,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tessellate/generator.rs"]
mod tests;
