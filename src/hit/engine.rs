//! Point-containment queries against the tessellated shape.
//!
//! Queries are pure and never panic: an absent sprite mesh or collider
//! simply fails its branch, and numerically degenerate triangles count as
//! misses.

use crate::foundation::core::{Affine, Point, Vec2};
use crate::layout::model::{LayoutConfig, LayoutRegion};
use crate::sprite::model::Sprite;
use crate::tessellate::rect::preserve_aspect_rect;

/// External 2D collider supplied by the asset collaborator.
///
/// Implementations answer containment for a point in the object's local
/// space.
pub trait HitShape {
    /// True when `point` lies inside the collider.
    fn contains(&self, point: Point) -> bool;
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize, PartialEq)]
/// Per-object hit-testing options.
pub struct HitOptions {
    /// Test against the sprite's own triangulated mesh instead of the
    /// layout rect.
    #[serde(default)]
    pub use_shape_hit_area: bool,
    /// Per-axis shrink of the effective hit region, clamped to `(0, 1]`.
    /// `(1, 1)` leaves the region untouched.
    #[serde(default = "default_hit_scale")]
    pub hit_scale: Vec2,
}

fn default_hit_scale() -> Vec2 {
    Vec2::new(1.0, 1.0)
}

impl Default for HitOptions {
    fn default() -> Self {
        Self {
            use_shape_hit_area: false,
            hit_scale: default_hit_scale(),
        }
    }
}

/// One containment query.
pub struct HitQuery<'a> {
    /// Query point in world/screen space.
    pub point: Point,
    /// World-to-local transform supplied by the scene collaborator.
    pub to_local: Affine,
    /// Optional external collider, evaluated on the local-space point.
    pub collider: Option<&'a dyn HitShape>,
    /// Hit-testing options.
    pub options: HitOptions,
}

impl HitQuery<'_> {
    /// Query for a point already in local space (identity transform, no
    /// collider, default options).
    pub fn local(point: Point) -> Self {
        Self {
            point,
            to_local: Affine::IDENTITY,
            collider: None,
            options: HitOptions::default(),
        }
    }
}

#[tracing::instrument(skip(config, sprite, query))]
/// Decide whether `query.point` hits the configured shape.
///
/// Evaluation order: O(1) rect containment when nothing special is
/// configured. Otherwise the point is brought into local space, remapped by
/// the inverse hit scale around the region pivot, and tested against the
/// sprite mesh, the external collider, and (only when neither is
/// configured) the plain rect, in that priority order. Rect containment is
/// inclusive on all edges.
pub fn hit_test(
    config: &LayoutConfig,
    region: LayoutRegion,
    sprite: Option<&Sprite>,
    query: &HitQuery<'_>,
) -> bool {
    let scale = clamped_hit_scale(query.options.hit_scale);
    let plain = !query.options.use_shape_hit_area && query.collider.is_none();
    let unit_scale = scale.x == 1.0 && scale.y == 1.0;

    let mut p = query.to_local * query.point;
    if plain && unit_scale {
        return contains_inclusive(region, p);
    }

    if !unit_scale {
        let c = region.pivot_point();
        p = Point::new(c.x + (p.x - c.x) / scale.x, c.y + (p.y - c.y) / scale.y);
    }

    if query.options.use_shape_hit_area && shape_contains(config, region, sprite, p) {
        return true;
    }
    if let Some(collider) = query.collider
        && collider.contains(p)
    {
        return true;
    }
    plain && contains_inclusive(region, p)
}

/// Barycentric point-in-triangle test, boundary inclusive.
///
/// Degenerate (collinear) triangles produce a non-finite inverse
/// denominator and count as "outside" rather than propagating NaN.
pub fn point_in_triangle(a: Point, b: Point, c: Point, p: Point) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(v0);
    let dot01 = v0.dot(v1);
    let dot02 = v0.dot(v2);
    let dot11 = v1.dot(v1);
    let dot12 = v1.dot(v2);

    let inv_denom = 1.0 / (dot00 * dot11 - dot01 * dot01);
    if !inv_denom.is_finite() {
        return false;
    }

    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    if !(0.0..=1.0).contains(&u) {
        return false;
    }
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;
    if !(0.0..=1.0).contains(&v) {
        return false;
    }
    u + v <= 1.0
}

fn clamped_hit_scale(scale: Vec2) -> Vec2 {
    fn clamp_axis(s: f64) -> f64 {
        if s.is_finite() && s > 0.0 { s.min(1.0) } else { 1.0 }
    }
    Vec2::new(clamp_axis(scale.x), clamp_axis(scale.y))
}

fn contains_inclusive(region: LayoutRegion, p: Point) -> bool {
    let r = region.rect;
    p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
}

/// Scan the sprite mesh triangles for `p`, mapped back into shape space
/// through the inverse of the shape placement used by generation.
fn shape_contains(
    config: &LayoutConfig,
    region: LayoutRegion,
    sprite: Option<&Sprite>,
    p: Point,
) -> bool {
    let Some(sprite) = sprite else {
        return false;
    };
    let Some(mesh) = &sprite.mesh else {
        return false;
    };

    let mut r = region.rect;
    if config.preserve_aspect {
        r = preserve_aspect_rect(r, sprite.size(), region.pivot);
    }
    let b = mesh.bounds;
    if r.width() <= 0.0 || r.height() <= 0.0 || b.width() <= 0.0 || b.height() <= 0.0 {
        return false;
    }

    let sx = r.width() / b.width();
    let sy = r.height() / b.height();
    let q = Point::new(b.x0 + (p.x - r.x0) / sx, b.y0 + (p.y - r.y0) / sy);

    let vert = |i: u16| mesh.vertices.get(usize::from(i)).copied();
    mesh.triangles.iter().any(|tri| {
        match (vert(tri[0]), vert(tri[1]), vert(tri[2])) {
            (Some(a), Some(b), Some(c)) => point_in_triangle(a, b, c, q),
            // Out-of-range indices miss rather than abort the scan.
            _ => false,
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/hit/engine.rs"]
mod tests;
