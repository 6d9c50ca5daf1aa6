use crate::foundation::core::{Edges, Point, Rect, Rgba8, Vec2};
use crate::foundation::error::{TessellaError, TessellaResult};

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
/// Strategy used to fill the layout region with sprite geometry.
pub enum FillMode {
    /// Stretch the whole sprite over the drawing rect as one quad.
    #[default]
    Stretch,
    /// 3x3 grid with fixed-size corners and edges and a stretching center.
    NineSlice,
    /// Copy the sprite's own triangulated mesh, scaled into the drawing rect.
    Shape,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize, PartialEq)]
/// Declarative description of one tessellation request.
///
/// A config is a pure data model: build it directly, through
/// [`crate::LayoutConfigBuilder`], or deserialize it via Serde. It stays
/// immutable for the duration of one [`crate::tessellate()`] call.
pub struct LayoutConfig {
    /// Fill strategy.
    #[serde(default)]
    pub mode: FillMode,
    /// Fold the region at its vertical midline and duplicate the left half,
    /// UV-flipped, into the right half.
    #[serde(default)]
    pub mirror_horizontal: bool,
    /// Fold the region at its horizontal midline and duplicate the top half,
    /// UV-flipped, into the bottom half.
    #[serde(default)]
    pub mirror_vertical: bool,
    /// Shrink one axis of the drawing rect so it matches the sprite's aspect
    /// ratio, anchored at the region pivot.
    #[serde(default)]
    pub preserve_aspect: bool,
    /// Draw the interior. When false, only the hollow border bands described
    /// by `border_fractions` are emitted.
    #[serde(default = "default_true")]
    pub fill_center: bool,
    /// Hollow border bands as fractions of the box extents, each in `[0, 1]`.
    /// Only consulted when `fill_center` is false.
    #[serde(default)]
    pub border_fractions: Edges,
    /// Uniform vertex color and alpha.
    #[serde(default)]
    pub color: Rgba8,
    /// Whether the host should display the generated mesh. Pure data: the
    /// host decides culling and rebuild registration from it.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Whether tessellation emits geometry at all. When false, generation
    /// produces an empty (drawable-but-invisible) mesh.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: FillMode::Stretch,
            mirror_horizontal: false,
            mirror_vertical: false,
            preserve_aspect: false,
            fill_center: true,
            border_fractions: Edges::ZERO,
            color: Rgba8::WHITE,
            visible: true,
            enabled: true,
        }
    }
}

impl LayoutConfig {
    /// Check that hollow border fractions are inside `[0, 1]`.
    pub fn validate(&self) -> TessellaResult<()> {
        let f = self.border_fractions;
        for (side, v) in [
            ("left", f.left),
            ("right", f.right),
            ("top", f.top),
            ("bottom", f.bottom),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(TessellaError::validation(format!(
                    "border fraction '{side}' must be in [0, 1], got {v}"
                )));
            }
        }
        Ok(())
    }

    /// Pure visibility predicate for the host's cull decision.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize, PartialEq)]
/// The rectangular layout region a mesh is generated into.
///
/// `rect` is the region in local space (x0 = left, y0 = bottom). `pivot` is
/// normalized over the rect, `(0, 0)` at the bottom-left corner and `(1, 1)`
/// at the top-right; it anchors aspect-preserving shrink and hit-scale
/// remapping.
pub struct LayoutRegion {
    /// Region rectangle in local space.
    pub rect: Rect,
    /// Normalized pivot, defaults to the center `(0.5, 0.5)`.
    #[serde(default = "default_pivot")]
    pub pivot: Vec2,
}

fn default_pivot() -> Vec2 {
    Vec2::new(0.5, 0.5)
}

impl LayoutRegion {
    /// Region with a centered pivot.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            pivot: default_pivot(),
        }
    }

    /// Replace the normalized pivot.
    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    /// The pivot in local-space coordinates.
    pub fn pivot_point(&self) -> Point {
        Point::new(
            self.rect.x0 + self.rect.width() * self.pivot.x,
            self.rect.y0 + self.rect.height() * self.pivot.y,
        )
    }
}
