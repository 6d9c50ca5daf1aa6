use crate::foundation::core::{Edges, Point, Rect, Vec2};
use crate::foundation::error::{TessellaError, TessellaResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq)]
/// Metadata of a source image as prepared by the asset collaborator.
///
/// A sprite is a sub-rectangle of an atlas texture plus the layout metadata
/// the tessellator consumes: nine-slice border caps, transparent-trim
/// padding, pixel density, and an optional tight [`SpriteMesh`]. This crate
/// only reads sprites; loading and packing them is out of scope.
pub struct Sprite {
    /// Placement of the sprite inside its atlas texture, in pixels.
    pub rect: Rect,
    /// Full atlas texture dimensions, in pixels.
    pub atlas_size: Vec2,
    /// Nine-slice border caps, in pixels. Zero on all sides means the sprite
    /// has no border and nine-slice layout degrades to stretch.
    #[serde(default)]
    pub border: Edges,
    /// Transparent trim removed during packing, in pixels.
    #[serde(default)]
    pub padding: Edges,
    /// Pixel density used to convert border and padding pixels into layout
    /// units. Must be positive.
    #[serde(default = "default_pixels_per_unit")]
    pub pixels_per_unit: f64,
    /// Tight triangulated outline of the opaque region, if the asset
    /// pipeline produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh: Option<SpriteMesh>,
}

fn default_pixels_per_unit() -> f64 {
    100.0
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq)]
/// Triangulated sprite outline in shape-local units.
pub struct SpriteMesh {
    /// Vertex positions in shape-local units.
    pub vertices: Vec<Point>,
    /// Per-vertex texture coordinates, parallel to `vertices`.
    pub uvs: Vec<Point>,
    /// Triangle index triples into `vertices`.
    pub triangles: Vec<[u16; 3]>,
    /// Axis-aligned bounds of `vertices` in shape-local units.
    pub bounds: Rect,
}

impl Sprite {
    /// Build a borderless, meshless sprite covering `rect` of an atlas.
    pub fn new(rect: Rect, atlas_size: Vec2) -> Self {
        Self {
            rect,
            atlas_size,
            border: Edges::ZERO,
            padding: Edges::ZERO,
            pixels_per_unit: default_pixels_per_unit(),
            mesh: None,
        }
    }

    /// Sprite pixel size (width, height).
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.rect.width(), self.rect.height())
    }

    /// True when any nine-slice border side is set.
    pub fn has_border(&self) -> bool {
        self.border.any_positive()
    }

    /// UV rectangle of the whole sprite inside its atlas, normalized to
    /// `[0, 1]` texture space.
    pub fn outer_uv(&self) -> Rect {
        Rect::new(
            self.rect.x0 / self.atlas_size.x,
            self.rect.y0 / self.atlas_size.y,
            self.rect.x1 / self.atlas_size.x,
            self.rect.y1 / self.atlas_size.y,
        )
    }

    /// UV rectangle of the sprite interior (atlas rect inset by the border),
    /// normalized to `[0, 1]` texture space.
    pub fn inner_uv(&self) -> Rect {
        Rect::new(
            (self.rect.x0 + self.border.left) / self.atlas_size.x,
            (self.rect.y0 + self.border.bottom) / self.atlas_size.y,
            (self.rect.x1 - self.border.right) / self.atlas_size.x,
            (self.rect.y1 - self.border.top) / self.atlas_size.y,
        )
    }

    /// Check metadata consistency.
    pub fn validate(&self) -> TessellaResult<()> {
        if !(self.pixels_per_unit > 0.0) || !self.pixels_per_unit.is_finite() {
            return Err(TessellaError::sprite("pixels_per_unit must be positive"));
        }
        if self.atlas_size.x <= 0.0 || self.atlas_size.y <= 0.0 {
            return Err(TessellaError::sprite("atlas_size must be positive"));
        }
        if self.rect.width() < 0.0 || self.rect.height() < 0.0 {
            return Err(TessellaError::sprite("sprite rect must not be inverted"));
        }
        if self.border.left < 0.0
            || self.border.right < 0.0
            || self.border.top < 0.0
            || self.border.bottom < 0.0
        {
            return Err(TessellaError::sprite("border sides must be non-negative"));
        }
        if let Some(mesh) = &self.mesh {
            mesh.validate()?;
        }
        Ok(())
    }
}

impl SpriteMesh {
    /// Check that UVs are parallel to vertices and indices are in range.
    pub fn validate(&self) -> TessellaResult<()> {
        if self.uvs.len() != self.vertices.len() {
            return Err(TessellaError::sprite(format!(
                "mesh has {} vertices but {} uvs",
                self.vertices.len(),
                self.uvs.len()
            )));
        }
        let count = self.vertices.len();
        for tri in &self.triangles {
            if tri.iter().any(|&i| usize::from(i) >= count) {
                return Err(TessellaError::sprite(format!(
                    "triangle index out of range (vertex count {count})"
                )));
            }
        }
        Ok(())
    }
}
