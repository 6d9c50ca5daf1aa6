pub use kurbo::{Affine, Point, Rect, Vec2};

/// Straight-alpha RGBA color applied uniformly to generated vertices.
///
/// The layout is `#[repr(C)]` and [`bytemuck::Pod`] so the color can be
/// embedded verbatim in [`crate::Vertex`] and uploaded to the GPU without
/// conversion.
#[repr(C)]
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (straight, not premultiplied).
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white, the default tint.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Build a color from the four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Copy of `self` with the alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::WHITE
    }
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq)]
/// Per-side scalar set used for nine-slice borders, sprite padding and hollow
/// border fractions.
///
/// The unit depends on the role: pixels for sprite border/padding, layout
/// units after pixels-per-unit conversion, and fractions in `[0, 1]` when
/// used as hollow border fractions.
pub struct Edges {
    /// Left side.
    #[serde(default)]
    pub left: f64,
    /// Right side.
    #[serde(default)]
    pub right: f64,
    /// Top side.
    #[serde(default)]
    pub top: f64,
    /// Bottom side.
    #[serde(default)]
    pub bottom: f64,
}

impl Edges {
    /// All four sides zero.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Build with explicit values per side.
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// The same value on all four sides.
    pub const fn uniform(v: f64) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    /// Combined horizontal extent (`left + right`).
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    /// Combined vertical extent (`top + bottom`).
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    /// True when every side is exactly zero.
    pub fn is_zero(self) -> bool {
        self.left == 0.0 && self.right == 0.0 && self.top == 0.0 && self.bottom == 0.0
    }

    /// True when at least one side is greater than zero.
    pub fn any_positive(self) -> bool {
        self.left > 0.0 || self.right > 0.0 || self.top > 0.0 || self.bottom > 0.0
    }

    /// All four sides multiplied by `k`.
    pub fn scaled(self, k: f64) -> Self {
        Self {
            left: self.left * k,
            right: self.right * k,
            top: self.top * k,
            bottom: self.bottom * k,
        }
    }
}
