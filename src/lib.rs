//! Tessella is a 2D sprite-mesh tessellation and hit-testing engine.
//!
//! Given a rectangular layout region, a sprite's border/pivot/UV metadata
//! and a small set of layout flags, it deterministically produces a
//! triangulated quad mesh ([`MeshBuffer`]: positions, per-vertex color and
//! UV, triangle indices) suitable for GPU rendering, and answers
//! point-containment queries against the same shape.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: build a [`LayoutConfig`] (directly, via
//!    [`LayoutConfigBuilder`], or from JSON) and a [`LayoutRegion`].
//! 2. **Generate**: [`tessellate()`] / [`tessellate_into`] dispatch over
//!    [`FillMode`] (stretch, nine-slice or the sprite's own shape) and
//!    accumulate quads into one output buffer.
//! 3. **Query**: [`hit_test`] evaluates a [`HitQuery`] against the same
//!    configuration, independently of generation.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: generation and hit-testing are pure functions of
//!   their inputs; identical inputs yield byte-identical buffers.
//! - **No IO**: sprite metadata arrives prepared by the asset collaborator;
//!   this crate only reads it.
//! - **Degenerate-safe**: zero-area boxes, missing sprite data and
//!   collinear triangles recover locally by emitting or matching nothing;
//!   no code path panics or errors at query time.
//!
//! Scheduling concerns (when to regenerate, canvas rebuild registration,
//! GPU buffer upload) belong to the host; [`LayoutConfig::is_visible`] is
//! the pure predicate hosts consult for their cull decisions.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod hit;
mod layout;
mod mesh;
mod sprite;
mod tessellate;

pub use foundation::core::{Affine, Edges, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{TessellaError, TessellaResult};
pub use hit::engine::{HitOptions, HitQuery, HitShape, hit_test, point_in_triangle};
pub use layout::dsl::LayoutConfigBuilder;
pub use layout::model::{FillMode, LayoutConfig, LayoutRegion};
pub use mesh::buffer::{MeshBuffer, Vertex};
pub use mesh::emit::{emit_hollow_frame, emit_mirrored_quad, emit_quad};
pub use sprite::model::{Sprite, SpriteMesh};
pub use tessellate::generator::{native_size, tessellate, tessellate_into};
pub use tessellate::rect::{adjust_borders, drawing_rect, preserve_aspect_rect};
