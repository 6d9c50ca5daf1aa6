use super::*;
use crate::foundation::core::{Edges, Rgba8};
use crate::sprite::model::SpriteMesh;

fn region(w: f64, h: f64) -> LayoutRegion {
    LayoutRegion::new(Rect::new(0.0, 0.0, w, h))
}

/// 32x32 sprite filling a 32x32 atlas, 8px border on every side, 1 px/unit.
fn bordered_sprite() -> Sprite {
    Sprite {
        border: Edges::uniform(8.0),
        pixels_per_unit: 1.0,
        ..Sprite::new(Rect::new(0.0, 0.0, 32.0, 32.0), Vec2::new(32.0, 32.0))
    }
}

fn shape_sprite() -> Sprite {
    Sprite {
        mesh: Some(SpriteMesh {
            vertices: vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0),
                Point::new(0.0, 2.0),
            ],
            uvs: vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ],
            triangles: vec![[0, 1, 2], [2, 3, 0]],
            bounds: Rect::new(0.0, 0.0, 2.0, 2.0),
        }),
        pixels_per_unit: 1.0,
        ..Sprite::new(Rect::new(0.0, 0.0, 32.0, 32.0), Vec2::new(32.0, 32.0))
    }
}

fn uv_at(buf: &MeshBuffer, x: f32, y: f32) -> Option<[f32; 2]> {
    buf.vertices
        .iter()
        .find(|v| v.position == [x, y])
        .map(|v| v.uv)
}

// -- stretch --------------------------------------------------------------

#[test]
fn stretch_emits_one_quad_over_the_region() {
    let cfg = LayoutConfig::default();
    let mesh = tessellate(&cfg, region(10.0, 4.0), None).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(uv_at(&mesh, 0.0, 0.0), Some([0.0, 0.0]));
    assert_eq!(uv_at(&mesh, 10.0, 4.0), Some([1.0, 1.0]));
}

#[test]
fn stretch_with_horizontal_mirror_matches_the_documented_example() {
    let cfg = LayoutConfig {
        mirror_horizontal: true,
        ..LayoutConfig::default()
    };
    let mesh = tessellate(&cfg, region(10.0, 4.0), None).unwrap();
    assert_eq!(mesh.vertex_count(), 6);
    // Output still spans x in [0, 10]; the right half is the UV flip of the
    // left half.
    assert_eq!(uv_at(&mesh, 5.0, 4.0), Some([1.0, 1.0]));
    assert_eq!(uv_at(&mesh, 10.0, 4.0), Some([0.0, 1.0]));
}

#[test]
fn stretch_uses_the_sprite_outer_uv() {
    let sprite = Sprite::new(Rect::new(16.0, 0.0, 32.0, 16.0), Vec2::new(64.0, 32.0));
    let cfg = LayoutConfig::default();
    let mesh = tessellate(&cfg, region(8.0, 8.0), Some(&sprite)).unwrap();
    assert_eq!(uv_at(&mesh, 0.0, 0.0), Some([0.25, 0.0]));
    assert_eq!(uv_at(&mesh, 8.0, 8.0), Some([0.5, 0.5]));
}

#[test]
fn hollow_stretch_emits_border_bands_only() {
    let cfg = LayoutConfig {
        fill_center: false,
        border_fractions: Edges::uniform(0.1),
        ..LayoutConfig::default()
    };
    let mesh = tessellate(&cfg, region(100.0, 100.0), None).unwrap();
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.triangle_count(), 8);
}

#[test]
fn hollow_stretch_with_zero_fractions_emits_nothing() {
    let cfg = LayoutConfig {
        fill_center: false,
        ..LayoutConfig::default()
    };
    let mesh = tessellate(&cfg, region(100.0, 100.0), None).unwrap();
    assert!(mesh.is_empty());
}

#[test]
fn disabled_config_produces_an_empty_mesh() {
    let cfg = LayoutConfig {
        enabled: false,
        ..LayoutConfig::default()
    };
    let mesh = tessellate(&cfg, region(10.0, 10.0), None).unwrap();
    assert!(mesh.is_empty());
}

#[test]
fn degenerate_region_produces_an_empty_mesh() {
    let cfg = LayoutConfig::default();
    let mesh = tessellate(&cfg, region(0.0, 10.0), None).unwrap();
    assert!(mesh.is_empty());
}

// -- nine-slice -----------------------------------------------------------

#[test]
fn nine_slice_emits_nine_cells() {
    let cfg = LayoutConfig {
        mode: FillMode::NineSlice,
        ..LayoutConfig::default()
    };
    let mesh = tessellate(&cfg, region(64.0, 64.0), Some(&bordered_sprite())).unwrap();
    assert_eq!(mesh.vertex_count(), 36);
    assert_eq!(mesh.triangle_count(), 18);
}

#[test]
fn nine_slice_without_border_degrades_to_stretch() {
    let sprite = Sprite {
        pixels_per_unit: 1.0,
        ..Sprite::new(Rect::new(0.0, 0.0, 32.0, 32.0), Vec2::new(32.0, 32.0))
    };
    let cfg = LayoutConfig {
        mode: FillMode::NineSlice,
        ..LayoutConfig::default()
    };
    let mesh = tessellate(&cfg, region(64.0, 64.0), Some(&sprite)).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
}

#[test]
fn nine_slice_skips_zero_span_cells() {
    // Region exactly as wide as the combined borders: the center column
    // collapses and its three cells emit nothing.
    let cfg = LayoutConfig {
        mode: FillMode::NineSlice,
        ..LayoutConfig::default()
    };
    let mesh = tessellate(&cfg, region(16.0, 64.0), Some(&bordered_sprite())).unwrap();
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.triangle_count(), 12);
}

#[test]
fn nine_slice_hollow_center_routes_to_border_bands() {
    let cfg = LayoutConfig {
        mode: FillMode::NineSlice,
        fill_center: false,
        border_fractions: Edges::uniform(0.25),
        ..LayoutConfig::default()
    };
    let mesh = tessellate(&cfg, region(64.0, 64.0), Some(&bordered_sprite())).unwrap();
    // 8 ring cells plus 4 hollow bands in the center cell.
    assert_eq!(mesh.vertex_count(), 8 * 4 + 16);
    assert_eq!(mesh.triangle_count(), 8 * 2 + 8);
}

#[test]
fn nine_slice_hollow_center_with_zero_fractions_is_skipped() {
    let cfg = LayoutConfig {
        mode: FillMode::NineSlice,
        fill_center: false,
        ..LayoutConfig::default()
    };
    let mesh = tessellate(&cfg, region(64.0, 64.0), Some(&bordered_sprite())).unwrap();
    assert_eq!(mesh.vertex_count(), 32);
    assert_eq!(mesh.triangle_count(), 16);
}

#[test]
fn nine_slice_mirrored_edge_samples_the_opposite_inner_uv() {
    let cfg = LayoutConfig {
        mode: FillMode::NineSlice,
        mirror_horizontal: true,
        ..LayoutConfig::default()
    };
    let mesh = tessellate(&cfg, region(64.0, 64.0), Some(&bordered_sprite())).unwrap();
    // Knots: x = [0, 8, 56, 64]; u = [0, 0.25, 0.75, 1].
    // The right cap (x = 56..64) samples u from inner-left back to
    // outer-left, flipping the left cap's content.
    assert_eq!(uv_at(&mesh, 56.0, 64.0), Some([0.25, 1.0]));
    assert_eq!(uv_at(&mesh, 64.0, 64.0), Some([0.0, 1.0]));
    // The center column folds: 3 mirrored cells at 6 verts, 6 plain at 4.
    assert_eq!(mesh.vertex_count(), 3 * 6 + 6 * 4);
}

#[test]
fn nine_slice_double_mirror_corner_uses_the_cross_pattern() {
    let cfg = LayoutConfig {
        mode: FillMode::NineSlice,
        mirror_horizontal: true,
        mirror_vertical: true,
        ..LayoutConfig::default()
    };
    let mesh = tessellate(&cfg, region(64.0, 64.0), Some(&bordered_sprite())).unwrap();
    // Bottom-right corner cell spans (56, 0)..(64, 8) and samples
    // u: inner-left -> outer-left, v: outer-top -> inner-top.
    assert_eq!(uv_at(&mesh, 56.0, 0.0), Some([0.25, 1.0]));
    assert_eq!(uv_at(&mesh, 64.0, 8.0), Some([0.0, 0.75]));
}

#[test]
fn nine_slice_mirror_derives_the_far_border_from_the_near_one() {
    let sprite = Sprite {
        border: Edges {
            left: 4.0,
            right: 12.0,
            top: 8.0,
            bottom: 8.0,
        },
        pixels_per_unit: 1.0,
        ..Sprite::new(Rect::new(0.0, 0.0, 32.0, 32.0), Vec2::new(32.0, 32.0))
    };
    let cfg = LayoutConfig {
        mode: FillMode::NineSlice,
        mirror_horizontal: true,
        ..LayoutConfig::default()
    };
    let mesh = tessellate(&cfg, region(64.0, 64.0), Some(&sprite)).unwrap();
    // Right border becomes 4 (mirror of left), so a knot sits at x = 60.
    assert!(mesh.vertices.iter().any(|v| v.position[0] == 60.0));
    assert!(!mesh.vertices.iter().any(|v| v.position[0] == 52.0));
}

// -- shape ----------------------------------------------------------------

#[test]
fn shape_mode_scales_the_sprite_mesh_into_the_region() {
    let cfg = LayoutConfig {
        mode: FillMode::Shape,
        color: Rgba8::new(10, 20, 30, 40),
        ..LayoutConfig::default()
    };
    let mesh = tessellate(&cfg, region(20.0, 20.0), Some(&shape_sprite())).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangles, vec![[0, 1, 2], [2, 3, 0]]);
    assert_eq!(mesh.vertices[0].position, [0.0, 0.0]);
    assert_eq!(mesh.vertices[2].position, [20.0, 20.0]);
    assert_eq!(mesh.vertices[1].uv, [1.0, 0.0]);
    assert_eq!(mesh.vertices[0].color, Rgba8::new(10, 20, 30, 40));
}

#[test]
fn shape_mode_ignores_mirror_flags() {
    let cfg = LayoutConfig {
        mode: FillMode::Shape,
        mirror_horizontal: true,
        mirror_vertical: true,
        ..LayoutConfig::default()
    };
    let mesh = tessellate(&cfg, region(20.0, 20.0), Some(&shape_sprite())).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
}

#[test]
fn shape_mode_without_a_mesh_falls_back_to_stretch() {
    let cfg = LayoutConfig {
        mode: FillMode::Shape,
        ..LayoutConfig::default()
    };
    let sprite = Sprite::new(Rect::new(0.0, 0.0, 32.0, 32.0), Vec2::new(32.0, 32.0));
    let mesh = tessellate(&cfg, region(10.0, 10.0), Some(&sprite)).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(uv_at(&mesh, 10.0, 10.0), Some([1.0, 1.0]));
}

// -- entry points ---------------------------------------------------------

#[test]
fn tessellate_is_idempotent() {
    let cfg = LayoutConfig {
        mode: FillMode::NineSlice,
        mirror_horizontal: true,
        mirror_vertical: true,
        ..LayoutConfig::default()
    };
    let sprite = bordered_sprite();
    let a = tessellate(&cfg, region(64.0, 48.0), Some(&sprite)).unwrap();
    let b = tessellate(&cfg, region(64.0, 48.0), Some(&sprite)).unwrap();
    assert_eq!(a.as_vertex_bytes(), b.as_vertex_bytes());
    assert_eq!(a.as_index_bytes(), b.as_index_bytes());
}

#[test]
fn tessellate_into_clears_the_reused_buffer() {
    let cfg = LayoutConfig::default();
    let mut buf = MeshBuffer::default();
    tessellate_into(&cfg, region(10.0, 10.0), None, &mut buf).unwrap();
    let first = buf.clone();
    tessellate_into(&cfg, region(10.0, 10.0), None, &mut buf).unwrap();
    assert_eq!(buf, first);
}

#[test]
fn invalid_border_fractions_are_rejected() {
    let cfg = LayoutConfig {
        border_fractions: Edges::uniform(1.5),
        ..LayoutConfig::default()
    };
    assert!(tessellate(&cfg, region(10.0, 10.0), None).is_err());
}

#[test]
fn invalid_sprite_metadata_is_rejected() {
    let sprite = Sprite {
        pixels_per_unit: -1.0,
        ..Sprite::new(Rect::new(0.0, 0.0, 32.0, 32.0), Vec2::new(32.0, 32.0))
    };
    let cfg = LayoutConfig::default();
    assert!(tessellate(&cfg, region(10.0, 10.0), Some(&sprite)).is_err());
}

#[test]
fn native_size_doubles_on_mirrored_axes() {
    let sprite = Sprite::new(Rect::new(0.0, 0.0, 64.0, 32.0), Vec2::new(64.0, 32.0));
    assert_eq!(native_size(&sprite, false, false), Vec2::new(0.64, 0.32));
    assert_eq!(native_size(&sprite, true, false), Vec2::new(1.28, 0.32));
    assert_eq!(native_size(&sprite, true, true), Vec2::new(1.28, 0.64));
}

#[test]
fn generation_runs_under_a_tracing_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
    let cfg = LayoutConfig::default();
    let mesh = tessellate(&cfg, region(4.0, 4.0), None).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
}
