//! planehit: interactive segment-plane intersection visualizer
//!
//! Renders a ground grid, a line segment, and a plane, all adjustable live
//! from a parameter panel, and reports whether the segment intersects the
//! plane. The segment turns red while it does.
//!
//! Per-frame sequence: input gathering, view-projection rebuild from the
//! camera pose, collision test, scene drawing, panel (panel edits land on
//! the next frame's matrices).

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod camera;
mod collision;
mod draw;
mod math;
mod ui;

use macroquad::prelude::*;

use camera::Camera;
use collision::{segment_plane_hit, Plane, Segment};
use draw::{draw_grid, draw_hit_marker, draw_plane, draw_segment};
use math::{mat4_viewport, Vec3};
use ui::{theme, MouseState, PropertyPanel, Rect, UiContext};

const SCREEN_WIDTH: f32 = 1280.0;
const SCREEN_HEIGHT: f32 = 720.0;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("planehit v{VERSION}"),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging first (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let mut camera = Camera::new();
    let mut segment = Segment::new(Vec3::new(-1.0, 2.0, 0.0), Vec3::new(1.0, -0.3, 0.0));
    let mut plane = Plane::new(Vec3::new(0.0, -0.5, 0.0), Vec3::UP);

    // The window is fixed-size, so the viewport matrix is constant
    let viewport = mat4_viewport(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT, 0.0, 1.0);

    let mut ui_ctx = UiContext::new();

    println!("planehit v{VERSION}");

    loop {
        let (mouse_x, mouse_y) = mouse_position();
        ui_ctx.begin_frame(MouseState {
            x: mouse_x,
            y: mouse_y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
        });

        // Pose changes every frame, so the view-projection is rebuilt
        // unconditionally; no staleness tracking anywhere.
        let view_projection = camera.view_projection();
        let hit = segment_plane_hit(&segment, &plane);

        clear_background(theme::BG_COLOR);

        draw_grid(&view_projection, &viewport, theme::GRID_COLOR);
        draw_plane(&plane, &view_projection, &viewport, theme::PLANE_COLOR);

        let segment_color = if hit.is_some() {
            theme::SEGMENT_HIT_COLOR
        } else {
            theme::SEGMENT_COLOR
        };
        draw_segment(&segment, &view_projection, &viewport, segment_color);

        if let Some(hit) = hit {
            draw_hit_marker(hit.point, &view_projection, &viewport, theme::SEGMENT_HIT_COLOR);
        }

        // Panel last so it draws over the scene; edits apply next frame
        let panel_rect = Rect::new(12.0, 12.0, 330.0, PropertyPanel::height_for_rows(7));
        let mut panel = PropertyPanel::begin(panel_rect, "Control");
        panel.vec3_row(&mut ui_ctx, "Camera Translate", &mut camera.translate, 0.01);
        panel.vec3_row(&mut ui_ctx, "Camera Rotate", &mut camera.rotate, 0.01);
        panel.vec3_row(&mut ui_ctx, "Seg Start", &mut segment.start, 0.01);
        panel.vec3_row(&mut ui_ctx, "Seg End", &mut segment.end, 0.01);
        panel.vec3_row(&mut ui_ctx, "Plane Point", &mut plane.point, 0.01);
        panel.vec3_row(&mut ui_ctx, "Plane Normal", &mut plane.normal, 0.01);
        let (status, status_color) = match hit {
            Some(_) => ("YES", theme::SEGMENT_HIT_COLOR),
            None => ("NO", theme::TEXT_COLOR),
        };
        panel.status_row("Collision", status, status_color);

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        next_frame().await;
    }
}
