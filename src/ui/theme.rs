//! Shared colors and styling constants

use macroquad::prelude::Color;

/// Scene background
pub const BG_COLOR: Color = Color::new(0.05, 0.05, 0.07, 1.0);

/// Panel background
pub const PANEL_BG: Color = Color::new(0.11, 0.11, 0.13, 0.95);

/// Panel border
pub const PANEL_BORDER: Color = Color::new(0.314, 0.314, 0.314, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

/// Drag field background
pub const FIELD_BG: Color = Color::new(0.196, 0.196, 0.216, 1.0);

/// Drag field background while hovered or dragged
pub const FIELD_HOT: Color = Color::new(0.235, 0.314, 0.392, 1.0);

/// Grid lines (the 0xAAAAAA gray of the ground grid)
pub const GRID_COLOR: Color = Color::new(0.667, 0.667, 0.667, 1.0);

/// Plane quad outline
pub const PLANE_COLOR: Color = Color::new(0.25, 0.45, 1.0, 1.0);

/// Segment while not intersecting
pub const SEGMENT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Segment (and hit marker) while intersecting
pub const SEGMENT_HIT_COLOR: Color = Color::new(1.0, 0.25, 0.25, 1.0);

/// Header/title text size
pub const FONT_SIZE_HEADER: f32 = 16.0;

/// Standard content text size
pub const FONT_SIZE_CONTENT: f32 = 13.0;
