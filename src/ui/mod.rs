//! Immediate-mode parameter panel
//!
//! A small slice of an immediate-mode UI: rebuilt every frame, rectangle
//! layout, widget identity tracked as hot/dragging ids on a context that
//! lives across frames. Macroquad does the actual drawing.

mod input;
mod rect;
pub mod theme;
mod widgets;

pub use input::*;
pub use rect::*;
pub use widgets::*;
