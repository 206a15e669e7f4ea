//! Input state for UI interaction

use super::Rect;

/// Mouse snapshot for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool, // Just pressed this frame
}

impl MouseState {
    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
pub struct UiContext {
    pub mouse: MouseState,
    /// Horizontal mouse movement since the previous frame
    pub drag_dx: f32,
    /// ID of the widget currently being dragged (if any)
    pub dragging: Option<u64>,
    /// ID of the widget the mouse is hovering
    pub hot: Option<u64>,
    /// Counter for generating per-frame widget IDs; stable as long as the
    /// widget call order is stable
    id_counter: u64,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            mouse: MouseState::default(),
            drag_dx: 0.0,
            dragging: None,
            hot: None,
            id_counter: 0,
        }
    }

    /// Reset at start of frame (call before any widget code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.drag_dx = mouse.x - self.mouse.x;
        self.mouse = mouse;
        self.hot = None;
        self.id_counter = 0;

        if !self.mouse.left_down {
            self.dragging = None;
        }
    }

    pub fn next_id(&mut self) -> u64 {
        self.id_counter += 1;
        self.id_counter
    }

    pub fn start_drag(&mut self, id: u64) {
        self.dragging = Some(id);
    }

    pub fn is_dragging(&self, id: u64) -> bool {
        self.dragging == Some(id)
    }

    pub fn set_hot(&mut self, id: u64) {
        // Only set hot if not dragging something else
        if self.dragging.is_none() || self.dragging == Some(id) {
            self.hot = Some(id);
        }
    }

    pub fn is_hot(&self, id: u64) -> bool {
        self.hot == Some(id)
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse_at(x: f32, down: bool) -> MouseState {
        MouseState {
            x,
            y: 0.0,
            left_down: down,
            left_pressed: false,
        }
    }

    #[test]
    fn test_drag_released_on_mouse_up() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(mouse_at(10.0, true));
        ctx.start_drag(1);
        assert!(ctx.is_dragging(1));

        ctx.begin_frame(mouse_at(20.0, true));
        assert!(ctx.is_dragging(1));

        ctx.begin_frame(mouse_at(20.0, false));
        assert!(!ctx.is_dragging(1));
    }

    #[test]
    fn test_drag_dx_tracks_mouse() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(mouse_at(10.0, true));
        ctx.begin_frame(mouse_at(25.0, true));
        assert!((ctx.drag_dx - 15.0).abs() < 0.001);
    }
}
