//! Drag-value widgets and the property panel layout helper

use macroquad::prelude::*;

use super::theme::{
    FIELD_BG, FIELD_HOT, FONT_SIZE_CONTENT, FONT_SIZE_HEADER, PANEL_BG, PANEL_BORDER, TEXT_COLOR,
    TEXT_DIM,
};
use super::{Rect, UiContext};
use crate::math::Vec3;

const ROW_HEIGHT: f32 = 24.0;
const PANEL_PADDING: f32 = 8.0;
const LABEL_WIDTH: f32 = 118.0;
const FIELD_GAP: f32 = 4.0;

/// Drag a float value horizontally. Returns true when the value changed.
pub fn drag_value(ctx: &mut UiContext, rect: Rect, value: &mut f32, speed: f32) -> bool {
    let id = ctx.next_id();
    let mut changed = false;

    if ctx.is_dragging(id) && ctx.drag_dx != 0.0 {
        *value += ctx.drag_dx * speed;
        changed = true;
    }

    if ctx.mouse.inside(&rect) {
        ctx.set_hot(id);
        if ctx.mouse.left_pressed {
            ctx.start_drag(id);
        }
    }

    let bg = if ctx.is_hot(id) || ctx.is_dragging(id) {
        FIELD_HOT
    } else {
        FIELD_BG
    };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);

    let text = format!("{:.2}", value);
    let dims = measure_text(&text, None, FONT_SIZE_CONTENT as u16, 1.0);
    let text_x = (rect.x + (rect.w - dims.width) * 0.5).round();
    let text_y = (rect.y + (rect.h + dims.height) * 0.5).round();
    draw_text(&text, text_x, text_y, FONT_SIZE_CONTENT, TEXT_COLOR);

    changed
}

/// Top-down row layout for a parameter panel.
///
/// Immediate mode: `begin` draws the frame and title, each `*_row` call
/// draws (and for drag rows, edits) one row below the previous one.
pub struct PropertyPanel {
    inner: Rect,
    cursor_y: f32,
}

impl PropertyPanel {
    /// Panel height needed for `rows` content rows plus the title
    pub fn height_for_rows(rows: usize) -> f32 {
        (rows as f32 + 1.0) * ROW_HEIGHT + PANEL_PADDING * 2.0
    }

    pub fn begin(rect: Rect, title: &str) -> Self {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, PANEL_BG);
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, PANEL_BORDER);

        let inner = rect.pad(PANEL_PADDING);
        let dims = measure_text(title, None, FONT_SIZE_HEADER as u16, 1.0);
        let text_y = (inner.y + (ROW_HEIGHT + dims.height) * 0.5).round();
        draw_text(title, inner.x.round(), text_y, FONT_SIZE_HEADER, TEXT_COLOR);

        Self {
            inner,
            cursor_y: inner.y + ROW_HEIGHT,
        }
    }

    fn next_row(&mut self) -> Rect {
        let row = Rect::new(self.inner.x, self.cursor_y, self.inner.w, ROW_HEIGHT);
        self.cursor_y += ROW_HEIGHT;
        row
    }

    fn draw_label(&self, rect: Rect, label: &str) {
        let dims = measure_text(label, None, FONT_SIZE_CONTENT as u16, 1.0);
        let text_y = (rect.y + (rect.h + dims.height) * 0.5).round();
        draw_text(label, rect.x.round(), text_y, FONT_SIZE_CONTENT, TEXT_DIM);
    }

    /// One row editing all three components of a vector
    pub fn vec3_row(&mut self, ctx: &mut UiContext, label: &str, value: &mut Vec3, speed: f32) {
        let row = self.next_row();
        let (label_rect, fields) = row.split_h_px(LABEL_WIDTH);
        self.draw_label(label_rect, label);

        let field_w = (fields.w - FIELD_GAP * 2.0) / 3.0;
        for (i, component) in [&mut value.x, &mut value.y, &mut value.z]
            .into_iter()
            .enumerate()
        {
            let field = Rect::new(
                fields.x + i as f32 * (field_w + FIELD_GAP),
                row.y + 2.0,
                field_w,
                ROW_HEIGHT - 4.0,
            );
            drag_value(ctx, field, component, speed);
        }
    }

    /// One read-only row: a label and a colored status text
    pub fn status_row(&mut self, label: &str, text: &str, color: Color) {
        let row = self.next_row();
        let (label_rect, value_rect) = row.split_h_px(LABEL_WIDTH);
        self.draw_label(label_rect, label);

        let dims = measure_text(text, None, FONT_SIZE_CONTENT as u16, 1.0);
        let text_y = (value_rect.y + (value_rect.h + dims.height) * 0.5).round();
        draw_text(text, value_rect.x.round(), text_y, FONT_SIZE_CONTENT, color);
    }
}
