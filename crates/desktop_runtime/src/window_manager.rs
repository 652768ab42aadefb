//! Geometry for interactive window moves and resizes.
//!
//! The registry stores whatever it is given; the clamping here runs while a pointer gesture is
//! captured so a drag can never strand a window off-screen or shrink it below the floor.

use crate::model::{DragSession, PointerPosition, Position, ResizeEdge, Size, WindowRect};

/// Clamps a window's top-left so `min_visible` pixels stay inside `bounds` horizontally and the
/// whole title bar stays inside vertically.
pub fn clamp_position(
    position: Position,
    size: Size,
    bounds: WindowRect,
    min_visible: i32,
    title_bar_height: i32,
) -> Position {
    let min_x = bounds.x - size.width + min_visible;
    let max_x = (bounds.right() - min_visible).max(min_x);
    let min_y = bounds.y;
    let max_y = (bounds.bottom() - title_bar_height).max(min_y);
    Position {
        x: position.x.clamp(min_x, max_x),
        y: position.y.clamp(min_y, max_y),
    }
}

/// New top-left for an in-progress drag: start position plus pointer delta, clamped.
pub fn drag_position(
    session: &DragSession,
    pointer: PointerPosition,
    size: Size,
    min_visible: i32,
    title_bar_height: i32,
) -> Position {
    let dx = pointer.x - session.pointer_start.x;
    let dy = pointer.y - session.pointer_start.y;
    clamp_position(
        session.position_start.offset(dx, dy),
        size,
        session.bounds,
        min_visible,
        title_bar_height,
    )
}

/// Applies a resize delta for `edge` and enforces `min` on the result.
///
/// When a west or north edge is dragged past the floor, the opposite edge stays anchored. A north
/// edge also stops at the top of `bounds` so the title bar stays reachable.
pub fn resize_rect(
    start: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    min: Size,
    bounds: WindowRect,
) -> WindowRect {
    let raw = match edge {
        ResizeEdge::East => WindowRect {
            w: start.w + dx,
            ..start
        },
        ResizeEdge::West => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: start.h + dy,
            ..start
        },
        ResizeEdge::North => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            ..start
        },
        ResizeEdge::NorthEast => WindowRect {
            y: start.y + dy,
            w: start.w + dx,
            h: start.h - dy,
            ..start
        },
        ResizeEdge::NorthWest => WindowRect {
            x: start.x + dx,
            y: start.y + dy,
            w: start.w - dx,
            h: start.h - dy,
        },
        ResizeEdge::SouthEast => WindowRect {
            w: start.w + dx,
            h: start.h + dy,
            ..start
        },
        ResizeEdge::SouthWest => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            h: start.h + dy,
            ..start
        },
    };

    let mut rect = raw;
    if rect.w < min.width {
        rect.w = min.width;
        if edge.moves_west_edge() {
            rect.x = start.right() - min.width;
        }
    }
    if rect.h < min.height {
        rect.h = min.height;
        if edge.moves_north_edge() {
            rect.y = start.bottom() - min.height;
        }
    }
    if edge.moves_north_edge() && rect.y < bounds.y {
        rect.y = bounds.y;
        rect.h = (start.bottom() - bounds.y).max(min.height);
    }
    rect
}
