use desktop_app_contract::ApplicationType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "W{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn from_parts(position: Position, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w: size.width,
            h: size.height,
        }
    }

    pub fn position(self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn size(self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn right(self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(self) -> i32 {
        self.y + self.h
    }

    pub fn css(self) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;",
            self.x, self.y, self.w, self.h
        )
    }
}

/// A managed window. The registry is the only writer; renderers read clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub application_type: ApplicationType,
    pub title: String,
    pub position: Position,
    pub size: Size,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
}

impl WindowRecord {
    /// Stored geometry, independent of the maximized flag.
    pub fn rect(&self) -> WindowRect {
        WindowRect::from_parts(self.position, self.size)
    }

    /// Geometry to paint: the viewport while maximized, stored geometry otherwise.
    pub fn rendered_rect(&self, viewport: WindowRect) -> WindowRect {
        if self.maximized {
            viewport
        } else {
            self.rect()
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.minimized
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    pub const fn moves_west_edge(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    pub const fn moves_north_edge(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: Position,
    /// Desktop viewport captured at drag start; the drag is clamped against it.
    pub bounds: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    /// Desktop viewport captured at resize start; the top edge never leaves it.
    pub bounds: WindowRect,
}

/// Pointer capture held between pointer-down and pointer-up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn is_captured(&self) -> bool {
        self.dragging.is_some() || self.resizing.is_some()
    }

    pub fn release(&mut self) {
        self.dragging = None;
        self.resizing = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(maximized: bool) -> WindowRecord {
        WindowRecord {
            id: WindowId(1),
            application_type: ApplicationType::Notes,
            title: "Notes".to_string(),
            position: Position::new(100, 100),
            size: Size::new(800, 600),
            z_index: 101,
            minimized: false,
            maximized,
        }
    }

    #[test]
    fn rendered_rect_uses_viewport_only_while_maximized() {
        let viewport = WindowRect {
            x: 0,
            y: 0,
            w: 1280,
            h: 680,
        };
        assert_eq!(
            record(false).rendered_rect(viewport),
            WindowRect {
                x: 100,
                y: 100,
                w: 800,
                h: 600
            }
        );
        assert_eq!(record(true).rendered_rect(viewport), viewport);
        assert_eq!(record(true).rect().position(), Position::new(100, 100));
    }

    #[test]
    fn release_clears_both_captures() {
        let mut interaction = InteractionState {
            dragging: Some(DragSession {
                window_id: WindowId(1),
                pointer_start: PointerPosition { x: 0, y: 0 },
                position_start: Position::new(0, 0),
                bounds: WindowRect {
                    x: 0,
                    y: 0,
                    w: 10,
                    h: 10,
                },
            }),
            resizing: None,
        };
        assert!(interaction.is_captured());
        interaction.release();
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn window_id_displays_with_prefix() {
        assert_eq!(WindowId(3).to_string(), "W3");
    }
}
