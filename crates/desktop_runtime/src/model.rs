//! Geometry primitives and the shell state types shared by the store, the reducer, and the UI.

use crate::window_manager::WindowStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl WindowRect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: f64, min_h: f64) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }

    pub fn area(self) -> f64 {
        self.w * self.h
    }

    pub fn right(self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(self) -> f64 {
        self.y + self.h
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(self, point: PointerPosition) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Size of the browser layout viewport, taskbar included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn desktop_height(self, taskbar_height: f64) -> f64 {
        (self.height - taskbar_height).max(0.0)
    }

    /// Area left for windows once the taskbar strip is reserved.
    pub fn desktop_rect(self, taskbar_height: f64) -> WindowRect {
        WindowRect::new(
            0.0,
            0.0,
            self.width.max(0.0),
            self.desktop_height(taskbar_height),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

    /// Short compass token used by the resize handle DOM contract.
    pub fn token(self) -> &'static str {
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

    pub fn includes_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn includes_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    pub fn includes_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn includes_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: String,
    pub title: String,
    pub icon: String,
    pub rect: WindowRect,
    /// Geometry captured on maximize; present exactly while `maximized` is set.
    pub restore_rect: Option<WindowRect>,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
}

impl WindowRecord {
    pub fn is_visible(&self) -> bool {
        !self.minimized
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenWindowRequest {
    pub app_id: String,
    pub title: String,
    pub icon: String,
    pub width: f64,
    pub height: f64,
}

impl OpenWindowRequest {
    pub fn new(app_id: impl Into<String>, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            title: title.into(),
            icon: icon.into(),
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesktopState {
    pub windows: WindowStore,
    pub selected_icon_id: Option<String>,
    pub start_menu_open: bool,
}

impl DesktopState {
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.top_window().map(|w| w.id)
    }
}

/// Captured at drag start: pointer position minus window origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub offset_x: f64,
    pub offset_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

/// Pointer gesture currently in flight. At most one session exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn active_window(&self) -> Option<WindowId> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session.window_id),
            Self::Resizing(session) => Some(session.window_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rect_helpers_report_edges_and_area() {
        let rect = WindowRect::new(10.0, 20.0, 400.0, 300.0);
        assert_eq!(rect.right(), 410.0);
        assert_eq!(rect.bottom(), 320.0);
        assert_eq!(rect.area(), 120_000.0);
        assert_eq!(rect.offset(-10.0, 5.0), WindowRect::new(0.0, 25.0, 400.0, 300.0));
        assert!(rect.contains(PointerPosition::new(10.0, 20.0)));
        assert!(!rect.contains(PointerPosition::new(410.0, 20.0)));
    }

    #[test]
    fn clamped_min_only_grows_dimensions() {
        let rect = WindowRect::new(5.0, 5.0, 120.0, 900.0).clamped_min(400.0, 300.0);
        assert_eq!(rect, WindowRect::new(5.0, 5.0, 400.0, 900.0));
    }

    #[test]
    fn desktop_rect_reserves_taskbar_and_never_goes_negative() {
        let viewport = Viewport::new(1280.0, 720.0);
        assert_eq!(
            viewport.desktop_rect(48.0),
            WindowRect::new(0.0, 0.0, 1280.0, 672.0)
        );
        assert_eq!(Viewport::new(300.0, 20.0).desktop_height(48.0), 0.0);
    }

    #[test]
    fn resize_edges_expose_axis_membership() {
        for edge in ResizeEdge::ALL {
            assert!(!(edge.includes_east() && edge.includes_west()));
            assert!(!(edge.includes_north() && edge.includes_south()));
        }
        assert!(ResizeEdge::NorthWest.includes_north() && ResizeEdge::NorthWest.includes_west());
        assert_eq!(ResizeEdge::SouthEast.token(), "se");
    }
}
