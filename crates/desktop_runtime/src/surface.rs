//! Pure window presentation: maps a [`WindowRecord`] and the live viewport to what the window
//! frame renders.

use system_ui::IconName;

use crate::config::ShellConfig;
use crate::model::{Viewport, WindowRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaximizeControl {
    Maximize,
    Restore,
}

impl MaximizeControl {
    pub fn aria_label(self) -> &'static str {
        match self {
            Self::Maximize => "Maximize window",
            Self::Restore => "Restore window",
        }
    }

    pub fn icon(self) -> IconName {
        match self {
            Self::Maximize => IconName::WindowMaximize,
            Self::Restore => IconName::WindowRestore,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSurface {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub z_index: u32,
    pub visible: bool,
    pub maximized: bool,
    pub resizable_handles: bool,
    pub maximize_control: MaximizeControl,
}

impl WindowSurface {
    pub fn style(&self) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};visibility:{};",
            self.left,
            self.top,
            self.width,
            self.height,
            self.z_index,
            if self.visible { "visible" } else { "hidden" }
        )
    }
}

/// Computes the rendered geometry and controls for `window`.
///
/// A maximized window fills the desktop area above the taskbar; its stored rectangle is left
/// alone. Minimized windows stay mounted and are only hidden.
pub fn window_surface(window: &WindowRecord, viewport: Viewport, config: &ShellConfig) -> WindowSurface {
    let rect = if window.maximized {
        viewport.desktop_rect(config.taskbar_height)
    } else {
        window.rect
    };

    WindowSurface {
        left: rect.x,
        top: rect.y,
        width: rect.w,
        height: rect.h,
        z_index: window.z_index,
        visible: !window.minimized,
        maximized: window.maximized,
        resizable_handles: !window.maximized,
        maximize_control: if window.maximized {
            MaximizeControl::Restore
        } else {
            MaximizeControl::Maximize
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{WindowId, WindowRect};
    use pretty_assertions::assert_eq;

    fn record() -> WindowRecord {
        WindowRecord {
            id: WindowId(1),
            app_id: "this-pc".to_string(),
            title: "This PC".to_string(),
            icon: "desktop".to_string(),
            rect: WindowRect::new(120.0, 80.0, 800.0, 600.0),
            restore_rect: None,
            z_index: 7,
            minimized: false,
            maximized: false,
        }
    }

    #[test]
    fn normal_window_renders_stored_rect() {
        let surface = window_surface(&record(), Viewport::new(1440.0, 900.0), &ShellConfig::default());
        assert_eq!(
            surface,
            WindowSurface {
                left: 120.0,
                top: 80.0,
                width: 800.0,
                height: 600.0,
                z_index: 7,
                visible: true,
                maximized: false,
                resizable_handles: true,
                maximize_control: MaximizeControl::Maximize,
            }
        );
        assert_eq!(
            surface.style(),
            "left:120px;top:80px;width:800px;height:600px;z-index:7;visibility:visible;"
        );
    }

    #[test]
    fn maximized_window_fills_area_above_taskbar() {
        let window = WindowRecord {
            maximized: true,
            restore_rect: Some(record().rect),
            ..record()
        };
        let surface = window_surface(&window, Viewport::new(1440.0, 900.0), &ShellConfig::default());
        assert_eq!(
            (surface.left, surface.top, surface.width, surface.height),
            (0.0, 0.0, 1440.0, 852.0)
        );
        assert!(!surface.resizable_handles);
        assert_eq!(surface.maximize_control, MaximizeControl::Restore);
        assert_eq!(surface.maximize_control.aria_label(), "Restore window");
    }

    #[test]
    fn minimized_window_is_hidden_not_removed() {
        let window = WindowRecord {
            minimized: true,
            ..record()
        };
        let surface = window_surface(&window, Viewport::default(), &ShellConfig::default());
        assert!(!surface.visible);
        assert!(surface.style().ends_with("visibility:hidden;"));
        assert_eq!(surface.width, 800.0);
    }
}
