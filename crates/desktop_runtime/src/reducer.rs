//! Reducer actions and transition logic for the desktop runtime.

use leptos::logging;

use crate::apps;
use crate::config::ShellConfig;
use crate::interaction::{begin_drag, begin_resize, drag_position, session_resize_rect};
use crate::model::{
    DesktopState, InteractionState, OpenWindowRequest, PointerPosition, ResizeEdge, Viewport,
    WindowId, WindowRect,
};
use crate::window_manager::WindowManagerError;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window using the supplied request.
    OpenWindow {
        /// Title, icon, and desired size of the new window.
        request: OpenWindowRequest,
        /// Current viewport used for centered cascade placement.
        viewport: Viewport,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise a window above all others.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Hide a window without removing it.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a window, or restore it when already maximized.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Set a window origin.
    MoveWindow {
        /// Window to move.
        window_id: WindowId,
        /// New left edge.
        x: f64,
        /// New top edge.
        y: f64,
    },
    /// Replace a window rectangle; the size is clamped to the configured minimums.
    ResizeWindow {
        /// Window to resize.
        window_id: WindowId,
        /// New geometry.
        rect: WindowRect,
    },
    /// Taskbar button behavior: restore a minimized window, minimize the top window, or focus.
    ActivateTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Current viewport used for the vertical clamp.
        viewport: Viewport,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window from an edge or corner.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Select a desktop icon.
    SelectIcon {
        /// Icon id to select.
        icon_id: String,
    },
    /// Click on the empty desktop: clears the icon selection and closes the start menu.
    BackgroundClick,
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Open the app mapped to a desktop, taskbar, or start-menu id.
    Launch {
        /// Launch id carried by the activated item.
        launch_id: String,
        /// Current viewport used for placement.
        viewport: Viewport,
    },
}

/// Applies a [`DesktopAction`] to the desktop runtime state.
///
/// Requests that do not apply (a move while maximized, a second gesture while one is active,
/// an unmapped launch id) leave the state unchanged and return `Ok`.
///
/// # Errors
///
/// Returns [`WindowManagerError::WindowNotFound`] when an action references a window that is not
/// open. The state is left untouched in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    config: &ShellConfig,
    action: DesktopAction,
) -> Result<(), WindowManagerError> {
    match action {
        DesktopAction::OpenWindow { request, viewport } => {
            state.windows.open(request, viewport, config);
        }
        DesktopAction::CloseWindow { window_id } => {
            state.windows.close(window_id)?;
            if interaction.active_window() == Some(window_id) {
                *interaction = InteractionState::Idle;
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            state.windows.focus(window_id)?;
        }
        DesktopAction::MinimizeWindow { window_id } => {
            state.windows.minimize(window_id)?;
        }
        DesktopAction::ToggleMaximize { window_id } => {
            state.windows.toggle_maximize(window_id)?;
        }
        DesktopAction::MoveWindow { window_id, x, y } => {
            if !state.windows.move_to(window_id, x, y)? {
                logging::debug_warn!("ignored move of maximized {window_id}");
            }
        }
        DesktopAction::ResizeWindow { window_id, rect } => {
            let rect = rect.clamped_min(config.min_window_width, config.min_window_height);
            if !state.windows.resize(window_id, rect)? {
                logging::debug_warn!("ignored resize of maximized {window_id}");
            }
        }
        DesktopAction::ActivateTaskbarWindow { window_id } => {
            let minimized = state
                .windows
                .get(window_id)
                .map(|w| w.minimized)
                .ok_or(WindowManagerError::WindowNotFound(window_id))?;
            if minimized {
                state.windows.unminimize(window_id)?;
                state.windows.focus(window_id)?;
            } else if state.focused_window_id() == Some(window_id) {
                state.windows.minimize(window_id)?;
            } else {
                state.windows.focus(window_id)?;
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let window = state
                .windows
                .get(window_id)
                .ok_or(WindowManagerError::WindowNotFound(window_id))?;
            let (rect, maximized) = (window.rect, window.maximized);
            state.windows.focus(window_id)?;
            if maximized || !interaction.is_idle() {
                return Ok(());
            }
            *interaction = InteractionState::Dragging(begin_drag(window_id, rect, pointer));
        }
        DesktopAction::UpdateMove { pointer, viewport } => {
            if let InteractionState::Dragging(session) = *interaction {
                let (x, y) = drag_position(&session, pointer, viewport, config);
                state.windows.move_to(session.window_id, x, y)?;
            }
        }
        DesktopAction::EndMove => {
            if matches!(interaction, InteractionState::Dragging(_)) {
                *interaction = InteractionState::Idle;
            }
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let window = state
                .windows
                .get(window_id)
                .ok_or(WindowManagerError::WindowNotFound(window_id))?;
            let (rect, maximized) = (window.rect, window.maximized);
            state.windows.focus(window_id)?;
            if maximized || !interaction.is_idle() {
                return Ok(());
            }
            *interaction =
                InteractionState::Resizing(begin_resize(window_id, edge, rect, pointer));
        }
        DesktopAction::UpdateResize { pointer } => {
            if let InteractionState::Resizing(session) = *interaction {
                let rect = session_resize_rect(&session, pointer, config);
                state.windows.resize(session.window_id, rect)?;
            }
        }
        DesktopAction::EndResize => {
            if matches!(interaction, InteractionState::Resizing(_)) {
                *interaction = InteractionState::Idle;
            }
        }
        DesktopAction::SelectIcon { icon_id } => {
            state.selected_icon_id = Some(icon_id);
        }
        DesktopAction::BackgroundClick => {
            state.selected_icon_id = None;
            state.start_menu_open = false;
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::Launch {
            launch_id,
            viewport,
        } => match apps::launch_request(&launch_id) {
            Some(request) => {
                state.windows.open(request, viewport, config);
                state.start_menu_open = false;
            }
            None => logging::debug_warn!("no app is mapped to launch id `{launch_id}`"),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Harness {
        state: DesktopState,
        interaction: InteractionState,
        config: ShellConfig,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                state: DesktopState::default(),
                interaction: InteractionState::default(),
                config: ShellConfig::default(),
            }
        }

        fn apply(&mut self, action: DesktopAction) -> Result<(), WindowManagerError> {
            reduce_desktop(&mut self.state, &mut self.interaction, &self.config, action)
        }

        fn open(&mut self) -> WindowId {
            self.apply(DesktopAction::OpenWindow {
                request: OpenWindowRequest::new("this-pc", "This PC", "desktop")
                    .with_size(800.0, 600.0),
                viewport: viewport(),
            })
            .expect("open window");
            self.state.windows.ids().last().copied().expect("window")
        }

        fn rect(&self, window_id: WindowId) -> WindowRect {
            self.state.windows.get(window_id).expect("window").rect
        }
    }

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 800.0)
    }

    fn pointer(x: f64, y: f64) -> PointerPosition {
        PointerPosition::new(x, y)
    }

    #[test]
    fn unknown_window_is_reported_and_state_is_untouched() {
        let mut h = Harness::new();
        let win = h.open();
        let before = h.state.clone();

        for action in [
            DesktopAction::CloseWindow { window_id: WindowId(99) },
            DesktopAction::FocusWindow { window_id: WindowId(99) },
            DesktopAction::ToggleMaximize { window_id: WindowId(99) },
            DesktopAction::BeginMove {
                window_id: WindowId(99),
                pointer: pointer(0.0, 0.0),
            },
        ] {
            assert_eq!(
                h.apply(action),
                Err(WindowManagerError::WindowNotFound(WindowId(99)))
            );
        }
        assert_eq!(h.state, before);
        assert!(h.state.windows.contains(win));
        assert!(h.interaction.is_idle());
    }

    #[test]
    fn drag_moves_window_by_pointer_displacement() {
        let mut h = Harness::new();
        let win = h.open();
        let start = h.rect(win);

        h.apply(DesktopAction::BeginMove {
            window_id: win,
            pointer: pointer(start.x + 20.0, start.y + 10.0),
        })
        .expect("begin");
        h.apply(DesktopAction::UpdateMove {
            pointer: pointer(start.x + 70.0, start.y + 40.0),
            viewport: viewport(),
        })
        .expect("update");
        h.apply(DesktopAction::EndMove).expect("end");

        assert_eq!(h.rect(win), start.offset(50.0, 30.0));
        assert!(h.interaction.is_idle());

        h.apply(DesktopAction::UpdateMove {
            pointer: pointer(0.0, 0.0),
            viewport: viewport(),
        })
        .expect("idle update");
        assert_eq!(h.rect(win), start.offset(50.0, 30.0));
    }

    #[test]
    fn begin_move_focuses_before_starting_session() {
        let mut h = Harness::new();
        let first = h.open();
        let second = h.open();
        assert_eq!(h.state.focused_window_id(), Some(second));

        h.apply(DesktopAction::BeginMove {
            window_id: first,
            pointer: pointer(10.0, 10.0),
        })
        .expect("begin");
        assert_eq!(h.state.focused_window_id(), Some(first));
        assert_eq!(h.interaction.active_window(), Some(first));
    }

    #[test]
    fn maximized_window_cannot_start_a_gesture() {
        let mut h = Harness::new();
        let win = h.open();
        h.apply(DesktopAction::ToggleMaximize { window_id: win })
            .expect("maximize");

        h.apply(DesktopAction::BeginMove {
            window_id: win,
            pointer: pointer(10.0, 10.0),
        })
        .expect("begin move");
        h.apply(DesktopAction::BeginResize {
            window_id: win,
            edge: ResizeEdge::SouthEast,
            pointer: pointer(10.0, 10.0),
        })
        .expect("begin resize");
        assert!(h.interaction.is_idle());
    }

    #[test]
    fn second_gesture_is_ignored_while_one_is_active() {
        let mut h = Harness::new();
        let win = h.open();
        h.apply(DesktopAction::BeginResize {
            window_id: win,
            edge: ResizeEdge::East,
            pointer: pointer(0.0, 0.0),
        })
        .expect("begin resize");
        h.apply(DesktopAction::BeginMove {
            window_id: win,
            pointer: pointer(0.0, 0.0),
        })
        .expect("begin move");
        assert!(matches!(h.interaction, InteractionState::Resizing(_)));

        h.apply(DesktopAction::EndMove).expect("end move");
        assert!(matches!(h.interaction, InteractionState::Resizing(_)));
        h.apply(DesktopAction::EndResize).expect("end resize");
        assert!(h.interaction.is_idle());
    }

    #[test]
    fn north_west_resize_is_anchored_to_initial_rect() {
        let mut h = Harness::new();
        let win = h.open();
        let start = h.rect(win);

        h.apply(DesktopAction::BeginResize {
            window_id: win,
            edge: ResizeEdge::NorthWest,
            pointer: pointer(start.x, start.y),
        })
        .expect("begin");
        for (dx, dy) in [(-30.0, -20.0), (600.0, 500.0), (15.0, -5.0)] {
            h.apply(DesktopAction::UpdateResize {
                pointer: pointer(start.x + dx, start.y + dy),
            })
            .expect("update");
            let rect = h.rect(win);
            assert_eq!(rect.right(), start.right());
            assert_eq!(rect.bottom(), start.bottom());
        }
        h.apply(DesktopAction::EndResize).expect("end");
        assert_eq!(h.rect(win), WindowRect::new(start.x + 15.0, start.y - 5.0, 785.0, 605.0));
    }

    #[test]
    fn resize_window_clamps_to_minimum() {
        let mut h = Harness::new();
        let win = h.open();
        h.apply(DesktopAction::ResizeWindow {
            window_id: win,
            rect: WindowRect::new(5.0, 6.0, -10.0, 12.0),
        })
        .expect("resize");
        assert_eq!(h.rect(win), WindowRect::new(5.0, 6.0, 400.0, 300.0));
    }

    #[test]
    fn move_while_maximized_keeps_stored_geometry() {
        let mut h = Harness::new();
        let win = h.open();
        let start = h.rect(win);
        h.apply(DesktopAction::ToggleMaximize { window_id: win })
            .expect("maximize");
        h.apply(DesktopAction::MoveWindow {
            window_id: win,
            x: 1.0,
            y: 2.0,
        })
        .expect("move");
        assert_eq!(h.rect(win), start);
    }

    #[test]
    fn taskbar_activation_cycles_focus_minimize_restore() {
        let mut h = Harness::new();
        let first = h.open();
        let second = h.open();

        h.apply(DesktopAction::ActivateTaskbarWindow { window_id: first })
            .expect("focus");
        assert_eq!(h.state.focused_window_id(), Some(first));

        h.apply(DesktopAction::ActivateTaskbarWindow { window_id: first })
            .expect("minimize");
        assert!(h.state.windows.get(first).expect("first").minimized);
        assert_eq!(h.state.focused_window_id(), Some(second));

        h.apply(DesktopAction::ActivateTaskbarWindow { window_id: first })
            .expect("restore");
        let record = h.state.windows.get(first).expect("first");
        assert!(!record.minimized);
        assert_eq!(h.state.focused_window_id(), Some(first));
    }

    #[test]
    fn closing_dragged_window_ends_session() {
        let mut h = Harness::new();
        let win = h.open();
        h.apply(DesktopAction::BeginMove {
            window_id: win,
            pointer: pointer(0.0, 0.0),
        })
        .expect("begin");
        h.apply(DesktopAction::CloseWindow { window_id: win })
            .expect("close");
        assert!(h.interaction.is_idle());
        assert!(h.state.windows.is_empty());
    }

    #[test]
    fn shell_selection_and_start_menu_flags() {
        let mut h = Harness::new();
        h.apply(DesktopAction::SelectIcon {
            icon_id: "this-pc".to_string(),
        })
        .expect("select");
        h.apply(DesktopAction::ToggleStartMenu).expect("toggle");
        assert_eq!(h.state.selected_icon_id.as_deref(), Some("this-pc"));
        assert!(h.state.start_menu_open);

        h.apply(DesktopAction::BackgroundClick).expect("background");
        assert_eq!(h.state.selected_icon_id, None);
        assert!(!h.state.start_menu_open);
    }

    #[test]
    fn launch_opens_mapped_app_and_ignores_unmapped_ids() {
        let mut h = Harness::new();
        h.apply(DesktopAction::ToggleStartMenu).expect("open menu");
        h.apply(DesktopAction::Launch {
            launch_id: "recycle-bin".to_string(),
            viewport: viewport(),
        })
        .expect("unmapped");
        assert!(h.state.windows.is_empty());
        assert!(h.state.start_menu_open);

        h.apply(DesktopAction::Launch {
            launch_id: "this-pc".to_string(),
            viewport: viewport(),
        })
        .expect("launch");
        let window = h.state.windows.iter().next().expect("window");
        assert_eq!(window.title, "This PC");
        assert_eq!((window.rect.w, window.rect.h), (800.0, 600.0));
        assert!(!h.state.start_menu_open);
    }
}
