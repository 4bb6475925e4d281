//! Window collection and lifecycle operations.
//!
//! [`WindowStore`] is the only owner of [`WindowRecord`] values. Windows are kept in insertion
//! order; stacking is expressed purely through `z_index`, which is allocated from a monotonic
//! counter so focusing one window never renumbers the others. The one exception is the counter
//! reaching [`Z_INDEX_CEILING`]: the open windows are then renumbered from the initial z-index,
//! keeping their stacking order.

use indexmap::IndexMap;
use thiserror::Error;

use crate::config::ShellConfig;
use crate::model::{OpenWindowRequest, Viewport, WindowId, WindowRecord, WindowRect};

/// Highest z-index handed out. CSS `z-index` is a signed 32-bit integer.
pub const Z_INDEX_CEILING: u32 = i32::MAX as u32;

/// Errors returned by [`WindowStore`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WindowManagerError {
    #[error("{0} is not open")]
    WindowNotFound(WindowId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowStore {
    windows: IndexMap<WindowId, WindowRecord>,
    next_window_id: u64,
    next_z_index: u32,
    initial_z_index: u32,
    z_index_ceiling: u32,
    open_count: u32,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new(ShellConfig::default().initial_z_index)
    }
}

impl WindowStore {
    pub fn new(initial_z_index: u32) -> Self {
        Self {
            windows: IndexMap::new(),
            next_window_id: 1,
            next_z_index: initial_z_index,
            initial_z_index,
            z_index_ceiling: Z_INDEX_CEILING,
            open_count: 0,
        }
    }

    #[cfg(test)]
    fn with_z_index_ceiling(mut self, ceiling: u32) -> Self {
        self.z_index_ceiling = ceiling;
        self
    }

    pub fn with_config(config: &ShellConfig) -> Self {
        Self::new(config.initial_z_index)
    }

    pub fn get(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.get(&window_id)
    }

    pub fn contains(&self, window_id: WindowId) -> bool {
        self.windows.contains_key(&window_id)
    }

    /// Windows in the order they were opened.
    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.values()
    }

    pub fn ids(&self) -> Vec<WindowId> {
        self.windows.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Number of opens since the collection was last empty; drives cascade placement.
    pub fn open_count(&self) -> u32 {
        self.open_count
    }

    /// Highest stacked window that is not minimized.
    pub fn top_window(&self) -> Option<&WindowRecord> {
        self.windows
            .values()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
    }

    fn window_mut(&mut self, window_id: WindowId) -> Result<&mut WindowRecord, WindowManagerError> {
        self.windows
            .get_mut(&window_id)
            .ok_or(WindowManagerError::WindowNotFound(window_id))
    }

    fn allocate_z_index(&mut self) -> u32 {
        if self.next_z_index >= self.z_index_ceiling {
            self.renumber_z_indices();
        }
        let z_index = self.next_z_index;
        self.next_z_index = self.next_z_index.saturating_add(1);
        z_index
    }

    /// Packs the open windows into consecutive z-indices from the initial value, bottom first.
    fn renumber_z_indices(&mut self) {
        let mut stacking: Vec<(u32, WindowId)> =
            self.windows.values().map(|w| (w.z_index, w.id)).collect();
        stacking.sort_unstable();

        let mut next = self.initial_z_index;
        for (_, window_id) in stacking {
            if let Some(window) = self.windows.get_mut(&window_id) {
                window.z_index = next;
                next = next.saturating_add(1);
            }
        }
        self.next_z_index = next;
    }

    /// Initial cascade position for a window of `size` given the current open count.
    pub fn cascade_origin(
        &self,
        width: f64,
        height: f64,
        viewport: Viewport,
        config: &ShellConfig,
    ) -> (f64, f64) {
        let step = config.cascade_step * f64::from(self.open_count);
        let desktop_height = viewport.height - config.taskbar_height;
        let x = ((viewport.width - width) / 2.0 + step).max(0.0);
        let y = ((desktop_height - height) / 2.0 + step).max(0.0);
        (x, y)
    }

    /// Opens a new window centered in the desktop area with cascade offset and returns its id.
    pub fn open(
        &mut self,
        request: OpenWindowRequest,
        viewport: Viewport,
        config: &ShellConfig,
    ) -> WindowId {
        let width = request.width.max(config.min_window_width);
        let height = request.height.max(config.min_window_height);
        let (x, y) = self.cascade_origin(width, height, viewport, config);

        let id = WindowId(self.next_window_id);
        self.next_window_id = self.next_window_id.saturating_add(1);
        let z_index = self.allocate_z_index();
        self.open_count = self.open_count.saturating_add(1);

        self.windows.insert(
            id,
            WindowRecord {
                id,
                app_id: request.app_id,
                title: request.title,
                icon: request.icon,
                rect: WindowRect::new(x, y, width, height),
                restore_rect: None,
                z_index,
                minimized: false,
                maximized: false,
            },
        );
        id
    }

    /// Removes a window. Emptying the collection resets the cascade and z-index counters.
    ///
    /// O(n) in the number of open windows: removal shifts later entries to keep insertion order.
    pub fn close(&mut self, window_id: WindowId) -> Result<WindowRecord, WindowManagerError> {
        let removed = self
            .windows
            .shift_remove(&window_id)
            .ok_or(WindowManagerError::WindowNotFound(window_id))?;
        if self.windows.is_empty() {
            self.open_count = 0;
            self.next_z_index = self.initial_z_index;
        }
        Ok(removed)
    }

    /// Sets the window origin. Returns `Ok(false)` when the window is maximized and left as-is.
    pub fn move_to(&mut self, window_id: WindowId, x: f64, y: f64) -> Result<bool, WindowManagerError> {
        let window = self.window_mut(window_id)?;
        if window.maximized {
            return Ok(false);
        }
        window.rect.x = x;
        window.rect.y = y;
        Ok(true)
    }

    /// Replaces the window rectangle. Callers clamp to the minimum size beforehand.
    pub fn resize(&mut self, window_id: WindowId, rect: WindowRect) -> Result<bool, WindowManagerError> {
        let window = self.window_mut(window_id)?;
        if window.maximized {
            return Ok(false);
        }
        window.rect = rect;
        Ok(true)
    }

    pub fn minimize(&mut self, window_id: WindowId) -> Result<(), WindowManagerError> {
        self.window_mut(window_id)?.minimized = true;
        Ok(())
    }

    pub fn unminimize(&mut self, window_id: WindowId) -> Result<(), WindowManagerError> {
        self.window_mut(window_id)?.minimized = false;
        Ok(())
    }

    /// Enters maximize (capturing the restore rectangle) or restores from it.
    ///
    /// Returns the new maximized flag. The maximized geometry itself is never stored; it is
    /// derived from the viewport at render time.
    pub fn toggle_maximize(&mut self, window_id: WindowId) -> Result<bool, WindowManagerError> {
        let window = self.window_mut(window_id)?;
        match window.restore_rect.take() {
            Some(restore) if window.maximized => {
                window.rect = restore;
                window.maximized = false;
            }
            _ => {
                window.restore_rect = Some(window.rect);
                window.maximized = true;
            }
        }
        Ok(window.maximized)
    }

    /// Raises the window above every other open window.
    pub fn focus(&mut self, window_id: WindowId) -> Result<u32, WindowManagerError> {
        if !self.contains(window_id) {
            return Err(WindowManagerError::WindowNotFound(window_id));
        }
        let z_index = self.allocate_z_index();
        self.window_mut(window_id)?.z_index = z_index;
        Ok(z_index)
    }
}
