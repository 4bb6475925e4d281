//! Browser environment queries used by the shell components.
//!
//! Each query has a deterministic native fallback so reducer and component helpers can be
//! exercised without a DOM.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::model::Viewport;

/// Current layout viewport size, taskbar included.
pub fn current_viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let fallback = Viewport::default();
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(fallback.width);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(fallback.height);
            return Viewport::new(width, height);
        }
    }

    Viewport::default()
}

/// Wall-clock reading in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

/// Routes the rest of a pointer gesture to the element that received `ev`.
#[cfg(target_arch = "wasm32")]
pub fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            if let Err(err) = element.set_pointer_capture(ev.pointer_id()) {
                leptos::logging::debug_warn!("pointer capture failed: {err:?}");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn native_fallbacks_are_deterministic() {
        assert_eq!(current_viewport(), Viewport::new(1024.0, 768.0));
        assert_eq!(ClockSnapshot::now().year, 1970);
    }
}
