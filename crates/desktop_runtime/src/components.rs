//! Desktop shell UI composition and interaction surfaces.

mod clock;
mod desktop;
mod start_menu;
mod taskbar;
mod window;

use leptos::*;
use system_ui::{DesktopBackdrop, DesktopRoot, DesktopWindowLayer};

use self::{
    desktop::DesktopIcons, start_menu::StartMenu, taskbar::ShellTaskbar, window::DesktopWindow,
};
use crate::{
    model::{InteractionState, PointerPosition},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Full desktop shell: icon grid, window layer, start menu overlay, and taskbar.
///
/// Must be rendered inside [`DesktopProvider`].
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let on_pointer_move = Callback::new(move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        match runtime.interaction.get_untracked() {
            InteractionState::Dragging(_) => runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer,
                viewport: runtime.viewport_untracked(),
            }),
            InteractionState::Resizing(_) => {
                runtime.dispatch_action(DesktopAction::UpdateResize { pointer })
            }
            InteractionState::Idle => {}
        }
    });
    let on_pointer_end = Callback::new(move |_| end_active_pointer_interaction(runtime));
    let on_background_click =
        Callback::new(move |_| runtime.dispatch_action(DesktopAction::BackgroundClick));

    view! {
        <DesktopRoot
            id="desktop-shell-root"
            on_pointermove=on_pointer_move
            on_pointerup=on_pointer_end
        >
            <DesktopBackdrop on_click=on_background_click>
                <DesktopIcons />
                <DesktopWindowLayer>
                    <For
                        each=move || state.with(|desktop| desktop.windows.ids())
                        key=|window_id| window_id.0
                        let:window_id
                    >
                        <DesktopWindow window_id=window_id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>
            <Show when=move || state.with(|desktop| desktop.start_menu_open) fallback=|| ()>
                <StartMenu />
            </Show>
            <ShellTaskbar />
        </DesktopRoot>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Only the main mouse button or the primary touch/pen contact starts a gesture.
fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    match runtime.interaction.get_untracked() {
        InteractionState::Dragging(_) => runtime.dispatch_action(DesktopAction::EndMove),
        InteractionState::Resizing(_) => runtime.dispatch_action(DesktopAction::EndResize),
        InteractionState::Idle => {}
    }
}

/// Dispatches the launch mapping for an activated desktop, taskbar, or start-menu id.
fn launch(runtime: DesktopRuntimeContext, launch_id: &str) {
    runtime.dispatch_action(DesktopAction::Launch {
        launch_id: launch_id.to_string(),
        viewport: runtime.viewport_untracked(),
    });
}
