use super::*;
use crate::{
    apps,
    host::try_set_pointer_capture,
    model::{ResizeEdge, WindowId},
    surface::{window_surface, MaximizeControl},
};
use system_ui::{
    Icon, IconName, IconSize, ResizeHandle, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};

pub(super) fn icon_for_token(token: &str) -> IconName {
    match token {
        "desktop" => IconName::Desktop,
        "folder" => IconName::Folder,
        "folder-open" => IconName::FolderOpen,
        "globe" => IconName::Globe,
        "settings" => IconName::Settings,
        _ => IconName::AppFolder,
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let Some((title, icon, app_id)) = state.with_untracked(|desktop| {
        desktop
            .windows
            .get(window_id)
            .map(|w| (w.title.clone(), w.icon.clone(), w.app_id.clone()))
    }) else {
        return ().into_view();
    };

    let surface = create_memo(move |_| {
        let viewport = runtime.viewport.get();
        let config = runtime.shell_config();
        state.with(|desktop| {
            desktop
                .windows
                .get(window_id)
                .map(|w| window_surface(w, viewport, &config))
        })
    });
    let focused =
        Signal::derive(move || state.with(|desktop| desktop.focused_window_id() == Some(window_id)));
    let style = Signal::derive(move || surface.get().map(|s| s.style()).unwrap_or_default());
    let minimized = Signal::derive(move || surface.get().map(|s| !s.visible).unwrap_or(false));
    let maximized = Signal::derive(move || surface.get().map(|s| s.maximized).unwrap_or(false));
    let maximize_control = Signal::derive(move || {
        surface
            .get()
            .map(|s| s.maximize_control)
            .unwrap_or(MaximizeControl::Maximize)
    });
    let show_handles =
        Signal::derive(move || surface.get().map(|s| s.resizable_handles).unwrap_or(false));

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let titlebar_double_click = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    });
    let control_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
    });
    let control_mousedown = Callback::new(move |ev: web_sys::MouseEvent| stop_mouse_event(&ev));
    let minimize = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
    });
    let toggle_maximize = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    });
    let close = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    });

    view! {
        <WindowFrame
            layout_class="desktop-window"
            style=style
            aria_label=title.clone()
            focused=focused
            minimized=minimized
            maximized=maximized
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_move on_dblclick=titlebar_double_click>
                <WindowTitle>
                    <Icon icon=icon_for_token(&icon) size=IconSize::Sm />
                    <span>{title}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        ui_slot="minimize"
                        aria_label="Minimize window"
                        on_pointerdown=control_pointerdown
                        on_mousedown=control_mousedown
                        on_click=minimize
                    >
                        <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                    </WindowControlButton>
                    <WindowControlButton
                        ui_slot="maximize"
                        aria_label=Signal::derive(move || {
                            maximize_control.get().aria_label().to_string()
                        })
                        on_pointerdown=control_pointerdown
                        on_mousedown=control_mousedown
                        on_click=toggle_maximize
                    >
                        {move || view! { <Icon icon=maximize_control.get().icon() size=IconSize::Xs /> }}
                    </WindowControlButton>
                    <WindowControlButton
                        ui_slot="close"
                        aria_label="Close window"
                        on_pointerdown=control_pointerdown
                        on_mousedown=control_mousedown
                        on_click=close
                    >
                        <Icon icon=IconName::Dismiss size=IconSize::Xs />
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>{apps::render_window_contents(&app_id)}</WindowBody>
            <Show when=move || show_handles.get() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle window_id=window_id edge=edge /> })
                    .collect_view()}
            </Show>
        </WindowFrame>
    }
    .into_view()
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    view! { <ResizeHandle edge=edge.token() on_pointerdown=on_pointerdown /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn manifest_icon_tokens_resolve_to_icons() {
        assert_eq!(icon_for_token("desktop"), IconName::Desktop);
        assert_eq!(icon_for_token("unknown"), IconName::AppFolder);
    }
}
