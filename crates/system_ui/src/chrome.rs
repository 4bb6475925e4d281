//! Desktop chrome: the shell root, window frames and their handles, and the taskbar.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::content::Button;
use crate::tokens::{button_state, class_name, flag, forward, ButtonSize, ButtonVariant};

fn region(kind: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=class_name(kind, None) data-ui=kind>
            {children()}
        </div>
    }
}

#[component]
/// Shell root. Pointer move/up events from anywhere in the shell land here, and
/// `pointercancel` is reported through `on_pointerup` so a gesture always ends.
pub fn DesktopRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] on_pointermove: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_pointerup: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=class_name("desktop", None)
            tabindex="-1"
            data-ui="desktop"
            on:pointermove=forward(on_pointermove)
            on:pointerup=forward(on_pointerup)
            on:pointercancel=forward(on_pointerup)
        >
            {children()}
        </div>
    }
}

#[component]
/// Wallpaper area above the taskbar. Clicks reaching it are background clicks.
pub fn DesktopBackdrop(
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=class_name("backdrop", None) data-ui="backdrop" on:click=forward(on_click)>
            {children()}
        </div>
    }
}

#[component]
/// Icon column on the wallpaper. Clicks stop here so they never count as background clicks.
pub fn DesktopIconGrid(children: Children) -> impl IntoView {
    view! {
        <div
            class=class_name("desktop-icons", None)
            data-ui="desktop-icons"
            on:click=|ev: MouseEvent| ev.stop_propagation()
        >
            {children()}
        </div>
    }
}

#[component]
/// Selectable desktop icon.
pub fn DesktopIconButton(
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=class_name("desktop-icon", None)
            aria-label=aria_label
            aria-pressed=move || flag(selected.get())
            data-ui="desktop-icon"
            data-selected=move || flag(selected.get())
            on:click=forward(on_click)
            on:dblclick=forward(on_dblclick)
        >
            {children()}
        </button>
    }
}

#[component]
/// Positioning context for the open windows.
pub fn DesktopWindowLayer(children: Children) -> impl IntoView {
    region("window-layer", children)
}

#[component]
/// Absolutely positioned window. Geometry and stacking arrive through `style`.
///
/// A minimized frame stays mounted and is only hidden, so its content keeps state.
pub fn WindowFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=class_name("window", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            aria-hidden=move || flag(minimized.get())
            data-ui="window"
            data-focused=move || flag(focused.get())
            data-minimized=move || flag(minimized.get())
            data-maximized=move || flag(maximized.get())
            on:pointerdown=forward(on_pointerdown)
        >
            {children()}
        </section>
    }
}

#[component]
/// Drag handle of a window.
pub fn WindowTitleBar(
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=class_name("titlebar", None)
            data-ui="titlebar"
            on:pointerdown=forward(on_pointerdown)
            on:dblclick=forward(on_dblclick)
        >
            {children()}
        </header>
    }
}

#[component]
/// Icon and caption at the start of a titlebar.
pub fn WindowTitle(children: Children) -> impl IntoView {
    region("window-title", children)
}

#[component]
/// Titlebar button group. Double-clicks stop here so they never toggle maximize.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div
            class=class_name("window-controls", None)
            data-ui="window-controls"
            on:dblclick=|ev: MouseEvent| ev.stop_propagation()
        >
            {children()}
        </div>
    }
}

#[component]
/// Minimize, maximize/restore, or close button.
pub fn WindowControlButton(
    ui_slot: &'static str,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            variant=ButtonVariant::Quiet
            size=ButtonSize::Sm
            ui_slot=ui_slot
            aria_label=aria_label
            on_pointerdown=Callback::new(forward(on_pointerdown))
            on_mousedown=Callback::new(forward(on_mousedown))
            on_click=Callback::new(forward(on_click))
        >
            {children()}
        </Button>
    }
}

#[component]
/// Content area below the titlebar.
pub fn WindowBody(children: Children) -> impl IntoView {
    region("window-body", children)
}

#[component]
/// Invisible grab strip along one edge or corner; `edge` is the compass token.
pub fn ResizeHandle(
    edge: &'static str,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class=class_name("resize-handle", None)
            aria-hidden="true"
            data-ui="resize-handle"
            data-edge=edge
            on:pointerdown=forward(on_pointerdown)
        ></div>
    }
}

#[component]
/// Bar pinned to the bottom of the shell.
pub fn Taskbar(
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=class_name("taskbar", None)
            data-ui="taskbar"
            role="toolbar"
            aria-label=aria_label
        >
            {children()}
        </footer>
    }
}

#[component]
/// Taskbar area; `ui_slot` is `center` or `tray`.
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=class_name("taskbar-section", None)
            data-ui="taskbar-section"
            data-slot=ui_slot
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Taskbar button: start, pinned app, or running window.
pub fn TaskbarButton(
    ui_slot: &'static str,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_expanded: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] aria_pressed: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=class_name("taskbar-button", None)
            id=id
            aria-label=move || aria_label.get()
            aria-expanded=move || aria_expanded.map(|expanded| flag(expanded.get()))
            aria-pressed=move || aria_pressed.map(|pressed| flag(pressed.get()))
            title=move || title.get()
            data-ui="taskbar-button"
            data-slot=ui_slot
            data-state=move || button_state(pressed.get(), selected.get())
            on:click=forward(on_click)
        >
            {children()}
        </button>
    }
}

#[component]
/// Tray row at the end of the taskbar.
pub fn TrayList(children: Children) -> impl IntoView {
    region("tray", children)
}

#[component]
/// Status button inside the tray.
pub fn TrayButton(
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <TaskbarButton ui_slot="tray" aria_label=aria_label title=title>
            {children()}
        </TaskbarButton>
    }
}
