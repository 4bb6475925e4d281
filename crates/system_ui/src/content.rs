//! Content primitives: layout containers, text, buttons, lists, and the launcher menu.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::tokens::{
    button_state, class_name, flag, forward, ButtonSize, ButtonVariant, LayoutGap, LayoutJustify,
    TextRole, TextTone,
};
use crate::{Icon, IconName, IconSize};

fn layout_box(
    kind: &'static str,
    gap: LayoutGap,
    justify: Option<LayoutJustify>,
    layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=class_name(kind, layout_class)
            data-ui=kind
            data-gap=gap.token()
            data-justify=justify.map(LayoutJustify::token)
        >
            {children()}
        </div>
    }
}

#[component]
/// Column of children.
pub fn Stack(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    layout_box("stack", gap, None, layout_class, children)
}

#[component]
/// Row of children, vertically centered.
pub fn Cluster(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutJustify::Start)] justify: LayoutJustify,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    layout_box("cluster", gap, Some(justify), layout_class, children)
}

#[component]
/// Auto-filling tile grid; column width comes from the caller's class.
pub fn Grid(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    layout_box("grid", gap, None, layout_class, children)
}

#[component]
/// Inline text run.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=class_name("text", None)
            data-ui="text"
            data-slot=ui_slot
            data-role=role.token()
            data-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Button carrying the shared variant/size tokens and an optional leading icon.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] aria_pressed: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=class_name("button", layout_class)
            id=id
            role=role
            aria-label=move || aria_label.get()
            aria-expanded=move || aria_expanded.map(|expanded| flag(expanded.get()))
            aria-pressed=move || aria_pressed.map(|pressed| flag(pressed.get()))
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui="button"
            data-slot=ui_slot
            data-variant=variant.token()
            data-size=size.token()
            data-state=move || button_state(pressed.get(), selected.get())
            on:click=forward(on_click)
            on:mousedown=forward(on_mousedown)
            on:pointerdown=forward(on_pointerdown)
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </button>
    }
}

#[component]
/// Determinate usage bar. `value` is capped at `max`.
pub fn ProgressBar(
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    max: u16,
    value: u16,
) -> impl IntoView {
    let value = value.min(max);

    view! {
        <progress
            class=class_name("progress", None)
            aria-label=aria_label
            max=max
            value=value
            data-ui="progress"
            data-slot=ui_slot
        ></progress>
    }
}

#[component]
/// Vertical list host.
pub fn ListSurface(
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=class_name("list", None) data-ui="list" role=role aria-label=aria_label>
            {children()}
        </div>
    }
}

#[component]
/// Horizontal strip of controls.
pub fn ToolBar(
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=class_name("toolbar", None)
            data-ui="toolbar"
            role="toolbar"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Quiet button inside a menu or list; defaults to the `menuitem` role.
pub fn MenuItem(
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            variant=ButtonVariant::Quiet
            ui_slot="menu-item"
            role=role.unwrap_or_else(|| "menuitem".to_string())
            aria_label=aria_label.unwrap_or_default()
            on_click=Callback::new(forward(on_click))
        >
            {children()}
        </Button>
    }
}

#[component]
/// Thin rule between menu groups.
pub fn MenuSeparator() -> impl IntoView {
    view! {
        <hr class=class_name("menu-separator", None) data-ui="menu-separator" aria-hidden="true" />
    }
}

#[component]
/// Start menu overlay surface.
pub fn LauncherMenu(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=class_name("launcher-menu", layout_class)
            id=id
            role="dialog"
            aria-label="Start"
            data-ui="launcher-menu"
            on:click=forward(on_click)
        >
            {children()}
        </div>
    }
}
