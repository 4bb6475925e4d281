use super::clock::TaskbarClock;
use super::window::icon_for_token;
use super::*;
use crate::{
    model::{WindowId, WindowRecord},
    shell_data::taskbar_pins,
};
use system_ui::{
    Icon, IconName, IconSize, Taskbar, TaskbarButton, TaskbarSection, TrayButton, TrayList,
};

fn taskbar_window_aria_label(win: &WindowRecord) -> String {
    if win.minimized {
        format!("{} (minimized)", win.title)
    } else {
        win.title.clone()
    }
}

#[component]
pub(super) fn ShellTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let start_open = Signal::derive(move || state.with(|desktop| desktop.start_menu_open));

    view! {
        <Taskbar aria_label="Taskbar">
            <TaskbarSection ui_slot="center" aria_label="Pinned and running apps">
                <TaskbarButton
                    ui_slot="start"
                    id="taskbar-start-button"
                    aria_label="Start"
                    title="Start"
                    aria_expanded=start_open
                    pressed=start_open
                    on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                    })
                >
                    <Icon icon=IconName::WindowStart size=IconSize::Md />
                </TaskbarButton>
                {taskbar_pins()
                    .iter()
                    .map(|pin| {
                        let id = pin.id;
                        view! {
                            <TaskbarButton
                                ui_slot="pin"
                                aria_label=pin.label
                                title=pin.label
                                on_click=Callback::new(move |_| launch(runtime, id))
                            >
                                <Icon icon=pin.icon size=IconSize::Md />
                            </TaskbarButton>
                        }
                    })
                    .collect_view()}
                <For
                    each=move || state.with(|desktop| desktop.windows.ids())
                    key=|window_id| window_id.0
                    let:window_id
                >
                    <RunningWindowButton window_id=window_id />
                </For>
            </TaskbarSection>
            <TaskbarSection ui_slot="tray" aria_label="System tray">
                <TrayList>
                    <TrayButton aria_label="Show hidden icons" title="Show hidden icons">
                        <Icon icon=IconName::ChevronUp size=IconSize::Sm />
                    </TrayButton>
                    <TrayButton aria_label="Quick settings" title="Network, volume, and battery">
                        <Icon icon=IconName::Wifi size=IconSize::Sm />
                        <Icon icon=IconName::Speaker size=IconSize::Sm />
                        <Icon icon=IconName::Battery size=IconSize::Sm />
                    </TrayButton>
                    <TaskbarClock />
                    <TrayButton aria_label="Notifications" title="Notifications">
                        <Icon icon=IconName::Alert size=IconSize::Sm />
                    </TrayButton>
                </TrayList>
            </TaskbarSection>
        </Taskbar>
    }
}

#[component]
fn RunningWindowButton(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let label = Signal::derive(move || {
        state.with(|desktop| {
            desktop
                .windows
                .get(window_id)
                .map(taskbar_window_aria_label)
                .unwrap_or_default()
        })
    });
    let title = Signal::derive(move || {
        state.with(|desktop| {
            desktop
                .windows
                .get(window_id)
                .map(|w| w.title.clone())
                .unwrap_or_default()
        })
    });
    let focused =
        Signal::derive(move || state.with(|desktop| desktop.focused_window_id() == Some(window_id)));
    let icon = state.with_untracked(|desktop| {
        desktop
            .windows
            .get(window_id)
            .map(|w| icon_for_token(&w.icon))
            .unwrap_or(IconName::AppFolder)
    });

    view! {
        <TaskbarButton
            ui_slot="running"
            aria_label=label
            title=title
            aria_pressed=focused
            selected=focused
            on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                ev.stop_propagation();
                runtime.dispatch_action(DesktopAction::ActivateTaskbarWindow { window_id });
            })
        >
            <Icon icon=icon size=IconSize::Md />
            <span data-slot="label">{title}</span>
        </TaskbarButton>
    }
}
