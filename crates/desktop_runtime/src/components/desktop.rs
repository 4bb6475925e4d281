use super::*;
use crate::shell_data::desktop_icons;
use system_ui::{DesktopIconButton, DesktopIconGrid, Icon, IconSize};

#[component]
pub(super) fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <DesktopIconGrid>
            {desktop_icons()
                .iter()
                .map(|item| {
                    let id = item.id;
                    let selected = Signal::derive(move || {
                        state.with(|desktop| desktop.selected_icon_id.as_deref() == Some(id))
                    });
                    view! {
                        <DesktopIconButton
                            aria_label=item.label
                            selected=selected
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::SelectIcon {
                                    icon_id: id.to_string(),
                                });
                            })
                            on_dblclick=Callback::new(move |_| launch(runtime, id))
                        >
                            <Icon icon=item.icon size=IconSize::Lg />
                            <span data-slot="label">{item.label}</span>
                        </DesktopIconButton>
                    }
                })
                .collect_view()}
        </DesktopIconGrid>
    }
}
