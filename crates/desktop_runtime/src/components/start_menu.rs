use super::*;
use crate::shell_data::{recommended_items, start_menu_pins, START_MENU_USER_NAME};
use system_ui::{
    Button, ButtonSize, ButtonVariant, Cluster, Grid, Icon, IconName, IconSize, LauncherMenu,
    LayoutGap, LayoutJustify, ListSurface, MenuItem, MenuSeparator, Stack, Text, TextRole,
    TextTone,
};

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <LauncherMenu
            layout_class="start-menu"
            id="desktop-start-menu"
            on_click=Callback::new(|ev: web_sys::MouseEvent| ev.stop_propagation())
        >
            <Stack gap=LayoutGap::Lg layout_class="start-menu-content">
                <label class="start-menu-search" data-slot="search">
                    <Icon icon=IconName::Search size=IconSize::Sm />
                    <input type="text" placeholder="Search" aria-label="Search" readonly=true />
                </label>
                <Stack gap=LayoutGap::Sm layout_class="start-menu-pinned">
                    <Cluster justify=LayoutJustify::Between>
                        <Text role=TextRole::Title>"Pinned"</Text>
                        <Button variant=ButtonVariant::Quiet size=ButtonSize::Sm ui_slot="all-apps">
                            "All apps >"
                        </Button>
                    </Cluster>
                    <Grid gap=LayoutGap::Sm layout_class="start-menu-pins">
                        {start_menu_pins()
                            .iter()
                            .map(|pin| {
                                let id = pin.id;
                                view! {
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        ui_slot="app-tile"
                                        aria_label=pin.label
                                        on_click=Callback::new(move |_| {
                                            launch(runtime, id);
                                            runtime.dispatch_action(DesktopAction::CloseStartMenu);
                                        })
                                    >
                                        <Icon icon=pin.icon size=IconSize::Lg />
                                        <Text role=TextRole::Caption>{pin.label}</Text>
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </Grid>
                </Stack>
            </Stack>
            <MenuSeparator />
            <Stack gap=LayoutGap::Sm layout_class="start-menu-recommended">
                <Text role=TextRole::Title>"Recommended"</Text>
                <ListSurface role="list" aria_label="Recommended">
                    {recommended_items()
                        .iter()
                        .map(|item| {
                            view! {
                                <MenuItem role="listitem" aria_label=item.name>
                                    <Icon icon=item.icon size=IconSize::Md />
                                    <Stack gap=LayoutGap::None>
                                        <Text>{item.name}</Text>
                                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                                            {item.timestamp}
                                        </Text>
                                    </Stack>
                                </MenuItem>
                            }
                        })
                        .collect_view()}
                </ListSurface>
            </Stack>
            <Cluster justify=LayoutJustify::Between layout_class="start-menu-user-row">
                <Cluster gap=LayoutGap::Sm>
                    <Icon icon=IconName::Person size=IconSize::Md />
                    <Text role=TextRole::Label>{START_MENU_USER_NAME}</Text>
                </Cluster>
                <Button
                    variant=ButtonVariant::Quiet
                    ui_slot="power"
                    aria_label="Power"
                    leading_icon=IconName::Power
                >
                    ""
                </Button>
            </Cluster>
        </LauncherMenu>
    }
}
