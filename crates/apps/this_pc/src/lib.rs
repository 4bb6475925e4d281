//! "This PC" content pane: a read-only drive overview hosted inside a shell window.
//!
//! The pane receives no geometry from the window manager; it only fills the
//! window body region.

use leptos::*;
use system_ui::{
    Button, ButtonSize, ButtonVariant, Cluster, Grid, Icon, IconName, IconSize, LayoutGap,
    ListSurface, ProgressBar, Stack, Text, TextRole, TextTone, ToolBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Static description of one mounted drive.
pub struct DriveInfo {
    /// Stable drive id.
    pub id: &'static str,
    /// Display label, including the drive letter.
    pub label: &'static str,
    /// Capacity in gigabytes.
    pub total_gb: u32,
    /// Free space in gigabytes.
    pub free_gb: u32,
}

impl DriveInfo {
    /// Used space as a percentage of capacity, in `0.0..=100.0`.
    pub fn used_percent(&self) -> f64 {
        if self.total_gb == 0 {
            return 0.0;
        }
        let used = self.total_gb.saturating_sub(self.free_gb);
        f64::from(used) / f64::from(self.total_gb) * 100.0
    }

    /// Free-space caption shown under the usage bar.
    pub fn free_space_caption(&self) -> String {
        format!("{} GB free of {} GB", self.free_gb, self.total_gb)
    }
}

const DRIVES: [DriveInfo; 3] = [
    DriveInfo {
        id: "c-drive",
        label: "Local Disk (C:)",
        total_gb: 256,
        free_gb: 120,
    },
    DriveInfo {
        id: "d-drive",
        label: "Data (D:)",
        total_gb: 512,
        free_gb: 340,
    },
    DriveInfo {
        id: "e-drive",
        label: "USB Drive (E:)",
        total_gb: 32,
        free_gb: 18,
    },
];

/// Drives listed in the pane, in display order.
pub fn drives() -> &'static [DriveInfo] {
    &DRIVES
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SidebarLocation {
    id: &'static str,
    label: &'static str,
    icon: IconName,
}

const SIDEBAR_LOCATIONS: [SidebarLocation; 4] = [
    SidebarLocation {
        id: "desktop",
        label: "Desktop",
        icon: IconName::Desktop,
    },
    SidebarLocation {
        id: "documents",
        label: "Documents",
        icon: IconName::Document,
    },
    SidebarLocation {
        id: "downloads",
        label: "Downloads",
        icon: IconName::ArrowDownload,
    },
    SidebarLocation {
        id: "pictures",
        label: "Pictures",
        icon: IconName::Image,
    },
];

#[component]
/// Renders the drive overview. Navigation is decorative; there is no filesystem behind it.
pub fn ThisPcApp() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::None layout_class="this-pc">
            <ToolBar aria_label="Navigation">
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    aria_label="Back"
                    disabled=true
                    leading_icon=IconName::ArrowLeft
                >
                    ""
                </Button>
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    aria_label="Forward"
                    disabled=true
                    leading_icon=IconName::ArrowRight
                >
                    ""
                </Button>
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    aria_label="Up"
                    disabled=true
                    leading_icon=IconName::ArrowUp
                >
                    ""
                </Button>
                <Text role=TextRole::Label ui_slot="breadcrumb">"This PC"</Text>
            </ToolBar>
            <Cluster gap=LayoutGap::None layout_class="this-pc-content">
                <ListSurface role="navigation" aria_label="Quick access">
                    {SIDEBAR_LOCATIONS
                        .iter()
                        .map(|location| {
                            view! {
                                <div class="this-pc-sidebar-item" data-location=location.id>
                                    <Icon icon=location.icon size=IconSize::Sm />
                                    <Text>{location.label}</Text>
                                </div>
                            }
                        })
                        .collect_view()}
                </ListSurface>
                <Grid gap=LayoutGap::Md layout_class="this-pc-drive-grid">
                    {drives().iter().map(|drive| view! { <DriveTile drive=*drive /> }).collect_view()}
                </Grid>
            </Cluster>
        </Stack>
    }
}

#[component]
fn DriveTile(drive: DriveInfo) -> impl IntoView {
    let used_percent = drive.used_percent().round() as u16;

    view! {
        <Cluster gap=LayoutGap::Sm layout_class="this-pc-drive-tile">
            <Icon icon=IconName::HardDrive size=IconSize::Lg />
            <Stack gap=LayoutGap::Sm>
                <Text role=TextRole::Label>{drive.label}</Text>
                <ProgressBar
                    ui_slot="drive-usage"
                    aria_label=format!("{} usage", drive.label)
                    max=100
                    value=used_percent
                />
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {drive.free_space_caption()}
                </Text>
            </Stack>
        </Cluster>
    }
}
