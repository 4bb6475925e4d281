//! Static tables rendered by the desktop, taskbar, and start menu.

use system_ui::IconName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: IconName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendedItem {
    pub id: &'static str,
    pub name: &'static str,
    pub timestamp: &'static str,
    pub icon: IconName,
}

const fn item(id: &'static str, label: &'static str, icon: IconName) -> ShellItem {
    ShellItem { id, label, icon }
}

const DESKTOP_ICONS: [ShellItem; 5] = [
    item("recycle-bin", "Recycle Bin", IconName::Delete),
    item("this-pc", "This PC", IconName::Desktop),
    item("edge", "Microsoft Edge", IconName::Globe),
    item("file-explorer", "File Explorer", IconName::FolderOpen),
    item("documents", "Documents", IconName::Folder),
];

const TASKBAR_PINS: [ShellItem; 7] = [
    item("search", "Search", IconName::Search),
    item("task-view", "Task View", IconName::AppFolder),
    item("widgets", "Widgets", IconName::WeatherSunny),
    item("edge", "Microsoft Edge", IconName::Globe),
    item("file-explorer", "File Explorer", IconName::FolderOpen),
    item("store", "Microsoft Store", IconName::Store),
    item("settings", "Settings", IconName::Settings),
];

const START_MENU_PINS: [ShellItem; 9] = [
    item("edge", "Edge", IconName::Globe),
    item("this-pc", "This PC", IconName::Desktop),
    item("file-explorer", "File Explorer", IconName::FolderOpen),
    item("mail", "Mail", IconName::Mail),
    item("calendar", "Calendar", IconName::Calendar),
    item("store", "Microsoft Store", IconName::Store),
    item("photos", "Photos", IconName::Image),
    item("notepad", "Notepad", IconName::Note),
    item("settings", "Settings", IconName::Settings),
];

const RECOMMENDED: [RecommendedItem; 4] = [
    RecommendedItem {
        id: "doc-1",
        name: "Project Proposal.docx",
        timestamp: "Yesterday at 3:42 PM",
        icon: IconName::Document,
    },
    RecommendedItem {
        id: "img-1",
        name: "Screenshot 2026-02-27.png",
        timestamp: "Yesterday at 11:15 AM",
        icon: IconName::Image,
    },
    RecommendedItem {
        id: "folder-1",
        name: "Downloads",
        timestamp: "2/26/2026",
        icon: IconName::Folder,
    },
    RecommendedItem {
        id: "note-1",
        name: "Meeting Notes.txt",
        timestamp: "2/25/2026",
        icon: IconName::Note,
    },
];

pub const START_MENU_USER_NAME: &str = "User";

pub fn desktop_icons() -> &'static [ShellItem] {
    &DESKTOP_ICONS
}

pub fn taskbar_pins() -> &'static [ShellItem] {
    &TASKBAR_PINS
}

pub fn start_menu_pins() -> &'static [ShellItem] {
    &START_MENU_PINS
}

pub fn recommended_items() -> &'static [RecommendedItem] {
    &RECOMMENDED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::is_launchable;
    use pretty_assertions::assert_eq;

    fn assert_unique(items: &[ShellItem]) {
        for (idx, item) in items.iter().enumerate() {
            assert!(
                !items[idx + 1..].iter().any(|other| other.id == item.id),
                "duplicate id {}",
                item.id
            );
        }
    }

    #[test]
    fn table_ids_are_unique() {
        assert_unique(desktop_icons());
        assert_unique(taskbar_pins());
        assert_unique(start_menu_pins());
    }

    #[test]
    fn only_this_pc_desktop_icon_launches_a_window() {
        let launchable: Vec<_> = desktop_icons()
            .iter()
            .filter(|icon| is_launchable(icon.id))
            .map(|icon| icon.id)
            .collect();
        assert_eq!(launchable, vec!["this-pc"]);
    }

    #[test]
    fn recommended_items_keep_display_order() {
        let names: Vec<_> = recommended_items().iter().map(|item| item.name).collect();
        assert_eq!(
            names,
            vec![
                "Project Proposal.docx",
                "Screenshot 2026-02-27.png",
                "Downloads",
                "Meeting Notes.txt",
            ]
        );
    }
}
