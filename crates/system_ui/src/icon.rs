//! Centralized icon API.
//!
//! Icons are rendered as a masked glyph slot whose artwork is supplied by the
//! shell stylesheet through the `data-icon` token, so components only ever
//! name an icon and never embed asset paths.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named icons available to shell components and hosted content.
pub enum IconName {
    /// Up chevron (hidden tray icons).
    ChevronUp,
    /// Notification bell.
    Alert,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Download arrow.
    ArrowDownload,
    /// App folder grid.
    AppFolder,
    /// Battery level.
    Battery,
    /// Calendar.
    Calendar,
    /// Recycle bin.
    Delete,
    /// Desktop monitor.
    Desktop,
    /// Close glyph.
    Dismiss,
    /// Generic document.
    Document,
    /// Closed folder.
    Folder,
    /// Open folder.
    FolderOpen,
    /// Web browser globe.
    Globe,
    /// Hard drive.
    HardDrive,
    /// Image file.
    Image,
    /// Mail envelope.
    Mail,
    /// Note page.
    Note,
    /// User avatar.
    Person,
    /// Power button.
    Power,
    /// Search magnifier.
    Search,
    /// Settings gear.
    Settings,
    /// Speaker volume.
    Speaker,
    /// Store bag.
    Store,
    /// Weather/widgets sun.
    WeatherSunny,
    /// Wireless network.
    Wifi,
    /// Start button logo.
    WindowStart,
    /// Minimize titlebar glyph.
    WindowMinimize,
    /// Maximize titlebar glyph.
    WindowMaximize,
    /// Restore titlebar glyph.
    WindowRestore,
}

impl IconName {
    /// Stable token written to `data-icon`.
    pub fn token(self) -> &'static str {
        match self {
            Self::ChevronUp => "chevron-up",
            Self::Alert => "alert",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowRight => "arrow-right",
            Self::ArrowUp => "arrow-up",
            Self::ArrowDownload => "arrow-download",
            Self::AppFolder => "app-folder",
            Self::Battery => "battery",
            Self::Calendar => "calendar",
            Self::Delete => "delete",
            Self::Desktop => "desktop",
            Self::Dismiss => "dismiss",
            Self::Document => "document",
            Self::Folder => "folder",
            Self::FolderOpen => "folder-open",
            Self::Globe => "globe",
            Self::HardDrive => "hard-drive",
            Self::Image => "image",
            Self::Mail => "mail",
            Self::Note => "note",
            Self::Person => "person",
            Self::Power => "power",
            Self::Search => "search",
            Self::Settings => "settings",
            Self::Speaker => "speaker",
            Self::Store => "store",
            Self::WeatherSunny => "weather-sunny",
            Self::Wifi => "wifi",
            Self::WindowStart => "window-start",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 12px glyph.
    Xs,
    /// 16px glyph.
    #[default]
    Sm,
    /// 20px glyph.
    Md,
    /// 32px glyph.
    Lg,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders a named icon glyph.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui="icon"
            data-icon=icon.token()
            data-size=size.token()
        ></span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titlebar_tokens_are_distinct() {
        let tokens = [
            IconName::WindowMinimize.token(),
            IconName::WindowMaximize.token(),
            IconName::WindowRestore.token(),
            IconName::Dismiss.token(),
        ];
        for (idx, token) in tokens.iter().enumerate() {
            assert!(!tokens[idx + 1..].contains(token), "duplicate token {token}");
        }
    }
}
