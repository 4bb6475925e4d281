//! Leptos building blocks for the desktop shell and its hosted content panes.
//!
//! Every primitive renders `class="ui-<kind>"` and `data-ui="<kind>"`, with
//! variants and states as `data-*` tokens, so the shell stylesheet never has to
//! match on component-specific markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod chrome;
mod content;
mod icon;
mod tokens;

pub use chrome::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
    ResizeHandle, Taskbar, TaskbarButton, TaskbarSection, TrayButton, TrayList, WindowBody,
    WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};
pub use content::{
    Button, Cluster, Grid, LauncherMenu, ListSurface, MenuItem, MenuSeparator, ProgressBar, Stack,
    Text, ToolBar,
};
pub use icon::{Icon, IconName, IconSize};
pub use tokens::{ButtonSize, ButtonVariant, LayoutGap, LayoutJustify, TextRole, TextTone};
