//! Desktop shell runtime: window store, pointer interaction, reducer, and Leptos shell UI.

pub mod apps;
pub mod components;
pub mod config;
pub mod host;
pub mod interaction;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod shell_data;
pub mod surface;
pub mod window_manager;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/shell_catalog_generated.rs"));
}

pub use apps::launch_request;
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{ConfigError, ShellConfig};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction};
pub use surface::{window_surface, MaximizeControl, WindowSurface};
pub use window_manager::{WindowManagerError, WindowStore};
