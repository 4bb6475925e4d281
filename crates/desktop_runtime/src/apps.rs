//! Launch mapping and hosted app content.
//!
//! App manifests are compiled into an embedded catalog by the build script. Desktop icons,
//! taskbar buttons, and start-menu tiles only carry a launch id; this module resolves that id to
//! an [`OpenWindowRequest`] with the app's default window size.

use std::sync::OnceLock;

use desktop_app_this_pc::ThisPcApp;
use leptos::*;
use serde::Deserialize;

use crate::generated::APP_MANIFEST_CATALOG_JSON;
use crate::model::OpenWindowRequest;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WindowDefaults {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppManifest {
    pub app_id: String,
    pub display_name: String,
    pub icon: String,
    pub launch_ids: Vec<String>,
    pub window_defaults: WindowDefaults,
}

impl AppManifest {
    pub fn open_request(&self) -> OpenWindowRequest {
        OpenWindowRequest::new(
            self.app_id.clone(),
            self.display_name.clone(),
            self.icon.clone(),
        )
        .with_size(self.window_defaults.width, self.window_defaults.height)
    }
}

fn parse_catalog(raw: &str) -> Vec<AppManifest> {
    match serde_json::from_str(raw) {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::warn!("app manifest catalog is unreadable: {err}");
            Vec::new()
        }
    }
}

/// Apps compiled into the shell, sorted by app id.
pub fn app_catalog() -> &'static [AppManifest] {
    static CATALOG: OnceLock<Vec<AppManifest>> = OnceLock::new();
    CATALOG.get_or_init(|| parse_catalog(APP_MANIFEST_CATALOG_JSON))
}

pub fn app_manifest(app_id: &str) -> Option<&'static AppManifest> {
    app_catalog().iter().find(|app| app.app_id == app_id)
}

/// Resolves a desktop/taskbar/start-menu id to a window-open request.
///
/// Unmapped ids return `None`.
pub fn launch_request(launch_id: &str) -> Option<OpenWindowRequest> {
    app_catalog()
        .iter()
        .find(|app| app.launch_ids.iter().any(|id| id == launch_id))
        .map(AppManifest::open_request)
}

pub fn is_launchable(launch_id: &str) -> bool {
    launch_request(launch_id).is_some()
}

/// Content view mounted inside a window body for `app_id`.
pub fn render_window_contents(app_id: &str) -> View {
    match app_id {
        "this-pc" => view! { <ThisPcApp /> }.into_view(),
        other => {
            let message = format!("No content is registered for {other}.");
            view! { <p class="window-body-empty">{message}</p> }.into_view()
        }
    }
}
