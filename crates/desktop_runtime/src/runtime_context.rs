//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container. UI composition stays in
//! [`crate::components`].

use leptos::*;

use crate::{
    config::ShellConfig,
    host,
    model::{DesktopState, InteractionState, Viewport},
    reducer::{reduce_desktop, DesktopAction},
    window_manager::WindowStore,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Layout constants shared by the reducer and the renderer.
    pub config: StoredValue<ShellConfig>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Live viewport size, refreshed on browser resize.
    pub viewport: RwSignal<Viewport>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Viewport size as of the last browser resize, read without tracking.
    pub fn viewport_untracked(&self) -> Viewport {
        self.viewport.get_untracked()
    }

    /// Shell layout configuration.
    pub fn shell_config(&self) -> ShellConfig {
        self.config.get_value()
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Layout configuration; defaults to the configuration embedded at build time.
    #[prop(optional)]
    config: Option<ShellConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_else(ShellConfig::builtin_or_default);
    let stored_config = store_value(config);
    let state = create_rw_signal(DesktopState {
        windows: WindowStore::with_config(&config),
        ..DesktopState::default()
    });
    let interaction = create_rw_signal(InteractionState::default());
    let viewport = create_rw_signal(host::current_viewport());

    let resize_listener = window_event_listener(ev::resize, move |_| {
        viewport.set(host::current_viewport());
    });
    on_cleanup(move || resize_listener.remove());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let config = stored_config.get_value();

        match reduce_desktop(&mut desktop, &mut ui, &config, action) {
            Ok(()) => {
                if state.with_untracked(|current| current != &desktop) {
                    state.set(desktop);
                }
                if interaction.with_untracked(|current| current != &ui) {
                    interaction.set(ui);
                }
            }
            Err(err) => logging::debug_warn!("ignored desktop action: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        config: stored_config,
        state,
        interaction,
        viewport,
        dispatch,
    };

    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
