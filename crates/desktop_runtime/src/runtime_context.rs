//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived registry signal, pointer-capture state, and the runtime
//! effect queue. The registry stays the single source of truth: components read snapshots
//! through these signals and send every change back through [`DesktopRuntimeContext::dispatch`].
//! UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    config::WindowManagerConfig,
    effect_executor, host,
    model::{InteractionState, WindowRect},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    registry::WindowRegistry,
};

#[derive(Clone, Copy)]
/// Leptos context for reading window-manager state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Window manager configuration loaded at provider start.
    pub config: StoredValue<WindowManagerConfig>,
    /// Reactive registry snapshot.
    pub registry: RwSignal<WindowRegistry>,
    /// Reactive drag/resize capture state.
    pub interaction: RwSignal<InteractionState>,
    /// Desktop area above the taskbar; maximized windows fill it.
    pub viewport: RwSignal<WindowRect>,
    /// Queue of runtime effects emitted by the reducer and drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Re-reads the viewport from the host.
    pub fn refresh_viewport(&self) {
        let taskbar_height = self.config.with_value(|config| config.taskbar_height);
        let viewport = host::desktop_viewport_rect(taskbar_height);
        if self.viewport.get_untracked() != viewport {
            self.viewport.set(viewport);
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
///
/// State lives for the lifetime of the provider; nothing is persisted across page loads.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let config = WindowManagerConfig::load();
    let initial_viewport = host::desktop_viewport_rect(config.taskbar_height);
    let registry = create_rw_signal(WindowRegistry::new(&config));
    let interaction = create_rw_signal(InteractionState::default());
    let viewport = create_rw_signal(initial_viewport);
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let config = store_value(config);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut next_registry = registry.get_untracked();
        let mut next_interaction = interaction.get_untracked();

        let outcome = config.with_value(|config| {
            reduce_desktop(&mut next_registry, &mut next_interaction, config, action)
        });
        match outcome {
            Ok(new_effects) => {
                if registry.with_untracked(|current| *current != next_registry) {
                    registry.set(next_registry);
                }
                if interaction.with_untracked(|current| *current != next_interaction) {
                    interaction.set(next_interaction);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::debug_warn!("ignoring stale desktop action: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        config,
        registry,
        interaction,
        viewport,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

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
