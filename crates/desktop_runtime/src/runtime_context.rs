//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and host
//! bootstrap wiring. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    effect_executor,
    host::DesktopHostContext,
    model::DesktopState,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and starts the session check.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    logging::log!(
        "desktop runtime starting with {} host",
        host_services.host_strategy.as_str()
    );
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        if let Some((operation, kind)) = action.window_operation() {
            logging::log!("window {operation}: {}", kind.token());
        }

        let mut desktop = state.get_untracked();
        let previous = desktop.clone();
        match reduce_desktop(&mut desktop, action) {
            Ok(new_effects) => {
                if desktop != previous {
                    state.set(desktop);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);

    effect_executor::install(runtime);
    runtime.host.get_value().install_boot(runtime.dispatch);

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
