//! Runtime provider and context wiring for the inspector.
//!
//! This module owns the long-lived session state, the reducer dispatch callback and the runtime
//! effect queue. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;
use platform_host::InspectorServices;

use crate::{
    config::InspectorConfig,
    effect_executor,
    host::InspectorHostContext,
    model::InspectorState,
    reducer::{reduce_inspector, InspectorAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading inspector state and dispatching [`InspectorAction`] values.
pub struct InspectorRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<InspectorHostContext>,
    /// Configuration the runtime was booted with.
    pub config: StoredValue<InspectorConfig>,
    /// Reactive session state signal.
    pub state: RwSignal<InspectorState>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<InspectorAction>,
}

impl InspectorRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: InspectorAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`InspectorRuntimeContext`] to descendant components and starts the equipment list
/// load.
pub fn InspectorProvider(
    /// API services assembled by the entry layer.
    services: InspectorServices,
    /// Resolved runtime configuration.
    config: InspectorConfig,
    children: Children,
) -> impl IntoView {
    logging::log!(
        "inspector runtime using {} api at `{}`",
        services.strategy.as_str(),
        config.api_base
    );
    let host = store_value(InspectorHostContext::new(services));
    let state = create_rw_signal(InspectorState::new(&config));
    let config = store_value(config);
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: InspectorAction| {
        let mut inspector = state.get_untracked();
        let previous = inspector.clone();

        match reduce_inspector(&mut inspector, action) {
            Ok(new_effects) => {
                if inspector != previous {
                    state.set(inspector);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("inspector reducer error: {err}"),
        }
    });

    let runtime = InspectorRuntimeContext {
        host,
        config,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());

    effect_executor::install(runtime);
    runtime.dispatch_action(InspectorAction::LoadEquipmentList);

    children().into_view()
}

/// Returns the current [`InspectorRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`InspectorProvider`].
pub fn use_inspector_runtime() -> InspectorRuntimeContext {
    use_context::<InspectorRuntimeContext>().expect("InspectorRuntimeContext not provided")
}
