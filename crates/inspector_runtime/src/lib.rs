//! Leptos runtime for the Wiremaps port inspector.

pub mod components;
pub mod config;
mod effect_executor;
mod host;
pub mod model;
pub mod reducer;
mod runtime_context;

pub use components::{
    use_inspector_runtime, InspectorProvider, InspectorRuntimeContext, InspectorShell,
};
pub use config::InspectorConfig;
pub use host::InspectorHostContext;
pub use model::{Banner, BannerLevel, InspectorState, ScrollTarget, SearchPanel};
pub use reducer::{reduce_inspector, InspectorAction, ReducerError, RuntimeEffect};
