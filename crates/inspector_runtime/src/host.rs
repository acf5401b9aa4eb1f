//! Host-side execution of reducer effects.
//!
//! Network effects run on the injected [`WiremapsApi`] and report back through the dispatch
//! callback; timer and scroll effects touch the browser directly.

mod api_effects;
mod host_ui;

use std::{cell::Cell, rc::Rc};

use leptos::leptos_dom::helpers::TimeoutHandle;
use platform_host::{ApiStrategy, InspectorServices, WiremapsApi};

use crate::{
    config::InspectorConfig, reducer::RuntimeEffect, runtime_context::InspectorRuntimeContext,
};

#[derive(Clone)]
/// Service bundle and browser handles used to execute [`RuntimeEffect`] values.
pub struct InspectorHostContext {
    api: Rc<dyn WiremapsApi>,
    strategy: ApiStrategy,
    banner_timer: Rc<Cell<Option<TimeoutHandle>>>,
}

impl Default for InspectorHostContext {
    fn default() -> Self {
        Self::new(platform_host_web::build_inspector_services(
            &InspectorConfig::resolved().api_base,
        ))
    }
}

impl InspectorHostContext {
    /// Wraps an injected service bundle.
    pub fn new(services: InspectorServices) -> Self {
        Self {
            api: services.api,
            strategy: services.strategy,
            banner_timer: Rc::new(Cell::new(None)),
        }
    }

    /// Returns the configured endpoint client.
    pub fn api(&self) -> Rc<dyn WiremapsApi> {
        self.api.clone()
    }

    /// Returns the stable name of the selected API strategy.
    pub fn api_strategy_name(&self) -> &'static str {
        self.strategy.as_str()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: InspectorRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FetchEquipmentList => {
                api_effects::fetch_equipment_list(self.clone(), runtime)
            }
            RuntimeEffect::FetchDescription { tag } => {
                api_effects::fetch_description(self.clone(), runtime, tag)
            }
            RuntimeEffect::FetchPorts { tag } => {
                api_effects::fetch_ports(self.clone(), runtime, tag)
            }
            RuntimeEffect::FetchPortDetails { tag, port } => {
                api_effects::fetch_port_details(self.clone(), runtime, tag, port)
            }
            RuntimeEffect::RefreshEquipment { tag } => {
                api_effects::refresh_equipment(self.clone(), runtime, tag)
            }
            RuntimeEffect::RunSearch { tag } => {
                api_effects::run_search(self.clone(), runtime, tag)
            }
            RuntimeEffect::ArmSortTimer { ticket, delay_ms } => {
                host_ui::arm_sort_timer(runtime, ticket, delay_ms)
            }
            RuntimeEffect::ArmBannerTimer { ticket, delay_ms } => {
                self.cancel_banner_timer();
                self.banner_timer
                    .set(host_ui::arm_banner_timer(runtime, ticket, delay_ms));
            }
            RuntimeEffect::CancelBannerTimer => self.cancel_banner_timer(),
            RuntimeEffect::ScrollIntoView(target) => host_ui::scroll_into_view(target.dom_id()),
        }
    }

    fn cancel_banner_timer(&self) {
        if let Some(handle) = self.banner_timer.take() {
            handle.clear();
        }
    }
}
