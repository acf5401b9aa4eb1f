use std::time::Duration;

use leptos::{leptos_dom::helpers::TimeoutHandle, logging, set_timeout_with_handle};
use wiremaps_core::TimerTicket;

use crate::{reducer::InspectorAction, runtime_context::InspectorRuntimeContext};

pub(super) fn arm_sort_timer(runtime: InspectorRuntimeContext, ticket: TimerTicket, delay_ms: u32) {
    let armed = set_timeout_with_handle(
        move || runtime.dispatch_action(InspectorAction::SortTimerFired { ticket }),
        Duration::from_millis(u64::from(delay_ms)),
    );
    if let Err(err) = armed {
        logging::warn!("sort timer could not be armed, sorting now: {err:?}");
        // The trigger keeps its ticket pending until fired.
        runtime.dispatch_action(InspectorAction::SortTimerFired { ticket });
    }
}

pub(super) fn arm_banner_timer(
    runtime: InspectorRuntimeContext,
    ticket: TimerTicket,
    delay_ms: u32,
) -> Option<TimeoutHandle> {
    match set_timeout_with_handle(
        move || runtime.dispatch_action(InspectorAction::BannerTimerFired { ticket }),
        Duration::from_millis(u64::from(delay_ms)),
    ) {
        Ok(handle) => Some(handle),
        Err(err) => {
            logging::warn!("banner timer could not be armed: {err:?}");
            None
        }
    }
}

pub(super) fn scroll_into_view(dom_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(dom_id))
        else {
            return;
        };
        element.scroll_into_view();
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = dom_id;
}
