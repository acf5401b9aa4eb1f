//! Inspector UI composition.

mod banner;
mod equipment;
mod port_table;
mod search_box;
mod search_results;

use leptos::*;
use wasm_bindgen::JsCast;
use wiremaps_core::{RowStripe, SortDirection};

use self::{
    banner::StatusBanner,
    equipment::{EquipmentPanel, EquipmentSelector},
    port_table::PortTable,
    search_box::SearchBox,
    search_results::SearchResults,
};

pub use crate::runtime_context::{use_inspector_runtime, InspectorProvider, InspectorRuntimeContext};

use crate::reducer::InspectorAction;

#[component]
/// Full inspector page: banner, toolbar, equipment panel, search results and port table.
pub fn InspectorShell() -> impl IntoView {
    view! {
        <div class="wiremaps">
            <StatusBanner />
            <header class="toolbar">
                <EquipmentSelector />
                <SearchBox />
            </header>
            <EquipmentPanel />
            <SearchResults />
            <PortTable />
        </div>
    }
}

fn anchor_href(ev: &web_sys::MouseEvent) -> Option<String> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let anchor = target.closest("a").ok()??;
    anchor.get_attribute("href")
}

/// Routes a click on an anchor inside server HTML through the reducer instead of the browser.
fn follow_embedded_link(runtime: InspectorRuntimeContext, ev: web_sys::MouseEvent) {
    let Some(href) = anchor_href(&ev) else {
        return;
    };
    ev.prevent_default();
    runtime.dispatch_action(InspectorAction::FollowLink { href });
}

fn port_row_class(stripe: RowStripe, expanded: bool) -> String {
    if expanded {
        format!("{} expanded", stripe.css_class())
    } else {
        stripe.css_class().to_string()
    }
}

fn header_class(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(direction) => direction.css_class(),
        None => "header",
    }
}
