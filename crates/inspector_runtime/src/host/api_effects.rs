use leptos::{logging, spawn_local};
use wiremaps_core::{PortIndex, RequestTag};

use crate::{
    host::InspectorHostContext, reducer::InspectorAction,
    runtime_context::InspectorRuntimeContext,
};

pub(super) fn fetch_equipment_list(host: InspectorHostContext, runtime: InspectorRuntimeContext) {
    spawn_local(async move {
        let api = host.api();
        let result = api.list_equipment().await;
        if let Err(err) = &result {
            logging::warn!("equipment list load failed: {err}");
        }
        runtime.dispatch_action(InspectorAction::EquipmentListLoaded(result));
    });
}

pub(super) fn fetch_description(
    host: InspectorHostContext,
    runtime: InspectorRuntimeContext,
    tag: RequestTag,
) {
    spawn_local(async move {
        let api = host.api();
        let result = api.equipment_description(&tag.target).await;
        if let Err(err) = &result {
            logging::log!("description unavailable for {}: {err}", tag.target);
        }
        runtime.dispatch_action(InspectorAction::DescriptionLoaded { tag, result });
    });
}

pub(super) fn fetch_ports(
    host: InspectorHostContext,
    runtime: InspectorRuntimeContext,
    tag: RequestTag,
) {
    spawn_local(async move {
        let api = host.api();
        let result = api.list_ports(&tag.target).await;
        if let Err(err) = &result {
            logging::warn!("port list load failed for {}: {err}", tag.target);
        }
        runtime.dispatch_action(InspectorAction::PortsLoaded { tag, result });
    });
}

pub(super) fn fetch_port_details(
    host: InspectorHostContext,
    runtime: InspectorRuntimeContext,
    tag: RequestTag,
    port: PortIndex,
) {
    spawn_local(async move {
        let api = host.api();
        let result = api.port_details(&tag.target, &port).await;
        if let Err(err) = &result {
            logging::warn!("port detail load failed for {} port {port}: {err}", tag.target);
        }
        runtime.dispatch_action(InspectorAction::PortDetailsLoaded { tag, port, result });
    });
}

pub(super) fn refresh_equipment(
    host: InspectorHostContext,
    runtime: InspectorRuntimeContext,
    tag: RequestTag,
) {
    spawn_local(async move {
        let api = host.api();
        let result = api.refresh_equipment(&tag.target).await;
        if let Err(err) = &result {
            logging::warn!("refresh failed for {}: {err}", tag.target);
        }
        runtime.dispatch_action(InspectorAction::RefreshCompleted { tag, result });
    });
}

pub(super) fn run_search(
    host: InspectorHostContext,
    runtime: InspectorRuntimeContext,
    tag: RequestTag,
) {
    spawn_local(async move {
        let api = host.api();
        let result = api.search(&tag.target).await;
        if let Err(err) = &result {
            logging::warn!("search failed for `{}`: {err}", tag.target);
        }
        runtime.dispatch_action(InspectorAction::SearchCompleted { tag, result });
    });
}
