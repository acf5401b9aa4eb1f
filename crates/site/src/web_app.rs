use inspector_runtime::{InspectorConfig, InspectorProvider, InspectorShell};
use leptos::*;
use leptos_meta::*;
use platform_host_web::build_inspector_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Wiremaps" />
        <Meta name="description" content="Equipment and port inspector for the Wiremaps collector." />

        <main class="site-root">
            <InspectorEntry />
        </main>
    }
}

#[component]
pub fn InspectorEntry() -> impl IntoView {
    let config = InspectorConfig::resolved();
    let services = build_inspector_services(&config.api_base);

    view! {
        <InspectorProvider services=services config=config>
            <InspectorShell />
        </InspectorProvider>
    }
}
