use super::*;

#[component]
pub(super) fn StatusBanner() -> impl IntoView {
    let runtime = use_inspector_runtime();
    let banner = create_memo(move |_| runtime.state.with(|state| state.banner.clone()));

    move || {
        banner.get().map(|banner| {
            view! {
                <div
                    id="message"
                    class=format!("message {}", banner.level.css_class())
                    role="status"
                    aria-live="polite"
                    on:click=move |_| runtime.dispatch_action(InspectorAction::DismissBanner)
                >
                    {banner.message}
                </div>
            }
        })
    }
}
