use super::*;

#[component]
pub(super) fn EquipmentSelector() -> impl IntoView {
    let runtime = use_inspector_runtime();
    let equipment = create_memo(move |_| runtime.state.with(|state| state.equipment.clone()));
    let selected = create_memo(move |_| runtime.state.with(|state| state.selected_ip.clone()));

    view! {
        <select
            id="equipment"
            aria-label="Equipment"
            on:change=move |ev| {
                let ip = event_target_value(&ev);
                if !ip.is_empty() {
                    runtime.dispatch_action(InspectorAction::SelectEquipment { ip });
                }
            }
        >
            <option value="" disabled=true selected=move || selected.get().is_none()>
                "Select an equipment"
            </option>
            {move || {
                let current = selected.get();
                equipment
                    .get()
                    .into_iter()
                    .map(|entry| {
                        let is_selected = current.as_deref() == Some(entry.ip.as_str());
                        let label = entry.label();
                        view! {
                            <option value=entry.ip selected=is_selected>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
pub(super) fn EquipmentPanel() -> impl IntoView {
    let runtime = use_inspector_runtime();
    let selected = create_memo(move |_| runtime.state.with(|state| state.selected_ip.clone()));
    let description = create_memo(move |_| runtime.state.with(|state| state.description.clone()));
    let expand_all = create_memo(move |_| runtime.state.with(|state| state.expand_all_available));

    move || {
        selected.get().map(|ip| {
            view! {
                <section id="equipment-panel" class="equipment">
                    <ul class="actions">
                        <li>
                            <a
                                href=format!("search/{ip}/")
                                on:click=move |ev| follow_embedded_link(runtime, ev)
                            >
                                "Search this equipment"
                            </a>
                        </li>
                        <li>
                            <button on:click=move |_| runtime.dispatch_action(InspectorAction::Refresh)>
                                "Refresh"
                            </button>
                        </li>
                        <Show when=move || expand_all.get() fallback=|| ()>
                            <li>
                                <button on:click=move |_| {
                                    runtime.dispatch_action(InspectorAction::ExpandAllPorts)
                                }>"Show all details"</button>
                            </li>
                        </Show>
                    </ul>
                    {move || {
                        description.get().map(|html| {
                            view! {
                                <div
                                    class="description"
                                    inner_html=html
                                    on:click=move |ev| follow_embedded_link(runtime, ev)
                                ></div>
                            }
                        })
                    }}
                </section>
            }
        })
    }
}
