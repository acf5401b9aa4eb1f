use super::*;
use crate::model::ScrollTarget;

#[component]
pub(super) fn SearchResults() -> impl IntoView {
    let runtime = use_inspector_runtime();
    let search = create_memo(move |_| runtime.state.with(|state| state.search.clone()));

    move || {
        search.get().map(|panel| {
            let empty = panel.results.is_empty();
            view! {
                <section id=ScrollTarget::SearchResults.dom_id() class="search-results">
                    <a
                        href="#"
                        class="close"
                        on:click=move |ev| {
                            ev.prevent_default();
                            runtime.dispatch_action(InspectorAction::CloseSearch);
                        }
                    >
                        "Close"
                    </a>
                    <h2>"Results for " {panel.query}</h2>
                    {empty.then(|| view! { <p class="empty">"No result"</p> })}
                    <ul on:click=move |ev| follow_embedded_link(runtime, ev)>
                        {panel
                            .results
                            .iter()
                            .map(|item| view! { <li inner_html=item.clone()></li> })
                            .collect_view()}
                    </ul>
                </section>
            }
        })
    }
}
