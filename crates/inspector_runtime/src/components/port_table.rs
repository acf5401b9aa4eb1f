use super::*;
use crate::model::ScrollTarget;
use wiremaps_core::{CellContent, ColumnKey, PortRow, PortTable as PortRows};

#[component]
pub(super) fn PortTable() -> impl IntoView {
    let runtime = use_inspector_runtime();
    let visible = create_memo(move |_| runtime.state.with(|state| state.ports_visible));
    let table = create_memo(move |_| runtime.state.with(|state| state.table.clone()));
    let sort_order = create_memo(move |_| runtime.state.with(|state| state.sort_order.clone()));

    view! {
        <Show when=move || visible.get() fallback=|| ()>
            <section id=ScrollTarget::Ports.dom_id() class="ports">
                <ColumnToggles table=table />
                <table class="tablesorter">
                    <thead>
                        <tr>
                            {move || {
                                let order = sort_order.get();
                                table
                                    .get()
                                    .columns()
                                    .into_iter()
                                    .filter(|column| column.visible)
                                    .map(|column| {
                                        let key = column.key.clone();
                                        view! {
                                            <th
                                                class=header_class(order.direction_of(&column.key))
                                                on:click=move |ev: web_sys::MouseEvent| {
                                                    runtime.dispatch_action(InspectorAction::SortBy {
                                                        column: key.clone(),
                                                        additive: ev.shift_key(),
                                                    });
                                                }
                                            >
                                                {column.name}
                                            </th>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let table = table.get();
                            table
                                .rows()
                                .iter()
                                .enumerate()
                                .map(|(position, row)| port_row(runtime, &table, position, row))
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>
        </Show>
    }
}

fn port_row(
    runtime: InspectorRuntimeContext,
    table: &PortRows,
    position: usize,
    row: &PortRow,
) -> impl IntoView {
    let index = row.index().clone();
    let loading = row.is_loading();
    let cells = table
        .visible_cells(row)
        .into_iter()
        .map(|cell| match cell {
            CellContent::Icon { resource, alt } => view! {
                <td class="state" class:loading=loading>
                    <img src=resource alt=alt.clone() title=alt />
                </td>
            }
            .into_view(),
            CellContent::Name(name) => {
                let index = index.clone();
                view! {
                    <td class="name">
                        <a
                            href="#"
                            on:click=move |ev: web_sys::MouseEvent| {
                                ev.prevent_default();
                                runtime.dispatch_action(InspectorAction::TogglePort {
                                    port: index.clone(),
                                });
                            }
                        >
                            {name}
                        </a>
                    </td>
                }
                .into_view()
            }
            CellContent::Text(text) => view! { <td class="description">{text}</td> }.into_view(),
            CellContent::Html(html) => view! {
                <td
                    class="column"
                    inner_html=html
                    on:click=move |ev| follow_embedded_link(runtime, ev)
                ></td>
            }
            .into_view(),
            CellContent::Empty => view! { <td class="column"></td> }.into_view(),
        })
        .collect_view();

    view! {
        <tr
            class=port_row_class(RowStripe::for_position(position), row.is_expanded())
            data-port-index=index.to_string()
        >
            {cells}
        </tr>
    }
}

#[component]
fn ColumnToggles(table: Memo<PortRows>) -> impl IntoView {
    let runtime = use_inspector_runtime();

    view! {
        <fieldset class="columns">
            <legend>"Columns"</legend>
            {move || {
                table
                    .get()
                    .columns()
                    .into_iter()
                    .filter(|column| matches!(column.key, ColumnKey::Dynamic(_)))
                    .map(|column| {
                        let name = column.name.clone();
                        view! {
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=column.visible
                                    on:change=move |ev| {
                                        runtime.dispatch_action(InspectorAction::SetColumnVisible {
                                            column: name.clone(),
                                            visible: event_target_checked(&ev),
                                        });
                                    }
                                />
                                {column.name}
                            </label>
                        }
                    })
                    .collect_view()
            }}
        </fieldset>
    }
}
