use std::time::Duration;

use super::*;
use leptos::leptos_dom::helpers::TimeoutHandle;
use wiremaps_core::{
    AutocompleteEffect, AutocompleteKey, AutocompleteWidget, InputGeometry, ListAnchor,
    LookupRequest, TimerTicket,
};

#[derive(Clone, Copy)]
struct SearchBoxHandles {
    runtime: InspectorRuntimeContext,
    widget: RwSignal<AutocompleteWidget>,
    timer: StoredValue<Option<TimeoutHandle>>,
    input: NodeRef<html::Input>,
}

impl SearchBoxHandles {
    fn input_text(self) -> String {
        self.input
            .get_untracked()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn input_geometry(self) -> InputGeometry {
        self.input
            .get_untracked()
            .map(|input| InputGeometry {
                left: f64::from(input.offset_left()),
                top: f64::from(input.offset_top()),
                width: f64::from(input.offset_width()),
                height: f64::from(input.offset_height()),
            })
            .unwrap_or(InputGeometry {
                left: 0.0,
                top: 0.0,
                width: 0.0,
                height: 0.0,
            })
    }

    fn cancel_timer(self) {
        if let Some(handle) = self.timer.get_value() {
            handle.clear();
        }
        self.timer.set_value(None);
    }

    fn apply(self, effects: Vec<AutocompleteEffect>) {
        for effect in effects {
            match effect {
                AutocompleteEffect::ArmTimer { ticket, delay_ms } => self.arm_timer(ticket, delay_ms),
                AutocompleteEffect::CancelTimer => self.cancel_timer(),
                AutocompleteEffect::Lookup(request) => self.lookup(request),
                AutocompleteEffect::SetInputValue(value) => {
                    if let Some(input) = self.input.get_untracked() {
                        input.set_value(&value);
                    }
                }
                AutocompleteEffect::Submit => self.submit(),
            }
        }
    }

    fn arm_timer(self, ticket: TimerTicket, delay_ms: u32) {
        self.cancel_timer();
        let armed = set_timeout_with_handle(
            move || {
                self.timer.set_value(None);
                let text = self.input_text();
                let effects = self
                    .widget
                    .try_update(|widget| widget.on_timer(ticket, &text))
                    .unwrap_or_default();
                self.apply(effects);
            },
            Duration::from_millis(u64::from(delay_ms)),
        );
        match armed {
            Ok(handle) => self.timer.set_value(Some(handle)),
            Err(err) => logging::warn!("autocomplete timer could not be armed: {err:?}"),
        }
    }

    fn lookup(self, request: LookupRequest) {
        let api = self.runtime.host.get_value().api();
        spawn_local(async move {
            let result = api.complete(&request.text).await;
            if let Err(err) = &result {
                logging::log!("completion lookup failed for `{}`: {err}", request.text);
            }
            let anchor = ListAnchor::below(self.input_geometry());
            self.widget.update(|widget| {
                widget.on_lookup_result(request.seq, result, anchor);
            });
        });
    }

    fn submit(self) {
        let text = self.input_text();
        self.runtime
            .dispatch_action(InspectorAction::Search { text });
    }
}

fn list_style(anchor: ListAnchor) -> String {
    format!(
        "position: absolute; left: {}px; top: {}px; width: {}px;",
        anchor.left, anchor.top, anchor.width
    )
}

#[component]
pub(super) fn SearchBox() -> impl IntoView {
    let runtime = use_inspector_runtime();
    let config = runtime.config.get_value();
    let handles = SearchBoxHandles {
        runtime,
        widget: create_rw_signal(AutocompleteWidget::new(
            config.autocomplete.debounce_ms,
            config.autocomplete.min_chars,
        )),
        timer: store_value(None),
        input: create_node_ref::<html::Input>(),
    };
    on_cleanup(move || handles.cancel_timer());
    let input_ref = handles.input;

    view! {
        <form
            class="search"
            role="search"
            on:submit=move |ev| {
                ev.prevent_default();
                let effects = handles
                    .widget
                    .try_update(|widget| widget.dismiss())
                    .unwrap_or_default();
                handles.apply(effects);
                handles.submit();
            }
        >
            <input
                type="search"
                name="search"
                placeholder="Search"
                autocomplete="off"
                aria-label="Search"
                node_ref=input_ref
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    let key = AutocompleteKey::from_key_code(ev.key_code());
                    let Some(outcome) = handles.widget.try_update(|widget| widget.handle_key(key))
                    else {
                        return;
                    };
                    if outcome.prevent_default {
                        ev.prevent_default();
                    }
                    handles.apply(outcome.effects);
                }
                on:blur=move |_| {
                    let effects = handles
                        .widget
                        .try_update(|widget| widget.dismiss())
                        .unwrap_or_default();
                    handles.apply(effects);
                }
            />
            {move || {
                handles.widget.with(|widget| {
                    let anchor = widget.anchor()?;
                    if !widget.is_showing() {
                        return None;
                    }
                    let selected = widget.selected();
                    let items = widget
                        .items()
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            view! {
                                <li
                                    class:selected={selected == Some(index)}
                                    on:mouseenter=move |_| {
                                        handles.widget.update(|widget| widget.hover(index));
                                    }
                                    on:mousedown=move |ev: web_sys::MouseEvent| {
                                        ev.prevent_default();
                                        let effects = handles
                                            .widget
                                            .try_update(|widget| widget.click(index))
                                            .unwrap_or_default();
                                        handles.apply(effects);
                                    }
                                >
                                    {item.clone()}
                                </li>
                            }
                        })
                        .collect_view();
                    Some(view! {
                        <ul class="autocomplete" role="listbox" style=list_style(anchor)>
                            {items}
                        </ul>
                    })
                })
            }}
        </form>
    }
}
