//! Reducer actions, side-effect intents, and transition logic for the inspector runtime.

use platform_host::ApiError;
use thiserror::Error;
use wiremaps_core::{
    find_equipment, DefaultSortKeys, DetailCell, EquipmentEntry, LinkTarget, PortIndex,
    PortRecord, RefreshOutcome, RequestTag, TableError, TimerTicket,
};

use crate::model::{Banner, BannerLevel, InspectorState, ScrollTarget, SearchPanel};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_inspector`] to mutate [`InspectorState`].
pub enum InspectorAction {
    /// Fetch the equipment list for the selector.
    LoadEquipmentList,
    /// Equipment list response.
    EquipmentListLoaded(Result<Vec<EquipmentEntry>, ApiError>),
    /// Make an equipment active and load its description and ports.
    SelectEquipment {
        /// Equipment IP.
        ip: String,
    },
    /// Description response.
    DescriptionLoaded {
        /// Tag the request was issued with.
        tag: RequestTag,
        /// Description HTML, if the equipment has one.
        result: Result<Option<String>, ApiError>,
    },
    /// Port list response.
    PortsLoaded {
        /// Tag the request was issued with.
        tag: RequestTag,
        /// Port records in server order.
        result: Result<Vec<PortRecord>, ApiError>,
    },
    /// Expand a collapsed port or collapse an expanded one.
    TogglePort {
        /// Row key.
        port: PortIndex,
    },
    /// Fetch details for one port.
    ExpandPort {
        /// Row key.
        port: PortIndex,
    },
    /// Empty one port's detail cells.
    CollapsePort {
        /// Row key.
        port: PortIndex,
    },
    /// Detail response for one port.
    PortDetailsLoaded {
        /// Tag the request was issued with.
        tag: RequestTag,
        /// Row key.
        port: PortIndex,
        /// Detail tuples.
        result: Result<Vec<DetailCell>, ApiError>,
    },
    /// Expand every collapsed port.
    ExpandAllPorts,
    /// Show or hide a dynamic column.
    SetColumnVisible {
        /// Column name.
        column: String,
        /// New visibility.
        visible: bool,
    },
    /// Header click.
    SortBy {
        /// Clicked column.
        column: wiremaps_core::ColumnKey,
        /// Shift-click adds a secondary column.
        additive: bool,
    },
    /// The deferred sort window elapsed, or its timer could not be armed.
    SortTimerFired {
        /// Ticket the timer was armed with.
        ticket: TimerTicket,
    },
    /// Ask the collector to refresh the active equipment.
    Refresh,
    /// Refresh response.
    RefreshCompleted {
        /// Tag the request was issued with.
        tag: RequestTag,
        /// Server verdict.
        result: Result<RefreshOutcome, ApiError>,
    },
    /// Run a search.
    Search {
        /// Search text.
        text: String,
    },
    /// Search response.
    SearchCompleted {
        /// Tag the request was issued with.
        tag: RequestTag,
        /// HTML result items.
        result: Result<Vec<String>, ApiError>,
    },
    /// Hide the search panel.
    CloseSearch,
    /// An anchor embedded in server HTML was activated.
    FollowLink {
        /// Raw `href` attribute.
        href: String,
    },
    /// Hide the banner.
    DismissBanner,
    /// The banner auto-dismiss window elapsed.
    BannerTimerFired {
        /// Ticket the timer was armed with.
        ticket: TimerTicket,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_inspector`] for the host to execute.
pub enum RuntimeEffect {
    /// `GET equipment/`.
    FetchEquipmentList,
    /// `GET equipment/{ip}/descr/`.
    FetchDescription {
        /// Request tag; its target is the IP.
        tag: RequestTag,
    },
    /// `GET equipment/{ip}/`.
    FetchPorts {
        /// Request tag; its target is the IP.
        tag: RequestTag,
    },
    /// `GET equipment/{ip}/{port}/`.
    FetchPortDetails {
        /// Request tag; its target is the IP.
        tag: RequestTag,
        /// Row key.
        port: PortIndex,
    },
    /// `GET equipment/{ip}/refresh/`.
    RefreshEquipment {
        /// Request tag; its target is the IP.
        tag: RequestTag,
    },
    /// `GET search/{text}/`.
    RunSearch {
        /// Request tag; its target is the search text.
        tag: RequestTag,
    },
    /// Arm the deferred sort timer.
    ArmSortTimer {
        /// Ticket to report back with.
        ticket: TimerTicket,
        /// Window length.
        delay_ms: u32,
    },
    /// Arm (or re-arm) the banner auto-dismiss timer.
    ArmBannerTimer {
        /// Ticket to report back with.
        ticket: TimerTicket,
        /// Window length.
        delay_ms: u32,
    },
    /// Drop the banner auto-dismiss timer.
    CancelBannerTimer,
    /// Scroll a panel into view.
    ScrollIntoView(ScrollTarget),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer failures for actions that do not apply to the current state.
pub enum ReducerError {
    /// The action needs an active equipment.
    #[error("no equipment selected")]
    NoEquipmentSelected,
    /// The action names a port the table does not hold.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Applies `action` to `state`, returning the side effects the host must run.
///
/// Completions whose tag no longer matches the session are dropped without touching state.
///
/// # Errors
///
/// Returns [`ReducerError`] when the action refers to an equipment or port that is not active.
pub fn reduce_inspector(
    state: &mut InspectorState,
    action: InspectorAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();

    match action {
        InspectorAction::LoadEquipmentList => {
            effects.extend(set_banner(
                state,
                BannerLevel::Info,
                "Loading list of equipments...",
            ));
            effects.push(RuntimeEffect::FetchEquipmentList);
        }
        InspectorAction::EquipmentListLoaded(result) => match result {
            Ok(entries) => {
                state.equipment = entries;
                effects.extend(clear_banner(state));
            }
            Err(_) => effects.extend(set_banner(
                state,
                BannerLevel::Alert,
                "Unable to get the list of equipments",
            )),
        },
        InspectorAction::SelectEquipment { ip } => {
            let tag = state.session.activate_equipment(&ip);
            state.selected_ip = Some(ip.clone());
            state.description = None;
            state.table.clear();
            state.ports_visible = false;
            state.expand_all_available = false;
            state.sort_order.clear();
            state.sort_trigger.cancel();
            effects.extend(set_banner(
                state,
                BannerLevel::Info,
                format!("Loading list of ports for {ip}"),
            ));
            effects.push(RuntimeEffect::FetchDescription { tag: tag.clone() });
            effects.push(RuntimeEffect::FetchPorts { tag });
        }
        InspectorAction::DescriptionLoaded { tag, result } => {
            if state.session.is_current(&tag) {
                state.description = result.ok().flatten();
            }
        }
        InspectorAction::PortsLoaded { tag, result } => {
            if !state.session.is_current(&tag) {
                return Ok(effects);
            }
            match result {
                Ok(records) => {
                    state.table.render_rows(records);
                    state.ports_visible = true;
                    state.expand_all_available = true;
                    effects.extend(clear_banner(state));
                    effects.extend(schedule_sort(state));
                    effects.push(RuntimeEffect::ScrollIntoView(ScrollTarget::Ports));
                }
                Err(_) => effects.extend(set_banner(
                    state,
                    BannerLevel::Alert,
                    format!("Unable to get the list of ports for {}", tag.target),
                )),
            }
        }
        InspectorAction::TogglePort { port } => {
            let row = state
                .table
                .row(&port)
                .ok_or_else(|| TableError::RowNotFound(port.clone()))?;
            let action = if row.is_expanded() || row.is_loading() {
                InspectorAction::CollapsePort { port }
            } else {
                InspectorAction::ExpandPort { port }
            };
            return reduce_inspector(state, action);
        }
        InspectorAction::ExpandPort { port } => {
            let tag = state
                .session
                .equipment_tag()
                .ok_or(ReducerError::NoEquipmentSelected)?;
            if state.table.begin_expand(&port)? {
                effects.push(RuntimeEffect::FetchPortDetails { tag, port });
            }
        }
        InspectorAction::CollapsePort { port } => {
            state.table.collapse_details(&port)?;
            effects.extend(schedule_sort(state));
        }
        InspectorAction::PortDetailsLoaded { tag, port, result } => {
            if !state.session.is_current(&tag) {
                return Ok(effects);
            }
            // Rows collapsed while their request was in flight stay collapsed.
            let Some(row) = state.table.row(&port).filter(|row| row.is_loading()) else {
                return Ok(effects);
            };
            match result {
                Ok(details) => {
                    state.table.merge_details(&port, &details)?;
                    effects.extend(schedule_sort(state));
                }
                Err(_) => {
                    let message =
                        format!("Unable to get detailed info for port {}", row.record().display_name);
                    state.table.finish_loading(&port)?;
                    effects.extend(set_banner(state, BannerLevel::Alert, message));
                }
            }
        }
        InspectorAction::ExpandAllPorts => {
            let tag = state
                .session
                .equipment_tag()
                .ok_or(ReducerError::NoEquipmentSelected)?;
            for port in state.table.collapsed_indexes() {
                if state.table.begin_expand(&port)? {
                    effects.push(RuntimeEffect::FetchPortDetails {
                        tag: tag.clone(),
                        port,
                    });
                }
            }
            state.expand_all_available = false;
        }
        InspectorAction::SetColumnVisible { column, visible } => {
            state.table.set_column_visible(&column, visible);
        }
        InspectorAction::SortBy { column, additive } => {
            state.sort_order.click(column, additive);
            state.table.sort(&state.sort_order, &DefaultSortKeys);
        }
        InspectorAction::SortTimerFired { ticket } => {
            if state.sort_trigger.fire(ticket) {
                state.table.sort(&state.sort_order, &DefaultSortKeys);
            }
        }
        InspectorAction::Refresh => {
            let tag = state
                .session
                .equipment_tag()
                .ok_or(ReducerError::NoEquipmentSelected)?;
            effects.extend(set_banner(
                state,
                BannerLevel::Info,
                format!("Refreshing {}...", tag.target),
            ));
            effects.push(RuntimeEffect::RefreshEquipment { tag });
        }
        InspectorAction::RefreshCompleted { tag, result } => {
            if !state.session.is_current(&tag) {
                return Ok(effects);
            }
            match result {
                Ok(RefreshOutcome::Refreshed) => {
                    effects.extend(reduce_inspector(
                        state,
                        InspectorAction::SelectEquipment {
                            ip: tag.target.clone(),
                        },
                    )?);
                    effects.extend(set_banner(state, BannerLevel::Ok, "Refresh successful"));
                }
                Ok(RefreshOutcome::Rejected { message }) => effects.extend(set_banner(
                    state,
                    BannerLevel::Alert,
                    format!("Refresh error: {message}"),
                )),
                Err(_) => effects.extend(set_banner(
                    state,
                    BannerLevel::Alert,
                    format!("Unable to refresh {}", tag.target),
                )),
            }
        }
        InspectorAction::Search { text } => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(effects);
            }
            let tag = state.session.begin_search(text);
            effects.extend(set_banner(
                state,
                BannerLevel::Info,
                format!("Search for {text}..."),
            ));
            effects.push(RuntimeEffect::RunSearch { tag });
        }
        InspectorAction::SearchCompleted { tag, result } => {
            if !state.session.is_current(&tag) {
                return Ok(effects);
            }
            match result {
                Ok(results) => {
                    state.search = Some(SearchPanel {
                        query: tag.target,
                        results,
                    });
                    effects.extend(clear_banner(state));
                    effects.push(RuntimeEffect::ScrollIntoView(ScrollTarget::SearchResults));
                }
                Err(_) => effects.extend(set_banner(
                    state,
                    BannerLevel::Alert,
                    "Unable to get search results",
                )),
            }
        }
        InspectorAction::CloseSearch => {
            state.search = None;
            state.session.end_search();
        }
        InspectorAction::FollowLink { href } => match LinkTarget::parse(&href) {
            LinkTarget::Search(term) => {
                return reduce_inspector(state, InspectorAction::Search { text: term });
            }
            LinkTarget::Equipment(target) => {
                match find_equipment(&state.equipment, &target).map(|entry| entry.ip.clone()) {
                    Some(ip) => {
                        return reduce_inspector(state, InspectorAction::SelectEquipment { ip });
                    }
                    None => effects.extend(set_banner(
                        state,
                        BannerLevel::Alert,
                        "Unable to find equipment, please reload",
                    )),
                }
            }
            LinkTarget::Unknown(href) => effects.extend(set_banner(
                state,
                BannerLevel::Alert,
                format!("Unknown link: {href}"),
            )),
        },
        InspectorAction::DismissBanner => effects.extend(clear_banner(state)),
        InspectorAction::BannerTimerFired { ticket } => {
            if state.banner_timer.fire(ticket) {
                state.banner = None;
            }
        }
    }

    Ok(effects)
}

fn set_banner(
    state: &mut InspectorState,
    level: BannerLevel,
    message: impl Into<String>,
) -> Option<RuntimeEffect> {
    state.banner = Some(Banner::new(level, message));
    if level.auto_dismisses() {
        Some(RuntimeEffect::ArmBannerTimer {
            ticket: state.banner_timer.restart(),
            delay_ms: state.banner_dismiss_ms,
        })
    } else if state.banner_timer.cancel() {
        Some(RuntimeEffect::CancelBannerTimer)
    } else {
        None
    }
}

fn clear_banner(state: &mut InspectorState) -> Option<RuntimeEffect> {
    state.banner = None;
    state
        .banner_timer
        .cancel()
        .then_some(RuntimeEffect::CancelBannerTimer)
}

fn schedule_sort(state: &mut InspectorState) -> Option<RuntimeEffect> {
    let delay_ms = state.sort_trigger.delay_ms();
    state
        .sort_trigger
        .schedule_sort()
        .map(|ticket| RuntimeEffect::ArmSortTimer { ticket, delay_ms })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wiremaps_core::{CellContent, ColumnKey, FixedColumn, RequestChannel};

    use super::*;

    fn reduce(state: &mut InspectorState, action: InspectorAction) -> Vec<RuntimeEffect> {
        reduce_inspector(state, action).expect("reduce")
    }

    fn with_equipment() -> InspectorState {
        let mut state = InspectorState::default();
        reduce(
            &mut state,
            InspectorAction::EquipmentListLoaded(Ok(vec![
                EquipmentEntry::new("core-sw1", "10.0.0.1"),
                EquipmentEntry::new("edge-sw7", "10.0.0.7"),
            ])),
        );
        state
    }

    fn ports_tag(effects: &[RuntimeEffect]) -> RequestTag {
        effects
            .iter()
            .find_map(|effect| match effect {
                RuntimeEffect::FetchPorts { tag } => Some(tag.clone()),
                _ => None,
            })
            .expect("ports fetch")
    }

    fn loaded(ip: &str, records: Vec<PortRecord>) -> (InspectorState, RequestTag) {
        let mut state = with_equipment();
        let tag = ports_tag(&reduce(
            &mut state,
            InspectorAction::SelectEquipment { ip: ip.to_string() },
        ));
        reduce(
            &mut state,
            InspectorAction::PortsLoaded {
                tag: tag.clone(),
                result: Ok(records),
            },
        );
        (state, tag)
    }

    fn banner(state: &InspectorState) -> Option<(BannerLevel, &str)> {
        state
            .banner
            .as_ref()
            .map(|banner| (banner.level, banner.message.as_str()))
    }

    #[test]
    fn bootstrap_loads_equipment_list() {
        let mut state = InspectorState::default();
        let effects = reduce(&mut state, InspectorAction::LoadEquipmentList);
        assert_eq!(effects, vec![RuntimeEffect::FetchEquipmentList]);
        assert_eq!(
            banner(&state),
            Some((BannerLevel::Info, "Loading list of equipments..."))
        );

        reduce(
            &mut state,
            InspectorAction::EquipmentListLoaded(Ok(vec![EquipmentEntry::new("sw", "10.0.0.1")])),
        );
        assert_eq!(state.equipment.len(), 1);
        assert_eq!(state.banner, None);
    }

    #[test]
    fn equipment_list_failure_raises_auto_dismissing_alert() {
        let mut state = InspectorState::default();
        let effects = reduce(
            &mut state,
            InspectorAction::EquipmentListLoaded(Err(ApiError::Network("offline".to_string()))),
        );

        assert_eq!(
            banner(&state),
            Some((BannerLevel::Alert, "Unable to get the list of equipments"))
        );
        assert!(matches!(
            effects.as_slice(),
            [RuntimeEffect::ArmBannerTimer { delay_ms: 4000, .. }]
        ));
    }

    #[test]
    fn expanding_a_port_registers_detail_columns() {
        let (mut state, tag) = loaded(
            "10.0.0.1",
            vec![PortRecord::new(1, "eth0")
                .with_speed(Some(1000))
                .with_duplex(wiremaps_core::Duplex::Full)
                .with_autoneg(Some(false))],
        );
        assert!(state.ports_visible);

        let effects = reduce(
            &mut state,
            InspectorAction::TogglePort {
                port: PortIndex::from(1),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::FetchPortDetails {
                tag: tag.clone(),
                port: PortIndex::from(1),
            }]
        );
        assert!(state.table.rows()[0].is_loading());

        reduce(
            &mut state,
            InspectorAction::PortDetailsLoaded {
                tag,
                port: PortIndex::from(1),
                result: Ok(vec![DetailCell::new("VLAN", "<b>100</b>", Some("100"))]),
            },
        );

        let names = state
            .table
            .columns()
            .into_iter()
            .map(|column| column.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["State", "Port", "Alias", "VLAN"]);
        let row = &state.table.rows()[0];
        assert!(row.is_expanded());
        assert!(!row.is_loading());
        assert_eq!(
            row.cell(&ColumnKey::dynamic("VLAN")),
            CellContent::Html("<b>100</b>".to_string())
        );
        assert_eq!(
            row.cell(&ColumnKey::Fixed(FixedColumn::Alias)),
            CellContent::Text(String::new())
        );
    }

    #[test]
    fn toggling_an_expanded_port_collapses_it() {
        let (mut state, tag) = loaded("10.0.0.1", vec![PortRecord::new(1, "eth0")]);
        reduce(&mut state, InspectorAction::ExpandPort { port: 1.into() });
        reduce(
            &mut state,
            InspectorAction::PortDetailsLoaded {
                tag,
                port: 1.into(),
                result: Ok(vec![DetailCell::new("MAC", "aa:bb", None)]),
            },
        );

        reduce(&mut state, InspectorAction::TogglePort { port: 1.into() });

        let row = &state.table.rows()[0];
        assert!(!row.is_expanded());
        assert_eq!(row.detail("MAC"), None);
        assert_eq!(state.table.registry().dynamic_len(), 1);
    }

    #[test]
    fn details_for_a_collapsed_row_are_dropped() {
        let (mut state, tag) = loaded("10.0.0.1", vec![PortRecord::new(1, "eth0")]);
        reduce(&mut state, InspectorAction::ExpandPort { port: 1.into() });
        reduce(&mut state, InspectorAction::TogglePort { port: 1.into() });

        reduce(
            &mut state,
            InspectorAction::PortDetailsLoaded {
                tag,
                port: 1.into(),
                result: Ok(vec![DetailCell::new("MAC", "aa:bb", None)]),
            },
        );

        assert!(!state.table.rows()[0].is_expanded());
        assert_eq!(state.table.registry().dynamic_len(), 0);
    }

    #[test]
    fn stale_completions_are_discarded_after_switching_equipment() {
        let mut state = with_equipment();
        let first = ports_tag(&reduce(
            &mut state,
            InspectorAction::SelectEquipment {
                ip: "10.0.0.1".to_string(),
            },
        ));
        let second = ports_tag(&reduce(
            &mut state,
            InspectorAction::SelectEquipment {
                ip: "10.0.0.7".to_string(),
            },
        ));

        let effects = reduce(
            &mut state,
            InspectorAction::PortsLoaded {
                tag: first.clone(),
                result: Ok(vec![PortRecord::new(1, "stale")]),
            },
        );
        assert_eq!(effects, Vec::new());
        assert!(state.table.is_empty());
        reduce(
            &mut state,
            InspectorAction::DescriptionLoaded {
                tag: first,
                result: Ok(Some("stale".to_string())),
            },
        );
        assert_eq!(state.description, None);

        reduce(
            &mut state,
            InspectorAction::PortsLoaded {
                tag: second,
                result: Ok(vec![PortRecord::new(7, "ge-0/0/7")]),
            },
        );
        assert_eq!(state.table.rows()[0].record().display_name, "ge-0/0/7");
    }

    #[test]
    fn port_list_failure_keeps_table_hidden() {
        let mut state = with_equipment();
        let tag = ports_tag(&reduce(
            &mut state,
            InspectorAction::SelectEquipment {
                ip: "10.0.0.1".to_string(),
            },
        ));
        reduce(
            &mut state,
            InspectorAction::PortsLoaded {
                tag,
                result: Err(ApiError::Status {
                    status: 500,
                    path: "equipment/10.0.0.1/".to_string(),
                }),
            },
        );

        assert!(!state.ports_visible);
        assert_eq!(
            banner(&state),
            Some((BannerLevel::Alert, "Unable to get the list of ports for 10.0.0.1"))
        );
    }

    #[test]
    fn detail_failure_clears_loading_and_names_the_port() {
        let (mut state, tag) = loaded("10.0.0.1", vec![PortRecord::new(3, "ge-0/0/3")]);
        reduce(&mut state, InspectorAction::ExpandPort { port: 3.into() });
        reduce(
            &mut state,
            InspectorAction::PortDetailsLoaded {
                tag,
                port: 3.into(),
                result: Err(ApiError::Network("reset".to_string())),
            },
        );

        assert!(!state.table.rows()[0].is_loading());
        assert_eq!(
            banner(&state),
            Some((BannerLevel::Alert, "Unable to get detailed info for port ge-0/0/3"))
        );
    }

    #[test]
    fn expand_all_requests_each_collapsed_row_once() {
        let (mut state, _) = loaded(
            "10.0.0.1",
            vec![
                PortRecord::new(1, "a"),
                PortRecord::new(2, "b"),
                PortRecord::new(3, "c"),
            ],
        );
        reduce(&mut state, InspectorAction::ExpandPort { port: 2.into() });

        let effects = reduce(&mut state, InspectorAction::ExpandAllPorts);
        let ports = effects
            .iter()
            .filter_map(|effect| match effect {
                RuntimeEffect::FetchPortDetails { port, .. } => Some(port.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(ports, vec!["1", "3"]);
        assert!(!state.expand_all_available);
    }

    #[test]
    fn actions_without_equipment_are_rejected() {
        let mut state = InspectorState::default();
        assert_eq!(
            reduce_inspector(&mut state, InspectorAction::Refresh),
            Err(ReducerError::NoEquipmentSelected)
        );
        assert_eq!(
            reduce_inspector(&mut state, InspectorAction::ExpandAllPorts),
            Err(ReducerError::NoEquipmentSelected)
        );
        assert_eq!(
            reduce_inspector(&mut state, InspectorAction::TogglePort { port: 9.into() }),
            Err(ReducerError::Table(TableError::RowNotFound(9.into())))
        );
    }

    #[test]
    fn refresh_success_reloads_the_equipment() {
        let (mut state, _) = loaded("10.0.0.1", vec![PortRecord::new(1, "eth0")]);
        let effects = reduce(&mut state, InspectorAction::Refresh);
        let tag = match effects.last() {
            Some(RuntimeEffect::RefreshEquipment { tag }) => tag.clone(),
            other => panic!("unexpected effect {other:?}"),
        };
        assert_eq!(banner(&state), Some((BannerLevel::Info, "Refreshing 10.0.0.1...")));

        let effects = reduce(
            &mut state,
            InspectorAction::RefreshCompleted {
                tag,
                result: Ok(RefreshOutcome::Refreshed),
            },
        );

        assert_eq!(banner(&state), Some((BannerLevel::Ok, "Refresh successful")));
        assert_eq!(ports_tag(&effects).target, "10.0.0.1");
        assert!(state.table.is_empty());
    }

    #[test]
    fn refresh_rejection_shows_server_message() {
        let (mut state, _) = loaded("10.0.0.1", vec![PortRecord::new(1, "eth0")]);
        let tag = state.session.equipment_tag().expect("active");
        reduce(
            &mut state,
            InspectorAction::RefreshCompleted {
                tag,
                result: Ok(RefreshOutcome::Rejected {
                    message: "collector busy".to_string(),
                }),
            },
        );

        assert_eq!(
            banner(&state),
            Some((BannerLevel::Alert, "Refresh error: collector busy"))
        );
        assert_eq!(state.table.len(), 1);
    }

    #[test]
    fn search_results_open_the_panel_and_close_drops_late_results() {
        let mut state = InspectorState::default();
        let effects = reduce(
            &mut state,
            InspectorAction::Search {
                text: " 00:11:22 ".to_string(),
            },
        );
        let tag = match effects.last() {
            Some(RuntimeEffect::RunSearch { tag }) => tag.clone(),
            other => panic!("unexpected effect {other:?}"),
        };
        assert_eq!(tag.channel, RequestChannel::Search);
        assert_eq!(tag.target, "00:11:22");

        let effects = reduce(
            &mut state,
            InspectorAction::SearchCompleted {
                tag: tag.clone(),
                result: Ok(vec!["<a href=\"equipment/10.0.0.1/\">core-sw1</a>".to_string()]),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::ScrollIntoView(ScrollTarget::SearchResults)]
        );
        assert_eq!(
            state.search.as_ref().map(|panel| panel.query.as_str()),
            Some("00:11:22")
        );

        reduce(&mut state, InspectorAction::CloseSearch);
        reduce(
            &mut state,
            InspectorAction::SearchCompleted {
                tag,
                result: Ok(vec!["late".to_string()]),
            },
        );
        assert_eq!(state.search, None);
    }

    #[test]
    fn blank_search_is_ignored() {
        let mut state = InspectorState::default();
        assert_eq!(
            reduce(
                &mut state,
                InspectorAction::Search {
                    text: "   ".to_string()
                }
            ),
            Vec::new()
        );
    }

    #[test]
    fn links_route_to_search_equipment_or_alert() {
        let mut state = with_equipment();

        let effects = reduce(
            &mut state,
            InspectorAction::FollowLink {
                href: "search/100/".to_string(),
            },
        );
        assert!(matches!(
            effects.last(),
            Some(RuntimeEffect::RunSearch { tag }) if tag.target == "100"
        ));

        reduce(
            &mut state,
            InspectorAction::FollowLink {
                href: "equipment/EDGE-SW7/".to_string(),
            },
        );
        assert_eq!(state.selected_ip.as_deref(), Some("10.0.0.7"));

        reduce(
            &mut state,
            InspectorAction::FollowLink {
                href: "equipment/10.9.9.9/".to_string(),
            },
        );
        assert_eq!(
            banner(&state),
            Some((BannerLevel::Alert, "Unable to find equipment, please reload"))
        );

        reduce(
            &mut state,
            InspectorAction::FollowLink {
                href: "http://example.net/".to_string(),
            },
        );
        assert_eq!(
            banner(&state),
            Some((BannerLevel::Alert, "Unknown link: http://example.net/"))
        );
    }

    #[test]
    fn sort_requests_coalesce_into_one_timer() {
        let (mut state, tag) = loaded(
            "10.0.0.1",
            vec![PortRecord::new(2, "b"), PortRecord::new(1, "a")],
        );
        assert!(state.sort_trigger.is_pending());

        reduce(&mut state, InspectorAction::ExpandPort { port: 1.into() });
        let effects = reduce(
            &mut state,
            InspectorAction::PortDetailsLoaded {
                tag,
                port: 1.into(),
                result: Ok(vec![DetailCell::new("VLAN", "10", None)]),
            },
        );
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn fired_sort_pass_lets_later_details_schedule_again() {
        let mut state = with_equipment();
        let tag = ports_tag(&reduce(
            &mut state,
            InspectorAction::SelectEquipment {
                ip: "10.0.0.1".to_string(),
            },
        ));
        let effects = reduce(
            &mut state,
            InspectorAction::PortsLoaded {
                tag: tag.clone(),
                result: Ok(vec![PortRecord::new(2, "b"), PortRecord::new(1, "a")]),
            },
        );
        let ticket = effects
            .iter()
            .find_map(|effect| match effect {
                RuntimeEffect::ArmSortTimer { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .expect("sort timer");

        reduce(&mut state, InspectorAction::SortTimerFired { ticket });
        assert!(!state.sort_trigger.is_pending());

        reduce(&mut state, InspectorAction::ExpandPort { port: 1.into() });
        let effects = reduce(
            &mut state,
            InspectorAction::PortDetailsLoaded {
                tag,
                port: 1.into(),
                result: Ok(vec![DetailCell::new("VLAN", "10", None)]),
            },
        );
        assert!(matches!(
            effects.as_slice(),
            [RuntimeEffect::ArmSortTimer { delay_ms: 300, .. }]
        ));
    }

    #[test]
    fn header_click_sorts_immediately_and_timer_reapplies_order() {
        let mut state = with_equipment();
        let tag = ports_tag(&reduce(
            &mut state,
            InspectorAction::SelectEquipment {
                ip: "10.0.0.1".to_string(),
            },
        ));
        let effects = reduce(
            &mut state,
            InspectorAction::PortsLoaded {
                tag,
                result: Ok(vec![PortRecord::new(10, "ten"), PortRecord::new(2, "two")]),
            },
        );
        let ticket = effects
            .iter()
            .find_map(|effect| match effect {
                RuntimeEffect::ArmSortTimer { ticket, delay_ms } => {
                    assert_eq!(*delay_ms, 300);
                    Some(*ticket)
                }
                _ => None,
            })
            .expect("sort timer");
        let order = |state: &InspectorState| {
            state
                .table
                .rows()
                .iter()
                .map(|row| row.index().as_str().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(order(&state), vec!["10", "2"]);

        reduce(
            &mut state,
            InspectorAction::SortBy {
                column: ColumnKey::Fixed(FixedColumn::Name),
                additive: false,
            },
        );
        assert_eq!(order(&state), vec!["2", "10"]);

        reduce(&mut state, InspectorAction::SortTimerFired { ticket });
        assert_eq!(order(&state), vec!["2", "10"]);
        assert!(!state.sort_trigger.is_pending());
    }

    #[test]
    fn selecting_equipment_resets_sort_order() {
        let (mut state, _) = loaded("10.0.0.1", vec![PortRecord::new(1, "eth0")]);
        reduce(
            &mut state,
            InspectorAction::SortBy {
                column: ColumnKey::Fixed(FixedColumn::Name),
                additive: false,
            },
        );
        reduce(
            &mut state,
            InspectorAction::SelectEquipment {
                ip: "10.0.0.7".to_string(),
            },
        );

        assert!(state.sort_order.is_empty());
        assert!(!state.sort_trigger.is_pending());
    }

    #[test]
    fn banner_timer_only_dismisses_the_latest_banner() {
        let mut state = InspectorState::default();
        let effects = reduce(
            &mut state,
            InspectorAction::EquipmentListLoaded(Err(ApiError::Unavailable)),
        );
        let first = match effects.as_slice() {
            [RuntimeEffect::ArmBannerTimer { ticket, .. }] => *ticket,
            other => panic!("unexpected effects {other:?}"),
        };
        reduce(
            &mut state,
            InspectorAction::FollowLink {
                href: "nowhere".to_string(),
            },
        );

        reduce(&mut state, InspectorAction::BannerTimerFired { ticket: first });
        assert_eq!(
            banner(&state),
            Some((BannerLevel::Alert, "Unknown link: nowhere"))
        );

        let effects = reduce(&mut state, InspectorAction::LoadEquipmentList);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::CancelBannerTimer,
                RuntimeEffect::FetchEquipmentList
            ]
        );
        assert_eq!(state.banner.as_ref().map(|banner| banner.level), Some(BannerLevel::Info));

        reduce(&mut state, InspectorAction::DismissBanner);
        assert_eq!(state.banner, None);
    }

    #[test]
    fn hidden_columns_keep_their_data() {
        let (mut state, tag) = loaded("10.0.0.1", vec![PortRecord::new(1, "eth0")]);
        reduce(&mut state, InspectorAction::ExpandPort { port: 1.into() });
        reduce(
            &mut state,
            InspectorAction::PortDetailsLoaded {
                tag,
                port: 1.into(),
                result: Ok(vec![DetailCell::new("VLAN", "100", None)]),
            },
        );
        reduce(
            &mut state,
            InspectorAction::SetColumnVisible {
                column: "VLAN".to_string(),
                visible: false,
            },
        );

        let row = &state.table.rows()[0];
        assert_eq!(state.table.visible_cells(row).len(), 3);
        assert!(row.detail("VLAN").is_some());
    }
}
