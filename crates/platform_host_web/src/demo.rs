//! Bundled fixture served by the `api-stub` build.

use platform_host::{decode_json, MemoryWiremapsApi};
use wiremaps_core::{DetailCell, PortRecord, RefreshOutcome};

const CORE_PORTS: &str = r#"[
  [1, "ge-0/0/1", "uplink to edge", "up", 1000, "full", true],
  [2, "ge-0/0/2", null, "up", 100, "half", false],
  [3, "ge-0/0/3", null, "down", null, null, null],
  [10, "xe-0/1/0", "backbone", "up", 10000, "full", "true"],
  [11, "xe-0/1/1", null, "up", 9999, "full", 1]
]"#;

const EDGE_PORTS: &str = r#"[
  ["1", "eth0", "to core", "up", 1000, "full", 1],
  ["2", "eth1", null, "down", 10, "half", 0]
]"#;

fn ports(path: &str, body: &str) -> Vec<PortRecord> {
    decode_json(path, body).unwrap_or_default()
}

fn details(body: &str) -> Vec<DetailCell> {
    decode_json("demo", body).unwrap_or_default()
}

/// In-memory API pre-loaded with two switches and a handful of ports.
pub fn demo_fixture() -> MemoryWiremapsApi {
    MemoryWiremapsApi::default()
        .with_equipment("core-sw1", "10.0.0.1")
        .with_equipment("edge-sw7", "10.0.0.7")
        .with_equipment("", "10.0.0.99")
        .with_description(
            "10.0.0.1",
            "<p>Core switch, rack B2. Uplink towards <a href=\"equipment/edge-sw7/\">edge-sw7</a>.</p>",
        )
        .with_ports("10.0.0.1", ports("equipment/10.0.0.1/", CORE_PORTS))
        .with_ports("10.0.0.7", ports("equipment/10.0.0.7/", EDGE_PORTS))
        .with_details(
            "10.0.0.1",
            1,
            details(
                r#"[["VLAN", "<a href=\"search/100/\">100</a>", 100],
                    ["LLDP", "<a href=\"equipment/edge-sw7/\">edge-sw7</a>", "edge-sw7"],
                    ["Speed", "1 Gbit/s", 1000]]"#,
            ),
        )
        .with_details(
            "10.0.0.1",
            10,
            details(
                r#"[["VLAN", "100, 200", "100"],
                    ["FDB", "<a href=\"search/00:11:22:33:44:55/\">00:11:22:33:44:55</a>", null]]"#,
            ),
        )
        .with_details(
            "10.0.0.7",
            "1",
            details(r#"[["VLAN", "100", null], ["LLDP", "<a href=\"equipment/core-sw1/\">core-sw1</a>", null]]"#),
        )
        .with_refresh(
            "10.0.0.99",
            RefreshOutcome::Rejected {
                message: "equipment does not answer SNMP".to_string(),
            },
        )
        .with_search(
            "100",
            vec![
                "<a href=\"equipment/10.0.0.1/\">core-sw1</a> has VLAN 100 on ge-0/0/1".to_string(),
                "<a href=\"equipment/10.0.0.7/\">edge-sw7</a> has VLAN 100 on eth0".to_string(),
            ],
        )
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::WiremapsApi;
    use wiremaps_core::{PortIndex, PortSpeed};

    use super::*;

    #[test]
    fn demo_fixture_decodes_every_bundled_row() {
        let api = demo_fixture();

        let core = block_on(api.list_ports("10.0.0.1")).expect("core ports");
        assert_eq!(core.len(), 5);
        assert_eq!(core[4].speed, PortSpeed::Unknown);
        assert_eq!(
            block_on(api.list_ports("10.0.0.7")).expect("edge ports").len(),
            2
        );
        assert_eq!(
            block_on(api.port_details("10.0.0.1", &PortIndex::from(1)))
                .expect("details")
                .len(),
            3
        );
        assert_eq!(
            block_on(api.port_details("10.0.0.7", &PortIndex::from("1")))
                .expect("details")
                .len(),
            2
        );
    }
}
