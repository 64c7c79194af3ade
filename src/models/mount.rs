//! Mounted devices as reported by the discovery endpoint.
//!
//! Each entry carries an opaque `id` used to address the device's document
//! and a RESTCONF instance path such as
//! `/network-topology:network-topology/topology=topology-netconf/node=r1/`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ============================================================================
// MountEntry
// ============================================================================

/// One mounted device.
///
/// Decoding never fails on a single bad field: a missing, null or
/// mistyped `id`/`instance` decodes as an empty string, so one broken entry
/// cannot take the whole mount list down with it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MountEntry {
    /// Opaque identifier, appended to the mounts path to address the document.
    /// Empty when the controller did not report a usable id.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    /// Instance identifier of the mount point.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub instance: String,
}

impl MountEntry {
    /// Create a new entry.
    #[cfg(test)]
    pub fn new(id: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            instance: instance.into(),
        }
    }

    /// Decode one element of the mount list.
    ///
    /// Anything that is not an object yields an entry with an empty id.
    pub fn from_json(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Device name taken from the `node=<NAME>` key of the instance path.
    ///
    /// Returns `None` when the instance has no non-empty node key.
    pub fn node_name(&self) -> Option<&str> {
        self.instance
            .split('/')
            .filter_map(|segment| segment.split_once('='))
            .find(|(key, _)| *key == "node" || key.ends_with(":node"))
            .map(|(_, name)| name)
            .filter(|name| !name.is_empty())
    }
}

/// Controllers report the id as a number, some deployments as a string.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => id,
        Value::Number(id) => id.to_string(),
        _ => String::new(),
    })
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        _ => String::new(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_id() {
        let json = r#"[{
            "instance": "/network-topology:network-topology/topology=topology-netconf/node=17830-sim-device/",
            "id": 1
        }]"#;
        let mounts: Vec<MountEntry> = serde_json::from_str(json).unwrap();

        assert_eq!(mounts.len(), 1);
        assert_eq!(mounts[0].id, "1");
    }

    #[test]
    fn test_deserialize_string_id_ignores_extra_fields() {
        let json = r#"{"id": "device-1", "instance": "/a=b/node=x/", "status": "connected"}"#;
        let mount: MountEntry = serde_json::from_str(json).unwrap();

        assert_eq!(mount.id, "device-1");
        assert_eq!(mount.instance, "/a=b/node=x/");
    }

    #[test]
    fn test_missing_instance_decodes_empty() {
        let mount: MountEntry = serde_json::from_str(r#"{"id": 3}"#).unwrap();

        assert_eq!(mount, MountEntry::new("3", ""));
        assert_eq!(mount.node_name(), None);
    }

    #[test]
    fn test_bad_entry_does_not_fail_the_list() {
        let json = r#"[
            {"id": 1, "instance": "/network-topology:network-topology/topology=topology-netconf/node=r1/"},
            {"id": 2, "instance": null},
            {"id": 3, "instance": "/network-topology:network-topology/topology=topology-netconf/node=r3/"}
        ]"#;
        let mounts: Vec<MountEntry> = serde_json::from_str(json).unwrap();

        assert_eq!(mounts.len(), 3);
        assert_eq!(mounts[0].node_name(), Some("r1"));
        assert_eq!(mounts[1], MountEntry::new("2", ""));
        assert_eq!(mounts[2].node_name(), Some("r3"));
    }

    #[test]
    fn test_from_json_mistyped_fields() {
        let mount = MountEntry::from_json(serde_json::json!({"id": null, "instance": 42}));
        assert_eq!(mount, MountEntry::default());

        let mount = MountEntry::from_json(serde_json::json!({"id": true, "instance": "/node=x/"}));
        assert_eq!(mount, MountEntry::new("", "/node=x/"));

        assert_eq!(MountEntry::from_json(serde_json::json!("r1")), MountEntry::default());
    }

    #[test]
    fn test_node_name() {
        let mount = MountEntry::new(
            "device-1",
            "network-topology:network-topology/topology=topo/node=device-1/",
        );
        assert_eq!(mount.node_name(), Some("device-1"));

        let mount = MountEntry::new(
            "1",
            "/network-topology:network-topology/topology=topology-netconf/node=17830-sim-device/",
        );
        assert_eq!(mount.node_name(), Some("17830-sim-device"));
    }

    #[test]
    fn test_node_name_without_trailing_slash() {
        let mount = MountEntry::new("7", "/network-topology:network-topology/topology=t/node=r7");
        assert_eq!(mount.node_name(), Some("r7"));
    }

    #[test]
    fn test_node_name_qualified_key() {
        let mount = MountEntry::new("7", "/topology=t/network-topology:node=edge/");
        assert_eq!(mount.node_name(), Some("edge"));
    }

    #[test]
    fn test_node_name_malformed() {
        assert_eq!(MountEntry::new("1", "").node_name(), None);
        assert_eq!(MountEntry::new("1", "/topology=t/").node_name(), None);
        assert_eq!(MountEntry::new("1", "/topology=t/node=/").node_name(), None);
        assert_eq!(MountEntry::new("1", "/topology=t/nodes=x/").node_name(), None);
    }
}
