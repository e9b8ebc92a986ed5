use proptest::prelude::*;
use std::collections::HashSet;
use std::str::FromStr;
use workbench_types::{HierarchyId, ItemId, NodeId};

// ── HierarchyId ───────────────────────────────────────────────────

#[test]
fn hierarchy_id_new_is_unique() {
    let a = HierarchyId::new();
    let b = HierarchyId::new();
    assert_ne!(a, b);
}

#[test]
fn hierarchy_id_from_uuid_roundtrip() {
    let uuid = uuid::Uuid::now_v7();
    let id = HierarchyId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn hierarchy_id_display_and_parse() {
    let id = HierarchyId::new();
    let s = id.to_string();
    let parsed = HierarchyId::parse(&s).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn hierarchy_id_from_str() {
    let id = HierarchyId::new();
    let parsed = HierarchyId::from_str(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn hierarchy_id_parse_invalid() {
    assert!(HierarchyId::parse("not-a-uuid").is_err());
}

#[test]
fn hierarchy_id_serialization_roundtrip() {
    let id = HierarchyId::new();
    let json = serde_json::to_string(&id).unwrap();
    let parsed: HierarchyId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}

// ── ItemId ────────────────────────────────────────────────────────

#[test]
fn item_id_raw_roundtrip() {
    let id = ItemId::new(1234);
    assert_eq!(id.as_raw(), 1234);
}

#[test]
fn item_id_serialization_is_transparent() {
    let json = serde_json::to_string(&ItemId::new(7)).unwrap();
    assert_eq!(json, "7");
    let parsed: ItemId = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, ItemId::new(7));
}

#[test]
fn item_id_sentinels_keep_host_values() {
    assert_eq!(ItemId::ROOT.as_raw(), 0xFFFF_FFFE);
    assert_eq!(ItemId::SELECTION.as_raw(), 0xFFFF_FFFD);
    assert_eq!(ItemId::NIL.as_raw(), 0xFFFF_FFFF);
}

// ── NodeId ────────────────────────────────────────────────────────

#[test]
fn node_id_hash_and_eq() {
    let h = HierarchyId::new();
    let id = NodeId::new(h, ItemId::new(3));
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(NodeId::new(h, ItemId::new(3))); // same identity
    assert_eq!(set.len(), 1);
}

#[test]
fn node_id_accessors() {
    let h = HierarchyId::new();
    let id = NodeId::new(h, ItemId::ROOT);
    assert_eq!(id.hierarchy(), h);
    assert_eq!(id.item(), ItemId::ROOT);
}

#[test]
fn node_id_serialization_roundtrip() {
    let id = NodeId::new(HierarchyId::new(), ItemId::new(9));
    let json = serde_json::to_string(&id).unwrap();
    let parsed: NodeId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}

proptest! {
    #[test]
    fn item_id_raw_always_survives_roundtrip(raw in any::<u32>()) {
        let id = ItemId::new(raw);
        prop_assert_eq!(id.as_raw(), raw);
        let json = serde_json::to_string(&id).unwrap();
        let parsed: ItemId = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn node_id_equality_tracks_parts(a in any::<u32>(), b in any::<u32>()) {
        let h = HierarchyId::new();
        let left = NodeId::new(h, ItemId::new(a));
        let right = NodeId::new(h, ItemId::new(b));
        prop_assert_eq!(left == right, a == b);
    }
}
