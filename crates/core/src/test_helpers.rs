use serde_json::{json, Map, Value};

use crate::record::CharacterRecord;

/// A record named `name` with a couple of pass-through fields.
pub fn record(name: &str) -> CharacterRecord {
    let fields: Map<String, Value> = json!({ "姓名": name, "子职业": "术师" })
        .as_object()
        .cloned()
        .unwrap_or_default();
    CharacterRecord::new(name, fields, format!("/avatars/{name}.png"))
}

/// `R00` .. `R{n-1}`, in ascending order.
pub fn fixture(n: usize) -> Vec<CharacterRecord> {
    (0..n).map(|i| record(&format!("R{i:02}"))).collect()
}

pub fn names(records: &[&CharacterRecord]) -> Vec<String> {
    records.iter().map(|r| r.name().to_string()).collect()
}
