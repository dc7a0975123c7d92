// Network interface counters

use super::json::{i64_at, str_at};
use serde_json::Value;

/// Snapshot counters for one interface, as reported (not deltas).
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkInterfaceStat {
    pub interface: String,
    pub rx: i64,
    pub tx: i64,
}

impl NetworkInterfaceStat {
    pub fn from_json(entry: &Value) -> Self {
        Self {
            interface: str_at(entry, "/interface"),
            rx: i64_at(entry, "/rx"),
            tx: i64_at(entry, "/tx"),
        }
    }
}
