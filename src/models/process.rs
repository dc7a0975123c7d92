// Process list entries and ordering

use serde::{Deserialize, Deserializer};
use std::cmp::Ordering;

/// One entry of the payload's process list. The service sends the top CPU and
/// top memory consumers, so the same process may appear twice; entries are
/// kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Process {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(
        rename = "parentID",
        alias = "parentId",
        deserialize_with = "null_as_default"
    )]
    pub parent_id: i64,
    /// Virtual set size, KB.
    #[serde(deserialize_with = "null_as_default")]
    pub vss: i64,
    /// Resident set size, KB.
    #[serde(deserialize_with = "null_as_default")]
    pub rss: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub cpu_used_pc: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub memory_used_pc: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// A null field keeps its zero value instead of failing the whole entry.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Cpu,
    Memory,
}

impl SortKey {
    pub fn from_sort_by_mem(sort_by_mem: bool) -> Self {
        if sort_by_mem { SortKey::Memory } else { SortKey::Cpu }
    }

    fn value(self, p: &Process) -> f64 {
        match self {
            SortKey::Cpu => p.cpu_used_pc,
            SortKey::Memory => p.memory_used_pc,
        }
    }
}

/// Stable sort, descending by the chosen percentage. Ties keep input order.
pub fn sort_processes(processes: &mut [Process], key: SortKey) {
    processes.sort_by(|a, b| {
        key.value(b)
            .partial_cmp(&key.value(a))
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proc(id: i64, cpu: f64, mem: f64) -> Process {
        Process {
            id,
            cpu_used_pc: cpu,
            memory_used_pc: mem,
            ..Default::default()
        }
    }

    #[test]
    fn sort_keeps_input_order_for_ties() {
        let mut list = vec![proc(1, 5.0, 0.0), proc(2, 9.0, 0.0), proc(3, 5.0, 0.0)];
        sort_processes(&mut list, SortKey::Cpu);
        let ids: Vec<i64> = list.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn null_fields_read_as_zero() {
        let p: Process = serde_json::from_str(
            r#"{"id": 5, "parentID": null, "vss": null, "cpuUsedPc": null, "name": null}"#,
        )
        .unwrap();
        assert_eq!(p.id, 5);
        assert_eq!(p.parent_id, 0);
        assert_eq!(p.vss, 0);
        assert_eq!(p.cpu_used_pc, 0.0);
        assert_eq!(p.name, "");
    }

    #[test]
    fn sort_key_from_flag() {
        assert_eq!(SortKey::from_sort_by_mem(true), SortKey::Memory);
        assert_eq!(SortKey::from_sort_by_mem(false), SortKey::Cpu);
    }
}
