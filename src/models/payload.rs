// Raw monitoring document and per-section extraction

use super::json::entries;
use super::{DiskIOStat, NetworkInterfaceStat, Process, SystemSnapshot};
use crate::error::Result;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// One Enhanced Monitoring sample, parsed once and read by each report
/// section independently.
#[derive(Debug, Clone)]
pub struct MonitoringPayload {
    doc: Value,
}

impl MonitoringPayload {
    /// Parse the log message text. Only the first JSON document is read;
    /// anything after it is logged and ignored. Invalid JSON is logged and
    /// treated as an empty document so that each section degrades on its own.
    pub fn parse(raw: &str) -> Self {
        let mut stream = serde_json::Deserializer::from_str(raw).into_iter::<Value>();
        let doc = match stream.next() {
            Some(Ok(doc)) => {
                if stream.next().is_some() {
                    warn!("monitoring payload has data after the first document; ignoring it");
                }
                doc
            }
            Some(Err(e)) => {
                warn!(error = %e, "monitoring payload is not valid JSON");
                Value::Null
            }
            None => {
                warn!("monitoring payload is empty");
                Value::Null
            }
        };
        Self { doc }
    }

    pub fn from_value(doc: Value) -> Self {
        Self { doc }
    }

    pub fn system(&self) -> Result<SystemSnapshot> {
        SystemSnapshot::from_json(&self.doc)
    }

    pub fn network(&self) -> Vec<NetworkInterfaceStat> {
        entries(&self.doc, "network")
            .into_iter()
            .map(NetworkInterfaceStat::from_json)
            .collect()
    }

    pub fn disk_io(&self) -> Vec<DiskIOStat> {
        entries(&self.doc, "diskIO")
            .into_iter()
            .map(DiskIOStat::from_json)
            .collect()
    }

    /// Process entries in payload order. Entries that do not deserialize are
    /// skipped with a warning.
    pub fn processes(&self) -> Vec<Process> {
        entries(&self.doc, "processList")
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                match Process::deserialize(entry) {
                    Ok(p) => Some(p),
                    Err(e) => {
                        warn!(index, error = %e, "skipping malformed process entry");
                        None
                    }
                }
            })
            .collect()
    }
}
