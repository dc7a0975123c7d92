// Disk device I/O rates (iostat-style)

use super::json::{f64_at, str_at};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct DiskIOStat {
    pub device: String,
    pub tps: f64,
    pub rrqm_per_sec: f64,
    pub wrqm_per_sec: f64,
    pub write_kb_per_sec: f64,
    pub read_kb_per_sec: f64,
    pub avg_req_sz: f64,
    pub avg_queue_len: f64,
    pub await_ms: f64,
    pub util: f64,
}

impl DiskIOStat {
    pub fn from_json(entry: &Value) -> Self {
        Self {
            device: str_at(entry, "/device"),
            tps: f64_at(entry, "/tps"),
            rrqm_per_sec: f64_at(entry, "/rrqmPS"),
            wrqm_per_sec: f64_at(entry, "/wrqmPS"),
            write_kb_per_sec: f64_at(entry, "/writeKbPS"),
            read_kb_per_sec: f64_at(entry, "/readKbPS"),
            avg_req_sz: f64_at(entry, "/avgReqSz"),
            avg_queue_len: f64_at(entry, "/avgQueueLen"),
            await_ms: f64_at(entry, "/await"),
            util: f64_at(entry, "/util"),
        }
    }
}
