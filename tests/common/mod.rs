// Shared test fixtures: a realistic Enhanced Monitoring document

#![allow(dead_code)]

use rds_top::models::{MonitoringPayload, SortKey};
use serde_json::{Value, json};

pub fn sample_document() -> Value {
    json!({
        "engine": "POSTGRES",
        "instanceID": "orders-db",
        "instanceResourceID": "db-ABCDEFGHIJKLMNOP",
        "timestamp": "2019-09-12T13:05:00Z",
        "version": 1.0,
        "uptime": "12 days, 3:04:05",
        "numVCPUs": 2,
        "cpuUtilization": {
            "guest": 0.0, "irq": 0.0, "system": 1.5, "wait": 0.25, "idle": 95.0,
            "user": 3.0, "total": 5.0, "steal": 0.1, "nice": 0.15
        },
        "loadAverageMinute": { "one": 0.5, "five": 0.25, "fifteen": 0.75 },
        "memory": {
            "writeback": 0, "cached": 204800, "free": 524288, "inactive": 0,
            "dirty": 0, "mapped": 0, "active": 0, "total": 1048576,
            "slab": 0, "buffers": 102400
        },
        "tasks": {
            "sleeping": 120, "zombie": 0, "running": 2, "stopped": 0,
            "total": 122, "blocked": 0
        },
        "swap": { "cached": 37.5, "total": 2097152, "free": 1048576, "in": 0, "out": 0 },
        "network": [
            { "interface": "eth0", "rx": 123456, "tx": 654321 }
        ],
        "diskIO": [
            {
                "writeKbPS": 10.5, "readIOsPS": 0.0, "await": 1.25, "readKbPS": 2.0,
                "rrqmPS": 0.0, "util": 3.5, "avgQueueLen": 0.01, "tps": 4.0,
                "readKb": 0, "device": "rdsdev", "writeKb": 0, "avgReqSz": 8.0,
                "wrqmPS": 1.5, "writeIOsPS": 0.0
            }
        ],
        "processList": [
            {
                "vss": 1024000, "name": "mysqld", "tgid": 100, "parentID": 1,
                "memoryUsedPc": 10.0, "cpuUsedPc": 2.0, "id": 100, "rss": 51200
            },
            {
                "vss": 204800, "name": "mysqld: worker", "tgid": 100, "parentID": 100,
                "memoryUsedPc": 0.4, "cpuUsedPc": 35.5, "id": 2001, "rss": 2048
            },
            {
                "vss": 8192, "name": "rdsadmin", "tgid": 4242, "parentID": 1,
                "memoryUsedPc": 0.0, "cpuUsedPc": 0.0, "id": 4242, "rss": 1024
            }
        ]
    })
}

/// Document with every list empty.
pub fn empty_lists_document() -> Value {
    let mut doc = sample_document();
    doc["network"] = json!([]);
    doc["diskIO"] = json!([]);
    doc["processList"] = json!([]);
    doc
}

pub fn render_report(doc: Value, sort_key: SortKey) -> String {
    let payload = MonitoringPayload::from_value(doc);
    let mut out = Vec::new();
    rds_top::report::write_report(&mut out, &payload, sort_key).expect("write_report");
    String::from_utf8(out).expect("utf8")
}

pub const PROCESS_HEADER: &str = "PID    PPID   VSS      RSS      %CPU   %MEM   COMMAND";
