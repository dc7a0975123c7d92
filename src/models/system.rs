// Host-level figures: load, tasks, CPU, memory and swap

use super::json::{f64_at, i64_at, str_at};
use crate::error::{RdsTopError, Result};
use chrono::{DateTime, FixedOffset};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tasks {
    pub total: i64,
    pub running: i64,
    pub sleeping: i64,
    pub stopped: i64,
    pub zombie: i64,
}

/// Percentages; they sum to roughly 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuUtilization {
    pub user: f64,
    pub system: f64,
    pub nice: f64,
    pub idle: f64,
    pub wait: f64,
    pub steal: f64,
}

/// Memory totals in KB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Memory {
    pub total: f64,
    pub free: f64,
    pub cached: f64,
    pub buffers: f64,
}

impl Memory {
    pub fn total_mib(&self) -> f64 {
        self.total / 1024.0
    }

    pub fn free_mib(&self) -> f64 {
        self.free / 1024.0
    }

    pub fn used_mib(&self) -> f64 {
        (self.total - self.free) / 1024.0
    }

    pub fn buff_cache_mib(&self) -> f64 {
        (self.cached + self.buffers) / 1024.0
    }
}

/// Swap totals in KB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swap {
    pub total: f64,
    pub free: f64,
    pub cached: f64,
}

impl Swap {
    pub fn total_mib(&self) -> f64 {
        self.total / 1024.0
    }

    pub fn free_mib(&self) -> f64 {
        self.free / 1024.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemSnapshot {
    pub instance_id: String,
    pub timestamp: DateTime<FixedOffset>,
    pub uptime: String,
    pub load_average: LoadAverage,
    pub tasks: Tasks,
    pub cpu: CpuUtilization,
    pub memory: Memory,
    pub swap: Swap,
}

impl SystemSnapshot {
    /// Extract the system figures from a payload document. Fails only when
    /// the timestamp is not RFC 3339.
    pub fn from_json(doc: &Value) -> Result<Self> {
        let raw_timestamp = str_at(doc, "/timestamp");
        let timestamp = DateTime::parse_from_rfc3339(&raw_timestamp).map_err(|e| {
            RdsTopError::PayloadParse(format!(
                "Error parsing timestamp {:?}: {}",
                raw_timestamp, e
            ))
        })?;

        Ok(Self {
            instance_id: str_at(doc, "/instanceID"),
            timestamp,
            uptime: str_at(doc, "/uptime"),
            load_average: LoadAverage {
                one: f64_at(doc, "/loadAverageMinute/one"),
                five: f64_at(doc, "/loadAverageMinute/five"),
                fifteen: f64_at(doc, "/loadAverageMinute/fifteen"),
            },
            tasks: Tasks {
                total: i64_at(doc, "/tasks/total"),
                running: i64_at(doc, "/tasks/running"),
                sleeping: i64_at(doc, "/tasks/sleeping"),
                stopped: i64_at(doc, "/tasks/stopped"),
                zombie: i64_at(doc, "/tasks/zombie"),
            },
            cpu: CpuUtilization {
                user: f64_at(doc, "/cpuUtilization/user"),
                system: f64_at(doc, "/cpuUtilization/system"),
                nice: f64_at(doc, "/cpuUtilization/nice"),
                idle: f64_at(doc, "/cpuUtilization/idle"),
                wait: f64_at(doc, "/cpuUtilization/wait"),
                steal: f64_at(doc, "/cpuUtilization/steal"),
            },
            memory: Memory {
                total: f64_at(doc, "/memory/total"),
                free: f64_at(doc, "/memory/free"),
                cached: f64_at(doc, "/memory/cached"),
                buffers: f64_at(doc, "/memory/buffers"),
            },
            swap: Swap {
                total: f64_at(doc, "/swap/total"),
                free: f64_at(doc, "/swap/free"),
                cached: f64_at(doc, "/swap/cached"),
            },
        })
    }
}
