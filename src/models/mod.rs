// Enhanced Monitoring payload models

mod disk;
mod json;
mod network;
mod payload;
mod process;
mod system;

pub use disk::DiskIOStat;
pub use network::NetworkInterfaceStat;
pub use payload::MonitoringPayload;
pub use process::{Process, SortKey, sort_processes};
pub use system::{CpuUtilization, LoadAverage, Memory, Swap, SystemSnapshot, Tasks};
