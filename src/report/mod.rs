// top-like text report over one monitoring sample

mod disk;
mod network;
mod process;
mod system;

pub use disk::write_disk_io_section;
pub use network::write_network_section;
pub use process::write_process_section;
pub use system::write_system_section;

use crate::error::{RdsTopError, Result};
use crate::models::{MonitoringPayload, SortKey};
use std::io::Write;
use tracing::debug;

/// Write all four sections: system, blank line, network and disk I/O, blank
/// line, process list. A timestamp that does not parse skips the system
/// section only; its error goes to stderr.
pub fn write_report<W: Write>(
    out: &mut W,
    payload: &MonitoringPayload,
    sort_key: SortKey,
) -> Result<()> {
    match write_system_section(out, payload) {
        Ok(()) => {}
        Err(RdsTopError::PayloadParse(message)) => {
            // printed regardless of the log filter
            eprintln!("{}", message);
            debug!("system section skipped");
        }
        Err(e) => return Err(e),
    }
    writeln!(out)?;

    write_network_section(out, payload)?;
    write_disk_io_section(out, payload)?;

    writeln!(out)?;
    write_process_section(out, payload, sort_key)?;
    Ok(())
}
