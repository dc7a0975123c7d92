use crate::error::Result;
use crate::models::MonitoringPayload;
use std::io::Write;

/// One iostat-style line per device, payload order.
pub fn write_disk_io_section<W: Write>(out: &mut W, payload: &MonitoringPayload) -> Result<()> {
    for d in payload.disk_io() {
        writeln!(
            out,
            "Disk {}: {:.2} tps, {:.2} rrqm/s, {:.2} wrqm/s, {:.2} wKB/S, {:.2} rKB/S, \
             {:.2} avgrq-sz, {:.2} avgqu-sz, {:.2} await, {:.2} %util",
            d.device,
            d.tps,
            d.rrqm_per_sec,
            d.wrqm_per_sec,
            d.write_kb_per_sec,
            d.read_kb_per_sec,
            d.avg_req_sz,
            d.avg_queue_len,
            d.await_ms,
            d.util
        )?;
    }
    Ok(())
}
