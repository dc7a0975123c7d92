use crate::error::Result;
use crate::models::MonitoringPayload;
use std::io::Write;

/// One line per interface, payload order. Nothing at all when there are none.
pub fn write_network_section<W: Write>(out: &mut W, payload: &MonitoringPayload) -> Result<()> {
    for net in payload.network() {
        writeln!(out, "Net {}: {} rx, {} tx", net.interface, net.rx, net.tx)?;
    }
    Ok(())
}
