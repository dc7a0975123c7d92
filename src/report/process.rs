use crate::error::Result;
use crate::models::{MonitoringPayload, SortKey, sort_processes};
use std::io::Write;

/// PID, PPID, VSS, RSS, %CPU, %MEM, COMMAND; left-justified, command unpadded.
fn write_row<W: Write>(out: &mut W, cols: [&str; 7]) -> std::io::Result<()> {
    let [pid, ppid, vss, rss, cpu, mem, command] = cols;
    writeln!(
        out,
        "{:<6} {:<6} {:<8} {:<8} {:<6} {:<6} {}",
        pid, ppid, vss, rss, cpu, mem, command
    )
}

/// Header row, then every parsed process sorted descending by `sort_key`.
/// Duplicate entries are printed as-is.
pub fn write_process_section<W: Write>(
    out: &mut W,
    payload: &MonitoringPayload,
    sort_key: SortKey,
) -> Result<()> {
    let mut processes = payload.processes();
    sort_processes(&mut processes, sort_key);

    write_row(out, ["PID", "PPID", "VSS", "RSS", "%CPU", "%MEM", "COMMAND"])?;
    for p in &processes {
        write_row(
            out,
            [
                p.id.to_string().as_str(),
                p.parent_id.to_string().as_str(),
                p.vss.to_string().as_str(),
                p.rss.to_string().as_str(),
                format!("{:.2}", p.cpu_used_pc).as_str(),
                format!("{:.2}", p.memory_used_pc).as_str(),
                p.name.as_str(),
            ],
        )?;
    }
    Ok(())
}
