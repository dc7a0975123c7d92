use crate::error::Result;
use crate::models::MonitoringPayload;
use chrono::SecondsFormat;
use std::io::Write;

/// Header block: uptime and load, tasks, CPU, memory and swap.
///
/// Memory and swap arrive in KB and are printed in MiB, except swap cached
/// which is printed unscaled.
pub fn write_system_section<W: Write>(out: &mut W, payload: &MonitoringPayload) -> Result<()> {
    let s = payload.system()?;

    writeln!(
        out,
        "{} - {} - {} up, load average: {:.2}, {:.2}, {:.2}",
        s.instance_id,
        s.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        s.uptime,
        s.load_average.one,
        s.load_average.five,
        s.load_average.fifteen
    )?;
    writeln!(
        out,
        "Tasks: {} total, {} running, {} sleeping, {} stopped, {} zombie",
        s.tasks.total, s.tasks.running, s.tasks.sleeping, s.tasks.stopped, s.tasks.zombie
    )?;
    writeln!(
        out,
        "%Cpu(s): {:.2} us, {:.2} sy, {:.2} ni, {:.2} id, {:.2} wa, {:.2} st",
        s.cpu.user, s.cpu.system, s.cpu.nice, s.cpu.idle, s.cpu.wait, s.cpu.steal
    )?;
    writeln!(
        out,
        "MiB Mem: {:.2} total, {:.2} free, {:.2} used, {:.2} buff/cache",
        s.memory.total_mib(),
        s.memory.free_mib(),
        s.memory.used_mib(),
        s.memory.buff_cache_mib()
    )?;
    writeln!(
        out,
        "MiB Swap: {:.2} total, {:.2} free, {:.2} cached",
        s.swap.total_mib(),
        s.swap.free_mib(),
        s.swap.cached
    )?;
    Ok(())
}
