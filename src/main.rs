use rds_top::config::AppConfig;
use rds_top::error::{RdsTopError, Result};
use rds_top::models::{MonitoringPayload, SortKey};
use rds_top::monitoring_repo::{AwsSession, MonitoringRepo};
use rds_top::options::Options;
use rds_top::{report, version};
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stdout carries the report; diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(RdsTopError::Io(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}

async fn run() -> Result<()> {
    let options = Options::parse_from(std::env::args_os())?;
    let app_config = AppConfig::load(options.config.as_deref())
        .map_err(|e| RdsTopError::Config(format!("{:#}", e)))?;
    let options = options.with_config(&app_config);
    tracing::debug!(
        "{} {} instance={} start_time={:?}",
        version::NAME,
        version::VERSION,
        options.instance_id,
        options.effective_start_time()
    );

    let session = AwsSession::load(options.region.clone(), options.profile.clone()).await?;
    let repo = MonitoringRepo::new(&session);
    let raw = repo
        .latest_sample(&options.instance_id, options.effective_start_time())
        .await?;

    let payload = MonitoringPayload::parse(&raw);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &payload, SortKey::from_sort_by_mem(options.sort_by_mem))?;
    out.flush()?;
    Ok(())
}
